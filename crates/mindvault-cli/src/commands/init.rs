//! `mindvault init` — write a default configuration file.

use crate::render;
use mindvault_core::Config;
use std::path::PathBuf;

pub fn run(force: bool, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match config_path {
        Some(path) => path,
        None => mindvault_core::paths::config_file()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(&path)?;
    render::print_success(&format!("Wrote default config to {}", path.display()));
    println!("Set OPENAI_API_KEY in your environment or a .env file to get started.");
    Ok(())
}
