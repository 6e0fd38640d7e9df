//! `mindvault config` — inspect the configuration.

use crate::bootstrap::load_config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_config(config_path.as_deref())?;
            println!("{}", config.to_json5()?);
        }
        ConfigCommand::Path => {
            let path = match config_path {
                Some(path) => path,
                None => mindvault_core::paths::config_file()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}
