//! `mindvault ingest` — embed expert knowledge documents into the vault.

use crate::bootstrap::Runtime;
use crate::render;
use clap::Args;
use mindvault_core::Config;
use std::path::PathBuf;

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// Directory of .txt documents (default: ~/.mindvault/expert_knowledge)
    pub dir: Option<PathBuf>,
}

pub async fn run(args: IngestArgs, config: Config) -> anyhow::Result<()> {
    let runtime = Runtime::from_config(config).await?;

    let dir = match args.dir {
        Some(dir) => dir,
        None => mindvault_core::paths::knowledge_dir()?,
    };
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let count = runtime.knowledge_base().ingest_dir(&dir).await?;
    render::print_success(&format!(
        "{} chunks embedded from {}",
        count,
        dir.display()
    ));
    Ok(())
}
