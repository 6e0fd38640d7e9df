//! `mindvault journal` — write an entry, get feedback, store it.

use crate::bootstrap::Runtime;
use crate::render;
use clap::Args;
use mindvault_core::Config;
use std::io::BufRead;
use std::path::PathBuf;

/// Arguments for the journal command.
#[derive(Args)]
pub struct JournalArgs {
    /// Read the entry from a file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Get feedback without storing the entry
    #[arg(long)]
    pub no_store: bool,

    /// Override the configured owner id
    #[arg(long)]
    pub owner: Option<String>,
}

pub async fn run(args: JournalArgs, config: Config) -> anyhow::Result<()> {
    let runtime = Runtime::from_config(config).await?;
    let owner = args.owner.as_deref().unwrap_or_else(|| runtime.owner());

    let entry = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_entry_from_stdin()?,
    };
    if entry.trim().is_empty() {
        anyhow::bail!("Journal entry is empty");
    }

    let feedback = runtime.feedback_generator().generate(&entry).await?;
    render::print_feedback(&feedback);

    if !args.no_store {
        let id = runtime
            .journal_store()
            .store(owner, &entry)
            .await
            .map_err(mindvault_agent::AgentError::Storage)?;
        render::print_success(&format!("Entry stored ({})", id));
    }

    Ok(())
}

/// Read a multi-line entry from stdin; a blank line finishes it.
fn read_entry_from_stdin() -> std::io::Result<String> {
    println!("Enter your journal entry (finish with an empty line):\n");
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
