//! MindVault CLI entry point.

use clap::Parser;
use mindvault_cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // API keys may live in a local .env file
    let _ = mindvault_core::env::load_dotenv();

    // Parse CLI arguments and run the command
    let cli = Cli::parse();
    run(cli).await
}
