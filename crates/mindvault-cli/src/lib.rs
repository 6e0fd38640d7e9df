//! MindVault command-line interface.

pub mod bootstrap;
pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};

/// MindVault - AI-assisted journaling companion
#[derive(Parser)]
#[command(name = "mindvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, env = "MINDVAULT_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write a journal entry and get structured feedback
    Journal(commands::journal::JournalArgs),

    /// Ask a question about your personality
    Ask(commands::ask::AskArgs),

    /// Ingest expert knowledge documents into the vault
    Ingest(commands::ingest::IngestArgs),

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Initialize MindVault configuration
    Init {
        /// Overwrite existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
///
/// The config file is read at most once per invocation; commands that only
/// touch the config path (`init`, `config path`) never load it, so a broken
/// file can still be inspected or rewritten.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config;
    match cli.command {
        Commands::Journal(args) => {
            let config = load_and_init(config_path.as_deref())?;
            commands::journal::run(args, config).await
        }
        Commands::Ask(args) => {
            let config = load_and_init(config_path.as_deref())?;
            commands::ask::run(args, config).await
        }
        Commands::Ingest(args) => {
            let config = load_and_init(config_path.as_deref())?;
            commands::ingest::run(args, config).await
        }
        Commands::Config(args) => commands::config::run(args, config_path),
        Commands::Init { force } => commands::init::run(force, config_path),
        Commands::Version => {
            println!("mindvault {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load the config and initialize logging from its level filter.
///
/// `RUST_LOG` wins over the configured level when set.
fn load_and_init(config_path: Option<&std::path::Path>) -> anyhow::Result<mindvault_core::Config> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = bootstrap::load_config(config_path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(config)
}
