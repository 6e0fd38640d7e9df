//! `mindvault ask` — ask a question about your personality.

use crate::bootstrap::Runtime;
use crate::render;
use clap::Args;
use mindvault_core::Config;

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// The question to ask
    #[arg(required = true)]
    pub question: Vec<String>,

    /// Override the configured owner id
    #[arg(long)]
    pub owner: Option<String>,
}

pub async fn run(args: AskArgs, config: Config) -> anyhow::Result<()> {
    let runtime = Runtime::from_config(config).await?;
    let owner = args.owner.as_deref().unwrap_or_else(|| runtime.owner());

    let question = args.question.join(" ");
    let answer = runtime
        .personality_responder()
        .respond(owner, &question)
        .await?;

    render::print_answer(&answer);
    Ok(())
}
