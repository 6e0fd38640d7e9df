//! Text-generation provider implementations for MindVault.
//!
//! This crate defines the [`ChatProvider`] abstraction the rest of MindVault
//! generates against, plus the OpenAI implementation used in production.
//!
//! # Example
//!
//! ```rust,ignore
//! use mindvault_providers::{ChatProvider, OpenAIProvider, Message, ChatOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OpenAIProvider::from_env()?;
//!
//!     let messages = vec![Message::user("Hello!")];
//!     let response = provider
//!         .chat("gpt-4", &messages, Some(ChatOptions::with_temperature(0.5)))
//!         .await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

mod error;
mod types;

pub mod openai;

pub use error::{ProviderError, Result};
pub use openai::OpenAIProvider;
pub use types::*;

use async_trait::async_trait;

/// A text-generation service that can produce chat completions.
///
/// Every call is a single blocking round trip: no streaming, no retries, no
/// timeouts beyond the HTTP client's own. Callers that want those behaviors
/// implement them above this trait.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get provider name.
    fn name(&self) -> &str;

    /// The model used when callers pass an empty model string.
    fn default_model(&self) -> &str;

    /// Generate a chat completion.
    async fn chat(
        &self,
        model: &str,
        messages: &[Message],
        options: Option<ChatOptions>,
    ) -> Result<ChatResponse>;
}
