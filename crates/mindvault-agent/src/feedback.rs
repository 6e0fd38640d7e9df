//! Structured feedback for a single journal entry.

use crate::error::Result;
use crate::prompts::FEEDBACK_SYSTEM_PROMPT;
use mindvault_providers::{ChatOptions, ChatProvider, Message};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Low temperature biases the feedback toward consistency.
pub const FEEDBACK_TEMPERATURE: f32 = 0.5;

/// Substituted when the service returns no content.
pub const DEFAULT_FEEDBACK_MESSAGE: &str =
    "No feedback was generated for this entry. Please try again.";

/// The shape the feedback response is expected to take.
///
/// The generator itself returns raw text and does not validate it; this type
/// is for callers that want to try parsing (the CLI uses it for pretty
/// printing, falling back to the raw text).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub mood: String,
    pub clarity_score: u8,
    pub summary: String,
    pub insight: String,
    pub suggested_action: String,
}

impl FeedbackResult {
    /// Try to parse feedback text as a [`FeedbackResult`].
    ///
    /// Tolerates Markdown code fences around the JSON. Returns `None` on any
    /// mismatch — malformed output is not an error.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text
            .strip_prefix("```json")
            .or_else(|| text.strip_prefix("```"))
            .unwrap_or(text);
        let text = text.strip_suffix("```").unwrap_or(text);
        serde_json::from_str(text.trim()).ok()
    }
}

/// Generates structured feedback for journal entries.
pub struct FeedbackGenerator {
    provider: Arc<dyn ChatProvider>,
    model: String,
}

impl FeedbackGenerator {
    /// Create a new feedback generator using `model` on `provider`.
    pub fn new(provider: Arc<dyn ChatProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Generate feedback for one journal entry.
    ///
    /// Returns the raw response text — expected but not validated to be JSON
    /// in the [`FeedbackResult`] shape. Never returns an empty string: empty
    /// content is replaced with [`DEFAULT_FEEDBACK_MESSAGE`]. Service errors
    /// propagate as generation failures.
    pub async fn generate(&self, journal_text: &str) -> Result<String> {
        let messages = [
            Message::system(FEEDBACK_SYSTEM_PROMPT),
            Message::user(journal_text),
        ];

        let response = self
            .provider
            .chat(
                &self.model,
                &messages,
                Some(ChatOptions::with_temperature(FEEDBACK_TEMPERATURE)),
            )
            .await?;

        if response.is_empty() {
            debug!("Feedback response was empty, substituting default");
            Ok(DEFAULT_FEEDBACK_MESSAGE.to_string())
        } else {
            Ok(response.content)
        }
    }
}
