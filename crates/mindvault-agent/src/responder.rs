//! Free-form personality answering grounded in retrieved context.

use crate::error::{AgentError, Result};
use crate::prompts::{personality_prompt, CONTEXT_SEPARATOR};
use mindvault_memory::{ContextRetriever, KnowledgeRetriever};
use mindvault_providers::{ChatOptions, ChatProvider, Message};
use std::sync::Arc;
use tracing::debug;

/// How many of the owner's entries are surfaced per question.
pub const CONTEXT_LIMIT: usize = 8;

/// How many knowledge snippets are surfaced per question.
pub const KNOWLEDGE_K: usize = 3;

/// Higher temperature biases answers toward exploration.
pub const ANSWER_TEMPERATURE: f32 = 0.7;

/// Response-length ceiling.
pub const ANSWER_MAX_TOKENS: usize = 800;

/// Returned when the owner has no stored entries. No generation call is made
/// in that case.
pub const NOT_ENOUGH_DATA_MESSAGE: &str =
    "There isn't enough journal data yet to answer that. Write a few entries and ask again.";

/// Substituted when the service returns no content.
pub const EMPTY_ANSWER_MESSAGE: &str = "No answer was generated. Please try again.";

/// Answers questions about the owner's personality from their journal and
/// the expert knowledge corpus.
pub struct PersonalityResponder {
    context: ContextRetriever,
    knowledge: KnowledgeRetriever,
    provider: Arc<dyn ChatProvider>,
    model: String,
}

impl PersonalityResponder {
    /// Create a new responder.
    pub fn new(
        context: ContextRetriever,
        knowledge: KnowledgeRetriever,
        provider: Arc<dyn ChatProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            context,
            knowledge,
            provider,
            model: model.into(),
        }
    }

    /// Answer `question` for `owner_id`.
    ///
    /// Short-circuits with [`NOT_ENOUGH_DATA_MESSAGE`] when the owner has no
    /// entries — no generation cost is incurred. Retrieval failures (beyond
    /// the retrievers' own fallbacks) and generation failures propagate.
    pub async fn respond(&self, owner_id: &str, question: &str) -> Result<String> {
        let entries = self
            .context
            .retrieve(owner_id, question, CONTEXT_LIMIT)
            .await
            .map_err(AgentError::Retrieval)?;

        if entries.is_empty() {
            debug!(owner_id, "No journal context, skipping generation");
            return Ok(NOT_ENOUGH_DATA_MESSAGE.to_string());
        }

        let snippets = self.knowledge.retrieve(question, KNOWLEDGE_K).await;

        let journal_context = entries.join(CONTEXT_SEPARATOR);
        let expert_context = snippets.join(CONTEXT_SEPARATOR);
        let system = personality_prompt(&journal_context, &expert_context, question);

        let messages = [Message::system(system), Message::user(question)];
        let options = ChatOptions::with_temperature(ANSWER_TEMPERATURE)
            .max_tokens(ANSWER_MAX_TOKENS)
            .user(owner_id);

        let response = self
            .provider
            .chat(&self.model, &messages, Some(options))
            .await?;

        if response.is_empty() {
            Ok(EMPTY_ANSWER_MESSAGE.to_string())
        } else {
            Ok(response.content)
        }
    }
}
