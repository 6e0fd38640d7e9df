//! Shared test doubles for the MindVault integration tests.
//!
//! Everything here is deterministic: embeddings are keyed on a few test
//! words, and the chat provider replays a scripted reply while counting
//! calls.

use async_trait::async_trait;
use mindvault_memory::{EmbeddingProvider, MemoryError};
use mindvault_providers::{
    ChatOptions, ChatProvider, ChatResponse, Message, ProviderError, StopReason, Usage,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Deterministic embeddings keyed on a few test words.
///
/// Texts containing "anxious" and "calm" land on distinct axes, so
/// similarity ranking is predictable without a real embedding service.
pub struct KeywordEmbeddings;

#[async_trait]
impl EmbeddingProvider for KeywordEmbeddings {
    fn dimension(&self) -> usize {
        3
    }

    async fn embed(&self, texts: &[String]) -> mindvault_memory::Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                let text = text.to_lowercase();
                let anxious = if text.contains("anxious") { 1.0 } else { 0.0 };
                let calm = if text.contains("calm") { 1.0 } else { 0.0 };
                vec![anxious, calm, 0.1]
            })
            .collect())
    }
}

/// Embeddings provider that always fails; used to force the degraded paths.
pub struct FailingEmbeddings;

#[async_trait]
impl EmbeddingProvider for FailingEmbeddings {
    fn dimension(&self) -> usize {
        3
    }

    async fn embed(&self, _texts: &[String]) -> mindvault_memory::Result<Vec<Vec<f32>>> {
        Err(MemoryError::embedding("injected failure"))
    }
}

/// Chat provider that returns a scripted reply, counts calls, and records
/// the last system prompt it saw.
pub struct ScriptedChat {
    reply: Result<String, ()>,
    calls: AtomicUsize,
    last_system: Mutex<Option<String>>,
}

impl ScriptedChat {
    pub fn replying(content: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(content.to_string()),
            calls: AtomicUsize::new(0),
            last_system: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(()),
            calls: AtomicUsize::new(0),
            last_system: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_system(&self) -> Option<String> {
        self.last_system.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedChat {
    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn chat(
        &self,
        _model: &str,
        messages: &[Message],
        _options: Option<ChatOptions>,
    ) -> mindvault_providers::Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_system.lock().unwrap() = messages.first().map(|m| m.content.clone());
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                id: "r1".to_string(),
                model: "test-model".to_string(),
                content: content.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            }),
            Err(()) => Err(ProviderError::server_error(500, "injected")),
        }
    }
}
