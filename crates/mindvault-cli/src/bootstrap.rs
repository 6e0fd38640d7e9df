//! Wiring: turn a [`Config`] into ready-to-use clients.
//!
//! The core components never read environment or files themselves; they
//! receive already-constructed handles from here.

use anyhow::Context;
use mindvault_agent::{FeedbackGenerator, PersonalityResponder};
use mindvault_core::config::IndexBackend;
use mindvault_core::{env, paths, Config};
use mindvault_memory::{
    ContextRetriever, EmbeddingProvider, FileVectorStore, InMemoryVectorStore, JournalStore,
    KnowledgeBase, KnowledgeRetriever, OpenAIEmbeddings, QdrantVectorStore, VectorStore,
};
use mindvault_providers::{ChatProvider, OpenAIProvider};
use std::path::Path;
use std::sync::Arc;

/// Load config from an explicit path, or from the default location.
///
/// A missing default config is not an error: defaults apply until
/// `mindvault init` is run.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => match Config::load_default() {
            Ok(config) => config,
            Err(mindvault_core::ConfigError::NotFound(_)) => Config::default(),
            Err(err) => return Err(err.into()),
        },
    };
    config.validate()?;
    Ok(config)
}

/// Constructed client handles plus the resolved owner id.
pub struct Runtime {
    config: Config,
    store: Arc<dyn VectorStore>,
    embeddings: Arc<dyn EmbeddingProvider>,
    provider: Arc<dyn ChatProvider>,
}

impl Runtime {
    /// Build all clients from a validated config.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let api_key = env::get_var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set (environment or .env)")?;

        let store: Arc<dyn VectorStore> = match config.index.backend {
            IndexBackend::Memory => Arc::new(InMemoryVectorStore::new()),
            IndexBackend::File => Arc::new(FileVectorStore::new(paths::vault_file()?)?),
            IndexBackend::Qdrant => {
                let url = config
                    .index
                    .url
                    .as_deref()
                    .context("index.url is required for the qdrant backend")?;
                Arc::new(
                    QdrantVectorStore::connect(
                        url,
                        &config.index.collection,
                        config.index.dimension,
                    )
                    .await?,
                )
            }
        };

        let mut embeddings =
            OpenAIEmbeddings::new(&api_key).with_model(&config.provider.embedding_model);
        let mut provider =
            OpenAIProvider::new(api_key)?.with_default_model(&config.provider.chat_model);
        if let Some(api_base) = &config.provider.api_base {
            // The chat client expects the /v1 suffix, the embeddings client
            // appends it itself.
            provider = provider.with_base_url(api_base.clone());
            embeddings = embeddings.with_base_url(api_base.trim_end_matches("/v1").to_string());
        }

        Ok(Self {
            config,
            store,
            embeddings: Arc::new(embeddings),
            provider: Arc::new(provider),
        })
    }

    /// The configured owner id.
    pub fn owner(&self) -> &str {
        &self.config.owner.id
    }

    pub fn journal_store(&self) -> JournalStore {
        JournalStore::new(self.embeddings.clone(), self.store.clone())
    }

    pub fn knowledge_base(&self) -> KnowledgeBase {
        KnowledgeBase::new(self.embeddings.clone(), self.store.clone())
    }

    pub fn feedback_generator(&self) -> FeedbackGenerator {
        FeedbackGenerator::new(self.provider.clone(), &self.config.provider.chat_model)
    }

    pub fn personality_responder(&self) -> PersonalityResponder {
        PersonalityResponder::new(
            ContextRetriever::new(self.embeddings.clone(), self.store.clone()),
            KnowledgeRetriever::new(self.embeddings.clone(), self.store.clone()),
            self.provider.clone(),
            &self.config.provider.chat_model,
        )
    }
}
