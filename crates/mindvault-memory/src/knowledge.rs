//! Expert-knowledge corpus: ingestion and retrieval.
//!
//! The corpus is shared and owner-independent. Its degrade policy differs
//! from the journal retriever's on purpose: a failed search yields a fixed
//! sentinel string that explicitly flags the absence of expert knowledge,
//! never a guess and never an error.

use crate::chunker::{Chunker, ChunkingConfig};
use crate::embeddings::EmbeddingProvider;
use crate::store::{MetadataFilter, VectorStore};
use crate::{meta, Result, VaultEntry};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returned in place of snippets when knowledge retrieval fails.
pub const NO_KNOWLEDGE_SENTINEL: &str = "No expert knowledge retrieved";

/// Filter matching the shared knowledge partition.
fn knowledge_filter() -> MetadataFilter {
    MetadataFilter::new().must(meta::KIND, meta::KIND_KNOWLEDGE)
}

/// Retrieves relevant snippets from the shared knowledge corpus.
pub struct KnowledgeRetriever {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl KnowledgeRetriever {
    /// Create a new knowledge retriever.
    pub fn new(embeddings: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embeddings, store }
    }

    /// Return up to `k` snippet texts relevant to `query`.
    ///
    /// Infallible by design: any failure yields exactly
    /// `[NO_KNOWLEDGE_SENTINEL]`.
    pub async fn retrieve(&self, query: &str, k: usize) -> Vec<String> {
        match self.similarity(query, k).await {
            Ok(texts) => texts,
            Err(err) => {
                warn!(error = %err, "Knowledge retrieval failed, substituting sentinel");
                vec![NO_KNOWLEDGE_SENTINEL.to_string()]
            }
        }
    }

    async fn similarity(&self, query: &str, k: usize) -> Result<Vec<String>> {
        let query_embedding = self.embeddings.embed_one(query).await?;
        let hits = self
            .store
            .search(&query_embedding, &knowledge_filter(), k)
            .await?;
        Ok(hits.into_iter().map(|(entry, _)| entry.content).collect())
    }
}

/// Ingests documents into the knowledge partition.
pub struct KnowledgeBase {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    chunker: Chunker,
}

impl KnowledgeBase {
    /// Create a knowledge base with default chunking (500 chars, 50 overlap).
    pub fn new(embeddings: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self::with_chunking(embeddings, store, ChunkingConfig::default())
    }

    /// Create a knowledge base with custom chunking parameters.
    pub fn with_chunking(
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        chunking: ChunkingConfig,
    ) -> Self {
        Self {
            embeddings,
            store,
            chunker: Chunker::new(chunking),
        }
    }

    /// Chunk, embed, and store one document. Returns the number of chunks
    /// stored.
    pub async fn ingest_text(&self, source_id: &str, text: &str) -> Result<usize> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            debug!(source_id, "Document produced no chunks");
            return Ok(0);
        }

        let embeddings = self.embeddings.embed(&chunks).await?;
        let entries: Vec<VaultEntry> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| {
                VaultEntry::new(chunk, embedding)
                    .with_metadata(meta::KIND, json!(meta::KIND_KNOWLEDGE))
                    .with_metadata(meta::SOURCE_ID, json!(source_id))
            })
            .collect();

        let stored = entries.len();
        self.store.insert_batch(entries).await?;
        debug!(source_id, chunks = stored, "Ingested document");
        Ok(stored)
    }

    /// Ingest every `.txt` file in `dir`. Returns the total number of chunks
    /// stored. The file name (without extension) becomes the source id.
    pub async fn ingest_dir(&self, dir: &Path) -> Result<usize> {
        let mut total = 0;

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        // Deterministic ingestion order
        paths.sort();

        for path in paths {
            let source_id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".to_string());
            let text = std::fs::read_to_string(&path)?;
            total += self.ingest_text(&source_id, &text).await?;
        }

        info!(dir = %dir.display(), chunks = total, "Knowledge ingestion complete");
        Ok(total)
    }
}
