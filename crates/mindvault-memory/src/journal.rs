//! Journal entry storage and context retrieval.
//!
//! Two degrade policies live here and must stay distinct from the knowledge
//! retriever's: an empty partition is a non-error (empty result), and a
//! failed similarity search substitutes a deterministic recency ranking
//! instead of failing.

use crate::embeddings::EmbeddingProvider;
use crate::store::{MetadataFilter, VectorStore};
use crate::{meta, Result, VaultEntry};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of records fetched from an owner's partition before
/// ranking. Policy constant, not runtime-configurable.
pub const JOURNAL_SCAN_CAP: usize = 100;

/// Filter matching one owner's journal partition.
///
/// The owner id is trimmed here exactly as `JournalStore::store` trims it,
/// so the same owner argument addresses the same partition on both sides.
fn journal_filter(owner_id: &str) -> MetadataFilter {
    MetadataFilter::new()
        .must(meta::OWNER_ID, owner_id.trim())
        .must(meta::KIND, meta::KIND_JOURNAL)
}

/// Appends journal entries into the owner's partition of the vector index.
pub struct JournalStore {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl JournalStore {
    /// Create a new journal store.
    pub fn new(embeddings: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embeddings, store }
    }

    /// Store a journal entry for `owner_id`, returning the new entry id.
    ///
    /// Creates exactly one entry with a fresh id and the current timestamp.
    /// Empty (after trim) text or owner is rejected; index failures
    /// propagate unrecovered.
    pub async fn store(&self, owner_id: &str, text: &str) -> Result<String> {
        let owner_id = owner_id.trim();
        let text = text.trim();
        if owner_id.is_empty() {
            return Err(crate::MemoryError::invalid_input("owner id is empty"));
        }
        if text.is_empty() {
            return Err(crate::MemoryError::invalid_input("journal text is empty"));
        }

        let embedding = self.embeddings.embed_one(text).await?;
        let entry = VaultEntry::new(text, embedding)
            .with_metadata(meta::OWNER_ID, json!(owner_id))
            .with_metadata(meta::KIND, json!(meta::KIND_JOURNAL));
        let id = entry.id.clone();
        self.store.insert(entry).await?;

        debug!(owner_id, id = %id, "Stored journal entry");
        Ok(id)
    }
}

/// Retrieves the most relevant prior entries for one owner.
pub struct ContextRetriever {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl ContextRetriever {
    /// Create a new context retriever.
    pub fn new(embeddings: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embeddings, store }
    }

    /// Return up to `limit` entry texts for `owner_id`, ranked by semantic
    /// closeness to `query`.
    ///
    /// An owner with no entries yields an empty result (insufficient data,
    /// not an error). If the similarity path fails for any reason, the
    /// owner's fetched entries are substituted, ranked by recency — best
    /// effort data instead of no data.
    pub async fn retrieve(
        &self,
        owner_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        let filter = journal_filter(owner_id);

        let fetched = self.store.scan(&filter, JOURNAL_SCAN_CAP).await?;
        if fetched.is_empty() {
            debug!(owner_id, "No journal entries for owner");
            return Ok(Vec::new());
        }

        let k = limit.min(fetched.len());
        match self.similarity(&filter, query, k).await {
            Ok(texts) => Ok(texts),
            Err(err) => {
                warn!(owner_id, error = %err, "Similarity search failed, falling back to recency");
                Ok(recency_ranked(fetched, limit))
            }
        }
    }

    async fn similarity(
        &self,
        filter: &MetadataFilter,
        query: &str,
        k: usize,
    ) -> Result<Vec<String>> {
        let query_embedding = self.embeddings.embed_one(query).await?;
        let hits = self.store.search(&query_embedding, filter, k).await?;
        Ok(hits.into_iter().map(|(entry, _)| entry.content).collect())
    }
}

/// Order entries newest first and truncate to `limit`.
///
/// The input comes from `scan` in most-recent-inserted order; the sort is
/// stable, so timestamp ties keep that order and the result is deterministic
/// for a fixed store state.
fn recency_ranked(mut fetched: Vec<VaultEntry>, limit: usize) -> Vec<String> {
    fetched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    fetched
        .into_iter()
        .take(limit)
        .map(|entry| entry.content)
        .collect()
}
