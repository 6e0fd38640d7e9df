//! Vector storage implementations.
//!
//! All stores share the same contract: insertion order is preserved, so that
//! recency fallbacks and similarity tie-breaks are deterministic for a fixed
//! store state.

use crate::embeddings::cosine_similarity;
use crate::{Result, VaultEntry};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Exact-match metadata predicate used to scope store operations.
///
/// Journal lookups always carry an owner condition; this is what prevents
/// cross-owner leakage at every retrieval step.
#[derive(Debug, Clone, Default)]
pub struct MetadataFilter {
    conditions: Vec<(String, serde_json::Value)>,
}

impl MetadataFilter {
    /// Create an empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`.
    pub fn must(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.conditions.push((key.into(), value.into()));
        self
    }

    /// Check whether an entry satisfies every condition.
    pub fn matches(&self, entry: &VaultEntry) -> bool {
        self.conditions
            .iter()
            .all(|(key, value)| entry.metadata.get(key) == Some(value))
    }

    /// The exact-match conditions in this filter.
    pub fn conditions(&self) -> &[(String, serde_json::Value)] {
        &self.conditions
    }
}

/// Trait for vector stores.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert an entry.
    async fn insert(&self, entry: VaultEntry) -> Result<()>;

    /// Insert multiple entries.
    async fn insert_batch(&self, entries: Vec<VaultEntry>) -> Result<()>;

    /// Search for the `limit` entries most similar to `query`, scoped to
    /// `filter`. Results are ranked by similarity descending; ties break by
    /// insertion order.
    async fn search(
        &self,
        query: &[f32],
        filter: &MetadataFilter,
        limit: usize,
    ) -> Result<Vec<(VaultEntry, f32)>>;

    /// Fetch up to `limit` entries matching `filter`, most-recent-inserted
    /// first. No ranking is applied.
    async fn scan(&self, filter: &MetadataFilter, limit: usize) -> Result<Vec<VaultEntry>>;

    /// Count entries matching `filter`.
    async fn count(&self, filter: &MetadataFilter) -> Result<usize>;
}

/// Rank `entries` by cosine similarity to `query`, descending.
///
/// The sort is stable over the input order, so equal scores keep insertion
/// order.
fn rank_by_similarity(
    entries: Vec<VaultEntry>,
    query: &[f32],
    limit: usize,
) -> Vec<(VaultEntry, f32)> {
    let mut results: Vec<(VaultEntry, f32)> = entries
        .into_iter()
        .map(|entry| {
            let score = cosine_similarity(query, &entry.embedding);
            (entry, score)
        })
        .collect();

    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(limit);
    results
}

/// In-memory vector store.
pub struct InMemoryVectorStore {
    entries: RwLock<Vec<VaultEntry>>,
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVectorStore {
    /// Create a new in-memory vector store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(&self, entry: VaultEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        Ok(())
    }

    async fn insert_batch(&self, batch: Vec<VaultEntry>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.extend(batch);
        Ok(())
    }

    async fn search(
        &self,
        query: &[f32],
        filter: &MetadataFilter,
        limit: usize,
    ) -> Result<Vec<(VaultEntry, f32)>> {
        let entries = self.entries.read().await;
        let matching: Vec<VaultEntry> = entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Ok(rank_by_similarity(matching, query, limit))
    }

    async fn scan(&self, filter: &MetadataFilter, limit: usize) -> Result<Vec<VaultEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &MetadataFilter) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| filter.matches(e)).count())
    }
}

/// File-backed vector store with JSON persistence.
///
/// All mutations are persisted to disk via atomic writes (write to tmp, then
/// rename). Entries are kept as an ordered list so insertion order survives
/// a reload.
pub struct FileVectorStore {
    path: PathBuf,
    entries: RwLock<Vec<VaultEntry>>,
}

impl FileVectorStore {
    /// Create a new file-backed vector store.
    ///
    /// If the file at `path` exists, its contents are deserialized into
    /// memory. If the file does not exist, the store starts empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Atomically persist the current entries to disk.
    fn save(&self, entries: &[VaultEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        let data = serde_json::to_string(entries)?;
        std::fs::write(&tmp_path, data)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl VectorStore for FileVectorStore {
    async fn insert(&self, entry: VaultEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        self.save(&entries)?;
        Ok(())
    }

    async fn insert_batch(&self, batch: Vec<VaultEntry>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.extend(batch);
        self.save(&entries)?;
        Ok(())
    }

    async fn search(
        &self,
        query: &[f32],
        filter: &MetadataFilter,
        limit: usize,
    ) -> Result<Vec<(VaultEntry, f32)>> {
        let entries = self.entries.read().await;
        let matching: Vec<VaultEntry> = entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Ok(rank_by_similarity(matching, query, limit))
    }

    async fn scan(&self, filter: &MetadataFilter, limit: usize) -> Result<Vec<VaultEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &MetadataFilter) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| filter.matches(e)).count())
    }
}
