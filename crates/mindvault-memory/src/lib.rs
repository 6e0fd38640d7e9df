//! Vector memory and retrieval for MindVault.
//!
//! This crate provides:
//! - Embedding generation via the OpenAI API
//! - Vector storage behind the [`VectorStore`] trait (in-memory, file-backed,
//!   and Qdrant implementations)
//! - The journal store and the two retrievers that decide which stored
//!   entries and knowledge snippets are surfaced before each answer
//! - Knowledge-corpus ingestion (chunking + embedding)

pub mod chunker;
pub mod embeddings;
pub mod error;
pub mod journal;
pub mod knowledge;
pub mod qdrant;
pub mod store;

pub use chunker::{Chunker, ChunkingConfig};
pub use embeddings::{cosine_similarity, EmbeddingProvider, OpenAIEmbeddings};
pub use error::MemoryError;
pub use journal::{ContextRetriever, JournalStore, JOURNAL_SCAN_CAP};
pub use knowledge::{KnowledgeBase, KnowledgeRetriever, NO_KNOWLEDGE_SENTINEL};
pub use qdrant::QdrantVectorStore;
pub use store::{FileVectorStore, InMemoryVectorStore, MetadataFilter, VectorStore};

/// Result type for memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Well-known metadata keys and values.
pub mod meta {
    /// Owner identifier; partitions journal entries per user.
    pub const OWNER_ID: &str = "owner_id";
    /// Record kind discriminator.
    pub const KIND: &str = "type";
    /// Source document id for knowledge snippets.
    pub const SOURCE_ID: &str = "source_id";

    /// Kind value for journal entries.
    pub const KIND_JOURNAL: &str = "journal";
    /// Kind value for knowledge snippets.
    pub const KIND_KNOWLEDGE: &str = "knowledge";
}

/// A stored record with its vector embedding.
///
/// Entries are immutable once stored: MindVault never updates or deletes
/// them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VaultEntry {
    /// Unique identifier.
    pub id: String,

    /// Text content.
    pub content: String,

    /// Vector embedding.
    pub embedding: Vec<f32>,

    /// Metadata (owner, kind, source).
    pub metadata: std::collections::HashMap<String, serde_json::Value>,

    /// Creation timestamp.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl VaultEntry {
    /// Create a new entry with a fresh id and the current timestamp.
    pub fn new(content: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            embedding,
            metadata: std::collections::HashMap::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
