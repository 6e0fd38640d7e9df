//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Main MindVault configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Owner/session identity.
    #[serde(default)]
    pub owner: OwnerConfig,

    /// Text-generation and embedding provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Vector index settings.
    #[serde(default)]
    pub index: IndexConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Owner identity section.
///
/// The owner id scopes every journal entry; entries stored under one owner
/// are never surfaced to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerConfig {
    /// Owner identifier used to partition journal entries.
    #[serde(default = "default_owner_id")]
    pub id: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            id: default_owner_id(),
        }
    }
}

fn default_owner_id() -> String {
    "default".to_string()
}

/// Provider configuration section.
///
/// The API key itself is never stored in the config file; it is read from
/// the `OPENAI_API_KEY` environment variable (or `.env`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Chat completion model.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Embedding model. Must produce vectors matching `index.dimension`.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Custom API base URL (for Azure OpenAI or compatible APIs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            chat_model: default_chat_model(),
            embedding_model: default_embedding_model(),
            api_base: None,
        }
    }
}

fn default_chat_model() -> String {
    "gpt-4".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-ada-002".to_string()
}

/// Vector index configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: IndexBackend,

    /// Qdrant server URL (required when `backend = "qdrant"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Collection name for the Qdrant backend.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Embedding dimensionality of the index. The index must be recreated
    /// if the embedding model changes dimensionality.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            backend: IndexBackend::default(),
            url: None,
            collection: default_collection(),
            dimension: default_dimension(),
        }
    }
}

fn default_collection() -> String {
    "mindvault".to_string()
}

fn default_dimension() -> usize {
    1536
}

/// Vector index backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBackend {
    /// In-process, non-persistent store (tests, dry runs).
    Memory,
    /// JSON file-backed store under `~/.mindvault/data`.
    #[default]
    File,
    /// External Qdrant server.
    Qdrant,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "mindvault=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "mindvault=info".to_string()
}
