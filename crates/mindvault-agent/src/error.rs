//! Agent error types.

use mindvault_memory::MemoryError;
use mindvault_providers::ProviderError;
use thiserror::Error;

/// Result type for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent failure kinds.
///
/// Callers can distinguish where a flow broke: writing to the index,
/// reading from it, or talking to the text-generation service. Insufficient
/// data is never an error — it surfaces as a fixed message instead.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Writing an entry to the vector index failed.
    #[error("Storage failure: {0}")]
    Storage(#[source] MemoryError),

    /// Fetching entries from the vector index failed.
    #[error("Retrieval failure: {0}")]
    Retrieval(#[source] MemoryError),

    /// The text-generation service failed.
    #[error("Generation failure: {0}")]
    Generation(#[from] ProviderError),
}
