//! Configuration loading and persistence.

use super::{Config, IndexBackend};
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to the default path.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        let path = paths::config_file()?;
        self.save(&path)
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // 1. Owner id must be non-empty after trim
        if self.owner.id.trim().is_empty() {
            errors.push("Owner id cannot be empty".to_string());
        }

        // 2. Model names must be set
        if self.provider.chat_model.trim().is_empty() {
            errors.push("Provider chat_model cannot be empty".to_string());
        }
        if self.provider.embedding_model.trim().is_empty() {
            errors.push("Provider embedding_model cannot be empty".to_string());
        }

        // 3. Index dimensionality
        if self.index.dimension == 0 {
            errors.push("Index dimension cannot be 0".to_string());
        }

        // 4. Qdrant backend requires a server URL
        if self.index.backend == IndexBackend::Qdrant && self.index.url.is_none() {
            errors.push("Index backend is 'qdrant' but url is not set".to_string());
        }

        // 5. Known embedding models must match the index dimensionality
        let known_dimension = match self.provider.embedding_model.as_str() {
            "text-embedding-ada-002" | "text-embedding-3-small" => Some(1536),
            "text-embedding-3-large" => Some(3072),
            _ => None,
        };
        if let Some(dim) = known_dimension {
            if dim != self.index.dimension {
                errors.push(format!(
                    "Embedding model '{}' produces {}-dimensional vectors but index.dimension is {}; \
                     the index must be recreated to switch models",
                    self.provider.embedding_model, dim, self.index.dimension
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
