//! Path resolution utilities.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Get the MindVault base directory (~/.mindvault).
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine home directory".to_string())
    })?;
    Ok(home.join(".mindvault"))
}

/// Get the main config file path (~/.mindvault/mindvault.json5).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("mindvault.json5"))
}

/// Get the data directory (~/.mindvault/data).
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("data"))
}

/// Get the file-backed vault store path (~/.mindvault/data/vault.json).
pub fn vault_file() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("vault.json"))
}

/// Get the default expert-knowledge source directory
/// (~/.mindvault/expert_knowledge).
pub fn knowledge_dir() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("expert_knowledge"))
}
