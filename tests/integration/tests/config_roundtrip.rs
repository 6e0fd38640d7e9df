//! Config save/load roundtrip integration tests.
//!
//! These tests verify that configuration can be serialized, written to disk,
//! and loaded back with identical field values.

use mindvault_core::config::{Config, IndexBackend};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mindvault.json5");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    // Defaults should survive the roundtrip
    assert_eq!(loaded.owner.id, config.owner.id);
    assert_eq!(loaded.provider.chat_model, config.provider.chat_model);
    assert_eq!(loaded.index.backend, config.index.backend);
    assert_eq!(loaded.index.dimension, config.index.dimension);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mindvault.json5");

    let mut config = Config::default();
    config.owner.id = "alice".to_string();
    config.index.backend = IndexBackend::Qdrant;
    config.index.url = Some("http://localhost:6333".to_string());
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.owner.id, "alice");
    assert_eq!(loaded.index.backend, IndexBackend::Qdrant);
    assert_eq!(loaded.index.url.as_deref(), Some("http://localhost:6333"));
    loaded.validate().unwrap();
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/mindvault.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json5");
    assert!(result.is_err());
}

#[test]
fn test_config_parse_accepts_json5_syntax() {
    // Comments and unquoted keys are allowed in the config file
    let config = Config::parse(
        r#"{
            // who the entries belong to
            owner: { id: "alice" },
            index: { backend: "memory" },
        }"#,
    )
    .unwrap();
    assert_eq!(config.owner.id, "alice");
    assert_eq!(config.index.backend, IndexBackend::Memory);
}
