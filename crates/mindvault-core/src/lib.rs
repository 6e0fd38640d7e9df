//! # mindvault-core
//!
//! Core types, configuration, and utilities for MindVault.
//!
//! This crate provides shared functionality used across all MindVault crates:
//!
//! - **Configuration**: Loading, validation, and management of the config file
//! - **Paths**: Resolution of the `~/.mindvault` directory layout
//! - **Environment**: Env-var helpers and `.env` loading

pub mod config;
pub mod env;
pub mod error;
pub mod paths;

// Re-exports for convenience
pub use config::Config;
pub use error::ConfigError;
