//! CLI command implementations.

pub mod ask;
pub mod config;
pub mod ingest;
pub mod init;
pub mod journal;
