//! Configuration management.

mod loader;
mod schema;

pub use schema::*;
