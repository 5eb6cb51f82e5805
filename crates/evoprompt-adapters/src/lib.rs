//! Infrastructure adapters for Evoprompt.
//!
//! This crate implements the ports defined in `evoprompt-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod schema_engine;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema_engine::JsonSchemaEngine;
