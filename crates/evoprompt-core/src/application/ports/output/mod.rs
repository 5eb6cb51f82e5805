//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `evoprompt-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::DomainError;
use crate::error::EvopromptResult;

/// Port for read-only filesystem access.
///
/// Implemented by:
/// - `evoprompt_adapters::filesystem::LocalFilesystem` (production)
/// - `evoprompt_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> EvopromptResult<String>;

    /// Files directly under `dir` whose extension is `extension`, sorted.
    ///
    /// Not recursive. A missing directory yields an empty list.
    fn list_files(&self, dir: &Path, extension: &str) -> EvopromptResult<Vec<PathBuf>>;
}

/// Port for JSON Schema validation.
///
/// Implemented by:
/// - `evoprompt_adapters::schema_engine::JsonSchemaEngine` (the `jsonschema` crate)
///
/// ## Contract
///
/// - A schema the engine cannot compile → `DomainError::SchemaCompileError`
/// - A document that violates the schema → `DomainError::SchemaValidationFailed`
///   describing the *first* violation
/// - Same schema and instance → same outcome, every time
pub trait SchemaEngine: Send + Sync {
    fn validate(&self, schema: &Value, instance: &Value) -> Result<(), DomainError>;
}
