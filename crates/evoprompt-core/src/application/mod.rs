//! Application layer for Evoprompt.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (validation, generation, catalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no rules about
//! documents itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService, EntangleService, GenerationService, SchemaEntry, SchemaLocator,
    ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SchemaEngine};

pub use error::ApplicationError;
