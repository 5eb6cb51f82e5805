//! Evoprompt Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Evoprompt
//! Protocol CLI, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          evoprompt-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Validation, Generation, Entangle,     │
//! │   Catalog, SchemaLocator)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, SchemaEngine)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    evoprompt-adapters (Infrastructure)  │
//! │ (LocalFilesystem, JsonSchemaEngine, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SchemaDomain, Document, PromptMixer,   │
//! │  ValidationResult)                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use evoprompt_core::application::{SchemaLocator, ValidationService};
//!
//! # fn demo(
//! #     filesystem: Box<dyn evoprompt_core::application::Filesystem>,
//! #     engine: Box<dyn evoprompt_core::application::SchemaEngine>,
//! # ) -> evoprompt_core::error::EvopromptResult<()> {
//! let service = ValidationService::new(filesystem, engine, SchemaLocator::new("schemas"));
//! let result = service.validate_file(Path::new("examples/cold_email.json"))?;
//! println!("valid: {}", result.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, EntangleService, GenerationService, SchemaLocator, ValidationService,
        ports::{Filesystem, SchemaEngine},
    };
    pub use crate::domain::{
        Document, DomainResolver, EntangledRun, GenerationResult, PromptMixer, PromptRecord,
        QuantumReport, SchemaDomain, ValidationResult,
    };
    pub use crate::error::{EvopromptError, EvopromptResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
