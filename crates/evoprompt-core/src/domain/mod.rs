//! Core domain layer for Evoprompt.
//!
//! This module contains pure logic with no I/O. Reading files and compiling
//! schemas are handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Results are built once and never mutated
//! - **Explicit inputs**: the prompt pool and randomness are passed in
pub mod document;
pub mod error;
pub mod prompt;
pub mod results;
pub mod schema;

pub use document::{Document, DomainResolver};
pub use error::{DomainError, ErrorCategory};
pub use prompt::{
    BODY_SEPARATOR, ENTANGLED_SUFFIX, PROMPT_POOL, PromptMixer, PromptRecord, QuantumReport,
};
pub use results::{EntangledRun, GENERATED_OUTPUT, GenerationResult, ValidationResult};
pub use schema::{SCHEMA_VERSION, SchemaDomain};
