//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate a document" or "list schemas".

pub mod catalog_service;
pub mod entangle_service;
pub mod generation_service;
pub mod schema_locator;
pub mod validation_service;

pub use catalog_service::{CatalogService, SchemaEntry};
pub use entangle_service::EntangleService;
pub use generation_service::GenerationService;
pub use schema_locator::SchemaLocator;
pub use validation_service::ValidationService;
