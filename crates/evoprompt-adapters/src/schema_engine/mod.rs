//! Schema engine adapters.

mod json_schema;

pub use json_schema::JsonSchemaEngine;
