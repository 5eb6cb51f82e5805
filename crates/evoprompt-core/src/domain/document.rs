//! Input documents and domain resolution.
//!
//! A [`Document`] is an opaque JSON tree: nothing about its shape is known
//! until its domain has been resolved and the matching schema applied.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Value);

impl Document {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse raw text into a document.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw)
            .map(Self)
            .map_err(|e| DomainError::InvalidJson {
                reason: e.to_string(),
            })
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The top-level mapping, if the document is one.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Look up a nested value by JSON Pointer (`/metadata/domain`).
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Reads the domain a document declares for itself.
///
/// Only `metadata.domain` is consulted; the resolver never infers a domain
/// from the rest of the document.
pub struct DomainResolver;

impl DomainResolver {
    pub fn resolve(document: &Document) -> Result<&str, DomainError> {
        let root = document
            .as_object()
            .ok_or_else(|| undetermined("document is not a JSON object"))?;

        let metadata = root
            .get("metadata")
            .ok_or_else(|| undetermined("missing 'metadata' field"))?
            .as_object()
            .ok_or_else(|| undetermined("'metadata' is not an object"))?;

        metadata
            .get("domain")
            .ok_or_else(|| undetermined("missing 'metadata.domain' field"))?
            .as_str()
            .ok_or_else(|| undetermined("'metadata.domain' is not a string"))
    }
}

fn undetermined(reason: &str) -> DomainError {
    DomainError::DomainUndetermined {
        reason: reason.to_string(),
    }
}
