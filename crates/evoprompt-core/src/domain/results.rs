//! Result records returned by the validate / generate / entangle use cases.
//!
//! These are plain values: built once, never mutated, handed to the caller
//! for printing. Field order in the structs is the serialised field order.

use serde::Serialize;

/// Outcome of validating one file.
///
/// Invariant: `valid` is `true` only when a domain was resolved, its schema
/// was found and loaded, and the document passed validation. The only way
/// to build a passing result is [`ValidationResult::passed`], which requires
/// the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidationResult {
    pub fn passed(file: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            valid: true,
            domain: Some(domain.into()),
            error: None,
        }
    }

    pub fn failed(
        file: impl Into<String>,
        domain: Option<String>,
        error: impl ToString,
    ) -> Self {
        Self {
            file: file.into(),
            valid: false,
            domain,
            error: Some(error.to_string()),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Placeholder output of the generation step.
pub const GENERATED_OUTPUT: &str = "Generated data";

/// Outcome of the (stub) generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    input: String,
    output: String,
}

impl GenerationResult {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Validation followed by generation over the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntangledRun {
    pub validation: ValidationResult,
    pub generation: GenerationResult,
}
