// ============================================================================
// domain/error.rs - VALIDATION DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (results are built from them after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant except `EmptyPromptSet` is *reported*, never fatal: the
/// validation service folds it into a `ValidationResult`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Document errors
    // ========================================================================
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Could not determine document domain: {reason}")]
    DomainUndetermined { reason: String },

    // ========================================================================
    // Schema resolution errors
    // ========================================================================
    #[error("Unknown domain '{domain}'")]
    UnknownDomain { domain: String },

    #[error("No schema for domain '{domain}' at {}", path.display())]
    SchemaMissing { domain: String, path: PathBuf },

    #[error("Failed to load schema {}: {reason}", path.display())]
    SchemaLoadError { path: PathBuf, reason: String },

    #[error("Invalid schema: {reason}")]
    SchemaCompileError { reason: String },

    // ========================================================================
    // Validation outcome
    // ========================================================================
    #[error("{instance_path}: {message}")]
    SchemaValidationFailed {
        instance_path: String,
        message: String,
    },

    // ========================================================================
    // Prompt mixer
    // ========================================================================
    #[error("Cannot mix an empty prompt set")]
    EmptyPromptSet,
}

impl DomainError {
    /// Build a violation error, naming the document root `(root)`.
    pub fn violation(instance_path: impl Into<String>, message: impl Into<String>) -> Self {
        let instance_path = instance_path.into();
        Self::SchemaValidationFailed {
            instance_path: if instance_path.is_empty() {
                "(root)".to_string()
            } else {
                instance_path
            },
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidJson { .. } => vec![
                "The input file is not well-formed JSON".into(),
                "Check for trailing commas and unquoted keys".into(),
            ],
            Self::DomainUndetermined { .. } => vec![
                "Add a domain to the document:".into(),
                r#"  { "metadata": { "domain": "cold_email" }, ... }"#.into(),
            ],
            Self::UnknownDomain { domain } => vec![
                format!("'{}' is not a known domain", domain),
                "List available schemas: evoprompt schemas".into(),
            ],
            Self::SchemaMissing { path, .. } => vec![
                format!("Expected a schema file at {}", path.display()),
                "Point --schemas-dir at your schema tree".into(),
            ],
            Self::SchemaLoadError { path, .. } => vec![
                format!("Schema file {} could not be parsed", path.display()),
                "Fix the schema JSON and retry".into(),
            ],
            Self::SchemaValidationFailed { instance_path, .. } => vec![
                format!("Fix the document at {}", instance_path),
            ],
            Self::SchemaCompileError { .. } => vec![
                "The schema itself is not a valid JSON Schema".into(),
                "Check its keywords against the draft named in `$schema`".into(),
            ],
            Self::EmptyPromptSet => vec!["Ask for at least one prompt: evoprompt quantum -n 1".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidJson { .. }
            | Self::DomainUndetermined { .. }
            | Self::SchemaValidationFailed { .. }
            | Self::EmptyPromptSet => ErrorCategory::Validation,
            Self::UnknownDomain { .. } | Self::SchemaMissing { .. } => ErrorCategory::NotFound,
            Self::SchemaLoadError { .. } | Self::SchemaCompileError { .. } => {
                ErrorCategory::Schema
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_compile_error_has_its_own_suggestions() {
        let err = DomainError::SchemaCompileError {
            reason: "bad keyword".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("not a valid JSON Schema")));
        assert_eq!(err.category(), ErrorCategory::Schema);
    }

    #[test]
    fn empty_prompt_set_points_at_quantum_count() {
        let suggestions = DomainError::EmptyPromptSet.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("-n 1")));
    }

    #[test]
    fn no_variant_falls_back_to_generic_advice() {
        let all = [
            DomainError::InvalidJson { reason: "eof".into() },
            DomainError::UnknownDomain { domain: "press".into() },
            DomainError::SchemaCompileError { reason: "x".into() },
            DomainError::EmptyPromptSet,
        ];
        for err in &all {
            assert!(
                err.suggestions().iter().all(|s| !s.contains("See documentation")),
                "{err:?}"
            );
        }
    }
}
