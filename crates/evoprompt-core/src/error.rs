//! Unified error handling for Evoprompt Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Evoprompt Core operations.
#[derive(Debug, Error, Clone)]
pub enum EvopromptError {
    /// Errors from the domain layer (document and schema problems).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl EvopromptError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Evoprompt".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Schema => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for the missing-input case, the only error that ends a run.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::FileNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EvopromptResult<T> = Result<T, EvopromptError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn file_not_found_is_not_found_category() {
        let err: EvopromptError = ApplicationError::FileNotFound {
            path: PathBuf::from("missing.json"),
        }
        .into();
        assert!(err.is_file_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "File not found: missing.json");
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err: EvopromptError = DomainError::UnknownDomain {
            domain: "press_release".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown domain 'press_release'");
        assert!(!err.is_file_not_found());
    }

    #[test]
    fn schema_errors_are_configuration() {
        let err: EvopromptError = DomainError::SchemaCompileError {
            reason: "bad type".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
