//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not document
//! validity. Validity problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The primary input file does not exist. The one fatal error.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Filesystem adapter state could not be accessed (lock poisoned).
    #[error("Filesystem adapter unavailable")]
    FilesystemLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the path and try again".into(),
                "List bundled examples: evoprompt examples".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::FilesystemLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::FilesystemLockError => ErrorCategory::Internal,
        }
    }
}
