//! Generation Service - the stub generation step.
//!
//! Only checks that the input exists; the output is a fixed placeholder.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{GENERATED_OUTPUT, GenerationResult},
    error::EvopromptResult,
};

/// Service for the generation use case.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerationService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate output for the file at `path`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::FileNotFound` if there is no file at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn generate(&self, path: &Path) -> EvopromptResult<GenerationResult> {
        if !self.filesystem.is_file(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        info!("Generating output");
        Ok(GenerationResult::new(
            path.display().to_string(),
            GENERATED_OUTPUT,
        ))
    }
}
