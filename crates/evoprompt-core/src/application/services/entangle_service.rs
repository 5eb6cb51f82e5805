//! Entangle Service - validate, then generate, over one input.
//!
//! Each step returns a value; the run record is assembled from those values
//! rather than from a context object the steps write into.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::services::{GenerationService, ValidationService},
    domain::EntangledRun,
    error::EvopromptResult,
};

/// Chains the validation and generation services.
pub struct EntangleService {
    validation: ValidationService,
    generation: GenerationService,
}

impl EntangleService {
    pub fn new(validation: ValidationService, generation: GenerationService) -> Self {
        Self {
            validation,
            generation,
        }
    }

    /// Run validation then generation on `path`.
    ///
    /// A failed validation does not stop generation; it is reported in the
    /// run record. A missing file stops the run before either step.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn run(&self, path: &Path) -> EvopromptResult<EntangledRun> {
        let validation = self.validation.validate_file(path)?;
        let generation = self.generation.generate(path)?;

        info!(valid = validation.is_valid(), "Entangled run complete");
        Ok(EntangledRun {
            validation,
            generation,
        })
    }
}
