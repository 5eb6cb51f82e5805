//! Validation Service - main application orchestrator.
//!
//! This service coordinates the validation workflow:
//! 1. Read and parse the input document
//! 2. Resolve its domain from `metadata.domain`
//! 3. Locate and load the domain's schema
//! 4. Validate through the schema engine
//!
//! Every failure after step 1's existence check is *reported*: it becomes the
//! `error` of a `ValidationResult`. Only a missing input file escapes as `Err`.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SchemaEngine},
        services::SchemaLocator,
    },
    domain::{Document, DomainError, DomainResolver, ValidationResult},
    error::EvopromptResult,
};

/// Validates documents against their domain schema.
pub struct ValidationService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn SchemaEngine>,
    locator: SchemaLocator,
}

impl ValidationService {
    /// Create a new validation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use evoprompt_core::application::{Filesystem, SchemaEngine, SchemaLocator, ValidationService};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>, engine: Box<dyn SchemaEngine>) {
    /// let service = ValidationService::new(filesystem, engine, SchemaLocator::new("schemas"));
    /// # }
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        engine: Box<dyn SchemaEngine>,
        locator: SchemaLocator,
    ) -> Self {
        Self {
            filesystem,
            engine,
            locator,
        }
    }

    pub fn locator(&self) -> &SchemaLocator {
        &self.locator
    }

    /// Validate the file at `path`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::FileNotFound` if there is no file at `path`. Every
    /// other problem is reported inside the returned result.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn validate_file(&self, path: &Path) -> EvopromptResult<ValidationResult> {
        if !self.filesystem.is_file(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        info!("Validating file");
        let file = path.display().to_string();

        let raw = match self.filesystem.read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Could not read input");
                return Ok(ValidationResult::failed(file, None, e));
            }
        };

        let document = match Document::parse(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Input is not JSON");
                return Ok(ValidationResult::failed(file, None, e));
            }
        };

        Ok(self.validate_document(file, &document))
    }

    /// Validate an already parsed document, labelling the result with `file`.
    pub fn validate_document(
        &self,
        file: impl Into<String>,
        document: &Document,
    ) -> ValidationResult {
        let file = file.into();

        let domain = match DomainResolver::resolve(document) {
            Ok(domain) => domain,
            Err(e) => {
                warn!(error = %e, "Domain could not be determined");
                return ValidationResult::failed(file, None, e);
            }
        };
        debug!(domain, "Domain resolved");

        match self.validate_against(document, domain) {
            Ok(()) => {
                info!(domain, "Document is valid");
                ValidationResult::passed(file, domain)
            }
            Err(e) => {
                info!(domain, error = %e, "Document is invalid");
                ValidationResult::failed(file, Some(domain.to_string()), e)
            }
        }
    }

    /// Validate `document` against the schema registered for `domain`.
    pub fn validate_against(&self, document: &Document, domain: &str) -> Result<(), DomainError> {
        let schema = self.locator.load(self.filesystem.as_ref(), domain)?;
        self.engine.validate(&schema, document.as_value())
    }
}
