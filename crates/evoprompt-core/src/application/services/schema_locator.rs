//! Schema Locator - domain key to schema file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{DomainError, SchemaDomain},
};

/// Finds and loads the versioned schema for a domain.
///
/// Holds only the schema root; the filesystem is borrowed per call so the
/// locator can be shared by services that own different adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLocator {
    root: PathBuf,
}

impl SchemaLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<schema-id>/1.0.0.json`. Pure path arithmetic.
    pub fn schema_path(&self, domain: SchemaDomain) -> PathBuf {
        self.root.join(domain.relative_path())
    }

    /// Resolve a domain key to an existing schema file.
    pub fn locate(
        &self,
        filesystem: &dyn Filesystem,
        key: &str,
    ) -> Result<(SchemaDomain, PathBuf), DomainError> {
        let domain: SchemaDomain = key.parse()?;
        let path = self.schema_path(domain);

        if !filesystem.is_file(&path) {
            return Err(DomainError::SchemaMissing {
                domain: key.to_string(),
                path,
            });
        }

        Ok((domain, path))
    }

    /// Resolve and parse the schema for a domain key.
    #[instrument(skip(self, filesystem))]
    pub fn load(&self, filesystem: &dyn Filesystem, key: &str) -> Result<Value, DomainError> {
        let (_, path) = self.locate(filesystem, key)?;
        debug!(path = %path.display(), "Loading schema");

        let raw = filesystem
            .read_to_string(&path)
            .map_err(|e| DomainError::SchemaLoadError {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| DomainError::SchemaLoadError {
            path,
            reason: e.to_string(),
        })
    }
}

impl Default for SchemaLocator {
    fn default() -> Self {
        Self::new("schemas")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn filesystem_with(path: &'static str, content: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file()
            .returning(move |p| p == Path::new(path));
        fs.expect_read_to_string()
            .returning(move |_| Ok(content.to_string()));
        fs
    }

    #[test]
    fn every_domain_path_is_versioned_under_its_id() {
        let locator = SchemaLocator::new("schemas");
        for domain in SchemaDomain::ALL {
            let path = locator.schema_path(domain);
            assert!(path.ends_with("1.0.0.json"));
            let parent = path.parent().unwrap();
            assert_eq!(parent.file_name().unwrap(), domain.schema_id());
            assert!(path.starts_with("schemas"));
        }
    }

    #[test]
    fn unknown_domain_fails_before_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().never();
        let err = SchemaLocator::default().locate(&fs, "newsletter").unwrap_err();
        assert!(matches!(err, DomainError::UnknownDomain { .. }));
    }

    #[test]
    fn missing_file_is_schema_missing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().returning(|_| false);
        let err = SchemaLocator::default().locate(&fs, "cold_email").unwrap_err();
        match err {
            DomainError::SchemaMissing { domain, path } => {
                assert_eq!(domain, "cold_email");
                assert!(path.ends_with("cold-email/1.0.0.json"));
            }
            other => panic!("expected SchemaMissing, got {other:?}"),
        }
    }

    #[test]
    fn load_parses_schema() {
        let fs = filesystem_with("schemas/cold-email/1.0.0.json", r#"{"type":"object"}"#);
        let schema = SchemaLocator::default().load(&fs, "cold_email").unwrap();
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn malformed_schema_is_load_error() {
        let fs = filesystem_with("schemas/landing-page/1.0.0.json", "{ \"type\": ");
        let err = SchemaLocator::default().load(&fs, "landing_page").unwrap_err();
        assert!(matches!(err, DomainError::SchemaLoadError { .. }));
        assert!(err.to_string().contains("landing-page"));
    }
}
