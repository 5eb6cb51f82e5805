//! Catalog Service - what schemas and example documents are available.
//!
//! Schemas come from the static domain table, checked against the disk.
//! Examples are the `*.json` files directly inside the examples directory.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ports::Filesystem, services::SchemaLocator},
    domain::SchemaDomain,
    error::EvopromptResult,
};

/// One row of the schema table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaEntry {
    pub domain: SchemaDomain,
    pub schema_id: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

/// Lists schemas and example documents.
pub struct CatalogService {
    filesystem: Box<dyn Filesystem>,
    locator: SchemaLocator,
    examples_dir: PathBuf,
}

impl CatalogService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        locator: SchemaLocator,
        examples_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            locator,
            examples_dir: examples_dir.into(),
        }
    }

    /// Every registered domain with its schema path and whether it exists.
    pub fn list_schemas(&self) -> Vec<SchemaEntry> {
        SchemaDomain::ALL
            .iter()
            .map(|&domain| {
                let path = self.locator.schema_path(domain);
                SchemaEntry {
                    domain,
                    schema_id: domain.schema_id(),
                    present: self.filesystem.is_file(&path),
                    path,
                }
            })
            .collect()
    }

    /// JSON example documents, sorted by path.
    #[instrument(skip(self), fields(dir = %self.examples_dir.display()))]
    pub fn list_examples(&self) -> EvopromptResult<Vec<PathBuf>> {
        let examples = self.filesystem.list_files(&self.examples_dir, "json")?;
        debug!(count = examples.len(), "Examples listed");
        Ok(examples)
    }
}
