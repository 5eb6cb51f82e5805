//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use evoprompt_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EvopromptResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::insert`].
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(path.into(), content.into());
        }
    }

    /// Remove a file, returning its content.
    pub fn remove(&self, path: &Path) -> Option<String> {
        self.inner.write().ok()?.remove(path)
    }

    /// List all files.
    pub fn list_all(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> EvopromptResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLockError)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn list_files(&self, dir: &Path, extension: &str) -> EvopromptResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLockError)?;

        // BTreeMap keys are already sorted.
        Ok(inner
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_files() {
        let fs = MemoryFilesystem::new().with_file("a/b.json", "{}");
        assert!(fs.is_file(Path::new("a/b.json")));
        assert_eq!(fs.read_to_string(Path::new("a/b.json")).unwrap(), "{}");
    }

    #[test]
    fn missing_file_read_is_error() {
        let fs = MemoryFilesystem::new();
        assert!(!fs.is_file(Path::new("x.json")));
        assert!(fs.read_to_string(Path::new("x.json")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        fs.insert("late.json", "[]");
        assert!(clone.is_file(Path::new("late.json")));
        assert_eq!(clone.remove(Path::new("late.json")).as_deref(), Some("[]"));
        assert!(fs.list_all().is_empty());
    }

    #[test]
    fn list_files_is_flat_and_filtered() {
        let fs = MemoryFilesystem::new()
            .with_file("examples/b.json", "{}")
            .with_file("examples/a.json", "{}")
            .with_file("examples/readme.md", "")
            .with_file("examples/deep/c.json", "{}");

        let files = fs.list_files(Path::new("examples"), "json").unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("examples/a.json"),
                PathBuf::from("examples/b.json")
            ]
        );
    }
}
