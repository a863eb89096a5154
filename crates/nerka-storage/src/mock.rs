//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::path::{clean, has_parent_segment};
use crate::storage::{Document, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores files in memory, keyed by cleaned logical path. Directories are
/// implied by the files below them; the root always exists. Every `read`
/// call is recorded so tests can assert on lookup order.
///
/// # Example
///
/// ```ignore
/// use nerka_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("/guide.md", "# User Guide")
///     .with_file("/domain/index.md", "# Domain");
///
/// let doc = storage.read_ext("/guide").unwrap();
/// assert!(storage.stat("/domain").unwrap().is_dir());
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: HashMap<String, Vec<u8>>,
    lookups: Mutex<Vec<String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given logical path and content.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(clean(path), content.into());
        self
    }

    /// Paths passed to `read`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn is_dir(&self, key: &str) -> bool {
        if key == "/" {
            return true;
        }
        let prefix = format!("{key}/");
        self.files.keys().any(|path| path.starts_with(&prefix))
    }

    fn key(path: &str) -> Result<String, StorageError> {
        if has_parent_segment(path) {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(clean(path))
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<Document, StorageError> {
        self.lookups.lock().unwrap().push(path.to_owned());
        let key = Self::key(path)?;
        match self.files.get(&key) {
            Some(content) => Ok(Document::new(path, content.clone())),
            None if self.is_dir(&key) => Err(StorageError::new(StorageErrorKind::IsDirectory)
                .with_path(path)
                .with_backend(BACKEND)),
            None => Err(StorageError::not_found(path).with_backend(BACKEND)),
        }
    }

    fn stat(&self, path: &str) -> Result<EntryKind, StorageError> {
        let key = Self::key(path)?;
        if self.files.contains_key(&key) {
            Ok(EntryKind::File)
        } else if self.is_dir(&key) {
            Ok(EntryKind::Directory)
        } else {
            Err(StorageError::not_found(path).with_backend(BACKEND))
        }
    }
}
