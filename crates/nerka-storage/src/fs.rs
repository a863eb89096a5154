//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading documents from a root directory on the
//! local filesystem. Nothing is cached: every lookup is a fresh read, so edits
//! on disk are visible on the next request.

use std::fs;
use std::path::PathBuf;

use crate::path::has_parent_segment;
use crate::storage::{Document, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Maps logical paths onto files below `source_dir`. Paths containing a `..`
/// segment are rejected before touching the filesystem.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use nerka_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let header = storage.read_ext("/.header")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Validate a logical path and map it below the source directory.
    ///
    /// Leading and trailing slashes are ignored, so `/page/` maps to the same
    /// entry as `/page`.
    ///
    /// Rejects paths containing `..` segments to prevent path traversal
    /// (e.g., `/../../etc/passwd`).
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        if has_parent_segment(path) {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        let relative = path.trim_matches('/');
        if relative.is_empty() {
            return Ok(self.source_dir.clone());
        }
        Ok(self.source_dir.join(relative))
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<Document, StorageError> {
        let full_path = self.resolve(path)?;
        let content = fs::read(&full_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))?;
        tracing::trace!(path, file = %full_path.display(), "Read document");
        Ok(Document::new(path, content))
    }

    fn stat(&self, path: &str) -> Result<EntryKind, StorageError> {
        let full_path = self.resolve(path)?;
        let metadata = fs::metadata(&full_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }
}
