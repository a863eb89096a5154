//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for resolving logical paths to document
//! bytes, along with [`StorageError`] for unified error handling across backends.
//!
//! # Logical Path Convention
//!
//! All path parameters in Storage methods are **logical paths**, not file paths:
//! - `"/"` - root
//! - `"/guide"` - document without its extension
//! - `"/guide.md"` - exact file name
//! - `"/domain/index"` - index document of a directory
//!
//! Storage implementations handle the mapping from logical paths to their
//! internal storage format.

use std::borrow::Cow;
use std::path::PathBuf;

/// Implicit extensions tried by [`Storage::read_ext`], in priority order.
///
/// The Markdown source always wins over a pre-rendered HTML file of the same name.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".md", ".html"];

/// Raw document content resolved from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Logical path of the candidate that resolved (e.g. "/guide.md").
    pub path: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

impl Document {
    /// Create a document from its resolved path and content.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Kind of entry found at a logical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Check whether the entry is a directory.
    #[must_use]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Path escapes the storage root or is otherwise malformed.
    InvalidPath,
    /// A directory was found where a document was expected.
    IsDirectory,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Check whether this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::IsADirectory => StorageErrorKind::IsDirectory,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::IsDirectory => "Is a directory",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only document store.
///
/// Provides a unified interface for resolving documents regardless of backend.
/// Implementations must be safe for unsynchronized concurrent reads: the
/// server calls them from every request handler at once.
///
/// # Logical Paths
///
/// All path parameters are **logical paths** rooted at `/`. Implementations
/// must refuse paths that would escape their root.
pub trait Storage: Send + Sync {
    /// Read a document by its exact logical path.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the entry doesn't exist, is a directory,
    /// can't be read, or the path is invalid.
    fn read(&self, path: &str) -> Result<Document, StorageError>;

    /// Read a document, trying [`DOCUMENT_EXTENSIONS`] before the exact name.
    ///
    /// Returns the first candidate that resolves. When no extension matches,
    /// the result of the exact [`read`](Self::read) is returned unchanged,
    /// including its error.
    ///
    /// # Errors
    ///
    /// Returns the exact-match [`StorageError`] if no candidate resolves.
    fn read_ext(&self, path: &str) -> Result<Document, StorageError> {
        for ext in DOCUMENT_EXTENSIONS {
            match self.read(&format!("{path}{ext}")) {
                Ok(document) => return Ok(document),
                Err(err) => tracing::trace!(path, ext, error = %err, "Extension candidate missed"),
            }
        }
        self.read(path)
    }

    /// Determine what kind of entry exists at a logical path.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if nothing exists at the path or the path is invalid.
    fn stat(&self, path: &str) -> Result<EntryKind, StorageError>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    /// Minimal in-memory storage for exercising the provided `read_ext`.
    struct MapStorage(HashMap<&'static str, &'static str>);

    impl Storage for MapStorage {
        fn read(&self, path: &str) -> Result<Document, StorageError> {
            self.0
                .get(path)
                .map(|content| Document::new(path, *content))
                .ok_or_else(|| StorageError::not_found(path))
        }

        fn stat(&self, path: &str) -> Result<EntryKind, StorageError> {
            self.read(path).map(|_| EntryKind::File)
        }
    }

    #[test]
    fn test_read_ext_prefers_markdown_over_html() {
        let storage = MapStorage(HashMap::from([
            ("/guide.md", "# Guide"),
            ("/guide.html", "<h1>Guide</h1>"),
            ("/guide", "plain"),
        ]));

        let doc = storage.read_ext("/guide").unwrap();

        assert_eq!(doc.path, "/guide.md");
        assert_eq!(doc.text(), "# Guide");
    }

    #[test]
    fn test_read_ext_uses_html_when_no_markdown() {
        let storage = MapStorage(HashMap::from([
            ("/guide.html", "<h1>Guide</h1>"),
            ("/guide", "plain"),
        ]));

        let doc = storage.read_ext("/guide").unwrap();

        assert_eq!(doc.path, "/guide.html");
    }

    #[test]
    fn test_read_ext_falls_back_to_exact_match() {
        let storage = MapStorage(HashMap::from([("/robots.txt", "User-agent: *")]));

        let doc = storage.read_ext("/robots.txt").unwrap();

        assert_eq!(doc.path, "/robots.txt");
    }

    #[test]
    fn test_read_ext_not_found_reports_exact_path() {
        let storage = MapStorage(HashMap::new());

        let err = storage.read_ext("/missing").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.path.as_deref(), Some(Path::new("/missing")));
    }

    #[test]
    fn test_document_text_lossy() {
        let doc = Document::new("/bin", vec![b'o', b'k', 0xff]);

        assert_eq!(doc.text(), "ok\u{fffd}");
    }

    #[test]
    fn test_entry_kind_is_dir() {
        assert!(EntryKind::Directory.is_dir());
        assert!(!EntryKind::File.is_dir());
    }

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.path.as_deref().is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_storage_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound).with_source(io_err);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "file not found");
    }

    #[test]
    fn test_storage_error_io_kinds() {
        let cases = [
            (std::io::ErrorKind::NotFound, StorageErrorKind::NotFound),
            (
                std::io::ErrorKind::PermissionDenied,
                StorageErrorKind::PermissionDenied,
            ),
            (std::io::ErrorKind::IsADirectory, StorageErrorKind::IsDirectory),
            (std::io::ErrorKind::TimedOut, StorageErrorKind::Other),
        ];

        for (io_kind, expected) in cases {
            let err = StorageError::io(std::io::Error::new(io_kind, "boom"), None);
            assert_eq!(err.kind, expected);
        }
    }

    #[test]
    fn test_storage_error_display_simple() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_storage_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/foo/bar")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: /foo/bar)"
        );
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}
