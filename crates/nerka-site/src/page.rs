//! Page assembly.

use std::sync::Arc;

use nerka_storage::Storage;

/// Logical path of the shared page header (resolved with extension fallback).
pub const HEADER_PATH: &str = "/.header";

/// Builds the raw page from the shared header, a title, and the rendered body.
///
/// The output is `header ++ title ++ body`:
///
/// - the header is `/.header` (`.md`, `.html`, or bare) copied verbatim, or
///   nothing if it can't be read;
/// - the title is `<title>{site}!</title>\n` for the root page and
///   `<title>{site}: {path}</title>\n` otherwise, with the leading slash
///   dropped from the path.
///
/// The request path is inserted into the title as-is.
pub struct PageAssembler {
    storage: Arc<dyn Storage>,
    site_title: String,
}

impl PageAssembler {
    /// Create an assembler reading the header from `storage`.
    pub fn new(storage: Arc<dyn Storage>, site_title: impl Into<String>) -> Self {
        Self {
            storage,
            site_title: site_title.into(),
        }
    }

    /// Assemble a page for `request_path` around a rendered body fragment.
    pub fn assemble(&self, request_path: &str, body: &str) -> Vec<u8> {
        let title = self.title(request_path);
        let mut page = match self.storage.read_ext(HEADER_PATH) {
            Ok(header) => header.content,
            Err(err) => {
                tracing::trace!(error = %err, "No page header");
                Vec::new()
            }
        };
        page.reserve(title.len() + body.len());
        page.extend_from_slice(title.as_bytes());
        page.extend_from_slice(body.as_bytes());
        page
    }

    fn title(&self, request_path: &str) -> String {
        if request_path == "/" {
            format!("<title>{}!</title>\n", self.site_title)
        } else {
            let name = request_path.strip_prefix('/').unwrap_or(request_path);
            format!("<title>{}: {name}</title>\n", self.site_title)
        }
    }
}
