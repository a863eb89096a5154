//! Request path resolution and the page pipeline.

use std::sync::Arc;

use nerka_markup::{HtmlParser, HtmlSerializer};
use nerka_renderer::MarkdownRenderer;
use nerka_storage::{Document, Storage, StorageError, path};

use crate::error::SiteError;
use crate::links::LinkAnnotator;
use crate::page::PageAssembler;

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site name used in page titles.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "nerka".to_owned(),
        }
    }
}

/// Result of rendering a page.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Serialized page HTML.
    pub html: String,
    /// Number of links marked as broken.
    pub broken_links: usize,
}

/// Document tree served as pages.
///
/// Holds no per-request state; one `Site` is shared by all handlers.
pub struct Site {
    storage: Arc<dyn Storage>,
    renderer: MarkdownRenderer,
    assembler: PageAssembler,
    annotator: LinkAnnotator,
}

impl Site {
    /// Create a new site over `storage`.
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self {
            assembler: PageAssembler::new(Arc::clone(&storage), config.title),
            annotator: LinkAnnotator::new(Arc::clone(&storage)),
            renderer: MarkdownRenderer::new(),
            storage,
        }
    }

    /// Get the underlying storage.
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Find the source document for a request path.
    ///
    /// Paths ending in `/` resolve to the directory's `index` document,
    /// everything else to the named document. Both use extension fallback.
    ///
    /// # Errors
    ///
    /// Returns the exact-match [`StorageError`] when no candidate exists.
    pub fn resolve(&self, request_path: &str) -> Result<Document, StorageError> {
        if path::has_trailing_slash(request_path) {
            self.storage.read_ext(&path::join(request_path, "index"))
        } else {
            self.storage.read_ext(request_path)
        }
    }

    /// Render a resolved document as the page for `request_path`.
    ///
    /// Renders the document to HTML, wraps it with header and title, and
    /// marks broken links.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Markup`] if the assembled page nests deeper
    /// than the parser allows.
    pub fn render(&self, request_path: &str, document: &Document) -> Result<RenderedPage, SiteError> {
        let body = self.renderer.render(&document.content);
        let raw = self.assembler.assemble(request_path, &body);

        let mut tree = HtmlParser::new().parse(&String::from_utf8_lossy(&raw))?;
        let broken_links = self.annotator.annotate(&mut tree, request_path);
        if broken_links > 0 {
            tracing::info!(path = request_path, broken_links, "Found broken links");
        }

        Ok(RenderedPage {
            html: HtmlSerializer::new().serialize(&tree),
            broken_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use nerka_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn site(storage: MockStorage) -> Site {
        Site::new(Arc::new(storage), SiteConfig::default())
    }

    #[test]
    fn test_site_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Site>();
    }

    #[test]
    fn test_resolve_prefers_markdown() {
        let site = site(
            MockStorage::new()
                .with_file("/guide.md", "md")
                .with_file("/guide.html", "html")
                .with_file("/guide", "bare"),
        );

        let document = site.resolve("/guide").unwrap();

        assert_eq!(document.path, "/guide.md");
        assert_eq!(document.content, b"md");
    }

    #[test]
    fn test_resolve_html_then_exact() {
        let site = site(
            MockStorage::new()
                .with_file("/about.html", "html")
                .with_file("/notes.txt", "plain"),
        );

        assert_eq!(site.resolve("/about").unwrap().content, b"html");
        assert_eq!(site.resolve("/notes.txt").unwrap().content, b"plain");
    }

    #[test]
    fn test_resolve_trailing_slash_uses_index() {
        let site = site(MockStorage::new().with_file("/domain/index.md", "# Domain"));

        let document = site.resolve("/domain/").unwrap();

        assert_eq!(document.path, "/domain/index.md");
    }

    #[test]
    fn test_resolve_root_index() {
        let site = site(MockStorage::new().with_file("/index.html", "<p>home</p>"));

        assert_eq!(site.resolve("/").unwrap().path, "/index.html");
    }

    #[test]
    fn test_resolve_missing_returns_exact_error() {
        let site = site(MockStorage::new());

        let err = site.resolve("/missing").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.to_string(), "[Mock] Not found (path: /missing)");
    }

    #[test]
    fn test_render_full_page() {
        let storage = MockStorage::new()
            .with_file("/.header.html", "<meta charset=\"utf-8\">\n")
            .with_file("/guide.md", "# Guide\n\nSee [intro](intro) and [gone](gone).\n")
            .with_file("/guide/intro.md", "# Intro");
        let site = site(storage);
        let document = site.resolve("/guide").unwrap();

        let page = site.render("/guide", &document).unwrap();

        assert_eq!(
            page.html,
            concat!(
                "<html><head><meta charset=\"utf-8\">\n",
                "<title>nerka: guide</title>\n",
                "</head><body><h1>Guide</h1>\n",
                "<p>See <a href=\"intro\">intro</a> and <a href=\"gone\" class=\"broken\">gone</a>.</p>\n",
                "</body></html>",
            )
        );
        assert_eq!(page.broken_links, 1);
    }

    #[test]
    fn test_render_root_title() {
        let site = site(MockStorage::new().with_file("/index.md", "hello"));
        let document = site.resolve("/").unwrap();

        let page = site.render("/", &document).unwrap();

        assert_eq!(
            page.html,
            "<html><head><title>nerka!</title>\n</head><body><p>hello</p>\n</body></html>"
        );
        assert_eq!(page.broken_links, 0);
    }

    #[test]
    fn test_render_custom_title() {
        let config = SiteConfig {
            title: "Handbook".to_owned(),
        };
        let site = Site::new(Arc::new(MockStorage::new()), config);

        let page = site.render("/", &Document::new("/index.md", "x")).unwrap();

        assert!(page.html.contains("<title>Handbook!</title>\n"));
    }

    #[test]
    fn test_render_ampersand_in_title() {
        let site = site(MockStorage::new().with_file("/Q&A.md", "answers"));
        let document = site.resolve("/Q&A").unwrap();

        let page = site.render("/Q&A", &document).unwrap();

        assert_eq!(
            page.html,
            "<html><head><title>nerka: Q&amp;A</title>\n</head><body><p>answers</p>\n</body></html>"
        );
    }

    #[test]
    fn test_render_header_script_kept_verbatim() {
        let storage = MockStorage::new()
            .with_file("/.header", "<script>if (a < b && c) { go(\"</p>\"); }</script>\n")
            .with_file("/index.md", "hello");
        let site = site(storage);
        let document = site.resolve("/").unwrap();

        let page = site.render("/", &document).unwrap();

        assert_eq!(
            page.html,
            concat!(
                "<html><head><script>if (a < b && c) { go(\"</p>\"); }</script>\n",
                "<title>nerka!</title>\n",
                "</head><body><p>hello</p>\n</body></html>",
            )
        );
    }

    #[test]
    fn test_render_html_document_with_bare_ampersand() {
        let site = site(MockStorage::new().with_file("/faq.html", "<p>Tom & Jerry</p>\n"));
        let document = site.resolve("/faq").unwrap();

        let page = site.render("/faq", &document).unwrap();

        assert!(page.html.contains("<body><p>Tom &amp; Jerry</p>\n</body>"));
    }

    #[test]
    fn test_render_unterminated_comment_closed_at_end() {
        let site = site(MockStorage::new());
        let document = Document::new("/notes.html", "<p>kept</p>\n<!-- draft");

        let page = site.render("/notes", &document).unwrap();

        assert!(page.html.contains("<body><p>kept</p>\n<!-- draft"));
        assert!(page.html.ends_with("--></body></html>"));
    }

    #[test]
    fn test_render_external_links_untouched() {
        let site = site(MockStorage::new());
        let document = Document::new("/links.md", "[a](https://example.com) [b](//example.com/x)");

        let page = site.render("/links", &document).unwrap();

        assert!(!page.html.contains("broken"));
        assert_eq!(page.broken_links, 0);
    }

    #[test]
    fn test_render_html_document_passes_through() {
        let site = site(MockStorage::new().with_file("/other.md", "x"));
        let document = Document::new("/page.html", "<div class=\"note\"><a href=\"other\">o</a></div>\n");

        let page = site.render("/", &document).unwrap();

        assert_eq!(
            page.html,
            concat!(
                "<html><head><title>nerka!</title>\n</head>",
                "<body><div class=\"note\"><a href=\"other\">o</a></div>\n</body></html>",
            )
        );
    }

    #[test]
    fn test_render_markup_error() {
        let site = site(MockStorage::new());
        let nested = "<div>".repeat(nerka_markup::MAX_DEPTH);

        let result = site.render("/", &Document::new("/deep.html", nested));

        assert!(matches!(result, Err(SiteError::Markup(_))));
    }
}
