//! Markdown renderer configuration and rendering.

use pulldown_cmark::{Options, Parser, html};

/// Markdown renderer producing HTML fragments.
///
/// GitHub Flavored Markdown (tables, strikethrough, task lists, footnotes) is
/// always on, as are heading attributes (`# Title {#id .class}`) and
/// definition lists. The renderer holds no state and can be shared freely.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_HEADING_ATTRIBUTES
                | Options::ENABLE_DEFINITION_LIST
                | Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_GFM,
        }
    }

    /// Render raw document bytes to an HTML fragment.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    #[must_use]
    pub fn render(&self, source: &[u8]) -> String {
        let markdown = String::from_utf8_lossy(source);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, Parser::new_ext(&markdown, self.options));
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
