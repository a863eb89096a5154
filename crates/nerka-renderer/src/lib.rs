//! Markdown to HTML fragment renderer.
//!
//! This crate provides [`MarkdownRenderer`], a pure function from raw document
//! bytes to an HTML fragment built on `pulldown-cmark`. Raw HTML in the source
//! is passed through unchanged, so pre-rendered `.html` documents come out as
//! they went in.
//!
//! # Example
//!
//! ```
//! use nerka_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render(b"# Hello\n\n**Bold** text");
//! assert!(html.contains("<h1>Hello</h1>"));
//! ```

mod renderer;

pub use renderer::MarkdownRenderer;
