//! HTML node tree for nerka pages.
//!
//! This crate parses assembled page markup into an owned tree of typed
//! [`Node`]s, lets callers mutate it in place, and serializes it back:
//!
//! ```text
//! &str ──HtmlParser──► Node::Document ──(&mut walk)──► HtmlSerializer ──► String
//! ```
//!
//! Parsing is done by `html5ever` (via `scraper`), the HTML5 tree builder
//! browsers follow, and the result is copied into an owned tree so no node
//! is shared between owners.
//!
//! # Example
//!
//! ```
//! use nerka_markup::{HtmlParser, HtmlSerializer};
//!
//! let mut tree = HtmlParser::new().parse(r#"<p><a href="x">x</a></p>"#).unwrap();
//! tree.for_each_element_mut(&mut |element| {
//!     if element.tag == "a" {
//!         element.add_class("seen");
//!     }
//! });
//! let html = HtmlSerializer::new().serialize(&tree);
//! assert_eq!(
//!     html,
//!     r#"<html><head></head><body><p><a href="x" class="seen">x</a></p></body></html>"#
//! );
//! ```

mod error;
mod parser;
mod serializer;
mod tree;

pub use error::MarkupError;
pub use parser::{HtmlParser, MAX_DEPTH};
pub use serializer::HtmlSerializer;
pub use tree::{Attribute, Attributes, Element, Node};
