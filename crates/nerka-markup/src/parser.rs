//! HTML parser.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use scraper::node::Node as HtmlNode;
use scraper::{ElementRef, Html};

use crate::error::MarkupError;
use crate::tree::{Element, Node};

/// Maximum element nesting depth accepted by [`HtmlParser::parse`].
///
/// Tree walks and serialization recurse once per level.
pub const MAX_DEPTH: usize = 512;

/// Parse HTML into an owned [`Node`] tree.
///
/// Input is parsed as a complete HTML document by `html5ever` (through
/// `scraper`), so it gets the same treatment as in a browser:
///
/// - the tree always has `<html>`, `<head>` and `<body>`; leading `<title>`,
///   `<meta>` and `<link>` elements land in `<head>`;
/// - `script`, `style`, `title` and `textarea` content is raw text;
/// - a `&` that doesn't start a character reference is kept literally;
/// - unterminated comments and unclosed elements are closed at end of input;
/// - for duplicated attributes the first occurrence wins.
///
/// Text and attribute values are stored decoded.
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::TooDeep`] if elements nest deeper than
    /// [`MAX_DEPTH`].
    pub fn parse(&self, html: &str) -> Result<Node, MarkupError> {
        let document = Html::parse_document(html);

        let mut children = Vec::new();
        for child in document.tree.root().children() {
            match ElementRef::wrap(child) {
                Some(element) => children.push(convert_element(element, 1)?.into()),
                None => children.extend(convert_leaf(child.value())),
            }
        }
        Ok(Node::Document(children))
    }
}

fn convert_element(element: ElementRef<'_>, depth: usize) -> Result<Element, MarkupError> {
    if depth > MAX_DEPTH {
        return Err(MarkupError::TooDeep { limit: MAX_DEPTH });
    }

    let source = element.value();
    let mut converted = Element::new(source.name());
    for (key, value) in source.attrs() {
        converted.attrs.insert_if_absent(key, value);
    }

    for child in element.children() {
        match ElementRef::wrap(child) {
            Some(nested) => converted
                .children
                .push(convert_element(nested, depth + 1)?.into()),
            None => converted.children.extend(convert_leaf(child.value())),
        }
    }
    Ok(converted)
}

/// Convert a non-element node. Processing instructions are dropped.
fn convert_leaf(node: &HtmlNode) -> Option<Node> {
    match node {
        HtmlNode::Text(text) => Some(Node::Text(String::from(&**text))),
        HtmlNode::Comment(comment) => Some(Node::Comment(String::from(&**comment))),
        HtmlNode::Doctype(doctype) => Some(Node::Doctype(doctype_text(
            doctype.name(),
            doctype.public_id(),
            doctype.system_id(),
        ))),
        _ => None,
    }
}

/// Doctype content as written after `<!DOCTYPE `.
fn doctype_text(name: &str, public_id: &str, system_id: &str) -> String {
    let mut text = name.to_owned();
    if !public_id.is_empty() {
        text.push_str(&format!(" PUBLIC \"{public_id}\""));
        if !system_id.is_empty() {
            text.push_str(&format!(" \"{system_id}\""));
        }
    } else if !system_id.is_empty() {
        text.push_str(&format!(" SYSTEM \"{system_id}\""));
    }
    text
}
