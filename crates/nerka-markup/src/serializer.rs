//! HTML serializer.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use crate::tree::{Element, Node};

/// Elements whose text content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

/// Elements whose first newline is dropped by the parser.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["listing", "pre", "textarea"];

/// Serialize a [`Node`] tree back to HTML.
///
/// Void elements are written without an end tag (`<br>`), every other
/// element gets an explicit end tag even when empty. Attribute values are
/// always double-quoted.
#[derive(Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    /// Create a new serializer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serialize a tree to an HTML string.
    pub fn serialize(&self, node: &Node) -> String {
        let mut out = String::with_capacity(4096);
        serialize_node(node, false, &mut out);
        out
    }
}

fn serialize_node(node: &Node, raw_text: bool, out: &mut String) {
    match node {
        Node::Document(children) => {
            for child in children {
                serialize_node(child, false, out);
            }
        }
        Node::Element(element) => serialize_element(element, out),
        Node::Text(text) if raw_text => out.push_str(text),
        Node::Text(text) => escape_text_into(text, out),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push('>');
        }
    }
}

fn serialize_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for attr in element.attrs.iter() {
        out.push(' ');
        out.push_str(&attr.key);
        out.push_str("=\"");
        escape_attr_into(&attr.value, out);
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }

    if LEADING_NEWLINE_ELEMENTS.contains(&element.tag.as_str())
        && matches!(element.children.first(), Some(Node::Text(text)) if text.starts_with('\n'))
    {
        out.push('\n');
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.tag.as_str());
    for child in &element.children {
        serialize_node(child, raw_text, out);
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_text_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
