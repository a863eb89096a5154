//! Owned HTML node tree.

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check whether a (lowercase) tag name is an HTML void element.
fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Root of a parsed document; holds the top-level nodes.
    Document(Vec<Node>),
    /// Element with tag, attributes, and children.
    Element(Element),
    /// Decoded character data.
    Text(String),
    /// Comment content (without `<!--` and `-->`).
    Comment(String),
    /// Doctype content (e.g. `html`).
    Doctype(String),
}

impl Node {
    /// Mutable child nodes, if this node can have any.
    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Document(children) => Some(children),
            Self::Element(element) => Some(&mut element.children),
            Self::Text(_) | Self::Comment(_) | Self::Doctype(_) => None,
        }
    }

    /// Visit every element depth-first, parents before children.
    ///
    /// The callback may mutate the element; traversal then continues into
    /// the element's (possibly updated) children.
    pub fn for_each_element_mut<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
        if let Self::Element(element) = self {
            f(element);
        }
        if let Some(children) = self.children_mut() {
            for child in children {
                child.for_each_element_mut(f);
            }
        }
    }
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in source order.
    pub attrs: Attributes,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Append a token to the `class` attribute.
    ///
    /// Existing tokens are kept; a missing `class` attribute is created.
    pub fn add_class(&mut self, token: &str) {
        match self.attrs.get_mut("class") {
            Some(class) if class.is_empty() => class.push_str(token),
            Some(class) => {
                class.push(' ');
                class.push_str(token);
            }
            None => self.attrs.set("class", token),
        }
    }

    /// Whether this element is a void element.
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }
}

#[cfg(test)]
impl Element {
    /// Builder method to set an attribute.
    #[must_use]
    pub(crate) fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Builder method to set children.
    #[must_use]
    pub(crate) fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercase attribute name.
    pub key: String,
    /// Decoded attribute value.
    pub value: String,
}

/// Ordered attribute set with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Get a mutable value for a key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.0
            .iter_mut()
            .find(|attr| attr.key == key)
            .map(|attr| &mut attr.value)
    }

    /// Set a value, replacing an existing key in place or appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(existing) => *existing = value,
            None => self.0.push(Attribute { key, value }),
        }
    }

    /// Insert a key only if it is not present yet.
    ///
    /// Returns `false` if the key already existed. Matches HTML parsing,
    /// where the first occurrence of a duplicated attribute wins.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.0.push(Attribute {
            key,
            value: value.into(),
        });
        true
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|attr| attr.key == key)
    }

    /// Iterate attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }
}
