//! Broken link detection.

use std::sync::Arc;

use nerka_markup::{Element, Node};
use nerka_storage::{Storage, path};

/// `href` prefixes of links that point outside the document tree.
pub const EXTERNAL_PREFIXES: &[&str] = &["https://", "//", "http://"];

/// Class token added to unresolvable links.
const BROKEN_CLASS: &str = "broken";

/// Marks `<a>` elements whose `href` resolves to nothing in the store.
///
/// A link target is joined onto the request path and looked up twice with
/// extension fallback: once as a document, once as a directory index
/// (`{target}/index`). It is broken only if both lookups fail. Links with an
/// external prefix and anchors without `href` are never checked.
pub struct LinkAnnotator {
    storage: Arc<dyn Storage>,
}

impl LinkAnnotator {
    /// Create an annotator resolving targets against `storage`.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Walk the whole tree and add the `broken` class to unresolvable links.
    ///
    /// Returns the number of links marked.
    pub fn annotate(&self, tree: &mut Node, request_path: &str) -> usize {
        let mut broken = 0;
        tree.for_each_element_mut(&mut |element| {
            if self.is_broken(element, request_path) {
                element.add_class(BROKEN_CLASS);
                broken += 1;
            }
        });
        broken
    }

    fn is_broken(&self, element: &Element, request_path: &str) -> bool {
        if element.tag != "a" {
            return false;
        }
        let Some(href) = element.attr("href") else {
            return false;
        };
        if is_external(href) {
            return false;
        }

        let target = path::join(request_path, href);
        if self.storage.read_ext(&target).is_ok() {
            return false;
        }
        let index = path::join(&target, "index");
        if self.storage.read_ext(&index).is_ok() {
            return false;
        }

        tracing::debug!(request_path, href, %target, "Broken link");
        true
    }
}

fn is_external(href: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}
