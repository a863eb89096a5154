//! Markup error types.

/// Error while building a tree from parsed markup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MarkupError {
    /// Elements are nested deeper than the tree supports.
    #[error("HTML nesting exceeds {limit} levels")]
    TooDeep {
        /// Maximum supported nesting depth.
        limit: usize,
    },
}
