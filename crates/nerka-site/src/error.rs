//! Page pipeline errors.

use nerka_markup::MarkupError;

/// Error returned when a resolved document cannot be turned into a page.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SiteError {
    /// Assembled page could not be parsed for link checking.
    #[error(transparent)]
    Markup(#[from] MarkupError),
}
