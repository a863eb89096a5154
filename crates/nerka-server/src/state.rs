//! Application state.
//!
//! Shared state for all request handlers.

use nerka_site::Site;

/// Application state shared across all handlers.
///
/// Immutable after startup.
pub(crate) struct AppState {
    /// Page pipeline and its document store.
    pub(crate) site: Site,
    /// Name of the access cookie.
    pub(crate) cookie_name: String,
}
