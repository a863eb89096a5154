//! Trailing slash normalization.

use axum::response::Response;
use nerka_storage::path;

use crate::handlers::see_other;
use crate::state::AppState;

/// Redirect requests whose trailing slash doesn't match the entry kind.
///
/// - directory without trailing slash: `/docs` → `docs/`
/// - file with trailing slash: `/page/` → `../page`
///
/// Locations are relative to the request path. Paths that don't exist in
/// the store are left to the page handler.
pub(crate) fn redirect(state: &AppState, request_path: &str) -> Option<Response> {
    let is_dir = state.site.storage().stat(request_path).ok()?.is_dir();
    let trailing_slash = path::has_trailing_slash(request_path);
    let name = path::base_name(request_path);

    let location = match (is_dir, trailing_slash) {
        (true, false) => format!("{name}/"),
        (false, true) => format!("../{name}"),
        (true, true) | (false, false) => return None,
    };
    tracing::debug!(path = request_path, %location, "Normalizing trailing slash");
    Some(see_other(&location))
}
