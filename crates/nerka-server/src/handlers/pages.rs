//! Page serving.

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::handlers::plain_text;
use crate::state::AppState;

/// Resolve, render, and return the page for `request_path`.
///
/// Resolution and parse errors are returned as plain-text bodies with
/// status 200.
pub(crate) fn serve(state: &AppState, request_path: &str) -> Response {
    let document = match state.site.resolve(request_path) {
        Ok(document) => document,
        Err(err) => {
            tracing::debug!(path = request_path, error = %err, "Document not resolved");
            return plain_text(err.to_string());
        }
    };

    match state.site.render(request_path, &document) {
        Ok(page) => {
            tracing::debug!(path = request_path, source = %document.path, "Serving page");
            (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                page.html,
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(path = request_path, error = %err, "Page markup could not be parsed");
            plain_text(err.to_string())
        }
    }
}
