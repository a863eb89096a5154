//! HTTP request handlers.
//!
//! One entry point, [`handle`], evaluates the steps of a request in order;
//! the first step producing a response wins.

pub(crate) mod auth;
pub(crate) mod normalize;
pub(crate) mod pages;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::state::AppState;

/// Characters escaped when a path is written into a `Location` header.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Handle any request.
pub(crate) async fn handle(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    uri: Uri,
) -> Response {
    let path = request_path(&uri);

    if let Some(token) = path.strip_prefix(auth::AUTH_PREFIX) {
        return auth::set_cookie(&state, jar, token);
    }
    if let Some(rejection) = auth::reject(&state, &jar) {
        return rejection;
    }
    if let Some(redirect) = normalize::redirect(&state, &path) {
        return redirect;
    }
    pages::serve(&state, &path)
}

/// Decoded logical path of a request URI.
fn request_path(uri: &Uri) -> String {
    percent_decode_str(uri.path())
        .decode_utf8_lossy()
        .into_owned()
}

/// `303 See Other` to a relative location.
pub(crate) fn see_other(location: &str) -> Response {
    let location = utf8_percent_encode(location, LOCATION).to_string();
    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
}

/// `200 OK` plain-text response.
pub(crate) fn plain_text(body: impl Into<String>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.into(),
    )
        .into_response()
}
