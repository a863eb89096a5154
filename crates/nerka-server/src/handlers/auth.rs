//! Access cookie handling.
//!
//! `/.auth/<token>` stores `<token>` in the access cookie. When the store
//! holds a `/.auth` secret, every other request must carry that cookie with
//! the secret as its value.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

use crate::handlers::{plain_text, see_other};
use crate::state::AppState;

/// Path prefix of the cookie-setting action.
pub(crate) const AUTH_PREFIX: &str = "/.auth/";

/// Logical path of the secret file.
const AUTH_FILE: &str = "/.auth";

/// Body sent when the access cookie is missing or wrong.
const REJECTION: &str = "no";

/// Lifetime of the access cookie (one year).
const COOKIE_MAX_AGE: Duration = Duration::seconds(31_536_000);

/// Set the access cookie to `token` and redirect to the parent path.
pub(crate) fn set_cookie(state: &AppState, jar: CookieJar, token: &str) -> Response {
    let cookie = Cookie::build((state.cookie_name.clone(), cookie_value(token)))
        .path("/")
        .secure(true)
        .http_only(true)
        .max_age(COOKIE_MAX_AGE);
    tracing::debug!(cookie = %state.cookie_name, "Setting access cookie");
    (jar.add(cookie), see_other("..")).into_response()
}

/// Check the access cookie against the stored secret.
///
/// Returns the rejection response if the request may not proceed. Without a
/// secret file every request passes; a secret file that exists but can't be
/// read rejects everything.
pub(crate) fn reject(state: &AppState, jar: &CookieJar) -> Option<Response> {
    let secret = match state.site.storage().read(AUTH_FILE) {
        Ok(document) => document,
        Err(err) if err.is_not_found() => return None,
        Err(err) => {
            tracing::warn!(error = %err, "Access secret unreadable");
            return Some(plain_text(REJECTION));
        }
    };

    let expected = secret.text();
    match jar.get(&state.cookie_name) {
        Some(cookie) if cookie.value() == expected.trim() => None,
        Some(_) => {
            tracing::warn!("Rejected request with wrong access cookie");
            Some(plain_text(REJECTION))
        }
        None => {
            tracing::warn!("Rejected request without access cookie");
            Some(plain_text(REJECTION))
        }
    }
}

/// Drop bytes that are not allowed in a cookie value.
fn cookie_value(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c.is_ascii_graphic() && !matches!(c, '"' | ',' | ';' | '\\'))
        .collect()
}
