//! Weak `ETag` middleware.
//!
//! Buffers each `200 OK` body, tags it with a weak validator derived from
//! its length and MD5, and answers a matching `If-None-Match` with
//! `304 Not Modified`.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

/// Tag successful responses and short-circuit conditional requests.
pub(crate) async fn etag(request: Request, next: Next) -> Response {
    let if_none_match = request.headers().get(header::IF_NONE_MATCH).cloned();
    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let etag = compute_etag(&bytes);
    let Ok(value) = HeaderValue::from_str(&etag) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    if if_none_match.as_ref().is_some_and(|header| matches(header, &etag)) {
        let mut headers = HeaderMap::new();
        headers.insert(header::ETAG, value);
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }

    parts.headers.insert(header::ETAG, value);
    Response::from_parts(parts, Body::from(bytes))
}

/// Compute a weak `ETag` for a response body.
///
/// Format is `W/"{len:x}-{md5}"` with the MD5 truncated to 64 bits
/// (16 hex chars).
fn compute_etag(body: &Bytes) -> String {
    let hash = Md5::digest(body);
    format!("W/\"{:x}-{}\"", body.len(), &hex::encode(hash)[..16])
}

/// Weak comparison of an `If-None-Match` header against an `ETag`.
///
/// Accepts `*` and comma-separated lists; the `W/` prefix is ignored on
/// both sides.
fn matches(if_none_match: &HeaderValue, etag: &str) -> bool {
    let Ok(value) = if_none_match.to_str() else {
        return false;
    };
    let etag = opaque_tag(etag);
    value
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || opaque_tag(candidate) == etag)
}

fn opaque_tag(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}
