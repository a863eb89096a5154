//! Router construction.
//!
//! Builds the axum router and its middleware stack.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::etag;
use crate::state::AppState;

/// Create the application router.
///
/// Every method and path is routed to the single page handler. Layers, from
/// outermost: request tracing, panic guard (500 instead of a dropped
/// connection), `ETag`.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::handle)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new())
                .layer(axum::middleware::from_fn(etag::etag)),
        )
        .with_state(state)
}
