//! Instrumentation middleware for storefront routes.
//!
//! Wraps each request in a [`RequestScope`](super::RequestScope) so the
//! counter and latency histogram are updated on every exit path.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::extract::RouteMismatch;

/// Count and time one request around the inner handler.
///
/// Responses tagged with [`RouteMismatch`], and 405s from the method router,
/// never reached a handler and are dropped from both instruments.
pub async fn track_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let scope = state.metrics().start_request();

    let response = next.run(req).await;

    if response.extensions().get::<RouteMismatch>().is_some()
        || response.status() == StatusCode::METHOD_NOT_ALLOWED
    {
        scope.discard();
    }
    response
}
