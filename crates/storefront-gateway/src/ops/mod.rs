//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness / readiness, always `OK`
//! - `/metrics` : Prometheus text format
//!
//! Neither route is instrumented.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::obs::EXPOSITION_CONTENT_TYPE;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let body = state.metrics().render()?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
