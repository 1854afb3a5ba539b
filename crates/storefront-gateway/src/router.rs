//! Axum router wiring.
//!
//! Storefront routes share one instrumentation layer; `/healthz`, `/metrics`
//! and `/static` sit outside it.

use axum::{middleware, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    app_state::AppState,
    extract,
    handlers::{api, pages},
    obs, ops,
};

pub fn build_router(state: AppState) -> Router {
    let storefront = Router::new()
        .route("/", get(pages::home))
        .route("/product/:id", get(pages::product_detail))
        .route("/api/check_availability/:id", get(api::check_availability))
        .route("/api/products", get(api::products))
        .route("/api/podName", get(api::pod_name))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_request));

    let mut router = Router::new()
        .merge(storefront)
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(|| async { extract::route_not_found() });

    if let Some(dir) = state.static_dir() {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
