use axum::{extract::State, Json};
use serde::Serialize;
use storefront_core::{is_available, Product};

use crate::app_state::AppState;
use crate::extract::ProductId;

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub product_id: i64,
    pub available: bool,
    pub instance_id: String,
}

/// `GET /api/check_availability/:id`
///
/// Never 404s for an integer id; missing products are `available: false`.
pub async fn check_availability(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Json<AvailabilityResponse> {
    tracing::info!(product_id = id, "checking availability");
    Json(AvailabilityResponse {
        product_id: id,
        available: is_available(state.catalog(), id),
        instance_id: state.instance_id().to_string(),
    })
}

/// `GET /api/products`
pub async fn products(State(state): State<AppState>) -> Json<Vec<Product>> {
    tracing::info!("accessing products api");
    Json(state.catalog().products().to_vec())
}

/// `GET /api/podName`
pub async fn pod_name(State(state): State<AppState>) -> String {
    tracing::info!("accessing pod name");
    state.instance_id().to_string()
}
