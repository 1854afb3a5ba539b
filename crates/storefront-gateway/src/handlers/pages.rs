use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use storefront_core::is_available;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::extract::ProductId;
use crate::render::{INDEX_TEMPLATE, PRODUCT_TEMPLATE};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// `GET /`
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    tracing::info!("accessing home page");
    let ctx = json!({ "products": state.catalog().products() });
    Ok(Html(state.renderer().render(INDEX_TEMPLATE, &ctx)?))
}

/// `GET /product/:id`
///
/// Unknown ids get a plain-text 404; the availability API reports them as
/// `available: false` instead.
pub async fn product_detail(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> ApiResult<Response> {
    tracing::info!(product_id = id, "accessing product");

    let Some(product) = state.catalog().get(id) else {
        return Ok((StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND).into_response());
    };

    let ctx = json!({
        "product": product,
        "is_available": is_available(state.catalog(), id),
    });
    let html = state.renderer().render(PRODUCT_TEMPLATE, &ctx)?;
    Ok(Html(html).into_response())
}
