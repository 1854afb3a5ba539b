//! HTTP-facing error for handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_core::error::{ClientCode, StorefrontError};
use thiserror::Error;

use crate::render::RenderError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] StorefrontError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("metrics encoding failed: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    pub fn client_code(&self) -> &'static str {
        match self {
            ApiError::Core(e) => e.client_code().as_str(),
            ApiError::Render(_) | ApiError::Metrics(_) => ClientCode::Internal.as_str(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(StorefrontError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = Json(json!({
            "error": self.client_code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
