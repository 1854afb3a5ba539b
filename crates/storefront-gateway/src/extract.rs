//! Typed path parameters.
//!
//! A product id segment that does not parse as an integer is treated as an
//! unmatched route: plain 404, handler never runs, request not instrumented.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

/// Response extension marking a request the router did not match.
#[derive(Debug, Clone, Copy)]
pub struct RouteMismatch;

/// Generic not-found response for unmatched routes.
pub fn route_not_found() -> Response {
    let mut res = (StatusCode::NOT_FOUND, "Not Found").into_response();
    res.extensions_mut().insert(RouteMismatch);
    res
}

/// Integer `:id` path segment: an optional `-` followed by ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segment = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => segment,
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), %rejection, "missing product id");
                return Err(route_not_found());
            }
        };

        parse_id(&segment).map(Self).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "non-integer product id");
            route_not_found()
        })
    }
}

/// `i64::from_str` also accepts a leading `+`; ids must not.
fn parse_id(segment: &str) -> Option<i64> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
