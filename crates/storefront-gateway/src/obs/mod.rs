//! Request instrumentation.
//!
//! `metrics` holds the prometheus-backed registry; `track` is the axum
//! middleware that wraps every instrumented route in a timing scope.

pub mod metrics;
pub mod track;

pub use metrics::{RequestScope, StoreMetrics, EXPOSITION_CONTENT_TYPE};
pub use track::track_request;
