//! Storefront gateway library entry.
//!
//! This crate wires the catalog from `storefront-core` into an axum router:
//! HTML pages, the JSON API, request metrics, and the ops endpoints. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod instance;
pub mod obs;
pub mod ops;
pub mod render;
pub mod router;
