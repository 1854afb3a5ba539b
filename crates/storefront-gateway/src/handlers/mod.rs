//! Storefront route handlers.
//!
//! - `pages`: HTML list and detail views
//! - `api`: JSON catalog API and instance identity

pub mod api;
pub mod pages;
