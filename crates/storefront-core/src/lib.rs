//! Storefront core: the product model, the read-only catalog, and the shared
//! error surface.
//!
//! This crate carries no HTTP or runtime dependencies. The gateway crate owns
//! routing, rendering and metrics, and consumes the types defined here.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Invalid catalog data surfaces as `StorefrontError` at construction time.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod availability;
pub mod catalog;
pub mod error;

pub use availability::is_available;
pub use catalog::{Catalog, Product};
/// Shared result type.
pub use error::{Result, StorefrontError};
