//! Read-only product catalog.
//!
//! A `Catalog` is built once at startup and never mutated afterwards; the
//! gateway shares it behind an `Arc` so concurrent readers need no locking.

mod product;
mod seed;

use std::collections::HashSet;

use crate::error::{Result, StorefrontError};

pub use product::Product;
pub use seed::demo_products;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting non-positive or duplicate ids and invalid prices.
    /// Input order is preserved.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if p.id <= 0 {
                return Err(StorefrontError::InvalidProduct {
                    id: p.id,
                    reason: "id must be positive".into(),
                });
            }
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(StorefrontError::InvalidProduct {
                    id: p.id,
                    reason: format!("price must be a non-negative number, got {}", p.price),
                });
            }
            if !seen.insert(p.id) {
                return Err(StorefrontError::DuplicateProductId(p.id));
            }
        }

        tracing::debug!(count = products.len(), "catalog built");
        Ok(Self { products })
    }

    /// The built-in five-product demo catalog.
    pub fn demo() -> Self {
        Self { products: demo_products() }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
