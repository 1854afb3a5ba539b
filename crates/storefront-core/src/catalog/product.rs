//! Product record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Serialized field order is `id, name, price, image, description, specs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Positive, unique within a catalog.
    pub id: i64,
    pub name: String,
    /// Non-negative unit price.
    pub price: f64,
    /// File name under the static `images/` directory. Not checked for existence.
    pub image: String,
    pub description: String,
    /// Attribute name -> value. Sorted by key on output.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
            specs: BTreeMap::new(),
        }
    }

    /// Builder-style insertion into `specs`.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }
}
