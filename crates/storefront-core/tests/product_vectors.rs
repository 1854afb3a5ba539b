//! Product JSON vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use storefront_core::{catalog::demo_products, Catalog, Product};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_product_min() {
    let p: Product = serde_json::from_str(&load("product_min.json")).unwrap();
    assert_eq!(p.id, 10);
    assert_eq!(p.name, "Cable");
    assert!(p.specs.is_empty());
}

#[test]
fn demo_smartphone_matches_vector() {
    let expected: serde_json::Value = serde_json::from_str(&load("product_full.json")).unwrap();
    let catalog = Catalog::demo();
    let phone = catalog.get(2).unwrap();
    assert_eq!(serde_json::to_value(phone).unwrap(), expected);
}

#[test]
fn unknown_field_is_rejected() {
    let err = serde_json::from_str::<Product>(&load("product_unknown_field.json"))
        .expect_err("must fail");
    assert!(err.to_string().contains("stock"));
}

#[test]
fn serialized_field_order_is_stable() {
    let s = serde_json::to_string(&demo_products()[0]).unwrap();
    let id = s.find("\"id\"").unwrap();
    let name = s.find("\"name\"").unwrap();
    let price = s.find("\"price\"").unwrap();
    let image = s.find("\"image\"").unwrap();
    let description = s.find("\"description\"").unwrap();
    let specs = s.find("\"specs\"").unwrap();
    assert!(id < name && name < price && price < image && image < description && description < specs);
}
