//! Availability check.

use crate::catalog::Catalog;

/// `true` iff `catalog` holds a product with this id.
///
/// Any integer is accepted; ids that cannot exist (zero, negative, huge)
/// simply report `false`.
pub fn is_available(catalog: &Catalog, product_id: i64) -> bool {
    catalog.contains(product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_demo_id_is_available() {
        let c = Catalog::demo();
        for id in 1..=5 {
            assert!(is_available(&c, id), "id {id}");
        }
    }

    #[test]
    fn absent_and_absurd_ids_are_unavailable() {
        let c = Catalog::demo();
        for id in [0, 6, 42, 999, -1, i64::MIN, i64::MAX] {
            assert!(!is_available(&c, id), "id {id}");
        }
    }
}
