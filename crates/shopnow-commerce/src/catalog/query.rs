//! Catalog container and search query.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The fixed set of purchasable products.
///
/// Construction fixes the product list for the life of the value; queries
/// borrow the catalog and are recomputed on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list. Order is preserved and becomes
    /// the result order of every search.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Search product names for a case-insensitive substring.
    ///
    /// An empty query matches every product. Result order is catalog order;
    /// there is no tokenization, fuzzy matching, or ranking. No matches
    /// yields an empty iterator; the caller owns the "no results"
    /// presentation.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn demo() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Premium Wireless Headphones", Money::from_cents(29_900), "p1"),
            Product::new(2, "Smart Watch Pro", Money::from_cents(44_900), "p2"),
            Product::new(3, "Designer Sunglasses", Money::from_cents(18_900), "p3"),
            Product::new(4, "Leather Backpack", Money::from_cents(15_900), "p4"),
        ])
    }

    #[test]
    fn test_empty_query_matches_all_in_catalog_order() {
        let catalog = demo();
        let names: Vec<&str> = catalog.search("").map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Premium Wireless Headphones",
                "Smart Watch Pro",
                "Designer Sunglasses",
                "Leather Backpack",
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = demo();
        let matched: Vec<&Product> = catalog.search("watch").collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Smart Watch Pro");

        let matched: Vec<&Product> = catalog.search("LEATHER").collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Leather Backpack");
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let catalog = demo();
        assert_eq!(catalog.search("zzz").count(), 0);
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = demo();
        // "s" hits several names; order must stay catalog order.
        let ids: Vec<u32> = catalog.search("s").map(|p| p.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = demo();
        assert_eq!(catalog.get(2.into()).map(|p| p.name.as_str()), Some("Smart Watch Pro"));
        assert!(catalog.get(99.into()).is_none());
    }
}
