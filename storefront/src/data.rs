//! Demo catalog fixture.

use shopnow_commerce::prelude::*;

/// The fixed demo catalog: four featured products.
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(
            1,
            "Premium Wireless Headphones",
            Money::from_cents(29_900),
            "/assets/product-1.jpg",
        ),
        Product::new(
            2,
            "Smart Watch Pro",
            Money::from_cents(44_900),
            "/assets/product-2.jpg",
        ),
        Product::new(
            3,
            "Designer Sunglasses",
            Money::from_cents(18_900),
            "/assets/product-3.jpg",
        ),
        Product::new(
            4,
            "Leather Backpack",
            Money::from_cents(15_900),
            "/assets/product-4.jpg",
        ),
    ])
}
