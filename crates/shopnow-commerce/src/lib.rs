//! Commerce domain types and logic for the ShopNow storefront.
//!
//! This crate is the core of the demo: everything in it is plain,
//! synchronous, in-memory state with no UI dependencies.
//!
//! - **Catalog**: the fixed set of purchasable products and its substring
//!   search query
//! - **Cart**: the session cart store with merge-on-add line items, clamped
//!   quantities, and derived totals
//!
//! # Example
//!
//! ```rust
//! use shopnow_commerce::prelude::*;
//!
//! let catalog = Catalog::new(vec![Product::new(
//!     1,
//!     "Smart Watch Pro",
//!     Money::from_cents(44_900),
//!     "/assets/product-2.jpg",
//! )]);
//!
//! let mut cart = CartStore::new();
//! for product in catalog.search("watch") {
//!     cart.add(product);
//! }
//!
//! let summary = cart.summary();
//! assert_eq!(summary.item_count, 1);
//! assert_eq!(summary.total.display(), "$449.00");
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;

pub use cart::{CartEvent, CartItem, CartStore, CartSummary};
pub use catalog::{Catalog, Product};
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartEvent, CartItem, CartStore, CartSummary};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
}
