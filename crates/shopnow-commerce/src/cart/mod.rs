//! Shopping cart module.
//!
//! Contains the session cart store, its line items, change events, and the
//! derived totals summary.

mod store;
mod summary;

pub use store::{CartEvent, CartItem, CartStore};
pub use summary::CartSummary;
