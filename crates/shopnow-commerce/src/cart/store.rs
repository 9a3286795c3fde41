//! Session cart store.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A line in the cart: one product id's presence and quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product id; unique across the cart's lines.
    pub id: ProductId,
    /// Product name (copied for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Display asset reference.
    pub image: String,
    /// Always >= 1. Removal is a distinct operation, never a quantity of
    /// zero.
    pub quantity: i64,
}

impl CartItem {
    fn first_of(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (price x quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// Acknowledgment emitted by an applied cart mutation.
///
/// Returned to the caller and passed to every subscribed observer. Ignored
/// operations (unknown ids) emit nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, either as a new line or as an increment of an
    /// existing one.
    Added { id: ProductId, name: String },
    /// A line's quantity was set (already clamped).
    QuantitySet { id: ProductId, quantity: i64 },
    /// A line was removed.
    Removed { id: ProductId, name: String },
}

type Observer = Box<dyn FnMut(&CartEvent)>;

/// The session shopping cart.
///
/// One instance per active session, created at session start and discarded
/// at session end; there is no persistence, so a restart yields an empty
/// cart. Mutations cannot fail: out-of-range quantities are clamped and
/// unknown ids are ignored.
#[derive(Default)]
pub struct CartStore {
    lines: Vec<CartItem>,
    observers: Vec<Observer>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change observer.
    ///
    /// Observers are invoked after every applied mutation with the resulting
    /// event, and live as long as the store.
    pub fn subscribe(&mut self, observer: impl FnMut(&CartEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of `product`.
    ///
    /// First add of an id appends a line with quantity 1; adding an id that
    /// is already present increments its quantity in place, keeping the
    /// line's position.
    pub fn add(&mut self, product: &Product) -> CartEvent {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartItem::first_of(product));
        }
        tracing::debug!(id = %product.id, name = %product.name, "product added to cart");
        let event = CartEvent::Added {
            id: product.id,
            name: product.name.clone(),
        };
        self.notify(&event);
        event
    }

    /// Set a present line's quantity, clamped to at least 1.
    ///
    /// Ignored when `id` is not in the cart; returns whether the update was
    /// applied.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let clamped = quantity.max(1);
        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        line.quantity = clamped;
        tracing::debug!(id = %id, quantity = clamped, "cart quantity set");
        self.notify(&CartEvent::QuantitySet {
            id,
            quantity: clamped,
        });
        true
    }

    /// Remove a line. Returns `None` when `id` is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> Option<CartEvent> {
        let index = self.lines.iter().position(|l| l.id == id)?;
        let line = self.lines.remove(index);
        tracing::debug!(id = %id, name = %line.name, "line removed from cart");
        let event = CartEvent::Removed {
            id,
            name: line.name,
        };
        self.notify(&event);
        Some(event)
    }

    /// Current lines, in insertion order of first add.
    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    /// Look up a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Derived totals, recomputed from the current lines.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total: self.lines.iter().map(CartItem::line_total).sum(),
        }
    }

    fn notify(&mut self, event: &CartEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("observers", &self.observers.len())
            .finish()
    }
}
