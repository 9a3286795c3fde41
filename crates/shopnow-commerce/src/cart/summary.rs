//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart's derived totals.
///
/// Both fields are pure functions of the current lines and are recomputed on
/// every read; there is no cached aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartSummary {
    /// Sum of quantities across all lines (the cart badge number).
    pub item_count: i64,
    /// Sum of price x quantity across all lines.
    pub total: Money,
}
