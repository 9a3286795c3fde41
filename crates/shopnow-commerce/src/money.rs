//! Money type for representing monetary values.
//!
//! Amounts are stored in cents so cart arithmetic stays exact; rounding to
//! two decimals happens only at display time. No currency code is modeled
//! (single implicit currency).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create an amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create an amount from a decimal value.
    ///
    /// ```
    /// use shopnow_commerce::Money;
    /// assert_eq!(Money::from_decimal(449.0), Money::from_cents(44_900));
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub const fn is_zero(self) -> bool {
        self.cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a scalar, saturating at the representable range.
    pub const fn multiply(self, factor: i64) -> Self {
        Self {
            cents: self.cents.saturating_mul(factor),
        }
    }

    /// Format for display with two decimals (e.g. "$449.00").
    pub fn display(self) -> String {
        format!("${:.2}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
