//! Newtype product identifier.
//!
//! The newtype keeps raw integers from being passed where a product id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog-unique product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an id from a raw integer.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_from_integer() {
        let id: ProductId = 42.into();
        assert_eq!(id, ProductId::new(42));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(3)), "3");
    }
}
