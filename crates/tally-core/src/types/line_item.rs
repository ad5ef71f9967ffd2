//! Bill-of-materials line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient or packaging row: a unit price and the quantity used.
///
/// # Example
///
/// ```rust
/// use tally_core::types::LineItem;
/// use rust_decimal_macros::dec;
///
/// let box_ = LineItem::new(dec!(0.35), dec!(2));
/// assert_eq!(box_.total(), dec!(0.70));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Price per unit.
    #[serde(alias = "unitPrice")]
    pub unit_price: Decimal,
    /// Units consumed.
    pub quantity: Decimal,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub fn new(unit_price: Decimal, quantity: Decimal) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// Unit price times quantity, unrounded.
    ///
    /// Saturates at `Decimal::MAX`/`MIN` instead of overflowing.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.unit_price.saturating_mul(self.quantity)
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.unit_price)
    }
}
