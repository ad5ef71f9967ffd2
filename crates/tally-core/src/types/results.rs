//! Result records returned by the metric functions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::series::TrendDirection;

/// Gross margin of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginResult {
    /// Sale price minus cost.
    pub margin: Decimal,
    /// Margin as a percentage of the sale price.
    pub percentage_points: Decimal,
}

/// Net movement and closing balance of the cash register for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowResult {
    /// Inflow minus outflow.
    pub net_flow: Decimal,
    /// Opening balance plus net flow.
    pub ending_balance: Decimal,
}

/// Direction, mean and variance of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Classified direction.
    pub direction: TrendDirection,
    /// Mean of all values.
    pub average: Decimal,
    /// Population variance of all values.
    pub variance: Decimal,
}

impl Default for TrendResult {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Stable,
            average: Decimal::ZERO,
            variance: Decimal::ZERO,
        }
    }
}

/// Units needed to cover fixed costs.
///
/// `Unreachable` is the positive-infinity case: each unit sold contributes
/// nothing (or loses money), so no volume breaks even.
///
/// # Example
///
/// ```rust
/// use tally_core::types::BreakEven;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(BreakEven::Units(dec!(250)).to_f64(), 250.0);
/// assert!(BreakEven::Unreachable.to_f64().is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// Whole units to sell.
    Units(Decimal),
    /// Contribution margin is zero or negative.
    Unreachable,
}

impl BreakEven {
    /// Returns the unit count, or `None` when unreachable.
    #[must_use]
    pub fn units(&self) -> Option<Decimal> {
        match self {
            BreakEven::Units(u) => Some(*u),
            BreakEven::Unreachable => None,
        }
    }

    /// Returns true for the unreachable (infinite) case.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, BreakEven::Unreachable)
    }

    /// Lossy conversion; `Unreachable` maps to `f64::INFINITY`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            BreakEven::Units(u) => u.to_f64().unwrap_or(f64::INFINITY),
            BreakEven::Unreachable => f64::INFINITY,
        }
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Units(u) => write!(f, "{u}"),
            BreakEven::Unreachable => write!(f, "∞"),
        }
    }
}
