//! Result rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of decimal places for monetary and percentage results.
pub const DEFAULT_PRECISION: u32 = 2;

/// How a value is brought to the target precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoints move away from zero (commercial rounding: 0.125 -> 0.13).
    #[default]
    HalfUp,
    /// Midpoints move to the even neighbour (banker's rounding: 0.125 -> 0.12).
    HalfEven,
    /// Extra digits are dropped (0.129 -> 0.12).
    Truncate,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Truncate => RoundingStrategy::ToZero,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::Truncate => "truncate",
        };
        write!(f, "{name}")
    }
}

/// Precision plus rounding mode.
///
/// # Example
///
/// ```rust
/// use tally_core::types::{Rounding, RoundingMode};
/// use rust_decimal_macros::dec;
///
/// let commercial = Rounding::default();
/// assert_eq!(commercial.apply(dec!(2.345)), dec!(2.35));
///
/// let bankers = Rounding::new(2, RoundingMode::HalfEven);
/// assert_eq!(bankers.apply(dec!(2.345)), dec!(2.34));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rounding {
    /// Number of decimal places kept.
    pub precision: u32,
    /// Strategy for the dropped digits.
    pub mode: RoundingMode,
}

impl Rounding {
    /// Creates a rounding rule.
    #[must_use]
    pub const fn new(precision: u32, mode: RoundingMode) -> Self {
        Self { precision, mode }
    }

    /// Rounds a value with this rule.
    #[must_use]
    pub fn apply(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.precision, self.mode.strategy())
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, RoundingMode::HalfUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up_moves_midpoints_away_from_zero() {
        let r = Rounding::default();
        assert_eq!(r.apply(dec!(0.125)), dec!(0.13));
        assert_eq!(r.apply(dec!(-0.125)), dec!(-0.13));
        assert_eq!(r.apply(dec!(33.3333)), dec!(33.33));
    }

    #[test]
    fn test_half_even() {
        let r = Rounding::new(2, RoundingMode::HalfEven);
        assert_eq!(r.apply(dec!(0.125)), dec!(0.12));
        assert_eq!(r.apply(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn test_truncate() {
        let r = Rounding::new(2, RoundingMode::Truncate);
        assert_eq!(r.apply(dec!(0.129)), dec!(0.12));
        assert_eq!(r.apply(dec!(-0.129)), dec!(-0.12));
    }

    #[test]
    fn test_zero_precision() {
        let r = Rounding::new(0, RoundingMode::HalfUp);
        assert_eq!(r.apply(dec!(2.5)), dec!(3));
    }

    proptest! {
        #[test]
        fn prop_rounding_is_idempotent(mantissa in -10_000_000i64..10_000_000, scale in 0u32..6) {
            let value = Decimal::new(mantissa, scale);
            for mode in [RoundingMode::HalfUp, RoundingMode::HalfEven, RoundingMode::Truncate] {
                let r = Rounding::new(2, mode);
                let once = r.apply(value);
                prop_assert_eq!(r.apply(once), once);
                prop_assert!(once.scale() <= 2);
            }
        }
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&RoundingMode::HalfEven).unwrap();
        assert_eq!(json, "\"half_even\"");
        let parsed: RoundingMode = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(parsed, RoundingMode::Truncate);
        assert_eq!(RoundingMode::HalfUp.to_string(), "half_up");
    }
}
