//! Sales indicators: average ticket and period-over-period variation.

use rust_decimal::Decimal;

use crate::arith::{percent, saturating_div, saturating_sub};
use crate::calculator::MetricsCalculator;

impl MetricsCalculator {
    /// Average value per order, rounded. Zero orders yield 0.
    #[must_use]
    pub fn average_ticket(&self, total_sales: Decimal, order_count: u64) -> Decimal {
        if order_count == 0 {
            log::debug!("average ticket: no orders, returning 0");
            return Decimal::ZERO;
        }
        self.round(saturating_div(total_sales, Decimal::from(order_count)))
    }

    /// Percentage change from `previous` to `current`, rounded.
    ///
    /// When `previous` is zero there is no base to compare against: any
    /// positive `current` counts as a 100% increase, anything else as 0.
    #[must_use]
    pub fn percent_variation(&self, current: Decimal, previous: Decimal) -> Decimal {
        if previous.is_zero() {
            log::debug!("percent variation: previous is 0, current {current}");
            return if current > Decimal::ZERO {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
        }
        self.round(percent(saturating_sub(current, previous), previous))
    }
}

/// Average ticket with default rounding. See [`MetricsCalculator::average_ticket`].
#[must_use]
pub fn average_ticket(total_sales: Decimal, order_count: u64) -> Decimal {
    MetricsCalculator::default().average_ticket(total_sales, order_count)
}

/// Percent variation with default rounding. See [`MetricsCalculator::percent_variation`].
///
/// ```rust
/// use tally_metrics::percent_variation;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(percent_variation(dec!(150), dec!(100)), dec!(50));
/// assert_eq!(percent_variation(dec!(50), dec!(0)), dec!(100));
/// ```
#[must_use]
pub fn percent_variation(current: Decimal, previous: Decimal) -> Decimal {
    MetricsCalculator::default().percent_variation(current, previous)
}
