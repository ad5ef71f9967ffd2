//! Product pricing: gross margin and bill-of-materials cost.

use rust_decimal::Decimal;

use tally_core::types::{LineItem, MarginResult};

use crate::arith::{percent, saturating_mul, saturating_sub, saturating_sum};
use crate::calculator::MetricsCalculator;

impl MetricsCalculator {
    /// Gross margin of selling at `price` something that cost `cost`.
    ///
    /// `margin = price - cost` and `percentage_points = margin / price * 100`,
    /// both rounded. A non-positive price yields a percentage of 0.
    #[must_use]
    pub fn gross_margin(&self, price: Decimal, cost: Decimal) -> MarginResult {
        let margin = saturating_sub(price, cost);
        let percentage_points = if price <= Decimal::ZERO {
            log::debug!("gross margin: non-positive price {price}, percentage set to 0");
            Decimal::ZERO
        } else {
            percent(margin, price)
        };

        MarginResult {
            margin: self.round(margin),
            percentage_points: self.round(percentage_points),
        }
    }

    /// Cost of one unit built from `ingredients` and `packaging`.
    ///
    /// Sums `unit_price * quantity` over both lists and rounds once at the end.
    #[must_use]
    pub fn cost_from_bill_of_materials(
        &self,
        ingredients: &[LineItem],
        packaging: &[LineItem],
    ) -> Decimal {
        let total = saturating_sum(
            ingredients
                .iter()
                .chain(packaging)
                .map(|item| saturating_mul(item.unit_price, item.quantity)),
        );
        self.round(total)
    }
}

/// Gross margin with default rounding. See [`MetricsCalculator::gross_margin`].
///
/// # Example
///
/// ```rust
/// use tally_metrics::gross_margin;
/// use rust_decimal_macros::dec;
///
/// let m = gross_margin(dec!(25), dec!(15));
/// assert_eq!(m.margin, dec!(10));
/// assert_eq!(m.percentage_points, dec!(40));
/// ```
#[must_use]
pub fn gross_margin(price: Decimal, cost: Decimal) -> MarginResult {
    MetricsCalculator::default().gross_margin(price, cost)
}

/// Bill-of-materials cost with default rounding.
/// See [`MetricsCalculator::cost_from_bill_of_materials`].
#[must_use]
pub fn cost_from_bill_of_materials(ingredients: &[LineItem], packaging: &[LineItem]) -> Decimal {
    MetricsCalculator::default().cost_from_bill_of_materials(ingredients, packaging)
}
