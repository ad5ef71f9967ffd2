//! Profitability: return on investment, simplified EBITDA, and break-even.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_core::types::BreakEven;

use crate::arith::{percent, saturating_add, saturating_div, saturating_sub};
use crate::calculator::MetricsCalculator;

/// Inputs to the simplified EBITDA formula.
///
/// Depreciation and amortization default to 0.
///
/// ```rust
/// use tally_metrics::profitability::EbitdaInputs;
/// use rust_decimal_macros::dec;
///
/// let inputs = EbitdaInputs::new(dec!(10_000), dec!(4_000), dec!(3_000))
///     .with_depreciation(dec!(500));
/// assert_eq!(inputs.amortization, dec!(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EbitdaInputs {
    /// Total revenue.
    pub revenue: Decimal,
    /// Costs that scale with sales volume.
    pub variable_costs: Decimal,
    /// Costs that do not scale with volume (rent, salaries, ...).
    pub fixed_costs: Decimal,
    /// Depreciation included in the costs above.
    #[serde(default)]
    pub depreciation: Decimal,
    /// Amortization included in the costs above.
    #[serde(default)]
    pub amortization: Decimal,
}

impl EbitdaInputs {
    /// Creates inputs with zero depreciation and amortization.
    #[must_use]
    pub fn new(revenue: Decimal, variable_costs: Decimal, fixed_costs: Decimal) -> Self {
        Self {
            revenue,
            variable_costs,
            fixed_costs,
            depreciation: Decimal::ZERO,
            amortization: Decimal::ZERO,
        }
    }

    /// Sets depreciation.
    #[must_use]
    pub fn with_depreciation(mut self, depreciation: Decimal) -> Self {
        self.depreciation = depreciation;
        self
    }

    /// Sets amortization.
    #[must_use]
    pub fn with_amortization(mut self, amortization: Decimal) -> Self {
        self.amortization = amortization;
        self
    }

    /// Revenue minus all costs, before adding back depreciation and amortization.
    #[must_use]
    pub fn operating_profit(&self) -> Decimal {
        saturating_sub(
            saturating_sub(self.revenue, self.variable_costs),
            self.fixed_costs,
        )
    }
}

impl MetricsCalculator {
    /// Profit as a percentage of investment, rounded. Zero investment yields 0.
    #[must_use]
    pub fn return_on_investment(&self, profit: Decimal, investment: Decimal) -> Decimal {
        if investment.is_zero() {
            log::debug!("roi: zero investment, returning 0");
            return Decimal::ZERO;
        }
        self.round(percent(profit, investment))
    }

    /// Simplified EBITDA:
    /// `revenue - variable - fixed + depreciation + amortization`, rounded.
    #[must_use]
    pub fn ebitda(&self, inputs: &EbitdaInputs) -> Decimal {
        let addbacks = saturating_add(inputs.depreciation, inputs.amortization);
        self.round(saturating_add(inputs.operating_profit(), addbacks))
    }

    /// Units that must be sold to cover `fixed_costs`.
    ///
    /// Computes `ceil(fixed_costs / (unit_price - unit_variable_cost))`. When
    /// the contribution margin is zero or negative the result is
    /// [`BreakEven::Unreachable`].
    #[must_use]
    pub fn break_even_point(
        &self,
        fixed_costs: Decimal,
        unit_price: Decimal,
        unit_variable_cost: Decimal,
    ) -> BreakEven {
        let contribution = contribution_margin(unit_price, unit_variable_cost);
        if contribution <= Decimal::ZERO {
            log::debug!("break-even: contribution margin {contribution} is not positive");
            return BreakEven::Unreachable;
        }
        BreakEven::Units(saturating_div(fixed_costs, contribution).ceil())
    }
}

/// What each unit sold contributes towards fixed costs:
/// `unit_price - unit_variable_cost`, unrounded.
#[must_use]
pub fn contribution_margin(unit_price: Decimal, unit_variable_cost: Decimal) -> Decimal {
    saturating_sub(unit_price, unit_variable_cost)
}

/// ROI with default rounding. See [`MetricsCalculator::return_on_investment`].
#[must_use]
pub fn return_on_investment(profit: Decimal, investment: Decimal) -> Decimal {
    MetricsCalculator::default().return_on_investment(profit, investment)
}

/// EBITDA with zero depreciation and amortization.
#[must_use]
pub fn ebitda(revenue: Decimal, variable_costs: Decimal, fixed_costs: Decimal) -> Decimal {
    ebitda_with(&EbitdaInputs::new(revenue, variable_costs, fixed_costs))
}

/// EBITDA from full inputs with default rounding.
#[must_use]
pub fn ebitda_with(inputs: &EbitdaInputs) -> Decimal {
    MetricsCalculator::default().ebitda(inputs)
}

/// Break-even units. See [`MetricsCalculator::break_even_point`].
///
/// ```rust
/// use tally_metrics::break_even_point;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(break_even_point(dec!(1000), dec!(10), dec!(6)).units(), Some(dec!(250)));
/// assert!(break_even_point(dec!(1000), dec!(5), dec!(5)).is_infinite());
/// ```
#[must_use]
pub fn break_even_point(
    fixed_costs: Decimal,
    unit_price: Decimal,
    unit_variable_cost: Decimal,
) -> BreakEven {
    MetricsCalculator::default().break_even_point(fixed_costs, unit_price, unit_variable_cost)
}
