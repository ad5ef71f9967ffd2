//! Period financial reports.
//!
//! A [`FinancialReport`] bundles the individual metrics for one reporting
//! period: margin, average ticket, growth against the previous period,
//! EBITDA, ROI, cash position, break-even and the trend of a series. The
//! caller supplies the raw totals (typically aggregated from orders, invoices
//! and the cash register) as [`PeriodFigures`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_core::types::{BreakEven, CashFlowResult, DataPoint, MarginResult, TrendResult};

use crate::calculator::MetricsCalculator;
use crate::profitability::EbitdaInputs;

/// Price and variable cost of a representative unit, for break-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEconomics {
    /// Sale price per unit.
    pub unit_price: Decimal,
    /// Variable cost per unit.
    pub unit_variable_cost: Decimal,
}

/// Raw totals for one reporting period.
///
/// Missing fields deserialize as zero, so a partial record is valid input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodFigures {
    /// Optional label ("2024-03", "Q1", ...).
    pub label: Option<String>,
    /// First day of the period.
    pub start: Option<NaiveDate>,
    /// Last day of the period.
    pub end: Option<NaiveDate>,
    /// Sales revenue.
    pub revenue: Decimal,
    /// Number of orders closed.
    pub order_count: u64,
    /// Direct cost of the goods sold.
    pub cost_of_goods: Decimal,
    /// Volume-dependent costs (including cost of goods if tracked there).
    pub variable_costs: Decimal,
    /// Fixed costs, including depreciation and amortization.
    pub fixed_costs: Decimal,
    /// Depreciation charged in the period.
    pub depreciation: Decimal,
    /// Amortization charged in the period.
    pub amortization: Decimal,
    /// Capital invested, for ROI.
    pub investment: Decimal,
    /// Cash received.
    pub cash_inflow: Decimal,
    /// Cash paid out.
    pub cash_outflow: Decimal,
    /// Cash on hand at the start of the period.
    pub opening_balance: Decimal,
    /// Representative unit, for break-even.
    pub unit: Option<UnitEconomics>,
}

impl PeriodFigures {
    /// EBITDA inputs for these figures.
    #[must_use]
    pub fn ebitda_inputs(&self) -> EbitdaInputs {
        EbitdaInputs::new(self.revenue, self.variable_costs, self.fixed_costs)
            .with_depreciation(self.depreciation)
            .with_amortization(self.amortization)
    }
}

/// Metrics for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Period label, copied from the figures.
    pub label: Option<String>,
    /// Revenue against cost of goods.
    pub gross_margin: MarginResult,
    /// Revenue per order.
    pub average_ticket: Decimal,
    /// Revenue change against the previous period, when one was given.
    pub revenue_variation: Option<Decimal>,
    /// Simplified EBITDA.
    pub ebitda: Decimal,
    /// Operating profit over investment.
    pub return_on_investment: Decimal,
    /// Cash register movement.
    pub cash_flow: CashFlowResult,
    /// Units to cover fixed costs, when unit economics were given.
    pub break_even: Option<BreakEven>,
    /// Direction of the supplied series.
    pub trend: TrendResult,
}

impl FinancialReport {
    /// Computes every metric for `current`.
    ///
    /// ROI uses operating profit (revenue minus variable and fixed costs), i.e.
    /// EBITDA after depreciation and amortization.
    #[must_use]
    pub fn build(
        current: &PeriodFigures,
        previous: Option<&PeriodFigures>,
        series: &[DataPoint],
        calc: &MetricsCalculator,
    ) -> Self {
        let ebitda_inputs = current.ebitda_inputs();

        let report = Self {
            label: current.label.clone(),
            gross_margin: calc.gross_margin(current.revenue, current.cost_of_goods),
            average_ticket: calc.average_ticket(current.revenue, current.order_count),
            revenue_variation: previous
                .map(|p| calc.percent_variation(current.revenue, p.revenue)),
            ebitda: calc.ebitda(&ebitda_inputs),
            return_on_investment: calc
                .return_on_investment(ebitda_inputs.operating_profit(), current.investment),
            cash_flow: calc.cash_flow(
                current.cash_inflow,
                current.cash_outflow,
                current.opening_balance,
            ),
            break_even: current.unit.map(|u| {
                calc.break_even_point(current.fixed_costs, u.unit_price, u.unit_variable_cost)
            }),
            trend: calc.trend_analysis(series),
        };

        log::debug!(
            "built report {}: revenue {}, ebitda {}, trend {}",
            report.label.as_deref().unwrap_or("<unlabelled>"),
            current.revenue,
            report.ebitda,
            report.trend.direction
        );
        report
    }
}
