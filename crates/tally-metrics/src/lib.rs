//! # Tally Metrics
//!
//! Financial metrics for small retail and workshop businesses.
//!
//! Every metric is a pure, deterministic function of its arguments:
//! - **Pricing**: Gross margin, bill-of-materials cost
//! - **Sales**: Average ticket, period-over-period variation
//! - **Profitability**: Return on investment, simplified EBITDA, break-even
//! - **Cash Flows**: Net flow and closing balance of the cash register
//! - **Trend**: Increasing / decreasing / stable classification of a series
//! - **Report**: All of the above for one reporting period
//!
//! None of the metrics fail. Zero denominators have defined results (0, or
//! [`BreakEven::Unreachable`](tally_core::types::BreakEven) for break-even)
//! instead of errors.
//!
//! ## Usage
//!
//! ```rust
//! use tally_metrics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // Free functions use 2 decimal places, half-up rounding, 5% trend threshold.
//! let margin = gross_margin(dec!(25), dec!(15));
//! assert_eq!(margin.percentage_points, dec!(40));
//! assert_eq!(average_ticket(dec!(100), 4), dec!(25));
//!
//! // Or configure a calculator.
//! let calc = MetricsCalculator::new(&MetricsConfig::new().with_precision(4));
//! assert_eq!(calc.return_on_investment(dec!(1), dec!(3)), dec!(33.3333));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod arith;
pub mod calculator;
pub mod cashflows;
pub mod pricing;
pub mod profitability;
pub mod report;
pub mod sales;
pub mod trend;

pub use calculator::MetricsCalculator;
pub use cashflows::cash_flow;
pub use pricing::{cost_from_bill_of_materials, gross_margin};
pub use profitability::{
    break_even_point, contribution_margin, ebitda, ebitda_with, return_on_investment,
    EbitdaInputs,
};
pub use report::{FinancialReport, PeriodFigures, UnitEconomics};
pub use sales::{average_ticket, percent_variation};
pub use trend::trend_analysis;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tally_metrics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calculator::MetricsCalculator;
    pub use crate::cashflows::cash_flow;
    pub use crate::pricing::{cost_from_bill_of_materials, gross_margin};
    pub use crate::profitability::{
        break_even_point, contribution_margin, ebitda, ebitda_with, return_on_investment,
        EbitdaInputs,
    };
    pub use crate::report::{FinancialReport, PeriodFigures, UnitEconomics};
    pub use crate::sales::{average_ticket, percent_variation};
    pub use crate::trend::trend_analysis;

    pub use tally_config::MetricsConfig;
    pub use tally_core::types::{
        BreakEven, CashFlowResult, DataPoint, LineItem, MarginResult, Rounding, RoundingMode,
        TrendDirection, TrendResult,
    };
}
