//! Domain types for financial metrics.
//!
//! This module provides plain value types for the metric inputs and outputs:
//!
//! - [`LineItem`]: One bill-of-materials row (unit price × quantity)
//! - [`DataPoint`]: A dated value in a reporting series
//! - [`MarginResult`], [`CashFlowResult`], [`TrendResult`]: Small result records
//! - [`BreakEven`]: Break-even units, or unreachable when the contribution
//!   margin is not positive
//! - [`Rounding`]: Precision and strategy applied to results
//! - [`parse_amount`], [`parse_date`]: Text boundaries into the types above

mod line_item;
mod parse;
mod results;
mod rounding;
mod series;

pub use line_item::LineItem;
pub use parse::{parse_amount, parse_date};
pub use results::{BreakEven, CashFlowResult, MarginResult, TrendResult};
pub use rounding::{Rounding, RoundingMode};
pub use series::{DataPoint, TrendDirection};
