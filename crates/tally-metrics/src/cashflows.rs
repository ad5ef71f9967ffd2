//! Cash register flow for a period.

use rust_decimal::Decimal;

use tally_core::types::CashFlowResult;

use crate::arith::{saturating_add, saturating_sub};
use crate::calculator::MetricsCalculator;

impl MetricsCalculator {
    /// Net flow and closing balance, both rounded.
    #[must_use]
    pub fn cash_flow(
        &self,
        inflow: Decimal,
        outflow: Decimal,
        opening_balance: Decimal,
    ) -> CashFlowResult {
        let net_flow = saturating_sub(inflow, outflow);
        CashFlowResult {
            net_flow: self.round(net_flow),
            ending_balance: self.round(saturating_add(opening_balance, net_flow)),
        }
    }
}

/// Cash flow with default rounding. See [`MetricsCalculator::cash_flow`].
#[must_use]
pub fn cash_flow(inflow: Decimal, outflow: Decimal, opening_balance: Decimal) -> CashFlowResult {
    MetricsCalculator::default().cash_flow(inflow, outflow, opening_balance)
}
