//! Cash-flow command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use crate::commands::{parse_decimal, Context};
use crate::output::{KeyValue, Rendered};

/// Arguments for the cash-flow command.
#[derive(Args, Debug)]
pub struct CashFlowArgs {
    /// Cash received
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub inflow: Decimal,

    /// Cash paid out
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub outflow: Decimal,

    /// Opening balance
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true, default_value = "0")]
    pub opening: Decimal,
}

/// Execute the cash-flow command.
pub fn execute(args: CashFlowArgs, ctx: &Context) -> Result<()> {
    let result = ctx.calc.cash_flow(args.inflow, args.outflow, args.opening);

    Rendered {
        title: "Cash Flow",
        rows: vec![
            KeyValue::amount("Opening Balance", args.opening),
            KeyValue::amount("Inflow", args.inflow),
            KeyValue::amount("Outflow", args.outflow),
            KeyValue::amount("Net Flow", result.net_flow),
            KeyValue::amount("Ending Balance", result.ending_balance),
        ],
        value: &result,
        minimal: format!("{} {}", result.net_flow, result.ending_balance),
    }
    .print(ctx.format, ctx.quiet)
}
