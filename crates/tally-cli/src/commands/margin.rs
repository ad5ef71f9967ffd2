//! Margin command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use crate::commands::{parse_decimal, Context};
use crate::output::{format_percent, KeyValue, Rendered};

/// Arguments for the margin command.
#[derive(Args, Debug)]
pub struct MarginArgs {
    /// Sale price
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub price: Decimal,

    /// Cost of the item sold
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub cost: Decimal,
}

/// Execute the margin command.
pub fn execute(args: MarginArgs, ctx: &Context) -> Result<()> {
    let result = ctx.calc.gross_margin(args.price, args.cost);
    tracing::debug!(price = %args.price, cost = %args.cost, "computed gross margin");

    Rendered {
        title: "Gross Margin",
        rows: vec![
            KeyValue::amount("Sale Price", args.price),
            KeyValue::amount("Cost", args.cost),
            KeyValue::amount("Margin", result.margin),
            KeyValue::percent("Margin %", result.percentage_points),
        ],
        value: &result,
        minimal: format!("{} {}", result.margin, format_percent(result.percentage_points)),
    }
    .print(ctx.format, ctx.quiet)
}
