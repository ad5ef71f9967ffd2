//! Ticket and variation command implementations.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::{parse_decimal, Context};
use crate::output::{format_percent, KeyValue, Rendered};

/// Arguments for the ticket command.
#[derive(Args, Debug)]
pub struct TicketArgs {
    /// Total sales for the period
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub total: Decimal,

    /// Number of orders
    #[arg(long)]
    pub orders: u64,
}

/// Arguments for the variation command.
#[derive(Args, Debug)]
pub struct VariationArgs {
    /// Value for the current period
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub current: Decimal,

    /// Value for the previous period
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub previous: Decimal,
}

#[derive(Serialize)]
struct TicketOutput {
    total_sales: Decimal,
    order_count: u64,
    average_ticket: Decimal,
}

#[derive(Serialize)]
struct VariationOutput {
    current: Decimal,
    previous: Decimal,
    variation_percent: Decimal,
}

/// Execute the ticket command.
pub fn execute_ticket(args: TicketArgs, ctx: &Context) -> Result<()> {
    let average = ctx.calc.average_ticket(args.total, args.orders);
    let output = TicketOutput {
        total_sales: args.total,
        order_count: args.orders,
        average_ticket: average,
    };

    Rendered {
        title: "Average Ticket",
        rows: vec![
            KeyValue::amount("Total Sales", args.total),
            KeyValue::new("Orders", args.orders.to_string()),
            KeyValue::amount("Average Ticket", average),
        ],
        value: &output,
        minimal: average.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}

/// Execute the variation command.
pub fn execute_variation(args: VariationArgs, ctx: &Context) -> Result<()> {
    let variation = ctx.calc.percent_variation(args.current, args.previous);
    let output = VariationOutput {
        current: args.current,
        previous: args.previous,
        variation_percent: variation,
    };

    Rendered {
        title: "Percent Variation",
        rows: vec![
            KeyValue::amount("Current", args.current),
            KeyValue::amount("Previous", args.previous),
            KeyValue::percent("Variation", variation),
        ],
        value: &output,
        minimal: format_percent(variation),
    }
    .print(ctx.format, ctx.quiet)
}
