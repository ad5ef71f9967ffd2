//! ROI, EBITDA, and break-even command implementations.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use tally_core::types::BreakEven;
use tally_metrics::{contribution_margin, EbitdaInputs};

use crate::commands::{parse_decimal, Context};
use crate::output::{format_percent, KeyValue, Rendered};

/// Arguments for the roi command.
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Profit for the period
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub profit: Decimal,

    /// Amount invested
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub investment: Decimal,
}

/// Arguments for the ebitda command.
#[derive(Args, Debug)]
pub struct EbitdaArgs {
    /// Revenue for the period
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub revenue: Decimal,

    /// Variable costs
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub variable: Decimal,

    /// Fixed costs
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub fixed: Decimal,

    /// Depreciation included in costs
    #[arg(long, value_parser = parse_decimal, default_value = "0")]
    pub depreciation: Decimal,

    /// Amortization included in costs
    #[arg(long, value_parser = parse_decimal, default_value = "0")]
    pub amortization: Decimal,
}

/// Arguments for the break-even command.
#[derive(Args, Debug)]
pub struct BreakEvenArgs {
    /// Fixed costs to cover
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub fixed: Decimal,

    /// Sale price per unit
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub price: Decimal,

    /// Variable cost per unit
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub variable: Decimal,
}

#[derive(Serialize)]
struct RoiOutput {
    profit: Decimal,
    investment: Decimal,
    roi_percent: Decimal,
}

#[derive(Serialize)]
struct EbitdaOutput {
    #[serde(flatten)]
    inputs: EbitdaInputs,
    ebitda: Decimal,
}

#[derive(Serialize)]
struct BreakEvenOutput {
    contribution_margin: Decimal,
    break_even: BreakEven,
}

/// Execute the roi command.
pub fn execute_roi(args: RoiArgs, ctx: &Context) -> Result<()> {
    let roi = ctx.calc.return_on_investment(args.profit, args.investment);
    let output = RoiOutput {
        profit: args.profit,
        investment: args.investment,
        roi_percent: roi,
    };

    Rendered {
        title: "Return on Investment",
        rows: vec![
            KeyValue::amount("Profit", args.profit),
            KeyValue::amount("Investment", args.investment),
            KeyValue::percent("ROI", roi),
        ],
        value: &output,
        minimal: format_percent(roi),
    }
    .print(ctx.format, ctx.quiet)
}

/// Execute the ebitda command.
pub fn execute_ebitda(args: EbitdaArgs, ctx: &Context) -> Result<()> {
    let inputs = EbitdaInputs::new(args.revenue, args.variable, args.fixed)
        .with_depreciation(args.depreciation)
        .with_amortization(args.amortization);
    let ebitda = ctx.calc.ebitda(&inputs);
    let output = EbitdaOutput { inputs, ebitda };

    Rendered {
        title: "EBITDA",
        rows: vec![
            KeyValue::amount("Revenue", inputs.revenue),
            KeyValue::amount("Variable Costs", inputs.variable_costs),
            KeyValue::amount("Fixed Costs", inputs.fixed_costs),
            KeyValue::amount("Depreciation", inputs.depreciation),
            KeyValue::amount("Amortization", inputs.amortization),
            KeyValue::amount("EBITDA", ebitda),
        ],
        value: &output,
        minimal: ebitda.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}

/// Execute the break-even command.
pub fn execute_break_even(args: BreakEvenArgs, ctx: &Context) -> Result<()> {
    let break_even = ctx
        .calc
        .break_even_point(args.fixed, args.price, args.variable);
    let output = BreakEvenOutput {
        contribution_margin: contribution_margin(args.price, args.variable),
        break_even,
    };

    let units = match break_even {
        BreakEven::Units(u) => u.to_string(),
        BreakEven::Unreachable => "never (contribution margin <= 0)".to_string(),
    };

    Rendered {
        title: "Break-Even Point",
        rows: vec![
            KeyValue::amount("Fixed Costs", args.fixed),
            KeyValue::amount("Contribution Margin", output.contribution_margin),
            KeyValue::new("Units", units),
        ],
        value: &output,
        minimal: break_even.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}
