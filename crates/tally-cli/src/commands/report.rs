//! Report command implementation.
//!
//! Reads a JSON file holding the current period's figures, optionally the
//! previous period and a dated series:
//!
//! ```json
//! {
//!   "current":  {"label": "2024-03", "revenue": 18500, "order_count": 740},
//!   "previous": {"revenue": 17200},
//!   "series":   [{"date": "2024-03-01", "value": 610}]
//! }
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Deserialize;

use tally_core::types::{BreakEven, DataPoint};
use tally_metrics::{FinancialReport, PeriodFigures};

use crate::commands::{read_json, Context};
use crate::output::{format_amount, KeyValue, Rendered};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON file with `current`, optional `previous` and `series`
    #[arg(long)]
    pub file: PathBuf,
}

/// Report input document.
#[derive(Debug, Deserialize)]
pub struct ReportInput {
    /// Figures for the reported period.
    pub current: PeriodFigures,
    /// Figures for the period before, for revenue variation.
    #[serde(default)]
    pub previous: Option<PeriodFigures>,
    /// Dated series for trend analysis.
    #[serde(default)]
    pub series: Vec<DataPoint>,
}

fn report_rows(report: &FinancialReport) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::amount("Gross Margin", report.gross_margin.margin),
        KeyValue::percent("Gross Margin %", report.gross_margin.percentage_points),
        KeyValue::amount("Average Ticket", report.average_ticket),
    ];
    if let Some(variation) = report.revenue_variation {
        rows.push(KeyValue::percent("Revenue Variation", variation));
    }
    rows.push(KeyValue::amount("EBITDA", report.ebitda));
    rows.push(KeyValue::percent("ROI", report.return_on_investment));
    rows.push(KeyValue::amount("Net Cash Flow", report.cash_flow.net_flow));
    rows.push(KeyValue::amount(
        "Ending Balance",
        report.cash_flow.ending_balance,
    ));
    match report.break_even {
        Some(BreakEven::Units(units)) => {
            rows.push(KeyValue::new("Break-Even Units", units.to_string()));
        }
        Some(BreakEven::Unreachable) => rows.push(KeyValue::new("Break-Even Units", "∞")),
        None => {}
    }
    rows.push(KeyValue::new("Trend", report.trend.direction.to_string()));
    rows.push(KeyValue::new("Trend Average", format_amount(report.trend.average)));
    rows
}

/// Execute the report command.
pub fn execute(args: ReportArgs, ctx: &Context) -> Result<()> {
    let input: ReportInput = read_json(&args.file)?;
    let report = FinancialReport::build(
        &input.current,
        input.previous.as_ref(),
        &input.series,
        &ctx.calc,
    );

    let title = match &report.label {
        Some(label) => format!("Financial Report: {label}"),
        None => "Financial Report".to_string(),
    };

    Rendered {
        title: &title,
        rows: report_rows(&report),
        value: &report,
        minimal: report.ebitda.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}
