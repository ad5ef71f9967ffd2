//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    BomArgs, BreakEvenArgs, CashFlowArgs, EbitdaArgs, MarginArgs, ReportArgs, RoiArgs, TicketArgs,
    TrendArgs, VariationArgs,
};

/// Tally - financial metrics for small retail and workshop businesses
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Metrics configuration file (.toml or .json)
    #[arg(short, long, global = true, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Gross margin of a sale
    Margin(MarginArgs),

    /// Unit cost from a bill-of-materials JSON file
    Bom(BomArgs),

    /// Average value per order
    Ticket(TicketArgs),

    /// Percentage change between two periods
    Variation(VariationArgs),

    /// Return on investment
    Roi(RoiArgs),

    /// Simplified EBITDA
    Ebitda(EbitdaArgs),

    /// Units needed to cover fixed costs
    BreakEven(BreakEvenArgs),

    /// Net cash flow and closing balance
    CashFlow(CashFlowArgs),

    /// Trend of a dated series from a CSV file
    Trend(TrendArgs),

    /// Full period report from a JSON file
    Report(ReportArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
