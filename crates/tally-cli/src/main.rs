//! Tally CLI - financial metrics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Gross margin of a sale
//! tally margin --price 25 --cost 15
//!
//! # Average ticket as a bare value
//! tally --format minimal ticket --total 1250 --orders 50
//!
//! # Trend of daily sales
//! tally trend --file sales.csv
//!
//! # Full monthly report with a custom rounding configuration
//! tally --config tally.toml --format json report --file march.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tally_metrics::MetricsCalculator;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "warn,tally=debug,tally_metrics=debug,tally_config=debug",
        _ => "warn,tally=trace,tally_metrics=trace,tally_config=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_directive.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        calc: MetricsCalculator::new(&config),
    };

    match cli.command {
        Commands::Margin(args) => commands::margin::execute(args, &ctx)?,
        Commands::Bom(args) => commands::bom::execute(args, &ctx)?,
        Commands::Ticket(args) => commands::sales::execute_ticket(args, &ctx)?,
        Commands::Variation(args) => commands::sales::execute_variation(args, &ctx)?,
        Commands::Roi(args) => commands::profitability::execute_roi(args, &ctx)?,
        Commands::Ebitda(args) => commands::profitability::execute_ebitda(args, &ctx)?,
        Commands::BreakEven(args) => commands::profitability::execute_break_even(args, &ctx)?,
        Commands::CashFlow(args) => commands::cash::execute(args, &ctx)?,
        Commands::Trend(args) => commands::trend::execute(args, &ctx)?,
        Commands::Report(args) => commands::report::execute(args, &ctx)?,
    }

    Ok(())
}
