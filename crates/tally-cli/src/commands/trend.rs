//! Trend command implementation.
//!
//! Reads a CSV file with a header row and `date,value` columns:
//!
//! ```text
//! date,value
//! 2024-01-01,120.50
//! 2024-01-02,98
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Deserialize;

use tally_core::types::DataPoint;
use tally_core::TallyError;

use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{format_amount, print_warning, KeyValue, Rendered};

/// Arguments for the trend command.
#[derive(Args, Debug)]
pub struct TrendArgs {
    /// CSV file with `date` and `value` columns
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    date: String,
    value: String,
}

/// Loads a dated series from CSV.
///
/// Line numbers in errors are 1-based and count the header row.
pub fn read_series(path: &Path) -> CliResult<Vec<DataPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::InvalidInput {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut points = Vec::new();
    for (idx, row) in reader.deserialize::<RawPoint>().enumerate() {
        let line = idx + 2;
        let raw = row.map_err(|e| TallyError::invalid_record(line, e.to_string()))?;
        let point = DataPoint::parse(&raw.date, &raw.value)
            .map_err(|e| TallyError::invalid_record(line, e.to_string()))?;
        points.push(point);
    }
    Ok(points)
}

/// Execute the trend command.
pub fn execute(args: TrendArgs, ctx: &Context) -> Result<()> {
    let points = read_series(&args.file)?;
    if points.is_empty() && !ctx.quiet {
        print_warning("series is empty; reporting a stable trend");
    }

    let result = ctx.calc.trend_analysis(&points);
    tracing::debug!(points = points.len(), direction = %result.direction, "analyzed trend");

    Rendered {
        title: "Trend Analysis",
        rows: vec![
            KeyValue::new("Points", points.len().to_string()),
            KeyValue::new("Direction", result.direction.to_string()),
            KeyValue::new("Average", format_amount(result.average)),
            KeyValue::new("Variance", format_amount(result.variance)),
        ],
        value: &result,
        minimal: result.direction.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}
