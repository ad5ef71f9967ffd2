//! CLI command implementations.

pub mod bom;
pub mod cash;
pub mod margin;
pub mod profitability;
pub mod report;
pub mod sales;
pub mod trend;

// Re-export submodules for convenience
pub use bom::BomArgs;
pub use cash::CashFlowArgs;
pub use margin::MarginArgs;
pub use profitability::{BreakEvenArgs, EbitdaArgs, RoiArgs};
pub use report::ReportArgs;
pub use sales::{TicketArgs, VariationArgs};
pub use trend::TrendArgs;

use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use tally_config::MetricsConfig;
use tally_core::types::parse_amount;
use tally_core::TallyError;
use tally_metrics::MetricsCalculator;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and warnings.
    pub quiet: bool,
    /// Calculator built from the loaded configuration.
    pub calc: MetricsCalculator,
}

/// Clap value parser for decimal amounts.
pub fn parse_decimal(s: &str) -> Result<Decimal, TallyError> {
    parse_amount(s)
}

/// Loads the metrics configuration from `path`, or the defaults when absent.
pub fn load_config(path: Option<&Path>) -> CliResult<MetricsConfig> {
    let config = MetricsConfig::load_or_default(path)?;
    tracing::debug!(
        precision = config.precision,
        rounding = %config.rounding,
        threshold = %config.trend_threshold,
        "loaded metrics configuration"
    );
    Ok(config)
}

/// Reads and deserializes a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| CliError::InvalidInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
