//! CLI error types.

use thiserror::Error;

use tally_config::ConfigError;
use tally_core::TallyError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read.
    #[error("Cannot read {path}: {source}")]
    ReadInput {
        /// Path of the input file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Input file content is malformed.
    #[error("Invalid input in {path}: {reason}")]
    InvalidInput {
        /// Path of the input file.
        path: String,
        /// What was wrong.
        reason: String,
    },

    /// Value or record could not be parsed.
    #[error(transparent)]
    Parse(#[from] TallyError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
