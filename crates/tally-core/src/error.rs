//! Error types for the Tally library.
//!
//! The metric functions themselves are total and never fail. These errors
//! cover the boundaries around them: turning text into decimals, dates and
//! series records before a calculation runs.

use thiserror::Error;

/// A specialized Result type for Tally operations.
pub type TallyResult<T> = Result<T, TallyError>;

/// The main error type for Tally operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// A decimal amount could not be parsed.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The offending text.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A date could not be parsed.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending text.
        input: String,
    },

    /// A series record was malformed.
    #[error("Invalid series record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number of the record.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
}

impl TallyError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }
}
