//! Text parsing for amounts and dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{TallyError, TallyResult};

/// Parses a decimal amount such as `"1250.40"` or `"-3"`.
///
/// Surrounding whitespace is ignored. Scientific notation (`"1e3"`) is
/// accepted as a fallback.
pub fn parse_amount(input: &str) -> TallyResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TallyError::invalid_amount(input, "empty value"));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| TallyError::invalid_amount(input, e.to_string()))
}

/// Parses a calendar date in `YYYY-MM-DD` format.
pub fn parse_date(input: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| TallyError::invalid_date(input))
}
