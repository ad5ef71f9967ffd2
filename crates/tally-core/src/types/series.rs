//! Dated series points and trend direction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::parse::{parse_amount, parse_date};
use crate::error::TallyResult;

/// A single observation in a reporting series (daily sales, monthly revenue, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value.
    pub value: Decimal,
}

impl DataPoint {
    /// Creates a new data point.
    #[must_use]
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }

    /// Parses a data point from `YYYY-MM-DD` and decimal text.
    pub fn parse(date: &str, value: &str) -> TallyResult<Self> {
        Ok(Self {
            date: parse_date(date)?,
            value: parse_amount(value)?,
        })
    }
}

/// Qualitative direction of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Later values are meaningfully above earlier values.
    Increasing,
    /// Later values are meaningfully below earlier values.
    Decreasing,
    /// No meaningful movement, or too little data to tell.
    #[default]
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_point() {
        let p = DataPoint::parse("2024-01-31", "1520.75").unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(p.value, dec!(1520.75));
    }

    #[test]
    fn test_parse_point_bad_value() {
        assert!(DataPoint::parse("2024-01-31", "n/a").is_err());
    }

    #[test]
    fn test_direction_default_is_stable() {
        assert_eq!(TrendDirection::default(), TrendDirection::Stable);
        assert_eq!(TrendDirection::Increasing.to_string(), "increasing");
    }

    #[test]
    fn test_point_serde() {
        let p = DataPoint::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), dec!(10));
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("2024-05-01"));
        let back: DataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
