//! Trend classification of a dated series.
//!
//! The series is split at `len / 2`: the first half is `[0, mid)` and the
//! second half `[mid, len)`, so an odd-length series gives its middle point
//! to the second half. The half-means are compared against a threshold of
//! `|overall mean| * trend_threshold`.
//!
//! The direction is decided on unrounded means; only the reported average and
//! variance are rounded.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use tally_core::types::{DataPoint, TrendDirection, TrendResult};

use crate::arith::{saturating_mul, saturating_sub, saturating_sum};
use crate::calculator::MetricsCalculator;

impl MetricsCalculator {
    /// Classifies `points` (taken in the given order) and returns the mean
    /// and population variance of their values.
    #[must_use]
    pub fn trend_analysis(&self, points: &[DataPoint]) -> TrendResult {
        if points.is_empty() {
            return TrendResult::default();
        }

        let values: Vec<Decimal> = points.iter().map(|p| p.value).collect();
        let average = mean(&values);
        let variance = population_variance(&values, average);

        let direction = if values.len() < 2 {
            TrendDirection::Stable
        } else {
            let mid = values.len() / 2;
            classify(
                mean(&values[..mid]),
                mean(&values[mid..]),
                saturating_mul(average.abs(), self.trend_threshold()),
            )
        };

        log::trace!(
            "trend over {} points: {direction}, mean {average}, variance {variance}",
            values.len()
        );

        TrendResult {
            direction,
            average: self.round(average),
            variance: self.round(variance),
        }
    }
}

/// Trend analysis with the default 5% threshold and default rounding.
///
/// ```rust
/// use chrono::NaiveDate;
/// use tally_core::types::{DataPoint, TrendDirection};
/// use tally_metrics::trend_analysis;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let series: Vec<DataPoint> = (1..=10)
///     .map(|i| DataPoint::new(start + chrono::Days::new(i), Decimal::from(i)))
///     .collect();
///
/// assert_eq!(trend_analysis(&series).direction, TrendDirection::Increasing);
/// assert_eq!(trend_analysis(&[]).direction, TrendDirection::Stable);
/// ```
#[must_use]
pub fn trend_analysis(points: &[DataPoint]) -> TrendResult {
    MetricsCalculator::default().trend_analysis(points)
}

fn classify(first_half: Decimal, second_half: Decimal, threshold: Decimal) -> TrendDirection {
    if saturating_sub(second_half, first_half) > threshold {
        TrendDirection::Increasing
    } else if saturating_sub(first_half, second_half) > threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[Decimal]) -> Decimal {
    debug_assert!(!values.is_empty());
    match sum(values) {
        Some(total) => total / Decimal::from(values.len()),
        // Sum overflows Decimal: average the parts instead.
        None => {
            let n = Decimal::from(values.len());
            saturating_sum(values.iter().map(|v| *v / n))
        }
    }
}

fn sum(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
}

fn population_variance(values: &[Decimal], average: Decimal) -> Decimal {
    let squares: Option<Decimal> = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        v.checked_sub(average)
            .and_then(|d| d.checked_mul(d))
            .and_then(|sq| acc.checked_add(sq))
    });

    match squares {
        Some(total) => total / Decimal::from(values.len()),
        None => {
            log::warn!("variance exceeds Decimal range, falling back to f64");
            float_variance(values)
        }
    }
}

fn float_variance(values: &[Decimal]) -> Decimal {
    let floats: Vec<f64> = values.iter().filter_map(|v| v.to_f64()).collect();
    let n = floats.len() as f64;
    let avg = floats.iter().sum::<f64>() / n;
    let var = floats.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / n;
    Decimal::from_f64(var).unwrap_or(Decimal::MAX)
}
