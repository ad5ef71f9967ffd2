//! Configured entry point for all metric calculations.

use rust_decimal::Decimal;

use tally_config::MetricsConfig;
use tally_core::types::Rounding;

/// Runs the metric formulas with a fixed rounding rule and trend threshold.
///
/// The calculator holds configuration only, so it is `Copy` and can be
/// shared freely across threads. The free functions in this crate
/// (`gross_margin`, `trend_analysis`, ...) are shorthands for
/// `MetricsCalculator::default()`.
///
/// # Example
///
/// ```rust
/// use tally_config::MetricsConfig;
/// use tally_core::types::RoundingMode;
/// use tally_metrics::MetricsCalculator;
/// use rust_decimal_macros::dec;
///
/// let bankers = MetricsConfig::new().with_rounding(RoundingMode::HalfEven);
/// let calc = MetricsCalculator::new(&bankers);
///
/// // 1 / 8 = 0.125 -> 0.12 under banker's rounding
/// assert_eq!(calc.average_ticket(dec!(1), 8), dec!(0.12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsCalculator {
    rounding: Rounding,
    trend_threshold: Decimal,
}

impl MetricsCalculator {
    /// Creates a calculator from a configuration.
    #[must_use]
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            rounding: config.rounding_rule(),
            trend_threshold: config.trend_threshold,
        }
    }

    /// Replaces the rounding rule.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Replaces the trend threshold (fraction of the overall mean).
    #[must_use]
    pub fn with_trend_threshold(mut self, threshold: Decimal) -> Self {
        self.trend_threshold = threshold;
        self
    }

    /// Rounding rule applied to results.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Trend threshold as a fraction of the overall mean.
    #[must_use]
    pub fn trend_threshold(&self) -> Decimal {
        self.trend_threshold
    }

    #[inline]
    pub(crate) fn round(&self, value: Decimal) -> Decimal {
        self.rounding.apply(value)
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(&MetricsConfig::default())
    }
}

impl From<MetricsConfig> for MetricsCalculator {
    fn from(config: MetricsConfig) -> Self {
        Self::new(&config)
    }
}
