//! Metrics configuration.
//!
//! Controls how metric results are rounded and how sensitive trend
//! classification is.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_core::types::{Rounding, RoundingMode};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Highest supported result precision.
pub const MAX_PRECISION: u32 = 10;

// =============================================================================
// METRICS CONFIGURATION
// =============================================================================

/// Configuration for metric calculations.
///
/// Every field has a default, so an empty file is a valid configuration:
///
/// ```toml
/// precision = 2
/// rounding = "half_up"
/// trend_threshold = 0.05
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Decimal places kept in monetary and percentage results.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// How extra digits are rounded away.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// Fraction of the overall mean that the half-means must differ by
    /// before a series counts as moving.
    #[serde(default = "default_trend_threshold")]
    pub trend_threshold: Decimal,
}

fn default_precision() -> u32 {
    2
}

fn default_trend_threshold() -> Decimal {
    // 5%
    Decimal::new(5, 2)
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            rounding: RoundingMode::default(),
            trend_threshold: default_trend_threshold(),
        }
    }
}

impl MetricsConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the trend threshold as a fraction (0.05 = 5%).
    #[must_use]
    pub fn with_trend_threshold(mut self, threshold: Decimal) -> Self {
        self.trend_threshold = threshold;
        self
    }

    /// Returns the rounding rule described by this configuration.
    #[must_use]
    pub fn rounding_rule(&self) -> Rounding {
        Rounding::new(self.precision, self.rounding)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = std::fs::read_to_string(path)?;

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };
        log::debug!(
            "loaded metrics config from {}: precision={}, rounding={}, trend_threshold={}",
            path.display(),
            config.precision,
            config.rounding,
            config.trend_threshold
        );
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

impl Validate for MetricsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.precision > MAX_PRECISION {
            errors.push(ValidationError::with_rule(
                "precision",
                format!(
                    "Precision {} exceeds maximum of {}",
                    self.precision, MAX_PRECISION
                ),
                "max_precision",
            ));
        }

        if self.trend_threshold < Decimal::ZERO || self.trend_threshold >= Decimal::ONE {
            errors.push(ValidationError::with_rule(
                "trend_threshold",
                "Trend threshold must be in [0, 1)",
                "valid_threshold",
            ));
        }

        errors
    }
}
