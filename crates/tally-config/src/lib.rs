//! Tally Configuration Layer
//!
//! This crate provides configuration management for the Tally financial
//! metrics library: result precision, rounding mode, and trend sensitivity.
//!
//! # Example
//!
//! ```rust
//! use tally_config::{MetricsConfig, Validate};
//! use tally_core::types::RoundingMode;
//!
//! let config = MetricsConfig::from_toml_str(r#"rounding = "half_even""#).unwrap();
//! assert_eq!(config.rounding, RoundingMode::HalfEven);
//! assert_eq!(config.precision, 2);
//! assert!(config.is_valid());
//! ```
//!
//! # File formats
//!
//! [`MetricsConfig::from_file`] accepts `.toml` and `.json` files. Every
//! field is optional; missing fields take their defaults (2 decimal places,
//! `half_up` rounding, 5% trend threshold).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod metrics;

// Re-export core types
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use metrics::{MetricsConfig, MAX_PRECISION};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::metrics::MetricsConfig;
}
