//! # Tally Core
//!
//! Core types, rounding rules, and errors for the Tally financial metrics library.
//!
//! This crate provides the foundational building blocks used throughout Tally:
//!
//! - **Types**: Bill-of-materials line items, dated series points, and the
//!   small result records returned by the metric functions
//! - **Rounding**: A precision plus rounding strategy applied to every
//!   monetary and percentage result
//! - **Errors**: A shared error type for parsing and input boundaries
//!
//! ## Design Philosophy
//!
//! - **Exact Money**: All amounts are `rust_decimal::Decimal`, never `f64`
//! - **Plain Values**: Every type is an immutable value with no identity
//! - **Explicit Over Implicit**: Sentinels like an unreachable break-even
//!   are modelled as enum variants, not magic numbers
//!
//! ## Example
//!
//! ```rust
//! use tally_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let flour = LineItem::new(dec!(2.50), dec!(4));
//! assert_eq!(flour.total(), dec!(10.00));
//!
//! let rounding = Rounding::default();
//! assert_eq!(rounding.apply(dec!(33.335)), dec!(33.34));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TallyError, TallyResult};
    pub use crate::types::{
        BreakEven, CashFlowResult, DataPoint, LineItem, MarginResult, Rounding, RoundingMode,
        TrendDirection, TrendResult,
    };
}

// Re-export commonly used types at crate root
pub use error::{TallyError, TallyResult};
pub use types::{
    BreakEven, CashFlowResult, DataPoint, LineItem, MarginResult, Rounding, RoundingMode,
    TrendDirection, TrendResult,
};
