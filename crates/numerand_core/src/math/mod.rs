//! Numeric helpers.
//!
//! - [`precision`]: Rounding to a fixed number of decimal places

pub mod precision;

pub use precision::{fractional_digits, round_half_up, to_precision};
