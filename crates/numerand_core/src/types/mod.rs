//! Shared types.
//!
//! - `error`: Structured error type for all numerand helpers
//!
//! # Re-exports
//!
//! [`NumerandError`] and [`NumerandResult`] are re-exported at this module level.

pub mod error;

pub use error::{NumerandError, NumerandResult};
