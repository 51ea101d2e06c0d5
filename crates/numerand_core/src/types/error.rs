//! Error types for structured error handling.
//!
//! This module provides:
//! - `NumerandError`: Errors from rounding and randomisation helpers

use thiserror::Error;

/// Categorised helper errors.
///
/// Every failure mode of the numeric and randomisation helpers is an
/// argument the operation cannot honour. Errors are surfaced immediately;
/// no operation retries or returns a partial result.
///
/// # Examples
/// ```
/// use numerand_core::types::NumerandError;
///
/// let err = NumerandError::InvalidArgument("empty sequence".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: empty sequence");
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumerandError {
    /// An argument is outside the domain accepted by the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl NumerandError {
    /// Builds an [`NumerandError::InvalidArgument`] from any message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        NumerandError::InvalidArgument(msg.into())
    }

    /// Returns true for [`NumerandError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NumerandError::InvalidArgument(_))
    }
}

/// Result alias used across numerand crates.
pub type NumerandResult<T> = Result<T, NumerandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = NumerandError::invalid_argument("count 7 exceeds range of 6");
        assert_eq!(
            err.to_string(),
            "Invalid argument: count 7 exceeds range of 6"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&NumerandError::invalid_argument("x"));
    }

    #[test]
    fn test_clone_and_eq() {
        let err = NumerandError::invalid_argument("min > max");
        assert_eq!(err.clone(), err);
        assert!(err.is_invalid_argument());
    }
}
