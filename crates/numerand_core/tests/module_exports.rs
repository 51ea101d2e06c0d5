//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that precision functions are accessible via absolute path.
#[test]
fn test_precision_module_exports() {
    use numerand_core::math::precision::fractional_digits;
    use numerand_core::math::precision::round_half_up;
    use numerand_core::math::precision::to_precision;

    assert_eq!(to_precision(3.141592_f64, 2), 3.14);
    assert_eq!(round_half_up(0.5_f64), 1.0);
    assert_eq!(fractional_digits(0.25_f64, 4), Some(2));
}

/// Test that math re-exports match the module paths.
#[test]
fn test_math_reexports() {
    use numerand_core::math::{round_half_up, to_precision};

    assert_eq!(to_precision(9.995_f64, 0), 10.0);
    assert_eq!(round_half_up(-3.5_f64), -3.0);
}

/// Test that the error type is accessible via both paths.
#[test]
fn test_error_exports() {
    use numerand_core::types::error::NumerandError as Direct;
    use numerand_core::types::{NumerandError, NumerandResult};

    fn fails() -> NumerandResult<()> {
        Err(NumerandError::invalid_argument("nope"))
    }

    let err: Direct = fails().unwrap_err();
    assert!(err.is_invalid_argument());
}
