//! Decimal precision rounding.
//!
//! This module provides rounding of floating-point values to a fixed number
//! of decimal places. Ties are resolved upwards (towards +∞), so
//! `-2.5` rounds to `-2` and `2.5` rounds to `3`.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use num_traits::Float;

/// Rounds to the nearest integer, resolving ties towards +∞.
///
/// Unlike [`Float::round`], which rounds half away from zero, this keeps
/// the tie-breaking direction independent of the sign.
///
/// # Examples
/// ```
/// use numerand_core::math::precision::round_half_up;
///
/// assert_eq!(round_half_up(2.5_f64), 3.0);
/// assert_eq!(round_half_up(-2.5_f64), -2.0);
/// assert_eq!(round_half_up(-2.6_f64), -3.0);
/// ```
#[inline]
pub fn round_half_up<T: Float>(x: T) -> T {
    let half = T::one() / (T::one() + T::one());
    let floor = x.floor();

    // x - floor is exact for every finite x
    if x - floor >= half {
        floor + T::one()
    } else {
        floor
    }
}

/// Rounds `value` to `digits` decimal places.
///
/// # Mathematical Definition
/// ```text
/// to_precision(v, d) = round_half_up(v * 10^d) / 10^d
/// ```
///
/// # Edge Cases
/// - Non-finite values (NaN, ±∞) are returned unchanged.
/// - If `v * 10^d` overflows or is already integral, `value` is returned
///   unchanged: it carries no digits beyond the requested precision.
///
/// The function is idempotent: rounding an already rounded value with the
/// same `digits` returns it unchanged.
///
/// # Arguments
/// * `value` - Value to round
/// * `digits` - Number of decimal places to keep
///
/// # Examples
/// ```
/// use numerand_core::math::precision::to_precision;
///
/// assert_eq!(to_precision(3.141592_f64, 2), 3.14);
/// assert_eq!(to_precision(3.141592_f64, 0), 3.0);
/// assert_eq!(to_precision(-1.25_f64, 1), -1.2);
///
/// let once = to_precision(2.0_f64 / 3.0, 4);
/// assert_eq!(to_precision(once, 4), once);
/// ```
pub fn to_precision<T: Float>(value: T, digits: u32) -> T {
    if !value.is_finite() {
        return value;
    }

    let Some(ten) = T::from(10) else {
        return value;
    };
    let exponent = i32::try_from(digits).unwrap_or(i32::MAX);
    let factor = ten.powi(exponent);
    let scaled = value * factor;

    if !factor.is_finite() || !scaled.is_finite() || scaled.fract() == T::zero() {
        return value;
    }

    round_half_up(scaled) / factor
}

/// Returns the smallest number of decimal places that represents `value`
/// exactly under [`to_precision`], searching up to `max_digits`.
///
/// Returns `None` for non-finite values or when more than `max_digits`
/// places would be needed.
///
/// # Examples
/// ```
/// use numerand_core::math::precision::fractional_digits;
///
/// assert_eq!(fractional_digits(3.0_f64, 10), Some(0));
/// assert_eq!(fractional_digits(3.14_f64, 10), Some(2));
/// assert_eq!(fractional_digits(1.0_f64 / 3.0, 5), None);
/// ```
pub fn fractional_digits<T: Float>(value: T, max_digits: u32) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }

    (0..=max_digits).find(|&digits| to_precision(value, digits) == value)
}
