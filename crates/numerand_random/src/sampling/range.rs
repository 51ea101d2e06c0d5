//! Uniform draws over numeric ranges and slices.
//!
//! Every function consumes draws from a caller-provided [`UniformSource`];
//! the number of draws is documented per function so that deterministic
//! sources give predictable results.

use numerand_core::math::precision::to_precision;
use numerand_core::types::{NumerandError, NumerandResult};

use crate::source::UniformSource;

/// Decimal places kept by `float_between` when no precision is given.
pub const DEFAULT_PRECISION: u32 = 2;

/// Draws an integer uniformly from the inclusive range `[min, max]`.
///
/// # Mathematical Definition
/// ```text
/// integer_between(min, max) = min + floor(u * (max - min + 1)),  u ∈ [0, 1)
/// ```
///
/// Consumes exactly one draw. The offset is computed in `i128` and clamped
/// to the range, so the full `i64` domain is supported and a source
/// returning values outside `[0, 1)` cannot escape the bounds.
///
/// # Errors
///
/// Returns `InvalidArgument` when `min > max`.
///
/// # Examples
/// ```
/// use numerand_random::sampling::integer_between;
/// use numerand_random::source::FixedSource;
///
/// let mut source = FixedSource::new(0.5).unwrap();
/// assert_eq!(integer_between(&mut source, 2, 4).unwrap(), 3);
/// ```
pub fn integer_between<S>(source: &mut S, min: i64, max: i64) -> NumerandResult<i64>
where
    S: UniformSource + ?Sized,
{
    if min > max {
        return Err(NumerandError::invalid_argument(format!(
            "integer range minimum {} exceeds maximum {}",
            min, max
        )));
    }

    let span = i128::from(max) - i128::from(min) + 1;
    let u = source.next_uniform();
    // `as` saturates and maps NaN to zero
    let offset = ((u * span as f64).floor() as i128).clamp(0, span - 1);

    // min + offset lies in [min, max]
    Ok((i128::from(min) + offset) as i64)
}

/// Draws a float uniformly from `[min, max)` and rounds it to
/// [`DEFAULT_PRECISION`] decimal places.
///
/// See [`float_between_with_precision`].
pub fn float_between<S>(source: &mut S, min: f64, max: f64) -> NumerandResult<f64>
where
    S: UniformSource + ?Sized,
{
    float_between_with_precision(source, min, max, DEFAULT_PRECISION)
}

/// Draws a float uniformly from `[min, max)` and rounds it to `precision`
/// decimal places.
///
/// # Mathematical Definition
/// ```text
/// raw = min + u * (max - min),  u ∈ [0, 1)
/// float_between(min, max, p) = to_precision(raw, p)
/// ```
///
/// Consumes exactly one draw. The raw value never reaches `max`, but the
/// rounded result can equal `to_precision(max, precision)`.
///
/// # Errors
///
/// Returns `InvalidArgument` when either bound is not finite or `min > max`.
///
/// # Examples
/// ```
/// use numerand_random::sampling::float_between_with_precision;
/// use numerand_random::source::FixedSource;
///
/// let mut source = FixedSource::new(0.5).unwrap();
/// let value = float_between_with_precision(&mut source, 2.0, 4.0, 4).unwrap();
/// assert_eq!(value, 3.0);
/// ```
pub fn float_between_with_precision<S>(
    source: &mut S,
    min: f64,
    max: f64,
    precision: u32,
) -> NumerandResult<f64>
where
    S: UniformSource + ?Sized,
{
    if !min.is_finite() || !max.is_finite() {
        return Err(NumerandError::invalid_argument(format!(
            "float range bounds must be finite, got [{}, {}]",
            min, max
        )));
    }
    if min > max {
        return Err(NumerandError::invalid_argument(format!(
            "float range minimum {} exceeds maximum {}",
            min, max
        )));
    }

    let u = source.next_uniform();
    let width = max - min;
    let raw = if width.is_finite() {
        min + u * width
    } else {
        // width overflows for bounds of opposite sign near f64::MAX
        min * (1.0 - u) + max * u
    };

    let raw = if raw.is_nan() { min } else { raw.clamp(min, max) };
    Ok(to_precision(raw, precision))
}

/// Picks one element of `items` uniformly at random.
///
/// The index is drawn with `integer_between(0, len - 1)`, consuming
/// exactly one draw.
///
/// # Errors
///
/// Returns `InvalidArgument` when `items` is empty.
///
/// # Examples
/// ```
/// use numerand_random::sampling::pick_among;
/// use numerand_random::source::FixedSource;
///
/// let mut source = FixedSource::new(0.5).unwrap();
/// assert_eq!(*pick_among(&mut source, &[3, 6, 4, 2]).unwrap(), 4);
/// ```
pub fn pick_among<'a, T, S>(source: &mut S, items: &'a [T]) -> NumerandResult<&'a T>
where
    S: UniformSource + ?Sized,
{
    let index = pick_index(source, items.len())?;
    Ok(&items[index])
}

/// Draws an index in `0..len` with `integer_between(0, len - 1)`.
pub(crate) fn pick_index<S>(source: &mut S, len: usize) -> NumerandResult<usize>
where
    S: UniformSource + ?Sized,
{
    let Some(last) = len.checked_sub(1) else {
        return Err(NumerandError::invalid_argument(
            "cannot pick from an empty sequence",
        ));
    };
    let last = i64::try_from(last).map_err(|_| {
        NumerandError::invalid_argument(format!("sequence of length {} is too long", len))
    })?;

    // integer_between(0, last) lies in [0, last]
    Ok(integer_between(source, 0, last)? as usize)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Iterates backwards, swapping position `i` with `integer_between(0, i)`,
/// so a slice of length `n` consumes `n - 1` draws (none for `n <= 1`).
/// Every permutation is equally likely for a uniform source.
///
/// # Examples
/// ```
/// use numerand_random::sampling::shuffle;
/// use numerand_random::source::FixedSource;
///
/// let mut source = FixedSource::new(0.0).unwrap();
/// let mut values = [1, 2, 3, 4];
/// shuffle(&mut source, &mut values);
/// assert_eq!(values, [2, 3, 4, 1]);
/// ```
pub fn shuffle<T, S>(source: &mut S, items: &mut [T])
where
    S: UniformSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        // pick_index only fails for len == 0
        if let Ok(j) = pick_index(source, i + 1) {
            items.swap(i, j);
        }
    }
}
