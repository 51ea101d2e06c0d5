//! Uniform random sources.
//!
//! Every sampling helper draws from a [`UniformSource`] passed in by the
//! caller instead of a hidden global generator. Swapping the source is how
//! callers choose between fresh entropy, reproducible runs, and fully
//! deterministic tests.
//!
//! ## Module Structure
//!
//! - [`SeededSource`]: reproducible PRNG wrapper with seed tracking
//! - [`ThreadSource`]: the thread-local generator of `rand`
//! - [`FixedSource`] / [`ReplaySource`]: deterministic substitutes
//!
//! Closures of type `FnMut() -> f64` are sources as well.

mod seeded;
mod thread;

pub use seeded::SeededSource;
pub use thread::ThreadSource;

use numerand_core::types::{NumerandError, NumerandResult};

/// A capability producing values uniformly distributed over `[0, 1)`.
///
/// Implementations are expected to honour the half-open interval. The
/// sampling helpers clamp their results to the requested range, so a source
/// returning `1.0` or a negative value degrades the distribution but never
/// yields an out-of-range result.
///
/// # Examples
///
/// ```rust
/// use numerand_random::source::UniformSource;
///
/// let mut calls = 0;
/// let mut source = || {
///     calls += 1;
///     0.25
/// };
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
pub trait UniformSource {
    /// Draws the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self()
    }
}

fn check_unit_interval(value: f64) -> NumerandResult<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(NumerandError::invalid_argument(format!(
            "uniform value {} is outside [0, 1)",
            value
        )))
    }
}

/// A source that returns the same value on every draw.
///
/// # Examples
///
/// ```rust
/// use numerand_random::source::{FixedSource, UniformSource};
///
/// let mut source = FixedSource::new(0.5).unwrap();
/// assert_eq!(source.next_uniform(), 0.5);
/// assert_eq!(source.next_uniform(), 0.5);
/// assert!(FixedSource::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource {
    value: f64,
}

impl FixedSource {
    /// Creates a source pinned to `value`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `value` is outside `[0, 1)` or NaN.
    pub fn new(value: f64) -> NumerandResult<Self> {
        Ok(Self {
            value: check_unit_interval(value)?,
        })
    }

    /// Returns the pinned value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl UniformSource for FixedSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.value
    }
}

/// A source that cycles through a recorded sequence of values.
///
/// Useful for reproducing a specific draw sequence, such as one captured
/// from a [`SeededSource`].
///
/// # Examples
///
/// ```rust
/// use numerand_random::source::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.1, 0.9]).unwrap();
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.next_uniform(), 0.9);
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    draws: usize,
}

impl ReplaySource {
    /// Creates a source replaying `values` in order, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `values` is empty or any value is
    /// outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> NumerandResult<Self> {
        if values.is_empty() {
            return Err(NumerandError::invalid_argument(
                "replay sequence must not be empty",
            ));
        }
        for &value in &values {
            check_unit_interval(value)?;
        }
        Ok(Self { values, draws: 0 })
    }

    /// Returns the number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_rejects_out_of_range() {
        assert!(FixedSource::new(-0.1).is_err());
        assert!(FixedSource::new(1.0).is_err());
        assert!(FixedSource::new(f64::NAN).is_err());
        assert!(FixedSource::new(0.0).is_ok());
        assert!(FixedSource::new(0.999_999).is_ok());
    }

    #[test]
    fn test_fixed_source_value() {
        let mut source = FixedSource::new(0.75).unwrap();
        assert_eq!(source.value(), 0.75);
        for _ in 0..10 {
            assert_eq!(source.next_uniform(), 0.75);
        }
    }

    #[test]
    fn test_replay_source_cycles() {
        let mut source = ReplaySource::new(vec![0.0, 0.5, 0.25]).unwrap();
        let drawn: Vec<f64> = (0..6).map(|_| source.next_uniform()).collect();
        assert_eq!(drawn, vec![0.0, 0.5, 0.25, 0.0, 0.5, 0.25]);
        assert_eq!(source.draws(), 6);
    }

    #[test]
    fn test_replay_source_validation() {
        let err = ReplaySource::new(vec![]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(ReplaySource::new(vec![0.2, 1.5]).is_err());
    }

    #[test]
    fn test_closure_source() {
        let mut next = 0.0;
        let mut source = move || {
            next += 0.25;
            next - 0.25
        };
        assert_eq!(source.next_uniform(), 0.0);
        assert_eq!(source.next_uniform(), 0.25);
        assert_eq!(source.next_uniform(), 0.5);
    }

    #[test]
    fn test_dyn_source() {
        let mut fixed = FixedSource::new(0.125).unwrap();
        let source: &mut dyn UniformSource = &mut fixed;
        assert_eq!(source.next_uniform(), 0.125);
    }
}
