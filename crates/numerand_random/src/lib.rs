//! # numerand_random: Randomisation Helpers
//!
//! ## Layer 2 Role
//!
//! numerand_random builds on numerand_core and provides:
//! - Uniform random sources (`source`): thread-local, seeded, fixed and replayed
//! - Range sampling (`sampling`): floats, integers, element picks and
//!   distinct-integer sequences
//!
//! ## Quick Start
//!
//! The crate-root functions draw from the thread-local generator:
//!
//! ```rust
//! let roll = numerand_random::integer_between(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let price = numerand_random::float_between(9.5, 10.5).unwrap();
//! assert!((9.5..=10.5).contains(&price));
//! ```
//!
//! For reproducible or deterministic results, inject a source:
//!
//! ```rust
//! use numerand_random::sampling::Sampler;
//! use numerand_random::source::FixedSource;
//!
//! let mut sampler = Sampler::new(FixedSource::new(0.0).unwrap());
//! assert_eq!(sampler.distinct_integers_between(1, 6, 3).unwrap(), vec![2, 3, 4]);
//! ```

#![deny(missing_docs)]

pub mod sampling;
pub mod source;

use numerand_core::types::NumerandResult;

pub use sampling::{Sampler, SamplerConfig};
pub use source::{FixedSource, ReplaySource, SeededSource, ThreadSource, UniformSource};

/// Random float in `[min, max)` rounded to two decimal places, drawn from
/// the thread-local generator.
pub fn float_between(min: f64, max: f64) -> NumerandResult<f64> {
    sampling::float_between(&mut ThreadSource::new(), min, max)
}

/// Random float in `[min, max)` rounded to `precision` decimal places,
/// drawn from the thread-local generator.
pub fn float_between_with_precision(min: f64, max: f64, precision: u32) -> NumerandResult<f64> {
    sampling::float_between_with_precision(&mut ThreadSource::new(), min, max, precision)
}

/// Random integer in `[min, max]` drawn from the thread-local generator.
pub fn integer_between(min: i64, max: i64) -> NumerandResult<i64> {
    sampling::integer_between(&mut ThreadSource::new(), min, max)
}

/// Uniformly chosen element of `items`, drawn from the thread-local generator.
pub fn pick_among<T>(items: &[T]) -> NumerandResult<&T> {
    sampling::pick_among(&mut ThreadSource::new(), items)
}

/// `count` distinct integers from `[min, max]`, drawn from the thread-local
/// generator with the default [`SamplerConfig`].
pub fn distinct_integers_between(min: i64, max: i64, count: usize) -> NumerandResult<Vec<i64>> {
    sampling::distinct_integers_between(
        &mut ThreadSource::new(),
        min,
        max,
        count,
        &SamplerConfig::default(),
    )
}
