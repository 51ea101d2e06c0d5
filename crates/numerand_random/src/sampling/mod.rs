//! # Range Sampling
//!
//! Random floats, integers, element picks and distinct-integer sequences
//! over caller-supplied ranges.
//!
//! ## Design
//!
//! - **Injected randomness**: every function takes a [`UniformSource`]
//!   (`crate::source`) instead of reaching for a global generator
//! - **Bounded loops**: no helper retries a draw, so constant sources
//!   terminate with deterministic results
//! - **Validation first**: invalid ranges and counts fail with
//!   `NumerandError::InvalidArgument` before any draw is consumed
//!
//! ## Module Structure
//!
//! - `range`: `integer_between`, `float_between`, `pick_among`, `shuffle`
//! - `distinct`: `distinct_integers_between` (dense and sparse strategies)
//! - `config`: [`SamplerConfig`] and [`DistinctStrategy`]
//! - `sampler`: [`Sampler`], which owns a source and a configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use numerand_random::sampling::{integer_between, Sampler};
//! use numerand_random::source::FixedSource;
//!
//! // Free functions borrow the source
//! let mut source = FixedSource::new(0.5).unwrap();
//! assert_eq!(integer_between(&mut source, 2, 4).unwrap(), 3);
//!
//! // A sampler owns it
//! let mut sampler = Sampler::new(source);
//! assert_eq!(*sampler.pick_among(&[3, 6, 4, 2]).unwrap(), 4);
//! ```
//!
//! [`UniformSource`]: crate::source::UniformSource

mod config;
mod distinct;
mod range;
mod sampler;

pub use config::{DistinctStrategy, SamplerConfig, DEFAULT_DENSE_RANGE_LIMIT, MAX_DENSE_RANGE_LEN};
pub use distinct::distinct_integers_between;
pub use range::{
    float_between, float_between_with_precision, integer_between, pick_among, shuffle,
    DEFAULT_PRECISION,
};
pub use sampler::Sampler;
