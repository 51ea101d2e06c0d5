//! Source-owning sampler.
//!
//! This module provides [`Sampler`], which bundles a [`UniformSource`] with
//! a [`SamplerConfig`] so callers do not have to thread both through every
//! call.

use numerand_core::types::NumerandResult;

use super::config::SamplerConfig;
use super::{distinct, range};
use crate::source::{SeededSource, ThreadSource, UniformSource};

/// Random helpers bound to an owned uniform source.
///
/// Each method consumes draws from the owned source exactly as the free
/// function of the same name in [`crate::sampling`] does.
///
/// # Examples
///
/// ```rust
/// use numerand_random::sampling::Sampler;
///
/// let mut sampler = Sampler::seeded(42);
///
/// let x = sampler.float_between(0.0, 10.0).unwrap();
/// assert!((0.0..=10.0).contains(&x));
///
/// let n = sampler.integer_between(1, 6).unwrap();
/// assert!((1..=6).contains(&n));
///
/// let colour = sampler.pick_among(&["red", "green", "blue"]).unwrap();
/// assert!(["red", "green", "blue"].contains(colour));
///
/// let lottery = sampler.distinct_integers_between(1, 49, 6).unwrap();
/// assert_eq!(lottery.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<S = ThreadSource> {
    source: S,
    config: SamplerConfig,
}

impl Sampler<ThreadSource> {
    /// Creates a sampler drawing from the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(ThreadSource::new())
    }
}

impl Sampler<SeededSource> {
    /// Creates a reproducible sampler from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSource::from_seed(seed))
    }
}

impl<S: UniformSource> Sampler<S> {
    /// Creates a sampler with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, SamplerConfig::default())
    }

    /// Creates a sampler with an explicit configuration.
    pub fn with_config(source: S, config: SamplerConfig) -> Self {
        Self { source, config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns the owned source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the owned source mutably, e.g. to draw raw uniforms.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the sampler and returns its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Random float in `[min, max)` rounded to two decimal places.
    pub fn float_between(&mut self, min: f64, max: f64) -> NumerandResult<f64> {
        range::float_between(&mut self.source, min, max)
    }

    /// Random float in `[min, max)` rounded to `precision` decimal places.
    pub fn float_between_with_precision(
        &mut self,
        min: f64,
        max: f64,
        precision: u32,
    ) -> NumerandResult<f64> {
        range::float_between_with_precision(&mut self.source, min, max, precision)
    }

    /// Random integer in `[min, max]`.
    pub fn integer_between(&mut self, min: i64, max: i64) -> NumerandResult<i64> {
        range::integer_between(&mut self.source, min, max)
    }

    /// Uniformly chosen element of `items`.
    pub fn pick_among<'a, T>(&mut self, items: &'a [T]) -> NumerandResult<&'a T> {
        range::pick_among(&mut self.source, items)
    }

    /// `count` distinct integers from `[min, max]`, in draw order.
    pub fn distinct_integers_between(
        &mut self,
        min: i64,
        max: i64,
        count: usize,
    ) -> NumerandResult<Vec<i64>> {
        distinct::distinct_integers_between(&mut self.source, min, max, count, &self.config)
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        range::shuffle(&mut self.source, items)
    }
}

impl Default for Sampler<ThreadSource> {
    fn default() -> Self {
        Self::thread_local()
    }
}
