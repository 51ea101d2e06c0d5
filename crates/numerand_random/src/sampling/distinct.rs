//! Distinct-integer sampling.
//!
//! Draws `count` unique integers from an inclusive range without
//! replacement. Two strategies share the same contract and both finish
//! after a bounded number of draws for any source, constant ones included:
//!
//! - **Dense**: materialise `[min, max]`, run a backwards Durstenfeld pass
//!   and keep the first `count` values. Used while the range is small.
//! - **Sparse**: Floyd's selection (Bentley & Floyd, 1987), which never
//!   rejects a draw: the `k`-th step draws from `[min, max - count + k]` and
//!   falls back to the step's upper bound on a repeat. The picks are then
//!   permuted so their order is uniform too.
//!
//! Reference: Bentley, J. & Floyd, R. (1987). "A Sample of Brilliance".
//! Communications of the ACM 30(9).

use std::collections::HashSet;

use numerand_core::types::{NumerandError, NumerandResult};
use tracing::{debug, trace};

use super::config::{DistinctStrategy, SamplerConfig};
use super::range::{integer_between, shuffle};
use crate::source::UniformSource;

/// Draws `count` distinct integers from `[min, max]`, in draw order.
///
/// The strategy is chosen by [`SamplerConfig::strategy_for`] from the range
/// length `N = max - min + 1`; ranges longer than
/// [`MAX_DENSE_RANGE_LEN`](super::MAX_DENSE_RANGE_LEN) are always sparse.
/// A deterministic source yields a deterministic result; `count == 0`
/// returns an empty vector without drawing.
///
/// # Errors
///
/// Returns `InvalidArgument` when `min > max` or `count > N`.
///
/// # Examples
/// ```
/// use numerand_random::sampling::{distinct_integers_between, SamplerConfig};
/// use numerand_random::source::FixedSource;
///
/// let mut source = FixedSource::new(0.0).unwrap();
/// let config = SamplerConfig::default();
/// let picked = distinct_integers_between(&mut source, 1, 6, 3, &config).unwrap();
/// assert_eq!(picked, vec![2, 3, 4]);
///
/// assert!(distinct_integers_between(&mut source, 1, 6, 7, &config).is_err());
/// ```
pub fn distinct_integers_between<S>(
    source: &mut S,
    min: i64,
    max: i64,
    count: usize,
    config: &SamplerConfig,
) -> NumerandResult<Vec<i64>>
where
    S: UniformSource + ?Sized,
{
    if min > max {
        return Err(NumerandError::invalid_argument(format!(
            "integer range minimum {} exceeds maximum {}",
            min, max
        )));
    }

    // Range lengths go up to 2^64, one past u64::MAX
    let range_len = (i128::from(max) - i128::from(min) + 1) as u128;
    if count as u128 > range_len {
        return Err(NumerandError::invalid_argument(format!(
            "cannot draw {} distinct integers from [{}, {}], which holds {}",
            count, min, max, range_len
        )));
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let strategy = config.strategy_for(range_len);
    debug!(min, max, count, ?strategy, "sampling distinct integers");

    match strategy {
        DistinctStrategy::Dense => Ok(permute_range(source, min, max, count)),
        DistinctStrategy::Sparse => floyd_selection(source, min, max, count),
    }
}

fn permute_range<S>(source: &mut S, min: i64, max: i64, count: usize) -> Vec<i64>
where
    S: UniformSource + ?Sized,
{
    let mut pool: Vec<i64> = (min..=max).collect();
    trace!(pool_len = pool.len(), "permuting materialised range");
    shuffle(source, &mut pool);
    pool.truncate(count);
    pool
}

fn floyd_selection<S>(
    source: &mut S,
    min: i64,
    max: i64,
    count: usize,
) -> NumerandResult<Vec<i64>>
where
    S: UniformSource + ?Sized,
{
    let mut seen = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);

    // count <= max - min + 1, so first >= min
    let first = (i128::from(max) - count as i128 + 1) as i64;
    for upper in first..=max {
        let candidate = integer_between(source, min, upper)?;
        // upper was outside every earlier draw range, so it is always new
        let value = if seen.insert(candidate) {
            candidate
        } else {
            seen.insert(upper);
            upper
        };
        picked.push(value);
    }

    trace!(selected = picked.len(), "floyd selection complete");
    shuffle(source, &mut picked);
    Ok(picked)
}
