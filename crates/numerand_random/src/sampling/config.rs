//! Sampler configuration types.

/// Largest range length sampled by permutation by default.
pub const DEFAULT_DENSE_RANGE_LIMIT: u64 = 65_536;

/// Largest range length ever sampled by permutation.
///
/// Longer ranges are sampled sparsely whatever the configured limit, so the
/// dense pool never exceeds 128 MiB of `i64` values.
pub const MAX_DENSE_RANGE_LEN: u64 = 1 << 24;

/// Strategy used to draw distinct integers from a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctStrategy {
    /// Materialise the whole range and permute it.
    ///
    /// Costs `N - 1` draws and `O(N)` memory for a range of length `N`.
    Dense,
    /// Floyd's selection over the range, then a permutation of the result.
    ///
    /// Costs `2 * count - 1` draws and `O(count)` memory.
    Sparse,
}

/// Configuration for the distinct-integer sampler.
///
/// # Example
///
/// ```
/// use numerand_random::sampling::{DistinctStrategy, SamplerConfig};
///
/// let config = SamplerConfig::default();
/// assert_eq!(config.strategy_for(6), DistinctStrategy::Dense);
/// assert_eq!(config.strategy_for(1 << 40), DistinctStrategy::Sparse);
///
/// let sparse = SamplerConfig::always_sparse();
/// assert_eq!(sparse.strategy_for(6), DistinctStrategy::Sparse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Ranges with at most this many values are sampled densely.
    ///
    /// Zero disables the dense strategy. Values above
    /// [`MAX_DENSE_RANGE_LEN`] behave as that ceiling.
    pub dense_range_limit: u64,
}

impl Default for SamplerConfig {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `dense_range_limit`: 65 536
    fn default() -> Self {
        Self {
            dense_range_limit: DEFAULT_DENSE_RANGE_LIMIT,
        }
    }
}

impl SamplerConfig {
    /// Create a new configuration with the given dense range limit.
    pub fn new(dense_range_limit: u64) -> Self {
        Self { dense_range_limit }
    }

    /// Create a configuration that permutes every range up to
    /// [`MAX_DENSE_RANGE_LEN`] values.
    pub fn always_dense() -> Self {
        Self {
            dense_range_limit: MAX_DENSE_RANGE_LEN,
        }
    }

    /// Create a configuration that never materialises the range.
    pub fn always_sparse() -> Self {
        Self {
            dense_range_limit: 0,
        }
    }

    /// Returns the strategy used for a range of `range_len` values.
    pub fn strategy_for(&self, range_len: u128) -> DistinctStrategy {
        let limit = self.dense_range_limit.min(MAX_DENSE_RANGE_LEN);
        if range_len <= u128::from(limit) {
            DistinctStrategy::Dense
        } else {
            DistinctStrategy::Sparse
        }
    }
}
