//! Thread-local source.

use rand::rngs::ThreadRng;
use rand::Rng;

use super::UniformSource;

/// Uniform source backed by `rand::thread_rng()`.
///
/// This is the default source when the caller does not care about
/// reproducibility. Seeding and reseeding are handled by `rand`.
#[derive(Debug, Clone, Default)]
pub struct ThreadSource {
    inner: ThreadRng,
}

impl ThreadSource {
    /// Creates a handle to the current thread's generator.
    pub fn new() -> Self {
        Self {
            inner: rand::thread_rng(),
        }
    }
}

impl UniformSource for ThreadSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen()
    }
}
