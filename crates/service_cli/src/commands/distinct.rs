//! Distinct command implementation
//!
//! Draws distinct integers from `[min, max]`, one per line in draw order.

use std::io::Write;

use numerand_random::sampling::Sampler;
use numerand_random::source::UniformSource;
use tracing::{debug, info};

use crate::Result;

/// Run the distinct command
pub fn run<S: UniformSource>(
    sampler: &mut Sampler<S>,
    min: i64,
    max: i64,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    info!("Drawing {} distinct integers from [{}, {}]", count, min, max);

    let values = sampler.distinct_integers_between(min, max, count)?;
    debug!(drawn = values.len(), "distinct draw complete");

    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
