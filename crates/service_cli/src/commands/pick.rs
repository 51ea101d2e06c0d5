//! Pick command implementation
//!
//! Picks one of the given items at random.

use std::io::Write;

use numerand_random::sampling::Sampler;
use numerand_random::source::UniformSource;
use tracing::debug;

use crate::Result;

/// Run the pick command
pub fn run<S: UniformSource>(
    sampler: &mut Sampler<S>,
    items: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let picked = sampler.pick_among(items)?;
    debug!(candidates = items.len(), %picked, "picked item");

    writeln!(out, "{}", picked)?;
    Ok(())
}
