//! Int command implementation
//!
//! Draws a random integer in `[min, max]`.

use std::io::Write;

use numerand_random::sampling::Sampler;
use numerand_random::source::UniformSource;
use tracing::debug;

use crate::Result;

/// Run the int command
pub fn run<S: UniformSource>(
    sampler: &mut Sampler<S>,
    min: i64,
    max: i64,
    out: &mut impl Write,
) -> Result<()> {
    let value = sampler.integer_between(min, max)?;
    debug!(min, max, value, "drew integer");

    writeln!(out, "{}", value)?;
    Ok(())
}
