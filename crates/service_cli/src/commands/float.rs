//! Float command implementation
//!
//! Draws a random float in `[min, max)` rounded to a precision.

use std::io::Write;

use numerand_random::sampling::Sampler;
use numerand_random::source::UniformSource;
use tracing::debug;

use crate::Result;

/// Run the float command
pub fn run<S: UniformSource>(
    sampler: &mut Sampler<S>,
    min: f64,
    max: f64,
    precision: u32,
    out: &mut impl Write,
) -> Result<()> {
    let value = sampler.float_between_with_precision(min, max, precision)?;
    debug!(min, max, precision, value, "drew float");

    writeln!(out, "{}", value)?;
    Ok(())
}
