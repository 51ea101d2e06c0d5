//! Round command implementation
//!
//! Rounds a value to a fixed number of decimal places.

use std::io::Write;

use numerand_core::math::precision::to_precision;
use tracing::debug;

use crate::Result;

/// Run the round command
pub fn run(value: f64, digits: u32, out: &mut impl Write) -> Result<()> {
    let rounded = to_precision(value, digits);
    debug!(value, digits, rounded, "rounded value");

    writeln!(out, "{}", rounded)?;
    Ok(())
}
