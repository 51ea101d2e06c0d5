//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Results are written to
//! the supplied writer, one value per line.

pub mod distinct;
pub mod float;
pub mod int;
pub mod pick;
pub mod round;
