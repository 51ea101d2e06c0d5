//! CLI error types.

use numerand_core::types::NumerandError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `numerand` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A helper rejected its arguments.
    #[error(transparent)]
    Numerand(#[from] NumerandError),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing results failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
