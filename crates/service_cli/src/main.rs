//! numerand CLI - Command Line Access to the Rounding and Sampling Helpers
//!
//! # Commands
//!
//! - `numerand round <value> [--digits D]` - Round to a number of decimal places
//! - `numerand float <min> <max> [--precision P]` - Random float in `[min, max)`
//! - `numerand int <min> <max>` - Random integer in `[min, max]`
//! - `numerand pick <item>...` - Random element of the given items
//! - `numerand distinct <min> <max> <count>` - Distinct integers from `[min, max]`
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration, logging and a
//! seeded source into the numerand_core and numerand_random helpers.
//! Every run draws from a seeded source; the seed is logged so any run can
//! be reproduced with `--seed`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use numerand_random::sampling::Sampler;
use numerand_random::source::SeededSource;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, CliConfig};

/// numerand helpers CLI
#[derive(Parser)]
#[command(name = "numerand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Round a value to a number of decimal places
    Round {
        /// Value to round
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Decimal places to keep
        #[arg(short, long)]
        digits: Option<u32>,
    },

    /// Draw a random float in [min, max)
    Float {
        /// Lower bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Upper bound (exclusive)
        #[arg(allow_negative_numbers = true)]
        max: f64,

        /// Decimal places to keep
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// Draw a random integer in [min, max]
    Int {
        /// Lower bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Pick one of the given items
    Pick {
        /// Items to choose from
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Draw distinct integers from [min, max]
    Distinct {
        /// Lower bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        max: i64,

        /// Number of distinct values
        count: usize,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    let source = match config.seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    };
    info!(
        seed = source.seed(),
        dense_range_limit = config.dense_range_limit,
        "numerand v{}",
        env!("CARGO_PKG_VERSION")
    );
    let mut sampler = Sampler::with_config(source, config.sampler_config());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Round { value, digits } => {
            let digits = CliConfig::resolve_precision(digits, config.default_digits)?;
            commands::round::run(value, digits, &mut out)
        }
        Commands::Float {
            min,
            max,
            precision,
        } => {
            let precision = CliConfig::resolve_precision(precision, config.default_precision)?;
            commands::float::run(&mut sampler, min, max, precision, &mut out)
        }
        Commands::Int { min, max } => commands::int::run(&mut sampler, min, max, &mut out),
        Commands::Pick { items } => commands::pick::run(&mut sampler, &items, &mut out),
        Commands::Distinct { min, max, count } => {
            commands::distinct::run(&mut sampler, min, max, count, &mut out)
        }
    };
    result?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_bounds() {
        let cli = Cli::try_parse_from(["numerand", "int", "-5", "5", "--seed", "7"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(cli.command, Commands::Int { min: -5, max: 5 }));
    }

    #[test]
    fn test_parse_distinct() {
        let cli = Cli::try_parse_from(["numerand", "distinct", "1", "6", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Distinct {
                min: 1,
                max: 6,
                count: 3
            }
        ));
    }

    #[test]
    fn test_parse_round_with_digits() {
        let cli = Cli::try_parse_from(["numerand", "round", "-2.345", "--digits", "1"]).unwrap();
        match cli.command {
            Commands::Round { value, digits } => {
                approx::assert_relative_eq!(value, -2.345);
                assert_eq!(digits, Some(1));
            }
            _ => panic!("expected round command"),
        }
    }

    #[test]
    fn test_precision_flag_is_capped() {
        let cli =
            Cli::try_parse_from(["numerand", "float", "0", "1", "--precision", "40"]).unwrap();
        let Commands::Float { precision, .. } = cli.command else {
            panic!("expected float command");
        };
        let defaults = CliConfig::default();
        assert!(matches!(
            CliConfig::resolve_precision(precision, defaults.default_precision),
            Err(config::ConfigError::InvalidPrecision(40))
        ));
    }

    #[test]
    fn test_pick_requires_items() {
        assert!(Cli::try_parse_from(["numerand", "pick"]).is_err());
    }

    #[test]
    fn test_cli_args_conversion() {
        let cli = Cli::try_parse_from(["numerand", "-v", "--log-level", "info", "int", "1", "2"])
            .unwrap();
        let args = CliArgs::from(&cli);
        assert!(args.verbose);
        assert_eq!(args.log_level.as_deref(), Some("info"));
        assert!(args.config_file.is_none());
    }
}
