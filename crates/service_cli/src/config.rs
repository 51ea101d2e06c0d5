//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! CLI arguments.

use numerand_random::sampling::{
    SamplerConfig, DEFAULT_DENSE_RANGE_LIMIT, DEFAULT_PRECISION, MAX_DENSE_RANGE_LEN,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Largest precision accepted for rounding and float draws.
///
/// `f64` carries about 15 significant decimal digits.
pub const MAX_PRECISION: u32 = 15;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid precision: {0}. Must be at most 15")]
    InvalidPrecision(u32),

    #[error("Invalid dense range limit: {0}. Must be at most 16777216")]
    InvalidDenseRangeLimit(u64),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Decimal places for `float` when `--precision` is omitted
    pub default_precision: u32,
    /// Decimal places for `round` when `--digits` is omitted
    pub default_digits: u32,
    /// Seed for reproducible draws; a fresh one is chosen when absent
    pub seed: Option<u64>,
    /// Ranges up to this length are sampled by permutation
    pub dense_range_limit: u64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_precision: DEFAULT_PRECISION,
            default_digits: DEFAULT_PRECISION,
            seed: None,
            dense_range_limit: DEFAULT_DENSE_RANGE_LIMIT,
            log_level: LogLevel::Warn,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Override fields from environment variables.
    ///
    /// `lookup` returns the value of a variable, if set. Recognised
    /// variables: `NUMERAND_SEED`, `NUMERAND_PRECISION`, `NUMERAND_LOG_LEVEL`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("NUMERAND_SEED") {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("NUMERAND_SEED={}", seed)))?;
            self.seed = Some(seed);
        }

        if let Some(precision) = lookup("NUMERAND_PRECISION") {
            let precision = precision.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("NUMERAND_PRECISION={}", precision))
            })?;
            self.default_precision = precision;
            self.default_digits = precision;
        }

        if let Some(log_level) = lookup("NUMERAND_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_precision(self.default_precision)?;
        check_precision(self.default_digits)?;
        if self.dense_range_limit > MAX_DENSE_RANGE_LEN {
            return Err(ConfigError::InvalidDenseRangeLimit(self.dense_range_limit));
        }
        Ok(())
    }

    /// Resolve a precision flag against the configured default.
    ///
    /// Flag values go through the same `MAX_PRECISION` check as file and
    /// environment values.
    pub fn resolve_precision(flag: Option<u32>, default: u32) -> Result<u32, ConfigError> {
        check_precision(flag.unwrap_or(default))
    }

    /// Sampler configuration derived from these settings
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig::new(self.dense_range_limit)
    }
}

/// Returns `precision` if it is at most [`MAX_PRECISION`].
pub fn check_precision(precision: u32) -> Result<u32, ConfigError> {
    if precision > MAX_PRECISION {
        return Err(ConfigError::InvalidPrecision(precision));
    }
    Ok(precision)
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag, equivalent to `--log-level debug`
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.default_precision, 2);
        assert_eq!(config.default_digits, 2);
        assert_eq!(config.seed, None);
        assert_eq!(config.dense_range_limit, 65_536);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let config = CliConfig::from_toml_str(
            r#"
            default_precision = 4
            seed = 99
            dense_range_limit = 1024
            log_level = "info"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_precision, 4);
        assert_eq!(config.default_digits, 2);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.sampler_config(), SamplerConfig::new(1024));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_values() {
        assert!(matches!(
            CliConfig::from_toml_str("default_precision = 40"),
            Err(ConfigError::InvalidPrecision(40))
        ));
        assert!(matches!(
            CliConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_dense_range_limit() {
        assert!(matches!(
            CliConfig::from_toml_str("dense_range_limit = 18446744073709551615"),
            Err(ConfigError::FileError(_)) | Err(ConfigError::InvalidDenseRangeLimit(_))
        ));
        let config = CliConfig {
            dense_range_limit: MAX_DENSE_RANGE_LEN + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDenseRangeLimit(_))
        ));
        let config = CliConfig {
            dense_range_limit: MAX_DENSE_RANGE_LEN,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_precision() {
        assert_eq!(CliConfig::resolve_precision(None, 4).unwrap(), 4);
        assert_eq!(CliConfig::resolve_precision(Some(15), 2).unwrap(), 15);
        assert!(matches!(
            CliConfig::resolve_precision(Some(16), 2),
            Err(ConfigError::InvalidPrecision(16))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/numerand.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("NUMERAND_SEED", "42"),
                ("NUMERAND_PRECISION", "5"),
                ("NUMERAND_LOG_LEVEL", "error"),
            ]))
            .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.default_precision, 5);
        assert_eq!(config.default_digits, 5);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_apply_env_invalid_seed() {
        let mut config = CliConfig::default();
        let result = config.apply_env(env(&[("NUMERAND_SEED", "abc")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = CliConfig {
            seed: Some(1),
            ..Default::default()
        };
        let cli = CliArgs {
            seed: Some(2),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_verbose_enables_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
