//! Configuration management for the phone book.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Every variable has a default, so an empty environment yields
//! a working configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::render::OutputFormat;
use crate::seed::SeedPolicy;
use std::env;

/// Configuration for the phone book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Load the sample entries at start-up (default: true)
    pub seed_samples: bool,

    /// Behaviour when a sample entry fails to load (default: stop)
    pub seed_policy: SeedPolicy,

    /// Output format for results and errors (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PHONEBOOK_SEED_SAMPLES`: Load sample entries (default: true)
    /// - `PHONEBOOK_SEED_POLICY`: `stop` or `continue` (default: stop)
    /// - `PHONEBOOK_OUTPUT`: `text` or `json` (default: text)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let seed_samples = Self::parse_env_bool("PHONEBOOK_SEED_SAMPLES", defaults.seed_samples)?;
        let seed_policy = match env::var("PHONEBOOK_SEED_POLICY") {
            Ok(val) => Self::parse_seed_policy(&val)?,
            Err(_) => defaults.seed_policy,
        };
        let output_format = match env::var("PHONEBOOK_OUTPUT") {
            Ok(val) => Self::parse_output_format(&val)?,
            Err(_) => defaults.output_format,
        };

        Ok(Config {
            log_level,
            seed_samples,
            seed_policy,
            output_format,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_seed_policy(val: &str) -> ConfigResult<SeedPolicy> {
        match val.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(SeedPolicy::StopOnError),
            "continue" => Ok(SeedPolicy::ContinueOnError),
            _ => Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_SEED_POLICY".to_string(),
                reason: format!("Must be stop or continue, got: {}", val),
            }),
        }
    }

    fn parse_output_format(val: &str) -> ConfigResult<OutputFormat> {
        match val.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_OUTPUT".to_string(),
                reason: format!("Must be text or json, got: {}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            seed_samples: true,
            seed_policy: SeedPolicy::StopOnError,
            output_format: OutputFormat::Text,
        }
    }
}
