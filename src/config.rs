//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file first (via `dotenv`), so every key below can
//! live there as well. Command-line flags override these values.

use crate::output::OutputFormat;
use chrono_tz::Tz;
use std::error::Error;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_STRICT_MASK: &str = "SUBNET_CALC_STRICT_MASK";
pub const ENV_TZ: &str = "SUBNET_CALC_TZ";

/// Default log4rs config file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Report format when `--format` is not given.
    pub format: OutputFormat,
    /// Reject masks with holes.
    pub strict_mask: bool,
    /// Timezone of the banner timestamp.
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            format: OutputFormat::Terminal,
            strict_mask: false,
            timezone: chrono_tz::UTC,
        }
    }
}

impl Config {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(strict) = lookup(ENV_STRICT_MASK) {
            config.strict_mask = parse_bool(&strict)
                .ok_or_else(|| format!("{ENV_STRICT_MASK}: '{strict}' is not a boolean"))?;
        }
        if let Some(tz) = lookup(ENV_TZ) {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("{ENV_TZ}: {e}"))?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
