//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`MC_PRICER_*`)
//! 3. Config file
//! 4. Built-in defaults

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pricer_core::types::OptionType;
use pricer_pricing::comparison::{PricingDefaults, PricingRequest};
use serde::Deserialize;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mc_pricer.toml";

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "MC_PRICER_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Log level outside the supported set.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Output format outside the supported set.
    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// One or more values failed validation.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Configuration and timing detail
    Debug,
    /// Run start and finish
    #[default]
    Info,
    /// Problems that do not stop the run
    Warn,
    /// Failures only
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-layout human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// Fully layered CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format for results
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Fallback pricing parameters
    pub pricing: PricingDefaults,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `MC_PRICER_*` overrides read through `lookup`.
    ///
    /// Every malformed value is reported, not just the first.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("LOG_LEVEL") {
            match value.parse() {
                Ok(level) => self.log_level = level,
                Err(e) => problems.push(format!("{}LOG_LEVEL: {}", ENV_PREFIX, e)),
            }
        }
        if let Some(value) = var("FORMAT") {
            match value.parse() {
                Ok(format) => self.format = format,
                Err(e) => problems.push(format!("{}FORMAT: {}", ENV_PREFIX, e)),
            }
        }

        let pricing = &mut self.pricing;
        parse_env(&var, "SPOT_PRICE", &mut pricing.spot_price, &mut problems);
        parse_env(&var, "STRIKE_PRICE", &mut pricing.strike_price, &mut problems);
        parse_env(
            &var,
            "TIME_TO_EXPIRATION",
            &mut pricing.time_to_expiration,
            &mut problems,
        );
        parse_env(&var, "RISK_FREE_RATE", &mut pricing.risk_free_rate, &mut problems);
        parse_env(&var, "VOLATILITY", &mut pricing.volatility, &mut problems);
        parse_env(&var, "OPTION_TYPE", &mut pricing.option_type, &mut problems);
        parse_env(&var, "NUM_SIMULATIONS", &mut pricing.num_simulations, &mut problems);
        parse_env(&var, "NUM_STEPS", &mut pricing.num_steps, &mut problems);

        if let Some(value) = var("RANDOM_SEED") {
            if value.eq_ignore_ascii_case("none") {
                pricing.random_seed = None;
            } else {
                match value.parse() {
                    Ok(seed) => pricing.random_seed = Some(seed),
                    Err(e) => problems.push(format!("{}RANDOM_SEED: {}", ENV_PREFIX, e)),
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Merge command-line values (flags take precedence).
    pub fn merge_request(&mut self, request: &PricingRequest) -> Result<(), ConfigError> {
        let pricing = &mut self.pricing;
        if let Some(v) = request.spot_price {
            pricing.spot_price = v;
        }
        if let Some(v) = request.strike_price {
            pricing.strike_price = v;
        }
        if let Some(v) = request.time_to_expiration {
            pricing.time_to_expiration = v;
        }
        if let Some(v) = request.risk_free_rate {
            pricing.risk_free_rate = v;
        }
        if let Some(v) = request.volatility {
            pricing.volatility = v;
        }
        if let Some(v) = request.num_simulations {
            pricing.num_simulations = v;
        }
        if let Some(v) = request.num_steps {
            pricing.num_steps = v;
        }
        if request.unseeded {
            pricing.random_seed = None;
        } else if let Some(v) = request.random_seed {
            pricing.random_seed = Some(v);
        }
        if let Some(text) = &request.option_type {
            pricing.option_type = text
                .parse::<OptionType>()
                .map_err(|e| ConfigError::Invalid(vec![e.to_string()]))?;
        }
        Ok(())
    }

    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pricing;
        let mut problems = Vec::new();

        let mut positive = |name: &str, value: f64| {
            if !(value.is_finite() && value > 0.0) {
                problems.push(format!("{} must be positive, got {}", name, value));
            }
        };
        positive("spot_price", p.spot_price);
        positive("strike_price", p.strike_price);
        positive("volatility", p.volatility);

        if !(p.time_to_expiration.is_finite() && p.time_to_expiration >= 0.0) {
            problems.push(format!(
                "time_to_expiration must be non-negative, got {}",
                p.time_to_expiration
            ));
        }
        if !p.risk_free_rate.is_finite() {
            problems.push(format!("risk_free_rate must be finite, got {}", p.risk_free_rate));
        }
        if p.num_simulations == 0 {
            problems.push("num_simulations must be at least 1, got 0".to_string());
        }
        if p.num_steps == 0 {
            problems.push("num_steps must be at least 1, got 0".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

fn parse_env<V, T>(var: &V, name: &str, target: &mut T, problems: &mut Vec<String>)
where
    V: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    if let Some(value) = var(name) {
        match value.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(e) => problems.push(format!("{}{}={:?}: {}", ENV_PREFIX, name, value, e)),
        }
    }
}

/// Sources the configuration is built from
#[derive(Debug, Clone, Default)]
pub struct ConfigSources<'a> {
    /// Explicit `--config` path; missing files are an error only when given
    pub config_file: Option<&'a Path>,
    /// Pricing flags from the command line
    pub request: PricingRequest,
    /// `--log-level` flag
    pub log_level: Option<LogLevel>,
    /// `--format` flag
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// `lookup` resolves environment variables; the binary passes
/// `std::env::var`.
pub fn build_config<F>(sources: &ConfigSources<'_>, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match sources.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_request(&sources.request)?;
    if let Some(level) = sources.log_level {
        config.log_level = level;
    }
    if let Some(format) = sources.format {
        config.format = format;
    }

    config.validate()?;
    Ok(config)
}
