//! Error types for the CLI

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `mc-pricer` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Layered configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pricing library rejected its inputs
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument that clap accepted but the command cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Price history file could not be parsed
    #[error("Failed to read price history: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output could not be produced
    #[error("Failed to serialise output: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
