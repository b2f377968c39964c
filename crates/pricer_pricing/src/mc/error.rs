//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        let name = match &err {
            ConfigError::InvalidPathCount(_) => "num_simulations",
            ConfigError::InvalidStepCount(_) => "num_steps",
            ConfigError::InvalidParameter { name, .. } => *name,
        };
        PricingError::invalid(name, err.to_string())
    }
}
