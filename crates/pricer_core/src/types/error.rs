//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant identifies the offending input so that callers can report
/// it without re-deriving which parameter was rejected.
///
/// # Variants
/// - `InvalidParameter`: A named parameter is outside its valid domain
/// - `InvalidOptionType`: Option type other than call or put
/// - `InsufficientData`: Too few observations for a statistic
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "spot_price",
///     reason: "must be positive, got -1".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'spot_price': must be positive, got -1"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A named parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as used at the API boundary
        name: &'static str,
        /// Description of why the value was rejected
        reason: String,
    },

    /// Option type other than call or put.
    #[error("Unknown option type: {0}. Use 'call' or 'put'.")]
    InvalidOptionType(String),

    /// Too few observations to compute a statistic.
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Number of observations supplied
        actual: usize,
    },
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the rejected parameter, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PricingError::InvalidParameter { name, .. } => Some(*name),
            PricingError::InvalidOptionType(_) => Some("option_type"),
            PricingError::InsufficientData { .. } => None,
        }
    }
}
