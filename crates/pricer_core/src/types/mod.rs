//! Core contract and error types.
//!
//! This module provides:
//! - `option_type`: Call/put contract type with case-insensitive parsing
//! - `params`: Validated contract and market parameters
//! - `error`: Structured error type for validation and pricing operations
//!
//! # Re-exports
//!
//! - [`OptionType`] from `option_type`
//! - [`ModelParams`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;
pub mod params;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option_type::OptionType;
pub use params::ModelParams;
