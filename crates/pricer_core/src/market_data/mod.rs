//! Market data statistics.
//!
//! Estimates model inputs from observed prices. Retrieving the prices is the
//! caller's concern; this module only consumes them.
//!
//! # Components
//!
//! - [`volatility`]: Historical volatility from close-price series

pub mod volatility;

// Re-export commonly used types
pub use volatility::{
    estimate_volatility, log_returns, PriceHistory, PriceObservation, MIN_PRICES,
    TRADING_DAYS_PER_YEAR,
};
