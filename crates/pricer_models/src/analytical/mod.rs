//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form benchmark used to validate the
//! Monte Carlo engine:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where precision
//!   can be traded for speed
//! - **Pure**: no simulation state, no randomness

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, BlackScholes};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
