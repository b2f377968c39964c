//! Stochastic price models.
//!
//! - [`GbmModel`]: Geometric Brownian Motion with the exact log-space step
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{ModelParams, OptionType};
//! use pricer_models::models::GbmModel;
//!
//! let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let model = GbmModel::risk_neutral(&params);
//!
//! let coeffs = model.step_coefficients(1.0 / 252.0);
//! let mut s = model.spot();
//! for z in [0.3, -1.2, 0.8] {
//!     s = coeffs.apply(s, z);
//! }
//! assert!(s > 0.0);
//! ```

pub mod gbm;

pub use gbm::{GbmModel, StepCoefficients};
