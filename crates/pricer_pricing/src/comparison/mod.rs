//! Monte Carlo versus Black-Scholes comparison.
//!
//! The entry points price one contract with both methods and return an
//! immutable [`PricingResult`]:
//!
//! - [`compare`] / [`compare_with_rng`]: validated parameters and configuration
//! - [`price_option`]: flat all-optional request resolved against defaults
//! - [`convergence_study`]: the same contract over several path counts
//!
//! [`render_summary`] formats a result as a fixed-layout text report.

pub mod agreement;
pub mod convergence;
pub mod orchestrator;
pub mod request;
pub mod result;
pub mod summary;

pub use agreement::{Agreement, EXCELLENT_THRESHOLD_PCT, GOOD_THRESHOLD_PCT};
pub use convergence::{convergence_study, ConvergencePoint, ConvergenceStudy};
pub use orchestrator::{compare, compare_with_rng, price_option};
pub use request::{PricingDefaults, PricingRequest};
pub use result::PricingResult;
pub use summary::{group_thousands, render_summary};
