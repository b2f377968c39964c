//! # pricer_pricing: Monte Carlo Engine and Comparison (Layer 3)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the Layer 2 models into prices:
//! - Seeded random number generation (`rng`)
//! - GBM path simulation and the Monte Carlo European pricer (`mc`)
//! - Monte Carlo versus Black-Scholes comparison (`comparison`)
//!
//! The crate performs no I/O and no logging. Front ends decide how results
//! are presented.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::comparison::{price_option, PricingDefaults, PricingRequest};
//!
//! let request = PricingRequest {
//!     num_simulations: Some(20_000),
//!     num_steps: Some(50),
//!     ..Default::default()
//! };
//! let result = price_option(&request, &PricingDefaults::default()).unwrap();
//!
//! assert!((result.bs_price() - 10.4506).abs() < 1e-3);
//! assert!(result.absolute_difference() < 5.0 * result.mc_std_error());
//! assert_eq!(result.paths().n_paths(), 20_000);
//! ```
//!
//! ## Reproducibility
//!
//! A run is fully determined by its parameters, its path and step counts and
//! its seed. Path generation is parallel but draws every normal up front from
//! a single generator, so the thread count never changes the numbers.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise configurations, paths and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod comparison;
pub mod mc;
pub mod rng;

pub use comparison::{compare, price_option, PricingResult};
pub use mc::{MonteCarloConfig, MonteCarloPricer};
pub use rng::PricerRng;
