//! # Pricer Models (L2: Business Logic)
//!
//! Price dynamics, payoffs and the closed-form benchmark.
//!
//! This crate provides:
//! - Geometric Brownian Motion with the exact log-space step (`models`)
//! - European call/put payoff evaluation (`instruments`)
//! - Black-Scholes analytical pricing and the normal CDF (`analytical`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: nothing here draws random numbers or holds state
//!   between calls; randomness is the pricing engine's concern
//! - **Generic over `Float`** where the formula allows it
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ModelParams, OptionType};
//! use pricer_models::analytical::black_scholes_price;
//! use pricer_models::instruments::european_payoffs;
//!
//! let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let price = black_scholes_price(&params).unwrap();
//! assert!((price - 10.4506).abs() < 1e-3);
//!
//! let payoffs = european_payoffs(&[95.0, 112.0], params.strike_price(), params.option_type());
//! assert_eq!(payoffs, vec![0.0, 12.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
