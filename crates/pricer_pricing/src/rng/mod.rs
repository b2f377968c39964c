//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random generation for the Monte Carlo engine.
//!
//! ## Ownership
//!
//! There is no process-wide generator. A caller creates a [`PricerRng`],
//! owns it, and lends it `&mut` to the path simulator for one run. Two
//! concurrent pricing calls therefore never share random state, and a fixed
//! seed reproduces a run exactly.
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: PRNG wrapper with seed management and batch generation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::PricerRng;
