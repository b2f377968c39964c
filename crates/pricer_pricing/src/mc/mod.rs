//! Monte Carlo pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, step count, seed)
//! ├── PricerRng         (caller-owned, lent per run)
//! └── Orchestration
//!     ├── generate_gbm_paths()   → PricePathSet
//!     ├── european_payoffs()     (terminal column)
//!     └── discounted_estimate()  → price, standard error, 95% CI
//! ```
//!
//! # Examples
//!
//! ## Basic European Option Pricing
//!
//! ```rust
//! use pricer_core::types::{ModelParams, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::rng::PricerRng;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(252)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let estimate = pricer.price_european(&params, &mut rng).unwrap();
//! let ci = estimate.confidence_interval();
//! println!("Price: {:.4} in [{:.4}, {:.4}]", estimate.price(), ci.lower, ci.upper);
//! ```
//!
//! ## Paths Only
//!
//! ```rust
//! use pricer_models::models::GbmModel;
//! use pricer_pricing::mc::generate_gbm_paths;
//! use pricer_pricing::rng::PricerRng;
//!
//! // Real-world drift for a scenario plot
//! let model = GbmModel::new(100.0, 0.08, 0.3).unwrap();
//! let paths = generate_gbm_paths(&model, 0.5, 100, 126, &mut PricerRng::from_seed(1)).unwrap();
//! assert_eq!(paths.terminal_prices().len(), 100);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;
pub mod statistics;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::ConfigError;
pub use paths::{generate_gbm_paths, generate_paths_for_config, simulate_paths, PricePathSet};
pub use pricer::{discounted_estimate, MonteCarloEstimate, MonteCarloPricer};
pub use statistics::{ConfidenceInterval, SummaryStatistics, Z_95};
