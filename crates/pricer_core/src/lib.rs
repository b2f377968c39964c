//! # pricer_core: Foundation for the European Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Contract type: `OptionType` (`types::option_type`)
//! - Validated contract and market parameters: `ModelParams` (`types::params`)
//! - Error types: `PricingError` (`types::error`)
//! - Historical volatility estimation (`market_data::volatility`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Dated price observations
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ModelParams, OptionType};
//!
//! let option_type: OptionType = "Put".parse().unwrap();
//! let params = ModelParams::new(100.0, 95.0, 0.5, 0.03, 0.25, option_type).unwrap();
//!
//! assert_eq!(params.option_type().to_string(), "put");
//! assert_eq!(params.intrinsic_value(), 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, `ModelParams` and price observations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
