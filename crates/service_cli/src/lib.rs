//! # service_cli: `mc-pricer` command-line front end
//!
//! As part of the **S**ervice layer, this crate layers configuration, reads
//! local price files and formats results. All computation is delegated to
//! `pricer_pricing`.
//!
//! - [`config`]: defaults, TOML file, `MC_PRICER_*` environment and flags
//! - [`prices`]: `date,close` CSV price histories
//! - [`commands`]: `price`, `convergence` and `volatility`

pub mod commands;
pub mod config;
pub mod error;
pub mod prices;

pub use error::{CliError, Result};
