//! Contract payoffs.
//!
//! European call and put settlement values evaluated on terminal prices.
//! Contract types themselves live in [`pricer_core::types::OptionType`].

pub mod payoff;

pub use payoff::{european_payoffs, european_payoffs_from_str, payoff};
