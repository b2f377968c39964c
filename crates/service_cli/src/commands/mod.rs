//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod convergence;
pub mod price;
pub mod volatility;

use std::io::Write;

use clap::Args;
use pricer_pricing::comparison::PricingRequest;
use serde::Serialize;

use crate::Result;

/// Contract and simulation flags shared by the pricing commands.
///
/// Unset flags fall through to the environment, the config file and the
/// built-in defaults, in that order.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Current underlying price (S0)
    #[arg(long = "spot", value_name = "PRICE")]
    pub spot_price: Option<f64>,

    /// Strike price (K)
    #[arg(long = "strike", value_name = "PRICE")]
    pub strike_price: Option<f64>,

    /// Time to expiration in years (T)
    #[arg(long = "expiry", value_name = "YEARS")]
    pub time_to_expiration: Option<f64>,

    /// Annualised risk-free rate, e.g. 0.05
    #[arg(long = "rate")]
    pub risk_free_rate: Option<f64>,

    /// Annualised volatility, e.g. 0.2
    #[arg(long = "vol")]
    pub volatility: Option<f64>,

    /// Option type (call or put)
    #[arg(short = 't', long = "option-type")]
    pub option_type: Option<String>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long = "simulations")]
    pub num_simulations: Option<usize>,

    /// Time steps per path
    #[arg(short = 's', long = "steps")]
    pub num_steps: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long, conflicts_with = "no_seed")]
    pub seed: Option<u64>,

    /// Seed from OS entropy instead of a fixed seed
    #[arg(long)]
    pub no_seed: bool,
}

impl ContractArgs {
    /// Flags as a boundary request; unset flags stay `None`.
    pub fn to_request(&self) -> PricingRequest {
        PricingRequest {
            spot_price: self.spot_price,
            strike_price: self.strike_price,
            time_to_expiration: self.time_to_expiration,
            risk_free_rate: self.risk_free_rate,
            volatility: self.volatility,
            option_type: self.option_type.clone(),
            num_simulations: self.num_simulations,
            num_steps: self.num_steps,
            random_seed: self.seed,
            unseeded: self.no_seed,
        }
    }
}

/// Pretty-print `value` as JSON on `out`.
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_stay_unset() {
        assert_eq!(ContractArgs::default().to_request(), PricingRequest::default());
    }

    #[test]
    fn test_flags_map_to_request_fields() {
        let args = ContractArgs {
            spot_price: Some(105.0),
            option_type: Some("put".to_string()),
            num_steps: Some(12),
            seed: Some(9),
            ..Default::default()
        };
        let request = args.to_request();
        assert_eq!(request.spot_price, Some(105.0));
        assert_eq!(request.option_type.as_deref(), Some("put"));
        assert_eq!(request.num_steps, Some(12));
        assert_eq!(request.random_seed, Some(9));
        assert_eq!(request.strike_price, None);
        assert!(!request.unseeded);
    }

    #[test]
    fn test_no_seed_flag_requests_unseeded_run() {
        let args = ContractArgs {
            no_seed: true,
            ..Default::default()
        };
        assert!(args.to_request().unseeded);
    }
}
