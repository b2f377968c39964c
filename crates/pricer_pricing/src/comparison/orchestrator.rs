//! Runs both pricers on identical inputs and assembles the result.
//!
//! The Monte Carlo and analytical code paths share nothing but the
//! parameters; they meet only here.

use pricer_core::types::{ModelParams, PricingError};
use pricer_models::analytical::black_scholes_price;

use super::request::{PricingDefaults, PricingRequest};
use super::result::PricingResult;
use crate::mc::{MonteCarloConfig, MonteCarloPricer};
use crate::rng::PricerRng;

/// Prices with both methods, drawing normals from a caller-owned generator.
///
/// The recorded seed is the generator's, not `config`'s. A generator that
/// has already been drawn from records `None`, since its initial seed would
/// not reproduce this run.
///
/// # Errors
///
/// Invalid configuration or model parameters, unchanged from the pricer
/// that rejected them.
pub fn compare_with_rng(
    params: &ModelParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
) -> Result<PricingResult, PricingError> {
    let config = config.with_seed(rng.replay_seed());
    let estimate = MonteCarloPricer::new(config.clone())?.price_european(params, rng)?;
    let bs_price = black_scholes_price(params)?;

    Ok(PricingResult::new(*params, config, estimate, bs_price))
}

/// Prices with both methods using a generator built from `config`'s seed.
///
/// Each call creates its own generator, so concurrent calls are independent.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ModelParams, OptionType};
/// use pricer_pricing::comparison::compare;
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(5_000).n_steps(12).seed(42).build().unwrap();
///
/// let result = compare(&params, &config).unwrap();
/// assert!((result.bs_price() - 10.4506).abs() < 1e-3);
/// ```
pub fn compare(
    params: &ModelParams,
    config: &MonteCarloConfig,
) -> Result<PricingResult, PricingError> {
    let mut rng = PricerRng::from_optional_seed(config.seed());
    compare_with_rng(params, config, &mut rng)
}

/// Resolves a boundary request against `defaults` and compares.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::comparison::{price_option, PricingDefaults, PricingRequest};
///
/// let request = PricingRequest {
///     option_type: Some("straddle".to_string()),
///     ..Default::default()
/// };
/// assert!(price_option(&request, &PricingDefaults::default()).is_err());
/// ```
pub fn price_option(
    request: &PricingRequest,
    defaults: &PricingDefaults,
) -> Result<PricingResult, PricingError> {
    let (params, config) = request.resolve(defaults)?;
    compare(&params, &config)
}
