//! Monte Carlo pricer for European options.
//!
//! Simulates risk-neutral GBM paths, evaluates payoffs on the terminal
//! column and discounts:
//! ```text
//! price     = mean(payoffs) · e^(-rT)
//! std_error = std(payoffs) · e^(-rT) / √n
//! CI(95%)   = price ± 1.96 · std_error
//! ```

use pricer_core::types::{ModelParams, PricingError};
use pricer_models::instruments::european_payoffs;
use pricer_models::models::GbmModel;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::paths::{generate_paths_for_config, PricePathSet};
use super::statistics::{ConfidenceInterval, SummaryStatistics, Z_95};
use crate::rng::PricerRng;

/// Monte Carlo price estimate together with the simulation that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloEstimate {
    price: f64,
    std_error: f64,
    confidence_interval: ConfidenceInterval,
    paths: PricePathSet,
    payoffs: Vec<f64>,
}

impl MonteCarloEstimate {
    /// Discounted mean payoff.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Standard error of the price estimate.
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    /// 95% confidence interval for the price.
    #[inline]
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        self.confidence_interval
    }

    /// Simulated trajectories.
    #[inline]
    pub fn paths(&self) -> &PricePathSet {
        &self.paths
    }

    /// Undiscounted payoff of each trajectory, in path order.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    /// Splits off the path matrix and payoff vector.
    pub fn into_parts(self) -> (PricePathSet, Vec<f64>) {
        (self.paths, self.payoffs)
    }
}

/// Monte Carlo pricing engine.
///
/// Holds only the simulation configuration. Random numbers come from a
/// generator the caller passes in, so one pricer can serve concurrent runs.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ModelParams, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(50)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let mut rng = PricerRng::from_seed(42);
/// let estimate = pricer.price_european(&params, &mut rng).unwrap();
///
/// println!("Price: {} +/- {}", estimate.price(), estimate.std_error());
/// assert_eq!(estimate.payoffs().len(), 10_000);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European option, drawing normals from `rng`.
    ///
    /// The simulation drift is always the risk-free rate.
    ///
    /// # Errors
    ///
    /// Propagates path-simulator failures unchanged.
    pub fn price_european(
        &self,
        params: &ModelParams,
        rng: &mut PricerRng,
    ) -> Result<MonteCarloEstimate, PricingError> {
        let model = GbmModel::risk_neutral(params);
        let paths =
            generate_paths_for_config(&model, params.time_to_expiration(), &self.config, rng)?;

        let payoffs = european_payoffs(
            &paths.terminal_prices(),
            params.strike_price(),
            params.option_type(),
        );

        let discount_factor = params.discount_factor();
        let (price, std_error) = if paths.is_degenerate() {
            // n_paths >= 1; every payoff is the intrinsic value
            (payoffs[0] * discount_factor, 0.0)
        } else {
            discounted_estimate(&payoffs, discount_factor)
        };

        Ok(MonteCarloEstimate {
            price,
            std_error,
            confidence_interval: ConfidenceInterval::around(price, std_error, Z_95),
            paths,
            payoffs,
        })
    }

    /// Prices with a generator built from the configured seed.
    ///
    /// Unseeded configurations draw from operating-system entropy.
    pub fn price_european_seeded(
        &self,
        params: &ModelParams,
    ) -> Result<MonteCarloEstimate, PricingError> {
        let mut rng = PricerRng::from_optional_seed(self.config.seed());
        self.price_european(params, &mut rng)
    }
}

/// Discounted mean and standard error of a payoff sample.
///
/// Returns `(NaN, NaN)` for an empty sample.
pub fn discounted_estimate(payoffs: &[f64], discount_factor: f64) -> (f64, f64) {
    match SummaryStatistics::from_sample(payoffs) {
        Some(stats) => (
            stats.mean * discount_factor,
            stats.std_dev * discount_factor / (stats.count as f64).sqrt(),
        ),
        None => (f64::NAN, f64::NAN),
    }
}
