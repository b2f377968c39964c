//! Boundary inputs for a pricing run.
//!
//! External collaborators hand over a flat set of optional parameters
//! ([`PricingRequest`]). Gaps are filled from [`PricingDefaults`] and the
//! merged values are validated into typed parameters.

use pricer_core::types::{ModelParams, OptionType, PricingError};

use crate::mc::MonteCarloConfig;

/// Fallback values for every boundary parameter.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_pricing::comparison::PricingDefaults;
///
/// let defaults = PricingDefaults::default();
/// assert_eq!(defaults.spot_price, 100.0);
/// assert_eq!(defaults.option_type, OptionType::Call);
/// assert_eq!(defaults.num_simulations, 10_000);
/// assert_eq!(defaults.random_seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PricingDefaults {
    /// Current underlying price (S₀)
    pub spot_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub time_to_expiration: f64,
    /// Annualised risk-free rate (r)
    pub risk_free_rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Contract type
    pub option_type: OptionType,
    /// Number of simulated trajectories
    pub num_simulations: usize,
    /// Discretisation intervals per trajectory
    pub num_steps: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy
    pub random_seed: Option<u64>,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            spot_price: 100.0,
            strike_price: 100.0,
            time_to_expiration: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.20,
            option_type: OptionType::Call,
            num_simulations: 10_000,
            num_steps: 252,
            random_seed: Some(42),
        }
    }
}

/// Flat, all-optional pricing request.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::comparison::{PricingDefaults, PricingRequest};
///
/// let request = PricingRequest {
///     strike_price: Some(110.0),
///     option_type: Some("PUT".to_string()),
///     ..Default::default()
/// };
/// let (params, config) = request.resolve(&PricingDefaults::default()).unwrap();
///
/// assert_eq!(params.strike_price(), 110.0);
/// assert_eq!(params.option_type().to_string(), "put");
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingRequest {
    /// Current underlying price (S₀)
    pub spot_price: Option<f64>,
    /// Strike price (K)
    pub strike_price: Option<f64>,
    /// Time to expiration in years (T)
    pub time_to_expiration: Option<f64>,
    /// Annualised risk-free rate (r)
    pub risk_free_rate: Option<f64>,
    /// Annualised volatility (σ)
    pub volatility: Option<f64>,
    /// `"call"` or `"put"`, any case
    pub option_type: Option<String>,
    /// Number of simulated trajectories
    pub num_simulations: Option<usize>,
    /// Discretisation intervals per trajectory
    pub num_steps: Option<usize>,
    /// Seed for reproducible runs
    pub random_seed: Option<u64>,
    /// Draw from OS entropy, ignoring `random_seed` and the default seed
    pub unseeded: bool,
}

impl PricingRequest {
    /// Fills gaps from `defaults` and validates.
    ///
    /// # Errors
    ///
    /// The first `PricingError` found: an unknown option type, an invalid
    /// model parameter, or a zero path/step count (reported as
    /// `num_simulations` / `num_steps`).
    pub fn resolve(
        &self,
        defaults: &PricingDefaults,
    ) -> Result<(ModelParams, MonteCarloConfig), PricingError> {
        let option_type = match &self.option_type {
            Some(text) => text.parse()?,
            None => defaults.option_type,
        };

        let params = ModelParams::new(
            self.spot_price.unwrap_or(defaults.spot_price),
            self.strike_price.unwrap_or(defaults.strike_price),
            self.time_to_expiration.unwrap_or(defaults.time_to_expiration),
            self.risk_free_rate.unwrap_or(defaults.risk_free_rate),
            self.volatility.unwrap_or(defaults.volatility),
            option_type,
        )?;

        let seed = if self.unseeded {
            None
        } else {
            self.random_seed.or(defaults.random_seed)
        };
        let config = MonteCarloConfig::builder()
            .n_paths(self.num_simulations.unwrap_or(defaults.num_simulations))
            .n_steps(self.num_steps.unwrap_or(defaults.num_steps))
            .maybe_seed(seed)
            .build()?;

        Ok((params, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let (params, config) = PricingRequest::default()
            .resolve(&PricingDefaults::default())
            .unwrap();

        assert_eq!(params.spot_price(), 100.0);
        assert_eq!(params.strike_price(), 100.0);
        assert_eq!(params.time_to_expiration(), 1.0);
        assert_eq!(params.risk_free_rate(), 0.05);
        assert_eq!(params.volatility(), 0.20);
        assert_eq!(params.option_type(), OptionType::Call);
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_request_overrides_defaults() {
        let request = PricingRequest {
            spot_price: Some(120.0),
            volatility: Some(0.35),
            num_simulations: Some(500),
            random_seed: Some(7),
            ..Default::default()
        };
        let (params, config) = request.resolve(&PricingDefaults::default()).unwrap();

        assert_eq!(params.spot_price(), 120.0);
        assert_eq!(params.volatility(), 0.35);
        assert_eq!(config.n_paths(), 500);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_unseeded_defaults() {
        let defaults = PricingDefaults {
            random_seed: None,
            ..Default::default()
        };
        let (_, config) = PricingRequest::default().resolve(&defaults).unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_unseeded_request_overrides_default_seed() {
        let request = PricingRequest {
            random_seed: Some(7),
            unseeded: true,
            ..Default::default()
        };
        let (_, config) = request.resolve(&PricingDefaults::default()).unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_accepts_long_step_grids() {
        let request = PricingRequest {
            num_simulations: Some(1),
            num_steps: Some(20_000),
            ..Default::default()
        };
        let (_, config) = request.resolve(&PricingDefaults::default()).unwrap();
        assert_eq!(config.n_steps(), 20_000);
    }

    #[test]
    fn test_rejects_unknown_option_type() {
        let request = PricingRequest {
            option_type: Some("straddle".to_string()),
            ..Default::default()
        };
        let err = request.resolve(&PricingDefaults::default()).unwrap_err();
        assert_eq!(err, PricingError::InvalidOptionType("straddle".to_string()));
    }

    #[test]
    fn test_rejects_zero_simulations() {
        let request = PricingRequest {
            num_simulations: Some(0),
            ..Default::default()
        };
        let err = request.resolve(&PricingDefaults::default()).unwrap_err();
        assert_eq!(err.parameter(), Some("num_simulations"));
    }

    #[test]
    fn test_rejects_zero_steps() {
        let request = PricingRequest {
            num_steps: Some(0),
            ..Default::default()
        };
        let err = request.resolve(&PricingDefaults::default()).unwrap_err();
        assert_eq!(err.parameter(), Some("num_steps"));
    }

    #[test]
    fn test_rejects_invalid_model_parameter() {
        let request = PricingRequest {
            strike_price: Some(-5.0),
            ..Default::default()
        };
        let err = request.resolve(&PricingDefaults::default()).unwrap_err();
        assert_eq!(err.parameter(), Some("strike_price"));
    }
}
