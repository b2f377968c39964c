//! Validated contract and market parameters.

use super::error::PricingError;
use super::option_type::OptionType;

/// Contract and market parameters shared by every pricer in a run.
///
/// Fields are private; construction through [`ModelParams::new`] is the
/// only way to obtain a value, so a `ModelParams` is always valid:
/// - `spot_price > 0`
/// - `strike_price > 0`
/// - `time_to_expiration >= 0` (years)
/// - `risk_free_rate` finite (may be negative)
/// - `volatility > 0`
///
/// # Examples
/// ```
/// use pricer_core::types::{ModelParams, OptionType};
///
/// let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// assert!(ModelParams::new(0.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelParams {
    spot_price: f64,
    strike_price: f64,
    time_to_expiration: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl ModelParams {
    /// Creates validated model parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_expiration: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        require_positive("spot_price", spot_price)?;
        require_positive("strike_price", strike_price)?;

        if !time_to_expiration.is_finite() || time_to_expiration < 0.0 {
            return Err(PricingError::invalid(
                "time_to_expiration",
                format!("must be finite and non-negative, got {}", time_to_expiration),
            ));
        }

        if !risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", risk_free_rate),
            ));
        }

        require_positive("volatility", volatility)?;

        Ok(Self {
            spot_price,
            strike_price,
            time_to_expiration,
            risk_free_rate,
            volatility,
            option_type,
        })
    }

    /// Current underlying price (S₀).
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Strike price (K).
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Time to expiration in years (T).
    #[inline]
    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    /// Annualised continuously-compounded risk-free rate (r).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Contract type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor exp(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiration).exp()
    }

    /// Intrinsic value at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.intrinsic(self.spot_price, self.strike_price)
    }

    /// Returns `true` when the contract expires immediately (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_to_expiration == 0.0
    }

    /// Same parameters with a different contract type.
    #[inline]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}
