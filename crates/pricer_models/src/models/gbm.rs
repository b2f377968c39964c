//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = μ * S * dt + σ * S * dW
//! ```
//! where:
//! - S = asset price
//! - μ = drift (the risk-free rate r under the pricing measure)
//! - σ = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! Paths use the exact solution rather than an Euler scheme, so there is no
//! discretisation bias in the terminal distribution:
//! ```text
//! S(t+dt) = S(t) * exp((μ - 0.5*σ²)*dt + σ*sqrt(dt)*Z),   Z ~ N(0, 1)
//! ```

use num_traits::Float;
use pricer_core::types::{ModelParams, PricingError};

/// Geometric Brownian Motion model.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmModel;
///
/// let model = GbmModel::new(100.0_f64, 0.05, 0.2).unwrap();
/// let next = model.evolve_step(100.0, 1.0 / 252.0, 0.0);
///
/// // Zero shock: deterministic log-drift only
/// let expected = 100.0 * ((0.05 - 0.5 * 0.04) / 252.0_f64).exp();
/// assert!((next - expected).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmModel<T: Float> {
    spot: T,
    drift: T,
    volatility: T,
}

/// Per-step constants of the exact GBM update for a fixed `dt`.
///
/// Hoisting these out of the path loop leaves one `exp` per step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCoefficients<T: Float> {
    /// (μ - σ²/2)·dt
    pub log_drift: T,
    /// σ·√dt
    pub diffusion: T,
}

impl<T: Float> StepCoefficients<T> {
    /// Applies one step to `state` with standard normal shock `z`.
    #[inline]
    pub fn apply(&self, state: T, z: T) -> T {
        state * (self.log_drift + self.diffusion * z).exp()
    }
}

impl<T: Float> GbmModel<T> {
    /// Create a GBM model with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial price S₀ (must be positive)
    /// * `drift` - Drift μ (any finite value)
    /// * `volatility` - Volatility σ (must be non-negative)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming `spot_price`, `drift` or
    /// `volatility`.
    pub fn new(spot: T, drift: T, volatility: T) -> Result<Self, PricingError> {
        if !(spot.is_finite() && spot > T::zero()) {
            return Err(PricingError::invalid(
                "spot_price",
                format!("must be finite and positive, got {}", as_f64(spot)),
            ));
        }
        if !drift.is_finite() {
            return Err(PricingError::invalid(
                "drift",
                format!("must be finite, got {}", as_f64(drift)),
            ));
        }
        if !(volatility.is_finite() && volatility >= T::zero()) {
            return Err(PricingError::invalid(
                "volatility",
                format!("must be finite and non-negative, got {}", as_f64(volatility)),
            ));
        }

        Ok(Self {
            spot,
            drift,
            volatility,
        })
    }

    /// Initial price S₀.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Drift μ.
    #[inline]
    pub fn drift(&self) -> T {
        self.drift
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Step constants for a time increment `dt`.
    #[inline]
    pub fn step_coefficients(&self, dt: T) -> StepCoefficients<T> {
        let half = T::one() / (T::one() + T::one());
        StepCoefficients {
            log_drift: (self.drift - half * self.volatility * self.volatility) * dt,
            diffusion: self.volatility * dt.sqrt(),
        }
    }

    /// Evolve `state` over `dt` with standard normal shock `z`.
    #[inline]
    pub fn evolve_step(&self, state: T, dt: T, z: T) -> T {
        self.step_coefficients(dt).apply(state, z)
    }
}

impl GbmModel<f64> {
    /// Model under the risk-neutral measure: drift equals the risk-free rate.
    ///
    /// Any real-world expected return is irrelevant for pricing and is not an
    /// input here.
    pub fn risk_neutral(params: &ModelParams) -> Self {
        // ModelParams guarantees spot > 0, finite rate, volatility > 0
        Self {
            spot: params.spot_price(),
            drift: params.risk_free_rate(),
            volatility: params.volatility(),
        }
    }
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
