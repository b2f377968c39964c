//! Black-Scholes pricing model for European options.
//!
//! Closed-form benchmark for the Monte Carlo engine. Both share the same
//! log-normal terminal distribution, so the two prices converge as the path
//! count grows.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! For T ≤ 0 the price is the intrinsic value and d₁/d₂ are never evaluated.

use num_traits::Float;
use pricer_core::types::{ModelParams, OptionType};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !is_positive(spot) {
            return Err(AnalyticalError::InvalidSpot {
                spot: to_f64(spot),
            });
        }

        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful for `expiry > 0`; the pricing methods never call it
    /// otherwise.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::one() / (T::one() + T::one());
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// Returns `max(S - K, 0)` when `expiry <= 0`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-3);
    /// assert_eq!(bs.price_call(90.0, 0.0), 10.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return (self.spot - strike).max(T::zero());
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// Returns `max(K - S, 0)` when `expiry <= 0`.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return (strike - self.spot).max(T::zero());
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a contract of the given type, validating strike and expiry.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or not finite
    /// - `AnalyticalError::InvalidExpiry` if expiry is NaN or infinite
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        if !is_positive(strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: to_f64(strike),
            });
        }
        if !expiry.is_finite() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: to_f64(expiry),
            });
        }

        Ok(match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        })
    }
}

impl BlackScholes<f64> {
    /// Builds the model from validated parameters.
    pub fn from_params(params: &ModelParams) -> Result<Self, AnalyticalError> {
        Self::new(
            params.spot_price(),
            params.risk_free_rate(),
            params.volatility(),
        )
    }
}

/// Analytical price of the contract described by `params`.
///
/// Pure and deterministic: identical inputs give bit-identical outputs.
///
/// # Examples
/// ```
/// use pricer_core::types::{ModelParams, OptionType};
/// use pricer_models::analytical::black_scholes_price;
///
/// let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// let put = black_scholes_price(&params).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
/// ```
pub fn black_scholes_price(params: &ModelParams) -> Result<f64, AnalyticalError> {
    BlackScholes::from_params(params)?.price(
        params.option_type(),
        params.strike_price(),
        params.time_to_expiration(),
    )
}

#[inline]
fn is_positive<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
