//! Historical volatility estimation from close-price series.
//!
//! Annualised volatility is the sample standard deviation of daily log
//! returns scaled by the square root of the annualisation factor:
//!
//! ```text
//! r_i   = ln(P_i / P_{i-1})
//! σ_ann = stdev(r, n-1) × √A        (A = 252 for daily closes)
//! ```

use chrono::NaiveDate;

use crate::types::PricingError;

/// Trading days per year used to annualise daily statistics.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Minimum number of prices for a sample standard deviation of returns.
pub const MIN_PRICES: usize = 3;

/// A dated close price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceObservation {
    /// Observation date
    pub date: NaiveDate,
    /// Close price on that date
    pub close: f64,
}

/// A chronologically ordered close-price series.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::market_data::{PriceHistory, PriceObservation};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let history = PriceHistory::new(vec![
///     PriceObservation { date: day(3), close: 101.0 },
///     PriceObservation { date: day(2), close: 100.0 },
///     PriceObservation { date: day(4), close: 99.5 },
/// ])
/// .unwrap();
///
/// assert_eq!(history.latest_close(), 99.5);
/// assert!(history.annualised_volatility().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    observations: Vec<PriceObservation>,
}

impl PriceHistory {
    /// Builds a history, sorting observations by date.
    ///
    /// # Errors
    /// - `PricingError::InsufficientData` for an empty series
    /// - `PricingError::InvalidParameter` (`prices`) if any close is not
    ///   finite and positive
    pub fn new(mut observations: Vec<PriceObservation>) -> Result<Self, PricingError> {
        if observations.is_empty() {
            return Err(PricingError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        validate_prices(observations.iter().map(|o| o.close))?;
        observations.sort_by_key(|o| o.date);
        Ok(Self { observations })
    }

    /// Observations in chronological order.
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false`: construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent close.
    pub fn latest_close(&self) -> f64 {
        // non-empty by construction
        self.observations[self.observations.len() - 1].close
    }

    /// Close prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    /// Annualised volatility using [`TRADING_DAYS_PER_YEAR`].
    pub fn annualised_volatility(&self) -> Result<f64, PricingError> {
        estimate_volatility(&self.closes(), TRADING_DAYS_PER_YEAR)
    }
}

/// Log returns `ln(P_i / P_{i-1})` of a price series.
///
/// Returns an empty vector for fewer than two prices.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Estimates annualised volatility from chronologically ordered prices.
///
/// # Arguments
/// * `prices` - Close prices, oldest first
/// * `annualisation_factor` - Observations per year (252 for daily data)
///
/// # Errors
/// - `PricingError::InsufficientData` for fewer than [`MIN_PRICES`] prices
/// - `PricingError::InvalidParameter` for non-positive prices or a zero
///   annualisation factor
///
/// # Examples
/// ```
/// use pricer_core::market_data::estimate_volatility;
///
/// // Constant growth has zero return dispersion
/// let prices = [100.0, 101.0, 102.01, 103.0301];
/// let vol = estimate_volatility(&prices, 252).unwrap();
/// assert!(vol < 1e-10);
/// ```
pub fn estimate_volatility(prices: &[f64], annualisation_factor: u32) -> Result<f64, PricingError> {
    if annualisation_factor == 0 {
        return Err(PricingError::invalid(
            "annualisation_factor",
            "must be positive",
        ));
    }
    if prices.len() < MIN_PRICES {
        return Err(PricingError::InsufficientData {
            required: MIN_PRICES,
            actual: prices.len(),
        });
    }
    validate_prices(prices.iter().copied())?;

    let returns = log_returns(prices);
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(variance.sqrt() * f64::from(annualisation_factor).sqrt())
}

fn validate_prices(prices: impl Iterator<Item = f64>) -> Result<(), PricingError> {
    for (index, price) in prices.enumerate() {
        if !price.is_finite() || price <= 0.0 {
            return Err(PricingError::invalid(
                "prices",
                format!("price at index {} must be finite and positive, got {}", index, price),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_log_returns() {
        let r = log_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], (1.1_f64).ln(), epsilon = 1e-15);
        assert_relative_eq!(r[1], (0.9_f64).ln(), epsilon = 1e-15);
        assert!(log_returns(&[100.0]).is_empty());
    }

    #[test]
    fn test_estimate_volatility_reference() {
        // Alternating ±1% moves
        let prices = [100.0, 101.0, 100.0, 101.0, 100.0];
        let returns = log_returns(&prices);
        let mean = returns.iter().sum::<f64>() / 4.0;
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / 3.0;
        let expected = var.sqrt() * 252.0_f64.sqrt();

        let vol = estimate_volatility(&prices, 252).unwrap();
        assert_relative_eq!(vol, expected, epsilon = 1e-14);
        assert!(vol > 0.1 && vol < 0.2);
    }

    #[test]
    fn test_annualisation_factor_scales_by_sqrt() {
        let prices = [100.0, 102.0, 99.0, 103.0, 101.0];
        let daily = estimate_volatility(&prices, 1).unwrap();
        let annual = estimate_volatility(&prices, 252).unwrap();
        assert_relative_eq!(annual, daily * 252.0_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_estimate_volatility_insufficient_data() {
        let err = estimate_volatility(&[100.0, 101.0], 252).unwrap_err();
        assert_eq!(
            err,
            PricingError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_estimate_volatility_rejects_bad_prices() {
        let err = estimate_volatility(&[100.0, 0.0, 101.0], 252).unwrap_err();
        assert_eq!(err.parameter(), Some("prices"));

        let err = estimate_volatility(&[100.0, 101.0, 102.0], 0).unwrap_err();
        assert_eq!(err.parameter(), Some("annualisation_factor"));
    }

    #[test]
    fn test_price_history_sorts_by_date() {
        let history = PriceHistory::new(vec![
            PriceObservation { date: day(5), close: 103.0 },
            PriceObservation { date: day(1), close: 100.0 },
            PriceObservation { date: day(3), close: 101.0 },
        ])
        .unwrap();

        assert_eq!(history.closes(), vec![100.0, 101.0, 103.0]);
        assert_eq!(history.latest_close(), 103.0);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_price_history_rejects_empty() {
        assert!(PriceHistory::new(Vec::new()).is_err());
    }

    #[test]
    fn test_price_history_volatility_matches_free_function() {
        let history = PriceHistory::new(vec![
            PriceObservation { date: day(1), close: 100.0 },
            PriceObservation { date: day(2), close: 98.0 },
            PriceObservation { date: day(3), close: 101.0 },
            PriceObservation { date: day(4), close: 102.5 },
        ])
        .unwrap();

        assert_eq!(
            history.annualised_volatility().unwrap(),
            estimate_volatility(&[100.0, 98.0, 101.0, 102.5], TRADING_DAYS_PER_YEAR).unwrap()
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_volatility_is_scale_invariant(
                prices in prop::collection::vec(1.0_f64..1000.0, 3..40),
                scale in 0.01_f64..100.0,
            ) {
                let scaled: Vec<f64> = prices.iter().map(|p| p * scale).collect();
                let a = estimate_volatility(&prices, TRADING_DAYS_PER_YEAR).unwrap();
                let b = estimate_volatility(&scaled, TRADING_DAYS_PER_YEAR).unwrap();
                prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
                prop_assert!(a >= 0.0);
            }
        }
    }
}
