//! European payoff evaluation.
//!
//! Maps terminal prices to settlement values:
//! - Call: max(S_T - K, 0)
//! - Put: max(K - S_T, 0)
//!
//! Payoffs are one-sided by construction, so every value is non-negative.

use num_traits::Float;
use pricer_core::types::{OptionType, PricingError};

/// Payoff of a single European contract at expiry.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::payoff;
///
/// assert_eq!(payoff(OptionType::Call, 110.0_f64, 100.0), 10.0);
/// assert_eq!(payoff(OptionType::Put, 110.0_f64, 100.0), 0.0);
/// ```
#[inline]
pub fn payoff<T: Float>(option_type: OptionType, terminal: T, strike: T) -> T {
    let zero = T::zero();
    match option_type {
        OptionType::Call => (terminal - strike).max(zero),
        OptionType::Put => (strike - terminal).max(zero),
    }
}

/// Payoffs for a vector of terminal prices.
///
/// Returns a vector of the same length as `terminal_prices`, in the same
/// order.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::european_payoffs;
///
/// let payoffs = european_payoffs(&[90.0, 100.0, 115.0], 100.0, OptionType::Call);
/// assert_eq!(payoffs, vec![0.0, 0.0, 15.0]);
/// ```
pub fn european_payoffs(terminal_prices: &[f64], strike: f64, option_type: OptionType) -> Vec<f64> {
    terminal_prices
        .iter()
        .map(|&s| payoff(option_type, s, strike))
        .collect()
}

/// Payoffs with the contract type given as text (`"call"` / `"put"`, any case).
///
/// # Errors
/// `PricingError::InvalidOptionType` for anything other than call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::european_payoffs_from_str;
///
/// let payoffs = european_payoffs_from_str(&[90.0, 110.0], 100.0, "PUT").unwrap();
/// assert_eq!(payoffs, vec![10.0, 0.0]);
///
/// assert!(european_payoffs_from_str(&[90.0], 100.0, "straddle").is_err());
/// ```
pub fn european_payoffs_from_str(
    terminal_prices: &[f64],
    strike: f64,
    option_type: &str,
) -> Result<Vec<f64>, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    Ok(european_payoffs(terminal_prices, strike, option_type))
}
