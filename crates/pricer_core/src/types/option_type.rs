//! European option type.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Type of a European option contract.
///
/// Parsing is case-insensitive; the canonical form produced by [`Display`](fmt::Display)
/// and [`OptionType::as_str`] is lower-case.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "CALL".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.to_string(), "call");
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S - K, 0)
    #[default]
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Canonical lower-case name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value of the contract for an underlying price.
    ///
    /// This is both the payoff at expiry and the value of an option with
    /// zero time to expiration.
    #[inline]
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
