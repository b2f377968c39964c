//! Qualitative agreement between the Monte Carlo and analytical prices.

use std::fmt;

/// Percentage difference below which agreement is excellent.
pub const EXCELLENT_THRESHOLD_PCT: f64 = 1.0;

/// Percentage difference below which agreement is good.
pub const GOOD_THRESHOLD_PCT: f64 = 3.0;

/// Agreement band of a Monte Carlo estimate against its benchmark.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::comparison::Agreement;
///
/// assert_eq!(Agreement::from_percentage_difference(0.4), Agreement::Excellent);
/// assert_eq!(Agreement::from_percentage_difference(2.0), Agreement::Good);
/// assert_eq!(Agreement::from_percentage_difference(3.0), Agreement::Poor);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Agreement {
    /// Difference under 1%.
    Excellent,
    /// Difference under 3%.
    Good,
    /// Difference of 3% or more.
    Poor,
}

impl Agreement {
    /// Classifies a percentage difference. NaN classifies as `Poor`.
    pub fn from_percentage_difference(pct: f64) -> Self {
        if pct < EXCELLENT_THRESHOLD_PCT {
            Agreement::Excellent
        } else if pct < GOOD_THRESHOLD_PCT {
            Agreement::Good
        } else {
            Agreement::Poor
        }
    }

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            Agreement::Excellent => "Excellent",
            Agreement::Good => "Good",
            Agreement::Poor => "Poor",
        }
    }

    /// One-sentence reading of the band.
    pub fn advice(&self) -> &'static str {
        match self {
            Agreement::Excellent => {
                "Excellent agreement: the Monte Carlo estimate closely matches Black-Scholes."
            }
            Agreement::Good => {
                "Good agreement: small differences are expected from Monte Carlo sampling."
            }
            Agreement::Poor => {
                "Poor agreement: consider increasing the number of simulations for better accuracy."
            }
        }
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
