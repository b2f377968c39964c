//! Sample statistics for Monte Carlo output.
//!
//! Standard deviations here are population (divide by n) figures, the
//! convention the estimator's standard error is defined with.

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;

/// Location and spread of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryStatistics {
    /// Sample size.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl SummaryStatistics {
    /// Computes summary statistics, or `None` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::SummaryStatistics;
    ///
    /// let stats = SummaryStatistics::from_sample(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.max, 4.0);
    /// assert!((stats.std_dev - 1.25_f64.sqrt()).abs() < 1e-15);
    /// ```
    pub fn from_sample(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Some(Self {
            count: values.len(),
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Symmetric confidence interval around an estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// `estimate ± z · std_error`.
    #[inline]
    pub fn around(estimate: f64, std_error: f64, z: f64) -> Self {
        let half_width = z * std_error;
        Self {
            lower: estimate - half_width,
            upper: estimate + half_width,
        }
    }

    /// Half the interval width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.upper - self.lower)
    }

    /// `true` if `value` lies within the closed interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_empty_sample() {
        assert!(SummaryStatistics::from_sample(&[]).is_none());
    }

    #[test]
    fn test_summary_constant_sample() {
        let stats = SummaryStatistics::from_sample(&[5.0; 10]).unwrap();
        assert_eq!(stats.count, 10);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_summary_uses_population_std() {
        let stats = SummaryStatistics::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(stats.mean, 5.0, epsilon = 1e-15);
        assert_relative_eq!(stats.std_dev, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::around(10.0, 0.5, Z_95);
        assert_relative_eq!(ci.lower, 9.02, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 10.98, epsilon = 1e-12);
        assert_relative_eq!(ci.half_width(), 0.98, epsilon = 1e-12);
        assert!(ci.contains(10.5));
        assert!(!ci.contains(11.0));
    }

    #[test]
    fn test_zero_width_interval_contains_point() {
        let ci = ConfidenceInterval::around(3.0, 0.0, Z_95);
        assert!(ci.contains(3.0));
        assert_eq!(ci.half_width(), 0.0);
    }
}
