//! Monte Carlo convergence against the analytical benchmark.
//!
//! Reprices the same contract at increasing path counts. Every run starts
//! from the base configuration's seed, so the sequence is reproducible and
//! the only thing varying between points is the number of paths.

use pricer_core::types::{ModelParams, PricingError};
use pricer_models::analytical::black_scholes_price;

use crate::mc::{ConfidenceInterval, MonteCarloConfig, MonteCarloPricer};
use crate::rng::PricerRng;

/// One path count of a convergence study.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergencePoint {
    /// Paths simulated
    pub num_simulations: usize,
    /// Discounted Monte Carlo estimate
    pub mc_price: f64,
    /// Standard error of the estimate
    pub std_error: f64,
    /// 95% interval around the estimate
    pub confidence_interval: ConfidenceInterval,
    /// |mc_price - analytical price|
    pub absolute_error: f64,
    /// Whether the interval brackets the analytical price
    pub ci_contains_analytical: bool,
}

/// Analytical price and the Monte Carlo points measured against it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergenceStudy {
    /// Black-Scholes price of the contract
    pub analytical_price: f64,
    /// One entry per requested path count, in request order
    pub points: Vec<ConvergencePoint>,
}

impl ConvergenceStudy {
    /// Share of points whose interval contains the analytical price.
    pub fn coverage(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let hits = self.points.iter().filter(|p| p.ci_contains_analytical).count();
        hits as f64 / self.points.len() as f64
    }
}

/// Prices `params` once per entry of `path_counts`.
///
/// Path payoffs are not retained; only the summary numbers of each run are.
///
/// # Errors
///
/// - `InvalidParameter { name: "path_counts", .. }` when `path_counts` is empty
/// - Any path count outside the configured range, reported as `num_simulations`
/// - Invalid model parameters
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ModelParams, OptionType};
/// use pricer_pricing::comparison::convergence_study;
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let params = ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let base = MonteCarloConfig::builder().n_paths(1).n_steps(1).seed(7).build().unwrap();
///
/// let study = convergence_study(&params, &base, &[100, 1_000, 10_000]).unwrap();
/// assert_eq!(study.points.len(), 3);
/// assert!(study.points[2].std_error < study.points[0].std_error);
/// ```
pub fn convergence_study(
    params: &ModelParams,
    base_config: &MonteCarloConfig,
    path_counts: &[usize],
) -> Result<ConvergenceStudy, PricingError> {
    if path_counts.is_empty() {
        return Err(PricingError::invalid(
            "path_counts",
            "at least one path count is required",
        ));
    }

    let analytical_price = black_scholes_price(params)?;
    let points = path_counts
        .iter()
        .map(|&n_paths| -> Result<ConvergencePoint, PricingError> {
            let config = base_config.with_n_paths(n_paths)?;
            let mut rng = PricerRng::from_optional_seed(config.seed());
            let estimate = MonteCarloPricer::new(config)?.price_european(params, &mut rng)?;
            let confidence_interval = estimate.confidence_interval();

            Ok(ConvergencePoint {
                num_simulations: n_paths,
                mc_price: estimate.price(),
                std_error: estimate.std_error(),
                confidence_interval,
                absolute_error: (estimate.price() - analytical_price).abs(),
                ci_contains_analytical: confidence_interval.contains(analytical_price),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ConvergenceStudy {
        analytical_price,
        points,
    })
}
