//! The immutable record of one comparison run.

use pricer_core::types::{ModelParams, OptionType};

use super::agreement::Agreement;
use crate::mc::{ConfidenceInterval, MonteCarloConfig, MonteCarloEstimate, PricePathSet, SummaryStatistics};
use crate::rng::PricerRng;

/// Monte Carlo and Black-Scholes prices for one contract, with the
/// simulation behind the Monte Carlo figure.
///
/// Every field is private and set once by the orchestrator; consumers only
/// read. The path matrix is excluded from serialised output (serialise
/// [`PricingResult::paths`] separately when it is needed).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    params: ModelParams,
    config: MonteCarloConfig,
    mc_price: f64,
    mc_std_error: f64,
    confidence_interval: ConfidenceInterval,
    #[cfg_attr(feature = "serde", serde(skip))]
    paths: PricePathSet,
    payoffs: Vec<f64>,
    bs_price: f64,
    absolute_difference: f64,
    percentage_difference: f64,
}

impl PricingResult {
    pub(crate) fn new(
        params: ModelParams,
        config: MonteCarloConfig,
        estimate: MonteCarloEstimate,
        bs_price: f64,
    ) -> Self {
        let mc_price = estimate.price();
        let mc_std_error = estimate.std_error();
        let confidence_interval = estimate.confidence_interval();
        let (paths, payoffs) = estimate.into_parts();

        let absolute_difference = (mc_price - bs_price).abs();
        let percentage_difference = if bs_price != 0.0 {
            absolute_difference / bs_price * 100.0
        } else {
            0.0
        };

        Self {
            params,
            config,
            mc_price,
            mc_std_error,
            confidence_interval,
            paths,
            payoffs,
            bs_price,
            absolute_difference,
            percentage_difference,
        }
    }

    // Inputs

    /// Contract and market parameters shared by both pricers.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Simulation configuration; its seed is the one actually used.
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// S₀
    pub fn spot_price(&self) -> f64 {
        self.params.spot_price()
    }

    /// K
    pub fn strike_price(&self) -> f64 {
        self.params.strike_price()
    }

    /// T in years
    pub fn time_to_expiration(&self) -> f64 {
        self.params.time_to_expiration()
    }

    /// r
    pub fn risk_free_rate(&self) -> f64 {
        self.params.risk_free_rate()
    }

    /// σ
    pub fn volatility(&self) -> f64 {
        self.params.volatility()
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.params.option_type()
    }

    /// Number of simulated trajectories.
    pub fn num_simulations(&self) -> usize {
        self.config.n_paths()
    }

    /// Time steps per trajectory.
    pub fn num_steps(&self) -> usize {
        self.config.n_steps()
    }

    /// Seed of the run, `None` when drawn from entropy.
    pub fn random_seed(&self) -> Option<u64> {
        self.config.seed()
    }

    // Monte Carlo

    /// Discounted mean payoff.
    pub fn mc_price(&self) -> f64 {
        self.mc_price
    }

    /// Standard error of [`PricingResult::mc_price`].
    pub fn mc_std_error(&self) -> f64 {
        self.mc_std_error
    }

    /// 95% confidence interval of the Monte Carlo price.
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        self.confidence_interval
    }

    /// Lower 95% bound.
    pub fn mc_ci_lower(&self) -> f64 {
        self.confidence_interval.lower
    }

    /// Upper 95% bound.
    pub fn mc_ci_upper(&self) -> f64 {
        self.confidence_interval.upper
    }

    /// Simulated trajectories.
    pub fn paths(&self) -> &PricePathSet {
        &self.paths
    }

    /// Undiscounted payoff per trajectory.
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    // Benchmark and comparison

    /// Black-Scholes price.
    pub fn bs_price(&self) -> f64 {
        self.bs_price
    }

    /// `|mc_price - bs_price|`
    pub fn absolute_difference(&self) -> f64 {
        self.absolute_difference
    }

    /// `absolute_difference / bs_price × 100`, or `0` when `bs_price == 0`.
    ///
    /// Check [`PricingResult::percentage_difference_defined`] before reading
    /// a zero as perfect agreement.
    pub fn percentage_difference(&self) -> f64 {
        self.percentage_difference
    }

    /// `false` when the analytical price is exactly zero.
    pub fn percentage_difference_defined(&self) -> bool {
        self.bs_price != 0.0
    }

    /// Whether the 95% interval covers the analytical price.
    pub fn ci_contains_analytical(&self) -> bool {
        self.confidence_interval.contains(self.bs_price)
    }

    /// Agreement band.
    ///
    /// With a zero analytical price the band is `Excellent` only when the
    /// Monte Carlo price is zero too, and `Poor` otherwise.
    pub fn agreement(&self) -> Agreement {
        if self.percentage_difference_defined() {
            Agreement::from_percentage_difference(self.percentage_difference)
        } else if self.absolute_difference == 0.0 {
            Agreement::Excellent
        } else {
            Agreement::Poor
        }
    }

    // Simulation statistics

    /// Mean, spread and range of the terminal prices.
    pub fn terminal_statistics(&self) -> Option<SummaryStatistics> {
        SummaryStatistics::from_sample(&self.paths.terminal_prices())
    }

    /// Mean, spread and range of the payoffs.
    pub fn payoff_statistics(&self) -> Option<SummaryStatistics> {
        SummaryStatistics::from_sample(&self.payoffs)
    }

    /// Up to `n` distinct path indices for plotting, drawn without replacement.
    ///
    /// A fixed `seed` picks the same subset every time.
    pub fn sample_paths(&self, n: usize, seed: Option<u64>) -> Vec<usize> {
        PricerRng::from_optional_seed(seed).sample_indices(self.paths.n_paths(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::{MonteCarloPricer, Z_95};
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn build(params: ModelParams, n_paths: usize, bs_price: f64) -> PricingResult {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(4)
            .seed(42)
            .build()
            .unwrap();
        let estimate = MonteCarloPricer::new(config.clone())
            .unwrap()
            .price_european_seeded(&params)
            .unwrap();
        PricingResult::new(params, config, estimate, bs_price)
    }

    fn atm_call() -> ModelParams {
        ModelParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_differences() {
        let result = build(atm_call(), 1000, 10.0);
        let abs = (result.mc_price() - 10.0).abs();
        assert_relative_eq!(result.absolute_difference(), abs, epsilon = 1e-15);
        assert_relative_eq!(result.percentage_difference(), abs / 10.0 * 100.0, epsilon = 1e-12);
        assert!(result.percentage_difference_defined());
    }

    #[test]
    fn test_zero_benchmark_gives_zero_percentage() {
        let result = build(atm_call(), 100, 0.0);
        assert_eq!(result.percentage_difference(), 0.0);
        assert!(!result.percentage_difference_defined());
        assert_eq!(result.agreement(), Agreement::Poor);
    }

    #[test]
    fn test_expired_contract_agrees_exactly() {
        let params = ModelParams::new(90.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
        let result = build(params, 50, 0.0);
        assert_eq!(result.mc_price(), 0.0);
        assert_eq!(result.agreement(), Agreement::Excellent);
        assert!(result.ci_contains_analytical());
    }

    #[test]
    fn test_echoes_inputs() {
        let result = build(atm_call(), 250, 10.45);
        assert_eq!(result.spot_price(), 100.0);
        assert_eq!(result.strike_price(), 100.0);
        assert_eq!(result.time_to_expiration(), 1.0);
        assert_eq!(result.risk_free_rate(), 0.05);
        assert_eq!(result.volatility(), 0.2);
        assert_eq!(result.option_type(), OptionType::Call);
        assert_eq!(result.num_simulations(), 250);
        assert_eq!(result.num_steps(), 4);
        assert_eq!(result.random_seed(), Some(42));
        assert_eq!(result.payoffs().len(), 250);
        assert_eq!(result.paths().n_paths(), 250);
    }

    #[test]
    fn test_confidence_bounds() {
        let result = build(atm_call(), 500, 10.45);
        assert_relative_eq!(
            result.mc_ci_upper() - result.mc_ci_lower(),
            2.0 * Z_95 * result.mc_std_error(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_statistics() {
        let result = build(atm_call(), 400, 10.45);
        let payoff_stats = result.payoff_statistics().unwrap();
        assert!(payoff_stats.mean >= 0.0);
        assert_eq!(
            payoff_stats.max,
            result.payoffs().iter().cloned().fold(f64::MIN, f64::max)
        );

        let terminal = result.terminal_statistics().unwrap();
        assert_eq!(terminal.count, 400);
        assert!(terminal.std_dev > 0.0);
    }

    #[test]
    fn test_sample_paths() {
        let result = build(atm_call(), 300, 10.45);

        let picked = result.sample_paths(100, Some(1));
        assert_eq!(picked.len(), 100);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 100);
        assert!(picked.iter().all(|&i| i < 300));
        assert_eq!(picked, result.sample_paths(100, Some(1)));

        assert_eq!(result.sample_paths(1000, Some(1)).len(), 300);
    }
}
