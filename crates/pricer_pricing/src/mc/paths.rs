//! Path generation for Monte Carlo simulation.
//!
//! Trajectories follow the exact log-space solution of Geometric Brownian
//! Motion:
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.
//!
//! # Determinism
//!
//! All normals are drawn from the caller's generator up front, path by path
//! and step by step, before any trajectory is evolved. Evolution then runs
//! in parallel across paths. For a fixed seed the output does not depend on
//! the number of worker threads.

use pricer_core::types::PricingError;
use pricer_models::models::GbmModel;
use rayon::prelude::*;

use super::config::MonteCarloConfig;
use crate::rng::PricerRng;

/// Simulated price trajectories, shape `n_paths × (n_steps + 1)`.
///
/// Read-only once built. Column 0 holds the starting price and the last
/// column the terminal price of each trajectory.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmModel;
/// use pricer_pricing::mc::generate_gbm_paths;
/// use pricer_pricing::rng::PricerRng;
///
/// let model = GbmModel::new(100.0, 0.05, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
/// let paths = generate_gbm_paths(&model, 1.0, 4, 12, &mut rng).unwrap();
///
/// assert_eq!(paths.n_paths(), 4);
/// assert_eq!(paths.row(0).unwrap().len(), 13);
/// assert!(paths.column(0).unwrap().iter().all(|&s| s == 100.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PricePathSet {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    maturity: f64,
}

impl PricePathSet {
    /// Number of trajectories (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per trajectory; each row has `n_steps + 1` points.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Horizon T covered by each trajectory, in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// `true` when the horizon is zero and every point equals the start price.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.maturity == 0.0
    }

    /// Row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// One trajectory, or `None` if `path` is out of range.
    #[inline]
    pub fn row(&self, path: usize) -> Option<&[f64]> {
        let width = self.n_steps + 1;
        let start = path.checked_mul(width)?;
        self.data.get(start..start.checked_add(width)?)
    }

    /// Iterator over trajectories in path order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_steps + 1)
    }

    /// Prices at time step `step` across all paths, or `None` if out of range.
    pub fn column(&self, step: usize) -> Option<Vec<f64>> {
        if step > self.n_steps {
            return None;
        }
        Some(self.rows().map(|row| row[step]).collect())
    }

    /// Last column: the price at expiry of every path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.rows().map(|row| row[self.n_steps]).collect()
    }

    /// Observation times `j · T / n_steps` for `j = 0..=n_steps`.
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.maturity / self.n_steps as f64;
        (0..=self.n_steps).map(|j| j as f64 * dt).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PricePathSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Generates GBM paths.
///
/// # Arguments
///
/// * `model` - Spot, drift and volatility (use [`GbmModel::risk_neutral`] for pricing)
/// * `maturity` - Horizon T in years, `>= 0`
/// * `n_paths` - Number of independent trajectories, `>= 1`
/// * `n_steps` - Number of discretisation intervals, `>= 1`
/// * `rng` - Caller-owned generator; `n_paths × n_steps` normals are drawn from it
///
/// # Zero Horizon
///
/// With `maturity == 0` no random numbers are drawn and every row holds
/// `n_steps + 1` copies of the spot price.
///
/// # Errors
///
/// `PricingError::InvalidParameter` naming `num_simulations`, `num_steps` or
/// `time_to_expiration`.
pub fn generate_gbm_paths(
    model: &GbmModel<f64>,
    maturity: f64,
    n_paths: usize,
    n_steps: usize,
    rng: &mut PricerRng,
) -> Result<PricePathSet, PricingError> {
    if n_paths == 0 {
        return Err(PricingError::invalid("num_simulations", "must be at least 1, got 0"));
    }
    if n_steps == 0 {
        return Err(PricingError::invalid("num_steps", "must be at least 1, got 0"));
    }
    if !maturity.is_finite() || maturity < 0.0 {
        return Err(PricingError::invalid(
            "time_to_expiration",
            format!("must be finite and non-negative, got {}", maturity),
        ));
    }

    let width = n_steps + 1;
    let len = n_paths.checked_mul(width).ok_or_else(|| {
        PricingError::invalid("num_simulations", "path matrix size overflows usize")
    })?;
    let mut data = vec![model.spot(); len];

    if maturity > 0.0 {
        let mut randoms = vec![0.0; n_paths * n_steps];
        rng.fill_normal(&mut randoms);

        let coeffs = model.step_coefficients(maturity / n_steps as f64);

        data.par_chunks_mut(width)
            .zip(randoms.par_chunks(n_steps))
            .for_each(|(path, shocks)| {
                for (step, &z) in shocks.iter().enumerate() {
                    path[step + 1] = coeffs.apply(path[step], z);
                }
            });
    }

    Ok(PricePathSet {
        data,
        n_paths,
        n_steps,
        maturity,
    })
}

/// Generates paths sized by a validated [`MonteCarloConfig`].
pub fn generate_paths_for_config(
    model: &GbmModel<f64>,
    maturity: f64,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
) -> Result<PricePathSet, PricingError> {
    generate_gbm_paths(model, maturity, config.n_paths(), config.n_steps(), rng)
}

/// Builds the model and generator from plain inputs and simulates.
///
/// `seed = None` draws from OS entropy, so successive calls differ.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::simulate_paths;
///
/// let a = simulate_paths(100.0, 0.05, 0.2, 1.0, 12, 50, Some(42)).unwrap();
/// let b = simulate_paths(100.0, 0.05, 0.2, 1.0, 12, 50, Some(42)).unwrap();
/// assert_eq!(a, b);
/// ```
///
/// # Errors
///
/// Invalid model inputs (`spot_price`, `drift`, `volatility`) as well as
/// everything [`generate_gbm_paths`] rejects.
pub fn simulate_paths(
    spot: f64,
    drift: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
    n_paths: usize,
    seed: Option<u64>,
) -> Result<PricePathSet, PricingError> {
    let model = GbmModel::new(spot, drift, volatility)?;
    let mut rng = PricerRng::from_optional_seed(seed);
    generate_gbm_paths(&model, maturity, n_paths, n_steps, &mut rng)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn same_seed_same_paths(
            seed in any::<u64>(),
            n_paths in 1usize..40,
            n_steps in 1usize..20,
            maturity in 0.0f64..3.0,
        ) {
            let model = GbmModel::new(100.0, 0.03, 0.25).unwrap();
            let a = generate_gbm_paths(&model, maturity, n_paths, n_steps, &mut PricerRng::from_seed(seed)).unwrap();
            let b = generate_gbm_paths(&model, maturity, n_paths, n_steps, &mut PricerRng::from_seed(seed)).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert!(a.as_slice().iter().all(|&s| s > 0.0 && s.is_finite()));
        }
    }
}
