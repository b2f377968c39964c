//! Price command implementation
//!
//! Prices one European option by Monte Carlo and Black-Scholes and reports
//! the comparison.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use pricer_pricing::comparison::{compare, render_summary, PricingRequest, PricingResult};
use pricer_pricing::mc::{PricePathSet, SummaryStatistics};
use serde::Serialize;
use tracing::{debug, info};

use super::write_json;
use crate::config::{CliConfig, OutputFormat};
use crate::prices::load_price_history;
use crate::Result;

/// JSON document written by `price --format json`
#[derive(Serialize)]
struct PriceReport<'a> {
    #[serde(flatten)]
    result: &'a PricingResult,
    agreement: &'static str,
    terminal_statistics: Option<SummaryStatistics>,
    payoff_statistics: Option<SummaryStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a PricePathSet>,
}

/// Options specific to the price command
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceOptions<'a> {
    /// CSV price history supplying spot and volatility
    pub prices: Option<&'a Path>,
    /// Include the full path matrix in JSON output
    pub include_paths: bool,
}

/// Fold a price history into `config`, below the command-line flags.
///
/// The latest close becomes the spot price and the annualised historical
/// volatility becomes the volatility, unless `flags` set them explicitly.
pub fn apply_price_history(
    config: &mut CliConfig,
    prices: &Path,
    flags: &PricingRequest,
) -> Result<()> {
    let history = load_price_history(prices)?;
    let volatility = history.annualised_volatility()?;
    info!(
        file = %prices.display(),
        observations = history.len(),
        latest_close = history.latest_close(),
        volatility,
        "Loaded price history"
    );

    let derived = PricingRequest {
        spot_price: Some(history.latest_close()),
        volatility: Some(volatility),
        ..Default::default()
    };
    config.merge_request(&derived)?;
    config.merge_request(flags)?;
    config.validate()?;
    Ok(())
}

/// Run the price command
pub fn run<W: Write>(
    config: &CliConfig,
    flags: &PricingRequest,
    options: PriceOptions<'_>,
    out: &mut W,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(prices) = options.prices {
        apply_price_history(&mut config, prices, flags)?;
    }

    let (params, mc_config) = PricingRequest::default().resolve(&config.pricing)?;
    info!(
        option_type = %params.option_type(),
        spot = params.spot_price(),
        strike = params.strike_price(),
        expiry = params.time_to_expiration(),
        rate = params.risk_free_rate(),
        volatility = params.volatility(),
        paths = mc_config.n_paths(),
        steps = mc_config.n_steps(),
        seed = ?mc_config.seed(),
        "Starting pricing"
    );

    let started = Instant::now();
    let result = compare(&params, &mc_config)?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        mc_price = result.mc_price(),
        bs_price = result.bs_price(),
        "Pricing complete"
    );
    debug!(
        std_error = result.mc_std_error(),
        ci_lower = result.mc_ci_lower(),
        ci_upper = result.mc_ci_upper(),
        agreement = %result.agreement(),
        "Comparison detail"
    );

    match config.format {
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "{}", render_summary(&result))?;
        }
        OutputFormat::Json => {
            let report = PriceReport {
                result: &result,
                agreement: result.agreement().label(),
                terminal_statistics: result.terminal_statistics(),
                payoff_statistics: result.payoff_statistics(),
                paths: options.include_paths.then(|| result.paths()),
            };
            write_json(out, &report)?;
        }
    }
    Ok(())
}
