//! Convergence command implementation
//!
//! Reprices one contract at increasing path counts and tabulates the Monte
//! Carlo error against the Black-Scholes price.

use std::io::Write;
use std::time::Instant;

use pricer_pricing::comparison::{convergence_study, group_thousands, PricingRequest};
use tracing::info;

use super::write_json;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Path counts used when none are given.
pub const DEFAULT_PATH_COUNTS: [usize; 5] = [100, 1_000, 10_000, 50_000, 100_000];

/// Run the convergence command
pub fn run<W: Write>(config: &CliConfig, path_counts: &[usize], out: &mut W) -> Result<()> {
    if path_counts.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one path count is required".to_string(),
        ));
    }

    let (params, base_config) = PricingRequest::default().resolve(&config.pricing)?;
    info!(
        option_type = %params.option_type(),
        counts = ?path_counts,
        steps = base_config.n_steps(),
        seed = ?base_config.seed(),
        "Starting convergence study"
    );

    let started = Instant::now();
    let study = convergence_study(&params, &base_config, path_counts)?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        coverage = study.coverage(),
        "Convergence study complete"
    );

    match config.format {
        OutputFormat::Json => write_json(out, &study)?,
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(
                out,
                "{} option, Black-Scholes price ${:.4}",
                params.option_type().as_str().to_uppercase(),
                study.analytical_price
            )?;
            writeln!(out)?;
            writeln!(
                out,
                "{:>12}  {:>10}  {:>10}  {:>10}  {:>24}  {:>6}",
                "Paths", "MC Price", "Std Error", "|Error|", "95% CI", "In CI"
            )?;
            writeln!(out, "{}", "-".repeat(82))?;
            for point in &study.points {
                let ci = format!(
                    "[{:.4}, {:.4}]",
                    point.confidence_interval.lower, point.confidence_interval.upper
                );
                writeln!(
                    out,
                    "{:>12}  {:>10.4}  {:>10.4}  {:>10.4}  {:>24}  {:>6}",
                    group_thousands(point.num_simulations),
                    point.mc_price,
                    point.std_error,
                    point.absolute_error,
                    ci,
                    if point.ci_contains_analytical { "yes" } else { "no" }
                )?;
            }
        }
    }
    Ok(())
}
