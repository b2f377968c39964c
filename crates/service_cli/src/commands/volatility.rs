//! Volatility command implementation
//!
//! Estimates annualised historical volatility from a local price file.

use std::io::Write;
use std::path::Path;

use pricer_core::market_data::estimate_volatility;
use serde::Serialize;
use tracing::info;

use super::write_json;
use crate::config::OutputFormat;
use crate::prices::load_price_history;
use crate::Result;

#[derive(Serialize)]
struct VolatilityReport {
    observations: usize,
    first_date: String,
    last_date: String,
    latest_close: f64,
    annualisation_factor: u32,
    volatility: f64,
}

/// Run the volatility command
pub fn run<W: Write>(
    prices: &Path,
    annualisation_factor: u32,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let history = load_price_history(prices)?;
    let volatility = estimate_volatility(&history.closes(), annualisation_factor)?;
    info!(
        file = %prices.display(),
        observations = history.len(),
        volatility,
        "Estimated historical volatility"
    );

    let observations = history.observations();
    let report = VolatilityReport {
        observations: history.len(),
        first_date: observations[0].date.to_string(),
        last_date: observations[observations.len() - 1].date.to_string(),
        latest_close: history.latest_close(),
        annualisation_factor,
        volatility,
    };

    match format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Text => {
            writeln!(out, "Price file:            {}", prices.display())?;
            writeln!(
                out,
                "Observations:          {} ({} to {})",
                report.observations, report.first_date, report.last_date
            )?;
            writeln!(out, "Latest Close:          ${:.2}", report.latest_close)?;
            writeln!(
                out,
                "Annualised Volatility: {:.2}% (factor {})",
                report.volatility * 100.0,
                report.annualisation_factor
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,close").unwrap();
        for (day, close) in [(2, 101.0), (1, 100.0), (3, 99.0), (4, 102.5)] {
            writeln!(file, "2024-03-0{},{}", day, close).unwrap();
        }
        file
    }

    #[test]
    fn test_text_report() {
        let file = price_file();
        let mut out = Vec::new();
        run(file.path(), 252, OutputFormat::Text, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Observations:          4 (2024-03-01 to 2024-03-04)"));
        assert!(text.contains("Latest Close:          $102.50"));
    }

    #[test]
    fn test_factor_scales_volatility() {
        let file = price_file();
        let mut daily = Vec::new();
        let mut annual = Vec::new();
        run(file.path(), 1, OutputFormat::Json, &mut daily).unwrap();
        run(file.path(), 252, OutputFormat::Json, &mut annual).unwrap();

        let daily: serde_json::Value = serde_json::from_slice(&daily).unwrap();
        let annual: serde_json::Value = serde_json::from_slice(&annual).unwrap();
        let ratio = annual["volatility"].as_f64().unwrap() / daily["volatility"].as_f64().unwrap();
        approx::assert_relative_eq!(ratio, 252.0_f64.sqrt(), epsilon = 1e-12);
    }
}
