//! Local price history files
//!
//! Reads `date,close` CSV files into a [`PriceHistory`]. Rows may appear in
//! any order; the history is sorted by date on load.

use std::io::Read;
use std::path::Path;

use pricer_core::market_data::{PriceHistory, PriceObservation};

use crate::{CliError, Result};

/// Load a price history from a CSV file with `date` and `close` headers.
pub fn load_price_history(path: &Path) -> Result<PriceHistory> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    read_price_history(file)
}

/// Parse a price history from any CSV reader.
pub fn read_price_history<R: Read>(reader: R) -> Result<PriceHistory> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let observations = csv_reader
        .deserialize::<PriceObservation>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(PriceHistory::new(observations)?)
}
