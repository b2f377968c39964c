//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

use chrono::NaiveDate;

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::option_type::OptionType;
    use pricer_core::types::params::ModelParams;

    let params = ModelParams::new(100.0, 90.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
    assert_eq!(params.intrinsic_value(), 10.0);

    let err: PricingError = "digital".parse::<OptionType>().unwrap_err();
    assert_eq!(err.parameter(), Some("option_type"));
}

/// Test that commonly used types are re-exported at module level.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{ModelParams, OptionType, PricingError};

    let result: Result<ModelParams, PricingError> =
        ModelParams::new(100.0, 100.0, 1.0, 0.05, -0.2, OptionType::Put);
    assert!(result.is_err());
}

/// Test that market data statistics are accessible via absolute path.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::volatility::estimate_volatility;
    use pricer_core::market_data::{PriceHistory, PriceObservation, TRADING_DAYS_PER_YEAR};

    let closes = [100.0, 101.5, 100.8, 102.2, 101.9];
    let observations = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceObservation {
            date: NaiveDate::from_ymd_opt(2024, 6, 3 + i as u32).unwrap(),
            close,
        })
        .collect();

    let history = PriceHistory::new(observations).unwrap();
    assert_eq!(
        history.annualised_volatility().unwrap(),
        estimate_volatility(&closes, TRADING_DAYS_PER_YEAR).unwrap()
    );
}
