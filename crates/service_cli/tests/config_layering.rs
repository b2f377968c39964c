//! Configuration layering: defaults < file < environment < flags.

use std::collections::HashMap;
use std::io::Write;

use pricer_core::types::OptionType;
use pricer_pricing::comparison::PricingRequest;
use service_cli::config::{build_config, ConfigError, ConfigSources, LogLevel, OutputFormat};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const FILE: &str = r#"
log_level = "warn"

[pricing]
spot_price = 120.0
strike_price = 110.0
volatility = 0.3
num_simulations = 2000
"#;

#[test]
fn test_defaults_only() {
    let config = build_config(&ConfigSources::default(), env(&[])).unwrap();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.pricing.spot_price, 100.0);
    assert_eq!(config.pricing.num_steps, 252);
    assert_eq!(config.pricing.random_seed, Some(42));
}

#[test]
fn test_file_over_defaults() {
    let file = config_file(FILE);
    let sources = ConfigSources {
        config_file: Some(file.path()),
        ..Default::default()
    };
    let config = build_config(&sources, env(&[])).unwrap();

    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.pricing.spot_price, 120.0);
    assert_eq!(config.pricing.num_simulations, 2000);
    assert_eq!(config.pricing.risk_free_rate, 0.05);
}

#[test]
fn test_env_over_file() {
    let file = config_file(FILE);
    let sources = ConfigSources {
        config_file: Some(file.path()),
        ..Default::default()
    };
    let config = build_config(
        &sources,
        env(&[
            ("MC_PRICER_SPOT_PRICE", "130"),
            ("MC_PRICER_OPTION_TYPE", "put"),
        ]),
    )
    .unwrap();

    assert_eq!(config.pricing.spot_price, 130.0);
    assert_eq!(config.pricing.option_type, OptionType::Put);
    assert_eq!(config.pricing.strike_price, 110.0);
}

#[test]
fn test_flags_over_env() {
    let file = config_file(FILE);
    let sources = ConfigSources {
        config_file: Some(file.path()),
        request: PricingRequest {
            spot_price: Some(140.0),
            num_steps: Some(12),
            unseeded: true,
            ..Default::default()
        },
        log_level: Some(LogLevel::Debug),
        format: Some(OutputFormat::Json),
    };
    let config = build_config(
        &sources,
        env(&[
            ("MC_PRICER_SPOT_PRICE", "130"),
            ("MC_PRICER_RANDOM_SEED", "7"),
        ]),
    )
    .unwrap();

    assert_eq!(config.pricing.spot_price, 140.0);
    assert_eq!(config.pricing.num_steps, 12);
    assert_eq!(config.pricing.random_seed, None);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let sources = ConfigSources {
        config_file: Some(missing.as_path()),
        ..Default::default()
    };
    let err = build_config(&sources, env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::FileError(_)));
}

#[test]
fn test_validation_runs_after_layering() {
    let file = config_file("[pricing]\nvolatility = -0.1\nnum_steps = 0\n");
    let sources = ConfigSources {
        config_file: Some(file.path()),
        ..Default::default()
    };
    match build_config(&sources, env(&[])).unwrap_err() {
        ConfigError::Invalid(problems) => assert_eq!(problems.len(), 2),
        other => panic!("unexpected error: {other}"),
    }

    // A flag can repair a bad file value
    let sources = ConfigSources {
        config_file: Some(file.path()),
        request: PricingRequest {
            volatility: Some(0.2),
            num_steps: Some(50),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(build_config(&sources, env(&[])).is_ok());
}
