//! mc-pricer - European Option Pricing from the Command Line
//!
//! Prices European options by Monte Carlo simulation and checks the estimate
//! against the Black-Scholes formula.
//!
//! # Commands
//!
//! - `mc-pricer price` - Price one option and print the comparison summary
//! - `mc-pricer convergence` - Tabulate Monte Carlo error over path counts
//! - `mc-pricer volatility --prices <file>` - Estimate historical volatility

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands::{self, ContractArgs};
use service_cli::config::{build_config, ConfigSources, LogLevel, OutputFormat};
use service_cli::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "mc-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: mc_pricer.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option by Monte Carlo and Black-Scholes
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// CSV price history (date,close) supplying spot and volatility
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Include the simulated path matrix in JSON output
        #[arg(long)]
        include_paths: bool,
    },

    /// Reprice over increasing path counts and report the error
    Convergence {
        #[command(flatten)]
        contract: ContractArgs,

        /// Comma-separated path counts
        #[arg(
            long = "paths",
            value_delimiter = ',',
            default_values_t = commands::convergence::DEFAULT_PATH_COUNTS
        )]
        path_counts: Vec<usize>,
    },

    /// Estimate annualised volatility from a price history
    Volatility {
        /// CSV price history (date,close)
        #[arg(long)]
        prices: PathBuf,

        /// Observations per year
        #[arg(long, default_value_t = pricer_core::market_data::TRADING_DAYS_PER_YEAR)]
        factor: u32,
    },
}

impl Commands {
    fn contract(&self) -> Option<&ContractArgs> {
        match self {
            Commands::Price { contract, .. } | Commands::Convergence { contract, .. } => {
                Some(contract)
            }
            Commands::Volatility { .. } => None,
        }
    }
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let contract = cli.command.contract().cloned().unwrap_or_default();
    let sources = ConfigSources {
        config_file: cli.config.as_deref(),
        request: contract.to_request(),
        log_level: if cli.verbose {
            Some(LogLevel::Debug)
        } else {
            cli.log_level
        },
        format: cli.format,
    };
    let config = build_config(&sources, |name| std::env::var(name).ok())?;

    init_tracing(config.log_level);
    info!(
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );
    debug!(pricing = ?config.pricing, "Resolved pricing defaults");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Price {
            prices,
            include_paths,
            ..
        } => {
            let options = commands::price::PriceOptions {
                prices: prices.as_deref(),
                include_paths,
            };
            commands::price::run(&config, &sources.request, options, &mut stdout)
        }
        Commands::Convergence { path_counts, .. } => {
            commands::convergence::run(&config, &path_counts, &mut stdout)
        }
        Commands::Volatility { prices, factor } => {
            commands::volatility::run(&prices, factor, config.format, &mut stdout)
        }
    }
}
