//! `bsfd`: price a European call with the explicit finite-difference
//! solver and dump the full price grid.
//!
//! Inputs come from built-in defaults, an optional TOML file (`--config`)
//! and command-line flags or `BSFD_*` environment variables, in increasing
//! priority.

use bsfd_methods::{
    stable_spatial_steps, BlackScholesParameters, FiniteDifferenceSolver, StabilityCheck,
};
use bsfd_pricingengines::{black_scholes_price, OptionType};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod report;

use config::{build_config, CliArgs, DriverConfig, LogLevel};
use error::Result;
use report::RunSummary;

/// Explicit finite-difference pricer for European calls under Black-Scholes
#[derive(Parser, Debug)]
#[command(name = "bsfd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE", env = "BSFD_CONFIG")]
    config: Option<PathBuf>,

    /// Current underlying price
    #[arg(long, env = "BSFD_SPOT")]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, env = "BSFD_STRIKE")]
    strike: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, env = "BSFD_RATE", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Annualised volatility
    #[arg(long, env = "BSFD_VOLATILITY")]
    volatility: Option<f64>,

    /// Time to expiry in years
    #[arg(long, env = "BSFD_MATURITY")]
    maturity: Option<f64>,

    /// Number of temporal intervals M
    #[arg(short = 'm', long, env = "BSFD_TIME_STEPS")]
    time_steps: Option<usize>,

    /// Number of spatial intervals N (default: largest stable value)
    #[arg(short = 'n', long, env = "BSFD_SPATIAL_STEPS")]
    spatial_steps: Option<usize>,

    /// Price grid output file
    #[arg(short, long, value_name = "FILE", env = "BSFD_OUTPUT")]
    output: Option<PathBuf>,

    /// Skip writing the price grid
    #[arg(long, env = "BSFD_NO_OUTPUT")]
    no_output: bool,

    /// Fail instead of warning when the grid violates the stability bound
    #[arg(long, env = "BSFD_STRICT_STABILITY")]
    strict_stability: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, env = "BSFD_LOG_LEVEL")]
    log_level: Option<LogLevel>,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            config_file: args.config,
            spot: args.spot,
            strike: args.strike,
            rate: args.rate,
            volatility: args.volatility,
            maturity: args.maturity,
            time_steps: args.time_steps,
            spatial_steps: args.spatial_steps,
            output: args.output,
            no_output: args.no_output,
            strict_stability: args.strict_stability,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve the grid, solve, and collect the reported figures.
fn run(config: &DriverConfig) -> Result<(FiniteDifferenceSolver, RunSummary)> {
    let spatial_steps = match config.spatial_steps {
        Some(n) => n,
        None => {
            let n = stable_spatial_steps(
                config.time_steps,
                config.maturity,
                config.rate,
                config.volatility,
            );
            info!(spatial_steps = n, "spatial resolution picked from the stability bound");
            n
        }
    };

    let params = BlackScholesParameters::new(
        config.spot,
        config.strike,
        config.rate,
        config.volatility,
        config.maturity,
        config.time_steps,
        spatial_steps,
    )?;

    // the solver itself warns about unstable grids
    let stability = StabilityCheck::new(&params);
    if config.strict_stability {
        stability.ensure_stable()?;
    }

    let mut solver = FiniteDifferenceSolver::new(params)?;
    let fd_price = solver.price();
    let interpolated_price = solver.interpolated_price();
    let closed_form_price = black_scholes_price(
        OptionType::Call,
        params.spot(),
        params.strike(),
        params.rate(),
        params.volatility(),
        params.maturity(),
    );
    info!(fd_price, closed_form_price, "solve complete");

    let summary = RunSummary {
        params,
        stability_ratio: stability.ratio(),
        spot_index: solver.spot_index(),
        fd_price,
        interpolated_price,
        closed_form_price,
    };
    Ok((solver, summary))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cli_args: CliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level);
    info!(
        spot = config.spot,
        strike = config.strike,
        rate = config.rate,
        volatility = config.volatility,
        maturity = config.maturity,
        time_steps = config.time_steps,
        spatial_steps = ?config.spatial_steps,
        "configuration loaded"
    );

    let (solver, summary) = run(&config)?;
    report::print_summary(&mut std::io::stdout().lock(), &summary)?;

    if config.write_output {
        report::write_price_grid_file(solver.price_table(), &config.output)?;
        info!(path = %config.output.display(), "price grid written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bsfd_core::Error;
    use error::CliError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer};

    fn config(time_steps: usize, spatial_steps: Option<usize>) -> DriverConfig {
        DriverConfig {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            time_steps,
            spatial_steps,
            write_output: false,
            ..DriverConfig::default()
        }
    }

    #[test]
    fn args_parse_into_overrides() {
        let args = Args::try_parse_from([
            "bsfd",
            "--spot",
            "100",
            "--rate",
            "-0.01",
            "-m",
            "500",
            "--spatial-steps",
            "100",
            "--no-output",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let cli: CliArgs = args.into();
        assert_eq!(cli.spot, Some(100.0));
        assert_eq!(cli.rate, Some(-0.01));
        assert_eq!(cli.time_steps, Some(500));
        assert_eq!(cli.spatial_steps, Some(100));
        assert!(cli.no_output);
        assert!(!cli.strict_stability);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn missing_spatial_steps_uses_the_stability_heuristic() {
        let (solver, summary) = run(&config(100, None)).unwrap();
        assert_eq!(solver.parameters().spatial_steps(), 49);
        assert!(summary.stability_ratio <= 1.0);
        assert!(summary.fd_price.is_finite());
    }

    #[test]
    fn stable_run_reports_prices_near_closed_form() {
        let (_, summary) = run(&config(500, Some(100))).unwrap();
        assert_eq!(summary.spot_index, 50);
        assert_relative_eq!(summary.closed_form_price, 10.450_583_572_185_565, max_relative = 1e-9);
        assert_relative_eq!(summary.fd_price, summary.closed_form_price, max_relative = 0.01);
        assert_eq!(summary.fd_price, summary.interpolated_price);
    }

    /// Counts `WARN` events seen while it is the default subscriber.
    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, usize) {
        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, counter.0.load(Ordering::SeqCst))
    }

    #[test]
    fn unstable_grid_warns_once_by_default() {
        let (result, warnings) = warnings_during(|| run(&config(100, Some(100))));
        assert!(result.is_ok());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn stable_grid_does_not_warn() {
        let (result, warnings) = warnings_during(|| run(&config(500, Some(100))));
        assert!(result.is_ok());
        assert_eq!(warnings, 0);
    }

    #[test]
    fn strict_stability_rejects_unstable_grids() {
        let strict = DriverConfig {
            strict_stability: true,
            ..config(100, Some(100))
        };
        match run(&strict) {
            Err(CliError::Solver(Error::NumericalInstability {
                max_spatial_steps, ..
            })) => assert_eq!(max_spatial_steps, 49),
            other => panic!("expected NumericalInstability, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_inputs_surface_as_solver_errors() {
        let bad = DriverConfig {
            volatility: 0.0,
            ..config(500, Some(100))
        };
        assert!(matches!(
            run(&bad),
            Err(CliError::Solver(Error::InvalidParameter(_)))
        ));
    }
}
