//! Driver configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags (which clap also fills from `BSFD_*` environment
//! variables). Later layers win.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output file for the price grid.
pub const DEFAULT_OUTPUT: &str = "BlackScholesFD.txt";

/// Log levels accepted by `--log-level` and the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Fully resolved inputs for one run of the driver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub time_steps: usize,
    /// `None` picks the largest stable resolution for `time_steps`.
    pub spatial_steps: Option<usize>,
    pub output: PathBuf,
    pub write_output: bool,
    pub strict_stability: bool,
    pub log_level: LogLevel,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            spot: 1150.0,
            strike: 1072.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 5.0,
            time_steps: 10_000,
            spatial_steps: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            write_output: true,
            strict_stability: false,
            log_level: LogLevel::Info,
        }
    }
}

impl DriverConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(spot) = cli.spot {
            self.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.strike = strike;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(volatility) = cli.volatility {
            self.volatility = volatility;
        }
        if let Some(maturity) = cli.maturity {
            self.maturity = maturity;
        }
        if let Some(time_steps) = cli.time_steps {
            self.time_steps = time_steps;
        }
        if cli.spatial_steps.is_some() {
            self.spatial_steps = cli.spatial_steps;
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if cli.no_output {
            self.write_output = false;
        }
        if cli.strict_stability {
            self.strict_stability = true;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_file: Option<PathBuf>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub time_steps: Option<usize>,
    pub spatial_steps: Option<usize>,
    pub output: Option<PathBuf>,
    pub no_output: bool,
    pub strict_stability: bool,
    pub log_level: Option<LogLevel>,
}

/// Build the configuration from all sources.
///
/// Priority (highest to lowest):
/// 1. CLI arguments and `BSFD_*` environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliArgs) -> Result<DriverConfig> {
    let mut config = match &cli.config_file {
        Some(path) => DriverConfig::from_file(path)?,
        None => DriverConfig::default(),
    };
    config.merge_with_cli(cli);
    Ok(config)
}
