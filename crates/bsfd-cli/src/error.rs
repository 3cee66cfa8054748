//! Error types for the driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `bsfd` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid inputs or a rejected grid from the solver crates.
    #[error(transparent)]
    Solver(#[from] bsfd_core::Error),

    /// Configuration file could not be read or parsed.
    #[error("configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Writing the summary or the price grid failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for driver operations.
pub type Result<T> = std::result::Result<T, CliError>;
