//! # bsfd-math
//!
//! Mathematical utilities: the standard normal distribution (via statrs)
//! and uniformly spaced grids used to discretise price and time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Uniformly spaced one-dimensional grids.
pub mod grid;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::normal_cdf;
pub use grid::UniformGrid;
