//! # bsfd
//!
//! Explicit finite-difference pricing of European calls under the
//! Black-Scholes model.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bsfd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bsfd = "0.1"
//! ```
//!
//! ```rust
//! use bsfd::methods::{stable_spatial_steps, FiniteDifferenceSolver};
//! use bsfd::pricingengines::{black_scholes_price, OptionType};
//!
//! let n = stable_spatial_steps(1_000, 1.0, 0.05, 0.2);
//! let mut solver = FiniteDifferenceSolver::from_inputs(100.0, 100.0, 0.05, 0.2, 1.0, 1_000, n)?;
//! let reference = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0);
//! assert!((solver.interpolated_price() - reference).abs() / reference < 0.01);
//! # Ok::<(), bsfd::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bsfd_core as core;

/// Normal distribution and uniform grids.
pub use bsfd_math as math;

/// Closed-form Black-Scholes prices.
pub use bsfd_pricingengines as pricingengines;

/// The explicit finite-difference solver.
pub use bsfd_methods as methods;

pub use bsfd_core::{Error, Result};
pub use bsfd_methods::{BlackScholesParameters, FiniteDifferenceSolver};
