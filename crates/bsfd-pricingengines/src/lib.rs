//! # bsfd-pricingengines
//!
//! Closed-form Black-Scholes prices for European options. These are the
//! reference values the finite-difference solver is validated against.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Analytic Black-Scholes formula for European calls and puts.
pub mod analytic_european;

pub use analytic_european::{black_scholes_price, OptionType};
