//! Probability distributions.
//!
//! Only the standard normal is needed: the closed-form Black-Scholes
//! reference evaluates `N(d1)` and `N(d2)`. Delegates to `statrs`.

pub mod normal;

pub use normal::normal_cdf;
