//! Standard normal distribution.
//!
//! Wraps the `statrs` crate's normal implementation.

use bsfd_core::Real;
use statrs::distribution::{ContinuousCDF, Normal};

/// The standard normal cumulative distribution function Φ(x).
pub fn normal_cdf(x: Real) -> Real {
    if x == 0.0 {
        return 0.5;
    }
    Normal::standard().cdf(x)
}
