//! Error types for bsfd-rs.
//!
//! A single `thiserror`-derived enum covers every failure the solver can
//! report. Input validation goes through the `ensure!` macro, which returns
//! [`Error::InvalidParameter`].

use thiserror::Error;

/// The top-level error type used throughout bsfd-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A construction parameter is out of its admissible range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The grid violates the explicit scheme's stability bound.
    #[error(
        "numerical instability: stability ratio {ratio:.4} exceeds 1 \
         (use at most {max_spatial_steps} spatial steps)"
    )]
    NumericalInstability {
        /// The stability ratio `α·N² + β` of the rejected grid.
        ratio: f64,
        /// Largest spatial step count satisfying the bound for the same
        /// temporal resolution.
        max_spatial_steps: usize,
    },
}

/// Shorthand `Result` type used throughout bsfd-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsfd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bsfd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}
