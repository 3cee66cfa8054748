//! # bsfd-methods
//!
//! Numerical methods for bsfd-rs: the explicit finite-difference solver
//! for the Black-Scholes PDE.
//!
//! # Modules
//!
//! * [`finite_differences`]: grid set-up, stability check, explicit stepping
//!
//! # Example
//!
//! ```
//! use bsfd_methods::FiniteDifferenceSolver;
//!
//! let mut solver =
//!     FiniteDifferenceSolver::from_inputs(100.0, 100.0, 0.05, 0.2, 1.0, 500, 100).unwrap();
//! assert!(solver.stability().is_stable());
//! let price = solver.price();
//! assert!((price - 10.45).abs() < 0.1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: explicit Black-Scholes solver.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    max_spatial_steps, stable_spatial_steps, BlackScholesParameters, FiniteDifferenceSolver,
    PriceTable, StabilityCheck,
};
