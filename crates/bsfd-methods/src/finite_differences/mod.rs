//! Finite difference methods for PDE-based option pricing.
//!
//! An explicit (forward-Euler in time-to-maturity) scheme for the
//! Black-Scholes PDE of a European call on a uniform price grid.
//!
//! # Overview
//!
//! * [`BlackScholesParameters`]: validated contract, market and grid inputs
//! * [`FiniteDifferenceSolver`]: grids, boundary set-up and time stepping
//! * [`PriceTable`]: dense `(N + 1) × (M + 1)` table of option values
//! * [`StabilityCheck`]: pre-flight check of the explicit scheme's bound

pub mod explicit;
pub mod parameters;
pub mod price_table;
pub mod stability;

pub use explicit::FiniteDifferenceSolver;
pub use parameters::{BlackScholesParameters, MAX_TABLE_ENTRIES};
pub use price_table::PriceTable;
pub use stability::{max_spatial_steps, stable_spatial_steps, StabilityCheck, STABILITY_MARGIN};
