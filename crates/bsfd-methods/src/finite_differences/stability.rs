//! Pre-flight stability check for the explicit scheme.
//!
//! The centre weight of the stencil at the top interior node is
//! `1 − β − α·N²` with `α = Δt·σ²` and `β = Δt·r`. Keeping it non-negative
//! bounds the spatial resolution for a given time step:
//!
//! `N ≤ √(M/T − r) / σ`
//!
//! Grids beyond the bound amplify high-frequency modes geometrically and
//! the table blows up after a few dozen layers.

use super::parameters::BlackScholesParameters;
use bsfd_core::{Error, Rate, Real, Result, Size, Time, Volatility};

/// Safety margin applied by [`stable_spatial_steps`].
pub const STABILITY_MARGIN: Real = 0.99;

/// Largest spatial step count `√(M/T − r) / σ` allowed by the bound.
///
/// Returns `0.0` when `M/T ≤ r`, i.e. no spatial grid is stable.
pub fn max_spatial_steps(
    time_steps: Size,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Real {
    let headroom = time_steps as Real / maturity - rate;
    if headroom <= 0.0 {
        return 0.0;
    }
    headroom.sqrt() / volatility
}

/// Spatial step count used when the caller does not pick one:
/// `⌊0.99 · max_spatial_steps⌋`, never below the solver minimum of 2.
pub fn stable_spatial_steps(
    time_steps: Size,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Size {
    let bound = max_spatial_steps(time_steps, maturity, rate, volatility);
    ((STABILITY_MARGIN * bound) as Size).max(2)
}

/// Outcome of the stability check for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityCheck {
    alpha: Real,
    beta: Real,
    spatial_steps: Size,
    max_spatial_steps: Real,
}

impl StabilityCheck {
    /// Evaluate the bound for `params`.
    pub fn new(params: &BlackScholesParameters) -> Self {
        let dt = params.dt();
        Self {
            alpha: dt * params.volatility() * params.volatility(),
            beta: dt * params.rate(),
            spatial_steps: params.spatial_steps(),
            max_spatial_steps: max_spatial_steps(
                params.time_steps(),
                params.maturity(),
                params.rate(),
                params.volatility(),
            ),
        }
    }

    /// Diffusion coefficient `α = Δt·σ²`.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Drift/discount coefficient `β = Δt·r`.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Stability ratio `α·N² + β`; the grid is stable when it is at most 1.
    pub fn ratio(&self) -> Real {
        let n = self.spatial_steps as Real;
        self.alpha * n * n + self.beta
    }

    /// Whether the ratio is within the bound.
    pub fn is_stable(&self) -> bool {
        self.ratio() <= 1.0
    }

    /// Largest whole number of spatial steps satisfying the bound at this
    /// temporal resolution.
    pub fn max_spatial_steps(&self) -> Size {
        self.max_spatial_steps.floor() as Size
    }

    /// `Err(Error::NumericalInstability)` when the grid violates the bound.
    pub fn ensure_stable(&self) -> Result<()> {
        if self.is_stable() {
            Ok(())
        } else {
            Err(Error::NumericalInstability {
                ratio: self.ratio(),
                max_spatial_steps: self.max_spatial_steps(),
            })
        }
    }
}
