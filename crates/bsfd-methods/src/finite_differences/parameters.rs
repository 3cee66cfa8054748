//! Validated inputs of the finite-difference solver.

use bsfd_core::{ensure, Price, Rate, Result, Size, Time, Volatility};

/// Largest number of table entries `(N + 1)·(M + 1)` a solver will allocate
/// (16 GiB of `f64`).
pub const MAX_TABLE_ENTRIES: Size = 1 << 31;

/// `(N + 1)·(M + 1)`, or `None` on overflow.
fn table_entries(time_steps: Size, spatial_steps: Size) -> Option<Size> {
    spatial_steps
        .checked_add(1)?
        .checked_mul(time_steps.checked_add(1)?)
}

/// Contract, market and grid-resolution inputs for one solve.
///
/// Immutable once built; [`BlackScholesParameters::new`] rejects anything
/// that would produce a degenerate grid or a division by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesParameters {
    spot: Price,
    strike: Price,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
    time_steps: Size,
    spatial_steps: Size,
}

impl BlackScholesParameters {
    /// Validate and bundle the solver inputs.
    ///
    /// # Arguments
    /// * `spot`: current underlying price, `> 0`
    /// * `strike`: strike price, `> 0`
    /// * `rate`: continuously compounded risk-free rate, finite
    /// * `volatility`: annualised volatility, `> 0`
    /// * `maturity`: time to expiry in years, `> 0`
    /// * `time_steps`: number of temporal intervals `M`, `>= 1`
    /// * `spatial_steps`: number of price intervals `N`, `>= 2`
    ///
    /// The table `(N + 1)·(M + 1)` must fit in [`MAX_TABLE_ENTRIES`].
    pub fn new(
        spot: Price,
        strike: Price,
        rate: Rate,
        volatility: Volatility,
        maturity: Time,
        time_steps: Size,
        spatial_steps: Size,
    ) -> Result<Self> {
        ensure!(
            spot.is_finite() && spot > 0.0,
            "spot must be positive and finite, got {spot}"
        );
        ensure!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive and finite, got {strike}"
        );
        ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        ensure!(
            volatility.is_finite() && volatility > 0.0,
            "volatility must be positive and finite, got {volatility}"
        );
        ensure!(
            maturity.is_finite() && maturity > 0.0,
            "maturity must be positive and finite, got {maturity}"
        );
        ensure!(
            time_steps >= 1,
            "time steps must be at least 1, got {time_steps}"
        );
        ensure!(
            spatial_steps >= 2,
            "spatial steps must be at least 2, got {spatial_steps}"
        );
        ensure!(
            table_entries(time_steps, spatial_steps).is_some_and(|n| n <= MAX_TABLE_ENTRIES),
            "grid of {spatial_steps} x {time_steps} steps exceeds {MAX_TABLE_ENTRIES} table entries"
        );
        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            time_steps,
            spatial_steps,
        })
    }

    /// Current underlying price `S₀`.
    pub fn spot(&self) -> Price {
        self.spot
    }

    /// Strike `K`.
    pub fn strike(&self) -> Price {
        self.strike
    }

    /// Risk-free rate `r`.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Volatility `σ`.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Maturity `T` in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Number of temporal intervals `M`.
    pub fn time_steps(&self) -> Size {
        self.time_steps
    }

    /// Number of spatial intervals `N`.
    pub fn spatial_steps(&self) -> Size {
        self.spatial_steps
    }

    /// Upper end of the price axis, `2·S₀`.
    pub fn spatial_upper_bound(&self) -> Price {
        2.0 * self.spot
    }

    /// Time step `Δt = T / M`.
    pub fn dt(&self) -> Time {
        self.maturity / self.time_steps as Time
    }
}
