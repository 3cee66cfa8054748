//! Explicit finite-difference solver for a European call.
//!
//! The Black-Scholes PDE is written in time-to-maturity `τ = T − t`:
//!
//! `∂V/∂τ = ½σ²S²·∂²V/∂S² + rS·∂V/∂S − rV`
//!
//! On the uniform price grid `S_i = i·ΔS` the spatial step cancels out of
//! the central differences, and a forward-Euler step in `τ` gives
//!
//! ```text
//! V[i, j+1] = (1 − β − i²α)·V[i, j]
//!           + ½(i²α + iβ)·V[i+1, j]
//!           + ½(i²α − iβ)·V[i−1, j]
//! ```
//!
//! with `α = Δτ·σ²` and `β = Δτ·r`. Layer `j = 0` holds the payoff and
//! layer `j = M` holds today's values.

use super::parameters::BlackScholesParameters;
use super::price_table::PriceTable;
use super::stability::StabilityCheck;
use bsfd_core::{Price, Real, Result, Size};
use bsfd_math::UniformGrid;
use tracing::{debug, warn};

/// Explicit finite-difference solver for the Black-Scholes PDE.
///
/// Owns the spatial grid `[0, 2·S₀]` with `N + 1` points, the temporal grid
/// `[0, T]` with `M + 1` points, and the `(N + 1) × (M + 1)` table of option
/// values. The payoff column and both boundary rows are filled on
/// construction; [`compute_prices`](Self::compute_prices) fills the interior.
#[derive(Debug, Clone)]
pub struct FiniteDifferenceSolver {
    params: BlackScholesParameters,
    spatial_grid: UniformGrid,
    temporal_grid: UniformGrid,
    table: PriceTable,
    computed: bool,
}

impl FiniteDifferenceSolver {
    /// Build the grids and the table, then apply the payoff and the
    /// boundary conditions.
    ///
    /// Grids failing the [`StabilityCheck`] are accepted (with a warning);
    /// callers that want a hard failure should call
    /// `solver.stability().ensure_stable()`.
    pub fn new(params: BlackScholesParameters) -> Result<Self> {
        let spatial_grid =
            UniformGrid::new(0.0, params.spatial_upper_bound(), params.spatial_steps())?;
        let temporal_grid = UniformGrid::new(0.0, params.maturity(), params.time_steps())?;
        let table = PriceTable::zeros(spatial_grid.size(), temporal_grid.size());

        let mut solver = Self {
            params,
            spatial_grid,
            temporal_grid,
            table,
            computed: false,
        };
        solver.apply_initial_condition();
        solver.apply_boundary_conditions();

        let stability = solver.stability();
        debug!(
            spatial_steps = params.spatial_steps(),
            time_steps = params.time_steps(),
            ds = solver.spatial_grid.spacing(),
            dt = solver.temporal_grid.spacing(),
            ratio = stability.ratio(),
            "finite-difference grid initialised"
        );
        if !stability.is_stable() {
            warn!(
                ratio = stability.ratio(),
                max_spatial_steps = stability.max_spatial_steps(),
                "explicit scheme is unstable on this grid"
            );
        }
        Ok(solver)
    }

    /// Validate the raw inputs and build a solver.
    pub fn from_inputs(
        spot: Price,
        strike: Price,
        rate: Real,
        volatility: Real,
        maturity: Real,
        time_steps: Size,
        spatial_steps: Size,
    ) -> Result<Self> {
        Self::new(BlackScholesParameters::new(
            spot,
            strike,
            rate,
            volatility,
            maturity,
            time_steps,
            spatial_steps,
        )?)
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The validated inputs.
    pub fn parameters(&self) -> &BlackScholesParameters {
        &self.params
    }

    /// Price levels `S_i = i·ΔS`, `i = 0..=N`.
    pub fn spatial_grid(&self) -> &UniformGrid {
        &self.spatial_grid
    }

    /// Times to maturity `τ_j = j·Δτ`, `j = 0..=M`.
    pub fn temporal_grid(&self) -> &UniformGrid {
        &self.temporal_grid
    }

    /// The table in its current state. Before
    /// [`compute_prices`](Self::compute_prices) only the payoff column and
    /// the boundary rows are populated.
    pub fn price_table(&self) -> &PriceTable {
        &self.table
    }

    /// Whether the stepping pass has run.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Stability check for this grid.
    pub fn stability(&self) -> StabilityCheck {
        StabilityCheck::new(&self.params)
    }

    /// Spatial index nearest the spot (ties go to the lower index, so an
    /// even `N` gives exactly `N / 2`).
    pub fn spot_index(&self) -> usize {
        self.spatial_grid.nearest_index(self.params.spot())
    }

    // ── Results ──────────────────────────────────────────────────────────

    /// Run the stepping pass and return the full table.
    ///
    /// The pass runs once; later calls return the same table. Re-running it
    /// would reproduce identical values anyway, because it only reads the
    /// payoff column and the boundary rows, which it never writes.
    pub fn compute_prices(&mut self) -> &PriceTable {
        if !self.computed {
            self.explicit_pass();
            self.computed = true;
        }
        &self.table
    }

    /// Option value at the spot-nearest grid point today (`j = M`).
    pub fn price(&mut self) -> Real {
        let i = self.spot_index();
        let j = self.params.time_steps();
        self.compute_prices().get(i, j)
    }

    /// Today's values linearly interpolated at the spot.
    ///
    /// Coincides with [`price`](Self::price) when the spot is a grid point
    /// (even `N`).
    pub fn interpolated_price(&mut self) -> Real {
        let j = self.params.time_steps();
        let spot = self.params.spot();
        self.compute_prices();
        self.spatial_grid.interpolate(self.table.layer(j), spot)
    }

    // ── Grid set-up ──────────────────────────────────────────────────────

    /// Call payoff `max(S_i − K, 0)` at maturity (`j = 0`).
    fn apply_initial_condition(&mut self) {
        let strike = self.params.strike();
        for (i, &s) in self.spatial_grid.points().iter().enumerate() {
            self.table.set(i, 0, (s - strike).max(0.0));
        }
    }

    /// Dirichlet boundaries at every layer: `V(0, τ) = 0` and
    /// `V(S_max, τ) = S_max − K·e^{−rτ}`, floored at zero.
    fn apply_boundary_conditions(&mut self) {
        let n = self.params.spatial_steps();
        let s_max = self.spatial_grid.upper();
        let strike = self.params.strike();
        let rate = self.params.rate();
        for (j, &tau) in self.temporal_grid.points().iter().enumerate() {
            self.table.set(0, j, 0.0);
            self.table
                .set(n, j, (s_max - strike * (-rate * tau).exp()).max(0.0));
        }
    }

    // ── Time stepping ────────────────────────────────────────────────────

    fn explicit_pass(&mut self) {
        let stability = self.stability();
        let (alpha, beta) = (stability.alpha(), stability.beta());
        let n = self.params.spatial_steps();
        let m = self.params.time_steps();
        debug!(alpha, beta, layers = m, "running explicit pass");

        for j in 0..m {
            let (cur, next) = self.table.layer_pair_mut(j);
            step_layer(cur, next, n, alpha, beta);
        }
    }
}

/// One stencil evaluation at interior node `i` of layer `cur`.
#[inline]
fn stencil(cur: &[Real], i: usize, alpha: Real, beta: Real) -> Real {
    let x = i as Real;
    let diffusion = x * x * alpha;
    let drift = x * beta;
    (1.0 - beta - diffusion) * cur[i]
        + 0.5 * (diffusion + drift) * cur[i + 1]
        + 0.5 * (diffusion - drift) * cur[i - 1]
}

/// Fill interior nodes `1..n` of `next` from `cur`. Boundary nodes `0` and
/// `n` of `next` are left as set.
#[cfg(not(feature = "parallel"))]
fn step_layer(cur: &[Real], next: &mut [Real], n: usize, alpha: Real, beta: Real) {
    step_layer_serial(cur, next, n, alpha, beta);
}

#[cfg(feature = "parallel")]
fn step_layer(cur: &[Real], next: &mut [Real], n: usize, alpha: Real, beta: Real) {
    step_layer_parallel(cur, next, n, alpha, beta);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn step_layer_serial(cur: &[Real], next: &mut [Real], n: usize, alpha: Real, beta: Real) {
    for (i, v) in next.iter_mut().enumerate().take(n).skip(1) {
        *v = stencil(cur, i, alpha, beta);
    }
}

#[cfg(feature = "parallel")]
fn step_layer_parallel(cur: &[Real], next: &mut [Real], n: usize, alpha: Real, beta: Real) {
    use rayon::prelude::*;

    next[1..n]
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, v)| *v = stencil(cur, k + 1, alpha, beta));
}
