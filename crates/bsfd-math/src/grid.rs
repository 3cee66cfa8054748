//! Uniform one-dimensional grids.
//!
//! A [`UniformGrid`] holds `steps + 1` points `lower + k·spacing`. The
//! finite-difference solver uses one for the underlying price axis and one
//! for the time axis.

use bsfd_core::{ensure, Real, Result};

/// Ties in [`UniformGrid::nearest_index`] are resolved within this distance
/// of the midpoint (in units of the spacing).
const TIE_TOLERANCE: Real = 1e-9;

/// Largest step count whose points still fit in one allocation.
const MAX_STEPS: usize = isize::MAX as usize / std::mem::size_of::<Real>() - 1;

/// An evenly spaced grid on `[lower, upper]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    points: Vec<Real>,
    spacing: Real,
}

impl UniformGrid {
    /// Create a grid of `steps` intervals from `lower` to `upper`.
    ///
    /// Point `k` is `lower + k · (upper − lower) / steps`.
    pub fn new(lower: Real, upper: Real, steps: usize) -> Result<Self> {
        ensure!(steps > 0, "grid needs at least one step, got {steps}");
        ensure!(steps <= MAX_STEPS, "grid of {steps} steps is too large");
        ensure!(
            lower.is_finite() && upper.is_finite(),
            "grid bounds must be finite, got [{lower}, {upper}]"
        );
        ensure!(
            upper > lower,
            "grid upper bound {upper} must exceed lower bound {lower}"
        );
        let spacing = (upper - lower) / steps as Real;
        let points = (0..=steps).map(|k| lower + k as Real * spacing).collect();
        Ok(Self { points, spacing })
    }

    /// Number of points (= steps + 1).
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Number of intervals.
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Distance between neighbouring points.
    pub fn spacing(&self) -> Real {
        self.spacing
    }

    /// First point.
    pub fn lower(&self) -> Real {
        self.points[0]
    }

    /// Last point.
    pub fn upper(&self) -> Real {
        self.points[self.steps()]
    }

    /// The `k`-th point.
    pub fn point(&self, k: usize) -> Real {
        self.points[k]
    }

    /// All points, in increasing order.
    pub fn points(&self) -> &[Real] {
        &self.points
    }

    /// Index of the grid point closest to `x`.
    ///
    /// Values outside the grid map to the nearest end. When `x` sits midway
    /// between two points the lower index wins.
    pub fn nearest_index(&self, x: Real) -> usize {
        let (k, frac) = self.bracket(x);
        if frac > 0.5 + TIE_TOLERANCE {
            k + 1
        } else {
            k
        }
    }

    /// Left index `k` and fractional offset `θ ∈ [0, 1]` such that
    /// `x = point(k) + θ · spacing`, clamped to the grid.
    pub fn bracket(&self, x: Real) -> (usize, Real) {
        let pos = ((x - self.lower()) / self.spacing).clamp(0.0, self.steps() as Real);
        let k = (pos.floor() as usize).min(self.steps() - 1);
        (k, pos - k as Real)
    }

    /// Linearly interpolate `values` (one per grid point) at `x`.
    pub fn interpolate(&self, values: &[Real], x: Real) -> Real {
        debug_assert_eq!(values.len(), self.size());
        let (k, theta) = self.bracket(x);
        values[k] * (1.0 - theta) + values[k + 1] * theta
    }
}
