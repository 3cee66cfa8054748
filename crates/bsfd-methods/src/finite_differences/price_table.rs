//! Dense table of option values over the (price, time) grid.

use bsfd_core::Real;
use nalgebra::DMatrix;

/// Option values indexed by spatial index `i` (row) and temporal index `j`
/// (column).
///
/// Backed by a single column-major `nalgebra::DMatrix`, so every time layer
/// is one contiguous slice: entry `(i, j)` lives at `j·(N + 1) + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable(DMatrix<Real>);

impl PriceTable {
    /// Zero-filled table with `spatial_points` rows and `time_points` columns.
    pub(crate) fn zeros(spatial_points: usize, time_points: usize) -> Self {
        Self(DMatrix::zeros(spatial_points, time_points))
    }

    /// Number of spatial points (rows, `N + 1`).
    pub fn spatial_points(&self) -> usize {
        self.0.nrows()
    }

    /// Number of time layers (columns, `M + 1`).
    pub fn time_points(&self) -> usize {
        self.0.ncols()
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        j * self.spatial_points() + i
    }

    /// Value at spatial index `i`, temporal index `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.0.as_slice()[self.offset(i, j)]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Real) {
        let k = self.offset(i, j);
        self.0.as_mut_slice()[k] = value;
    }

    /// All spatial values of time layer `j`.
    pub fn layer(&self, j: usize) -> &[Real] {
        let start = self.offset(0, j);
        &self.0.as_slice()[start..start + self.spatial_points()]
    }

    /// The values of spatial index `i` across all time layers.
    pub fn row(&self, i: usize) -> impl Iterator<Item = Real> + '_ {
        (0..self.time_points()).map(move |j| self.get(i, j))
    }

    /// Layer `j` for reading and layer `j + 1` for writing.
    pub(crate) fn layer_pair_mut(&mut self, j: usize) -> (&[Real], &mut [Real]) {
        let rows = self.spatial_points();
        let split = self.offset(0, j + 1);
        let (head, tail) = self.0.as_mut_slice().split_at_mut(split);
        (&head[split - rows..], &mut tail[..rows])
    }

    /// Largest absolute value in the table (NaN if any entry is NaN).
    pub fn max_abs(&self) -> Real {
        self.0.iter().fold(0.0, |acc: Real, v| {
            if acc.is_nan() || v.is_nan() {
                Real::NAN
            } else {
                acc.max(v.abs())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize, cols: usize) -> PriceTable {
        let mut t = PriceTable::zeros(rows, cols);
        for j in 0..cols {
            for i in 0..rows {
                t.set(i, j, (10 * i + j) as Real);
            }
        }
        t
    }

    #[test]
    fn zeros_has_requested_shape() {
        let t = PriceTable::zeros(4, 3);
        assert_eq!(t.spatial_points(), 4);
        assert_eq!(t.time_points(), 3);
        assert_eq!(t.max_abs(), 0.0);
    }

    #[test]
    fn storage_is_column_major() {
        let t = numbered(4, 3);
        for i in 0..4 {
            for j in 0..3 {
                assert_eq!(t.get(i, j), (10 * i + j) as Real);
                assert_eq!(t.offset(i, j), j * 4 + i);
                assert_eq!(t.0[(i, j)], t.get(i, j));
            }
        }
    }

    #[test]
    fn layer_is_contiguous_column() {
        let t = numbered(4, 3);
        assert_eq!(t.layer(2), &[2.0, 12.0, 22.0, 32.0]);
        assert_eq!(t.row(1).collect::<Vec<_>>(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn layer_pair_splits_adjacent_columns() {
        let mut t = numbered(3, 3);
        let (cur, next) = t.layer_pair_mut(1);
        assert_eq!(cur, &[1.0, 11.0, 21.0]);
        assert_eq!(next, &[2.0, 12.0, 22.0]);
        next[1] = -1.0;
        assert_eq!(t.get(1, 2), -1.0);
        assert_eq!(t.get(1, 1), 11.0);
    }

    #[test]
    fn max_abs_tracks_nan() {
        let mut t = numbered(2, 2);
        t.set(0, 0, -50.0);
        assert_eq!(t.max_abs(), 50.0);
        t.set(1, 1, Real::NAN);
        assert!(t.max_abs().is_nan());
    }
}
