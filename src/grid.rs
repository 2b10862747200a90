//! Grid utilities.
//!
//! Probability grids are dense `DMatrix` values: the dimensions and one contiguous buffer.
//! Indexing is always `(row, col)`, that is `(y, x)`, and offsets are given as `(dy, dx)`.

use na::{ClosedAdd, DMatrix, RealField, Scalar};
use nalgebra as na;
use num_traits::Zero;

use crate::error::HistogramError;

/// A grid of color symbols, the fixed map of the world.
pub type ColorGrid = DMatrix<char>;

/// Absolute tolerance used when comparing probabilities.
pub const TOLERANCE: f64 = 1e-4;

/// A grid of zeros with the given dimensions.
pub fn zeros<N: Scalar + Zero>(height: usize, width: usize) -> DMatrix<N> {
    DMatrix::zeros(height, width)
}

/// Sum of all cells.
pub fn total<N: Scalar + Zero + ClosedAdd>(grid: &DMatrix<N>) -> N {
    grid.sum()
}

/// Offset an index on a cyclic axis of length `len`.
///
/// The result is the true mathematical modulus, always in `0..len`, for any sign or magnitude of `offset`.
pub fn wrap(index: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0 && index < len);
    let len = len as isize;
    let offset = offset.rem_euclid(len);
    ((index as isize + offset) % len) as usize
}

/// Checks a grid has at least one cell.
pub fn check_non_empty<N: Scalar>(grid: &DMatrix<N>) -> Result<(), HistogramError> {
    if grid.is_empty() {
        Err(HistogramError::EmptyGrid)
    } else {
        Ok(())
    }
}

/// Checks two grids have identical dimensions.
pub fn check_same_shape<A: Scalar, B: Scalar>(
    expected: &DMatrix<A>,
    got: &DMatrix<B>,
) -> Result<(), HistogramError> {
    if expected.shape() == got.shape() {
        Ok(())
    } else {
        Err(HistogramError::ShapeMismatch {
            expected: expected.shape(),
            got: got.shape(),
        })
    }
}

/// Two values are equal within [`TOLERANCE`].
///
/// [`TOLERANCE`]: constant.TOLERANCE.html
pub fn close_enough<N: RealField>(v1: N, v2: N) -> bool {
    (v2 - v1).abs() <= na::convert(TOLERANCE)
}

/// Two grids have the same shape and every pair of cells is [`close_enough`].
///
/// [`close_enough`]: fn.close_enough.html
pub fn grids_close_enough<N: RealField>(g1: &DMatrix<N>, g2: &DMatrix<N>) -> bool {
    g1.shape() == g2.shape() && g1.iter().zip(g2.iter()).all(|(&v1, &v2)| close_enough(v1, v2))
}

/// Lossy view of a scalar as `f64`, for error reports.
pub(crate) fn as_f64<N: RealField>(value: N) -> f64 {
    value.to_subset().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_zero_offset() {
        assert_eq!(wrap(0, 0, 3), 0);
        assert_eq!(wrap(2, 0, 3), 2);
    }

    #[test]
    fn wrap_negative_offset() {
        assert_eq!(wrap(0, -1, 3), 2);
        assert_eq!(wrap(1, -2, 3), 2);
        assert_eq!(wrap(0, -7, 5), 3);
    }

    #[test]
    fn wrap_boundary_offset() {
        assert_eq!(wrap(2, 1, 3), 0);
        assert_eq!(wrap(0, 3, 3), 0);
        assert_eq!(wrap(1, -3, 3), 1);
        assert_eq!(wrap(0, 1, 1), 0);
    }

    #[test]
    fn wrap_extreme_offset() {
        assert_eq!(wrap(1, isize::MAX, 4), (1 + (isize::MAX % 4) as usize) % 4);
        assert_eq!(wrap(0, isize::MIN, 4), 0);
    }

    #[test]
    fn shape_checks() {
        let a = zeros::<f64>(2, 3);
        let b = zeros::<f64>(3, 2);
        assert!(check_same_shape(&a, &a).is_ok());
        assert!(matches!(
            check_same_shape(&a, &b),
            Err(HistogramError::ShapeMismatch { expected: (2, 3), got: (3, 2) })
        ));
        assert!(matches!(check_non_empty(&zeros::<f64>(0, 3)), Err(HistogramError::EmptyGrid)));
    }

    #[test]
    fn zeros_and_total() {
        let mut g = zeros::<f64>(2, 3);
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(total(&g), 0.0);
        g[(1, 2)] = 0.5;
        g[(0, 0)] = 0.25;
        assert_eq!(total(&g), 0.75);
        assert_eq!(total(&zeros::<u32>(4, 4)), 0);
    }

    #[test]
    fn closeness() {
        assert!(close_enough(0.5, 0.50005));
        assert!(!close_enough(0.5, 0.5002));

        let g = DMatrix::from_row_slice(1, 2, &[0.25, 0.75]);
        let h = DMatrix::from_row_slice(1, 2, &[0.25001, 0.74999]);
        assert!(grids_close_enough(&g, &h));
        assert!(!grids_close_enough(&g, &DMatrix::from_row_slice(2, 1, &[0.25, 0.75])));
    }
}
