//! Histogram state estimation.
//!
//! A discrete Bayesian estimator over the cells of a cyclic (toroidal) grid world.
//! The belief grid holds the probability that the robot occupies each cell.
//!
//! Every operation takes its inputs by reference and returns a freshly allocated grid; inputs are never modified.
//! Preconditions are checked on entry, so a degenerate or misshapen grid is reported rather than propagated as NaN.

use log::trace;
use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::HistogramError;
use crate::grid::{as_f64, check_non_empty, check_same_shape, wrap, zeros, ColorGrid};
use crate::models::{ColorObserver, Estimator, HistogramState, MotionPredictor};
use crate::noise::{BlurKernel, SensorModel};

/// Rescales a grid so all cells sum to one.
pub fn normalize<N: RealField>(grid: &DMatrix<N>) -> Result<DMatrix<N>, HistogramError> {
    check_non_empty(grid)?;
    check_non_negative(grid)?;

    let total = grid.sum();
    let t = as_f64(total);
    if !(t.is_finite() && t > 0.0) {
        return Err(HistogramError::DegenerateNormalization { total: t });
    }
    Ok(grid.map(|p| p / total))
}

/// Blurs (and normalizes) a grid, spreading probability from each cell over its 3x3 neighbourhood.
///
/// Probability spills over the edges: right to left and bottom to top.
pub fn blur<N: RealField>(grid: &DMatrix<N>, blurring: N) -> Result<DMatrix<N>, HistogramError> {
    blur_with(grid, &BlurKernel::new(blurring)?)
}

/// Blurs (and normalizes) a grid with a prepared kernel.
pub fn blur_with<N: RealField>(
    grid: &DMatrix<N>,
    kernel: &BlurKernel<N>,
) -> Result<DMatrix<N>, HistogramError> {
    check_non_empty(grid)?;
    normalize(&convolve(grid, kernel))
}

/// Uniform beliefs over every cell of the map.
pub fn initialize_beliefs<N: RealField>(map: &ColorGrid) -> Result<DMatrix<N>, HistogramError> {
    check_non_empty(map)?;
    let (height, width) = map.shape();
    let area: N = na::convert((height * width) as f64);
    Ok(DMatrix::from_element(height, width, N::one() / area))
}

/// Exact translation of every cell by `(dy, dx)` on the torus.
///
/// Cells are assigned into a fresh grid, so the translation is a permutation and probability is conserved exactly.
pub fn translate<N: RealField>(
    dy: isize,
    dx: isize,
    beliefs: &DMatrix<N>,
) -> Result<DMatrix<N>, HistogramError> {
    check_non_empty(beliefs)?;
    let (height, width) = beliefs.shape();
    let mut moved = zeros(height, width);
    for i in 0..height {
        for j in 0..width {
            moved[(wrap(i, dy, height), wrap(j, dx, width))] = beliefs[(i, j)];
        }
    }
    Ok(moved)
}

/// Motion update: translate by the intended `(dy, dx)` then blur to model motion noise.
pub fn move_beliefs<N: RealField>(
    dy: isize,
    dx: isize,
    beliefs: &DMatrix<N>,
    blurring: N,
) -> Result<DMatrix<N>, HistogramError> {
    let kernel = BlurKernel::new(blurring)?;
    blur_with(&translate(dy, dx, beliefs)?, &kernel)
}

/// Sensor update: weight each cell by the likelihood of observing `color` there, then normalize.
pub fn sense<N: RealField>(
    color: char,
    map: &ColorGrid,
    beliefs: &DMatrix<N>,
    p_hit: N,
    p_miss: N,
) -> Result<DMatrix<N>, HistogramError> {
    sense_with(color, map, beliefs, &SensorModel::new(p_hit, p_miss)?)
}

/// Sensor update with a prepared sensor model.
pub fn sense_with<N: RealField>(
    color: char,
    map: &ColorGrid,
    beliefs: &DMatrix<N>,
    sensor: &SensorModel<N>,
) -> Result<DMatrix<N>, HistogramError> {
    check_non_empty(map)?;
    check_same_shape(map, beliefs)?;

    let unnormalized = DMatrix::from_fn(map.nrows(), map.ncols(), |i, j| {
        beliefs[(i, j)] * sensor.likelihood(color, map[(i, j)])
    });
    normalize(&unnormalized)
}

/// The most probable cell as `(row, col, probability)`.
///
/// Ties resolve to the first cell in row-major order.
pub fn most_likely<N: RealField>(
    beliefs: &DMatrix<N>,
) -> Result<(usize, usize, N), HistogramError> {
    check_non_empty(beliefs)?;
    let mut best = (0, 0, beliefs[(0, 0)]);
    for i in 0..beliefs.nrows() {
        for j in 0..beliefs.ncols() {
            let p = beliefs[(i, j)];
            if p > best.2 {
                best = (i, j, p);
            }
        }
    }
    Ok(best)
}

/// Shannon entropy of the beliefs in nats. Zero when fully localized, `ln(cells)` when uniform.
pub fn entropy<N: RealField>(beliefs: &DMatrix<N>) -> Result<N, HistogramError> {
    check_non_empty(beliefs)?;
    check_non_negative(beliefs)?;
    Ok(beliefs
        .iter()
        .filter(|&&p| p > N::zero())
        .fold(N::zero(), |h, &p| h - p * p.ln()))
}

fn check_non_negative<N: RealField>(grid: &DMatrix<N>) -> Result<(), HistogramError> {
    for i in 0..grid.nrows() {
        for j in 0..grid.ncols() {
            if grid[(i, j)] < N::zero() {
                return Err(HistogramError::NegativeProbability { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Probability arriving at cell `(i, j)` from its 3x3 neighbourhood.
///
/// A gather over source cells: the value at `(i-dy, j-dx)` spills into `(i, j)` with weight `(dy, dx)`.
/// Each cell is computed independently of every other, the result equals scattering every source cell.
fn gather<N: RealField>(grid: &DMatrix<N>, kernel: &BlurKernel<N>, i: usize, j: usize) -> N {
    let (height, width) = grid.shape();
    let mut value = N::zero();
    for dy in -1..=1 {
        for dx in -1..=1 {
            value += grid[(wrap(i, -dy, height), wrap(j, -dx, width))] * kernel.weight(dy, dx);
        }
    }
    value
}

#[cfg(not(feature = "parallel"))]
fn convolve<N: RealField>(grid: &DMatrix<N>, kernel: &BlurKernel<N>) -> DMatrix<N> {
    DMatrix::from_fn(grid.nrows(), grid.ncols(), |i, j| gather(grid, kernel, i, j))
}

#[cfg(feature = "parallel")]
fn convolve<N: RealField>(grid: &DMatrix<N>, kernel: &BlurKernel<N>) -> DMatrix<N> {
    use rayon::prelude::*;

    let (height, width) = grid.shape();
    let cells: Vec<N> = (0..height * width)
        .into_par_iter()
        .map(|k| gather(grid, kernel, k / width, k % width))
        .collect();
    DMatrix::from_row_slice(height, width, &cells)
}

impl<N: RealField> HistogramState<N> {
    /// Uniform beliefs over the map.
    pub fn uniform(map: &ColorGrid) -> Result<HistogramState<N>, HistogramError> {
        Ok(HistogramState {
            beliefs: initialize_beliefs(map)?,
        })
    }

    /// Initialise from (possibly unnormalized) beliefs.
    pub fn init(beliefs: &DMatrix<N>) -> Result<HistogramState<N>, HistogramError> {
        Ok(HistogramState {
            beliefs: normalize(beliefs)?,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.beliefs.shape()
    }
}

impl<N: RealField> Estimator<N> for HistogramState<N> {
    fn state(&self) -> Result<(usize, usize, N), HistogramError> {
        most_likely(&self.beliefs)
    }
}

impl<N: RealField> MotionPredictor<N> for HistogramState<N> {
    fn predict(&mut self, dy: isize, dx: isize, noise: &BlurKernel<N>) -> Result<(), HistogramError> {
        self.beliefs = blur_with(&translate(dy, dx, &self.beliefs)?, noise)?;
        trace!("predict ({}, {}) blurring {:?}", dy, dx, noise.blurring());
        Ok(())
    }
}

impl<N: RealField> ColorObserver<N> for HistogramState<N> {
    fn observe(
        &mut self,
        color: char,
        map: &ColorGrid,
        sensor: &SensorModel<N>,
    ) -> Result<(), HistogramError> {
        self.beliefs = sense_with(color, map, &self.beliefs, sensor)?;
        trace!("observe {:?}", color);
        Ok(())
    }
}
