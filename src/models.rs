//! Bayesian histogram estimation models.
//!
//! The state representation is a struct holding a belief grid.
//! The estimation operations, motion prediction and color observation, are defined as traits.

use na::{DMatrix, RealField};
use nalgebra as na;

use crate::error::HistogramError;
use crate::grid::ColorGrid;
use crate::noise::{BlurKernel, SensorModel};

/// Histogram State.
///
/// A probability for every cell of a cyclic grid world. The beliefs always sum to one.
#[derive(PartialEq, Clone, Debug)]
pub struct HistogramState<N: RealField> {
    /// Belief grid, indexed `(row, col)`
    pub beliefs: DMatrix<N>,
}

/// A state estimator.
///
pub trait Estimator<N: RealField> {
    /// The estimator's estimate of the system's state: the most likely cell `(row, col)` and its probability.
    fn state(&self) -> Result<(usize, usize, N), HistogramError>;
}

/// A motion predictor.
///
/// Moves the beliefs by an intended offset with blurred motion noise.
pub trait MotionPredictor<N: RealField> {
    fn predict(&mut self, dy: isize, dx: isize, noise: &BlurKernel<N>) -> Result<(), HistogramError>;
}

/// A color observer.
///
/// Reweights the beliefs by the likelihood of a sensed color given the map.
pub trait ColorObserver<N: RealField> {
    fn observe(
        &mut self,
        color: char,
        map: &ColorGrid,
        sensor: &SensorModel<N>,
    ) -> Result<(), HistogramError>;
}
