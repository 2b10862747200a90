//! Histogram estimation errors.
//!
//! Every precondition of the grid operations is checked on entry and reported with one of these variants.
//! Nothing is recovered or substituted: the same inputs always fail the same way.

use thiserror::Error;

/// Errors that can occur in histogram filter operations.
#[derive(Debug, Error)]
pub enum HistogramError {
    /// A grid with no cells.
    #[error("grid is empty")]
    EmptyGrid,

    /// Two grids that must be paired have different dimensions.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Total probability mass is zero, negative or not finite.
    #[error("cannot normalize: total probability is {total}")]
    DegenerateNormalization { total: f64 },

    /// A probability grid contains a negative cell.
    #[error("negative probability at ({row}, {col})")]
    NegativeProbability { row: usize, col: usize },

    /// Blurring must be a finite number in [0, 1].
    #[error("blurring {0} is not in [0, 1]")]
    InvalidBlurring(f64),

    /// Sensor likelihoods must be finite and strictly positive.
    #[error("invalid sensor likelihoods: p_hit = {p_hit}, p_miss = {p_miss}")]
    InvalidLikelihood { p_hit: f64, p_miss: f64 },

    /// A map cell token that is not exactly one character.
    #[error("line {line}: invalid color token {token:?}")]
    InvalidToken { line: usize, token: String },

    /// A map row whose length differs from the first row.
    #[error("line {line}: expected {expected} cells, got {got}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// Reading a map resource failed.
    #[error("map could not be read: {0}")]
    Io(#[from] std::io::Error),
}
