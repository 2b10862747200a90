//! Histogram noise models.
//!
//! Motion noise is a 3x3 blur kernel over the cells surrounding the intended destination.
//! Sensor noise is a pair of relative likelihoods for a correct and an incorrect color reading.

use na::{Matrix3, RealField};
use nalgebra as na;

use crate::error::HistogramError;
use crate::grid::as_f64;

/// Motion noise.
///
/// A 3x3 kernel derived from a single blurring parameter `b`:
/// the center keeps `1-b`, each orthogonal neighbour receives `b/6` and each diagonal neighbour `b/12`.
/// The weights always sum to 1.
#[derive(PartialEq, Clone, Debug)]
pub struct BlurKernel<N: RealField> {
    blurring: N,
    /// Kernel weights indexed by `(dy+1, dx+1)`
    window: Matrix3<N>,
}

impl<N: RealField> BlurKernel<N> {
    pub fn new(blurring: N) -> Result<Self, HistogramError> {
        let b = as_f64(blurring);
        if !(b.is_finite() && (0.0..=1.0).contains(&b)) {
            return Err(HistogramError::InvalidBlurring(b));
        }
        let center = N::one() - blurring;
        let adjacent = blurring / na::convert(6.0);
        let corner = blurring / na::convert(12.0);
        #[rustfmt::skip]
        let window = Matrix3::new(
            corner,   adjacent, corner,
            adjacent, center,   adjacent,
            corner,   adjacent, corner,
        );
        Ok(BlurKernel { blurring, window })
    }

    /// Noiseless motion.
    pub fn identity() -> Self {
        let mut window = Matrix3::zeros();
        window[(1, 1)] = N::one();
        BlurKernel {
            blurring: N::zero(),
            window,
        }
    }

    pub fn blurring(&self) -> N {
        self.blurring
    }

    /// Weight spilled to the cell at offset `(dy, dx)`, both in `-1..=1`.
    pub fn weight(&self, dy: isize, dx: isize) -> N {
        debug_assert!(dy.abs() <= 1 && dx.abs() <= 1);
        self.window[((dy + 1) as usize, (dx + 1) as usize)]
    }

    pub fn weights(&self) -> &Matrix3<N> {
        &self.window
    }
}

/// Sensor noise.
///
/// Relative likelihoods of the observed color given the color of a cell.
/// Only the ratio `p_hit / p_miss` is significant, the scale is removed by normalization.
#[derive(PartialEq, Clone, Debug)]
pub struct SensorModel<N: RealField> {
    /// Likelihood when the observed color matches the cell
    pub p_hit: N,
    /// Likelihood when it does not
    pub p_miss: N,
}

impl<N: RealField> SensorModel<N> {
    pub fn new(p_hit: N, p_miss: N) -> Result<Self, HistogramError> {
        let (hit, miss) = (as_f64(p_hit), as_f64(p_miss));
        if !(hit.is_finite() && miss.is_finite() && hit > 0.0 && miss > 0.0) {
            return Err(HistogramError::InvalidLikelihood {
                p_hit: hit,
                p_miss: miss,
            });
        }
        Ok(SensorModel { p_hit, p_miss })
    }

    pub fn likelihood(&self, observed: char, actual: char) -> N {
        if observed == actual {
            self.p_hit
        } else {
            self.p_miss
        }
    }

    /// Probability that a reading reports the true color, `p_hit / (p_hit + p_miss)`.
    pub fn hit_ratio(&self) -> N {
        self.p_hit / (self.p_hit + self.p_miss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kernel_sums_to_one() {
        for &b in &[0.0, 0.12, 0.5, 1.0] {
            let kernel = BlurKernel::<f64>::new(b).unwrap();
            assert_relative_eq!(kernel.weights().sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn kernel_weights() {
        let kernel = BlurKernel::<f64>::new(0.12).unwrap();
        assert_relative_eq!(kernel.weight(0, 0), 0.88, epsilon = 1e-12);
        assert_relative_eq!(kernel.weight(-1, 0), 0.02, epsilon = 1e-12);
        assert_relative_eq!(kernel.weight(0, 1), 0.02, epsilon = 1e-12);
        assert_relative_eq!(kernel.weight(1, 1), 0.01, epsilon = 1e-12);
        assert_relative_eq!(kernel.weight(-1, 1), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn identity_kernel() {
        assert_eq!(BlurKernel::<f64>::identity(), BlurKernel::new(0.0).unwrap());
    }

    #[test]
    fn invalid_blurring() {
        assert!(matches!(BlurKernel::new(-0.1), Err(HistogramError::InvalidBlurring(_))));
        assert!(matches!(BlurKernel::new(1.5), Err(HistogramError::InvalidBlurring(_))));
        assert!(matches!(BlurKernel::new(f64::NAN), Err(HistogramError::InvalidBlurring(_))));
    }

    #[test]
    fn sensor_likelihood() {
        let sensor = SensorModel::new(3.0, 1.0).unwrap();
        assert_eq!(sensor.likelihood('r', 'r'), 3.0);
        assert_eq!(sensor.likelihood('r', 'g'), 1.0);
        assert_relative_eq!(sensor.hit_ratio(), 0.75);
    }

    #[test]
    fn invalid_sensor() {
        assert!(SensorModel::new(0.0, 1.0).is_err());
        assert!(SensorModel::new(1.0, -1.0).is_err());
        assert!(SensorModel::new(f64::INFINITY, 1.0).is_err());
    }
}
