//! Localizer configuration.
//!
//! Noise parameters for a localization loop, loadable from any serde format.
//! Missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::HistogramError;
use crate::noise::{BlurKernel, SensorModel};

mod defaults {
    pub fn blurring() -> f64 {
        0.12
    }

    pub fn p_hit() -> f64 {
        3.0
    }

    pub fn p_miss() -> f64 {
        1.0
    }
}

/// Motion and sensor noise settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalizerConfig {
    /// Fraction of probability spilled to neighbouring cells on each move, in [0, 1]
    #[serde(default = "defaults::blurring")]
    pub blurring: f64,

    /// Relative likelihood of a correct color reading
    #[serde(default = "defaults::p_hit")]
    pub p_hit: f64,

    /// Relative likelihood of an incorrect color reading
    #[serde(default = "defaults::p_miss")]
    pub p_miss: f64,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            blurring: defaults::blurring(),
            p_hit: defaults::p_hit(),
            p_miss: defaults::p_miss(),
        }
    }
}

impl LocalizerConfig {
    pub fn validate(&self) -> Result<(), HistogramError> {
        self.kernel()?;
        self.sensor()?;
        Ok(())
    }

    /// Motion noise model.
    pub fn kernel(&self) -> Result<BlurKernel<f64>, HistogramError> {
        BlurKernel::new(self.blurring)
    }

    /// Sensor noise model.
    pub fn sensor(&self) -> Result<SensorModel<f64>, HistogramError> {
        SensorModel::new(self.p_hit, self.p_miss)
    }
}
