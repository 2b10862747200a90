//! Simulated localization.
//!
//! A robot wanders a cyclic colored grid world with noisy motion and a noisy color sensor,
//! while a [`HistogramState`] tracks where it might be.
//! The simulated noise is drawn from the same models the filter assumes.
//!
//! [`HistogramState`]: ../models/struct.HistogramState.html

use log::debug;
use rand_core::RngCore;
use rand_distr::{Bernoulli, Distribution, Standard, Uniform};

use crate::config::LocalizerConfig;
use crate::error::HistogramError;
use crate::grid::{wrap, ColorGrid};
use crate::map::colors;
use crate::models::{ColorObserver, Estimator, HistogramState, MotionPredictor};
use crate::noise::{BlurKernel, SensorModel};

const UNIT_MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub struct Simulation<R: RngCore> {
    map: ColorGrid,
    colors: Vec<char>,
    kernel: BlurKernel<f64>,
    sensor: SensorModel<f64>,
    correct_reading: Bernoulli,
    position: (usize, usize),
    state: HistogramState<f64>,
    rng: R,
}

impl<R: RngCore> Simulation<R> {
    /// Places the robot in a uniformly random cell, the filter starts with uniform beliefs.
    pub fn new(map: ColorGrid, config: &LocalizerConfig, mut rng: R) -> Result<Self, HistogramError> {
        let kernel = config.kernel()?;
        let sensor = config.sensor()?;
        let correct_reading =
            Bernoulli::new(sensor.hit_ratio()).map_err(|_| HistogramError::InvalidLikelihood {
                p_hit: sensor.p_hit,
                p_miss: sensor.p_miss,
            })?;
        let state = HistogramState::uniform(&map)?;

        let position = (
            Uniform::from(0..map.nrows()).sample(&mut rng),
            Uniform::from(0..map.ncols()).sample(&mut rng),
        );
        debug!("robot placed at {:?}", position);

        Ok(Simulation {
            colors: colors(&map),
            map,
            kernel,
            sensor,
            correct_reading,
            position,
            state,
            rng,
        })
    }

    /// The robot's true `(row, col)`.
    pub fn true_position(&self) -> (usize, usize) {
        self.position
    }

    pub fn state(&self) -> &HistogramState<f64> {
        &self.state
    }

    pub fn map(&self) -> &ColorGrid {
        &self.map
    }

    /// Reads the color under the robot and updates the beliefs with it.
    ///
    /// A reading is correct with probability `p_hit / (p_hit + p_miss)`, otherwise it is one of the other map colors.
    pub fn sense(&mut self) -> Result<char, HistogramError> {
        let actual = self.map[self.position];
        let others: Vec<char> = self.colors.iter().copied().filter(|&c| c != actual).collect();

        let color = if others.is_empty() || self.correct_reading.sample(&mut self.rng) {
            actual
        } else {
            others[Uniform::from(0..others.len()).sample(&mut self.rng)]
        };
        self.state.observe(color, &self.map, &self.sensor)?;
        Ok(color)
    }

    /// Commands a move of `(dy, dx)`; the robot may slip to a neighbour of the intended cell.
    pub fn step(&mut self, dy: isize, dx: isize) -> Result<(), HistogramError> {
        let (slip_y, slip_x) = self.slip();
        let (height, width) = self.map.shape();
        self.position = (
            wrap(wrap(self.position.0, dy, height), slip_y, height),
            wrap(wrap(self.position.1, dx, width), slip_x, width),
        );
        debug!("move ({}, {}) slip ({}, {}) now at {:?}", dy, dx, slip_y, slip_x, self.position);

        self.state.predict(dy, dx, &self.kernel)
    }

    /// Random unit moves each followed by a reading. Returns the final estimate `(row, col, probability)`.
    pub fn run(&mut self, steps: usize) -> Result<(usize, usize, f64), HistogramError> {
        let pick = Uniform::from(0..UNIT_MOVES.len());
        for _ in 0..steps {
            let (dy, dx) = UNIT_MOVES[pick.sample(&mut self.rng)];
            self.step(dy, dx)?;
            self.sense()?;
        }
        self.state.state()
    }

    /// Draws a motion error offset with the probabilities of the blur kernel.
    fn slip(&mut self) -> (isize, isize) {
        let u: f64 = Standard.sample(&mut self.rng);
        let mut cumulative = 0.0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                cumulative += self.kernel.weight(dy, dx);
                if u < cumulative {
                    return (dy, dx);
                }
            }
        }
        (0, 0)
    }
}
