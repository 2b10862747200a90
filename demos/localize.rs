//! Localization of a robot on a small colored world.
//!
//! The robot wanders with noisy motion and a noisy color sensor. The histogram filter estimate is printed as it goes.

use na::DMatrix;
use nalgebra as na;
use rand::rngs::StdRng;
use rand::SeedableRng;

use histogram_estimate::config::LocalizerConfig;
use histogram_estimate::map::parse_map;
use histogram_estimate::models::Estimator;
use histogram_estimate::simulate::Simulation;

const WORLD: &str = "\
r g g r g
g g r g g
r b g g r
g g g b g
";

fn show_grid(beliefs: &DMatrix<f64>) {
    for i in 0..beliefs.nrows() {
        let row: Vec<String> = (0..beliefs.ncols())
            .map(|j| format!("{:.3}", beliefs[(i, j)]))
            .collect();
        println!("  {}", row.join("  "));
    }
}

fn main() {
    let map = parse_map(WORLD).unwrap();
    let config = LocalizerConfig::default();
    let mut sim = Simulation::new(map, &config, StdRng::seed_from_u64(2019)).unwrap();

    for &(dy, dx) in &[(0, 1), (0, 1), (1, 0), (1, 0), (0, -1), (1, 0), (0, 1), (0, 1)] {
        sim.step(dy, dx).unwrap();
        let color = sim.sense().unwrap();
        let (row, col, p) = sim.state().state().unwrap();
        println!(
            "move ({:2}, {:2}) sensed {} estimate ({}, {}) p{:.2} truth {:?}",
            dy,
            dx,
            color,
            row,
            col,
            p,
            sim.true_position()
        );
    }
    show_grid(&sim.state().beliefs);
}
