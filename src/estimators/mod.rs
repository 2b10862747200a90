//! Bayesian state estimators over discrete grids.

pub mod histogram;
