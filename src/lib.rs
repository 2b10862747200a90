//!
//! Histogram+Estimate a Bayesian histogram filter library.
//! Copyright (c) 2020 Michael Stevens
//!
//! Bayesian Filtering is a probabilistic technique for data fusion. The technique combines a concise mathematical formulation of a system with observations of that system.
//! Probabilities are used to represent the state of a system, likelihood functions to represent their relationships.
//!
//! A histogram filter represents the state as a discrete probability for every cell of a grid world. This library localizes a robot
//! on a two dimensional cyclic (toroidal) grid of colored cells. Motion is an exact translation of the belief grid followed by a 3x3 blur
//! that models motion noise. Sensing a color reweights every cell by a hit or miss likelihood and renormalizes, an exact Bayesian update.
//!
//! The grid operations are pure functions in [`estimators::histogram`]: `normalize`, `blur`, `initialize_beliefs`, `move_beliefs` and `sense`.
//! The state representation [`models::HistogramState`] implements the estimation traits defined in [`models`].
//!
//! # Licensing
//!
//! All Bayes++ source code files are copyright with the license conditions as given here. The copyright notice is that of the MIT license.
//!  This in no way restricts any commercial use you may wish to make using our source code.
//!  As long as you respect the copyright and license conditions, Michael Stevens is happy to for you to use it in any way you wish.
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod config;
pub mod error;
pub mod estimators;
pub mod grid;
pub mod map;
pub mod models;
pub mod noise;
pub mod simulate;

pub use error::HistogramError;
