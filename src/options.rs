//! Search configuration for the wall thickness solver.

use serde::{Deserialize, Serialize};

/// Controls the incremental thickness search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Thickness the search starts from.
    pub initial_thickness_guess: f64,
    /// Amount the trial thickness moves per iteration. Required and non-zero.
    pub step_size: Option<f64>,
    /// Maximum number of steps before the search is abandoned.
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            initial_thickness_guess: 0.1,
            step_size: None,
            max_iterations: 1_000_000,
        }
    }
}

impl SolverOptions {
    /// Override the starting thickness.
    pub fn with_initial_thickness(mut self, thickness: f64) -> Self {
        self.initial_thickness_guess = thickness;
        self
    }

    /// Set the search step size.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    /// Set the iteration cap. At least one step is always allowed.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }
}
