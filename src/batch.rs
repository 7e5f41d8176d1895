//! Parallel sizing of independent requests.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::SolverOptions;
use crate::solver::{SolverResult, WallThicknessSolver};
use crate::vessel::{LoadCondition, MaterialLimit};

/// Everything needed to size one vessel wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    pub inner_radius: f64,
    pub load: LoadCondition,
    pub material: MaterialLimit,
    #[serde(default)]
    pub options: SolverOptions,
}

impl SizingRequest {
    /// Builds a fresh solver owning this request's state.
    pub fn solver(&self) -> Result<WallThicknessSolver> {
        WallThicknessSolver::builder(self.inner_radius)
            .load(self.load)
            .material(self.material)
            .options(self.options.clone())
            .build()
    }

    /// Constructs a solver and runs the search.
    pub fn solve(&self) -> Result<SolverResult> {
        self.solver()?.calculate_wall_thickness()
    }
}

/// Sizes every request on the rayon pool. Results keep the input order.
pub fn solve_batch(requests: &[SizingRequest]) -> Vec<Result<SolverResult>> {
    requests.par_iter().map(SizingRequest::solve).collect()
}
