//! Wall thickness sizing for rocket combustion chambers treated as thick-walled
//! pressure vessels.
//!
//! Given an inner radius, chamber and ambient pressures, an allowable material
//! strength and a factor of safety, the solver walks the wall thickness in fixed
//! steps until the factored Lamé stress at the inner wall meets the limit. The
//! resulting thickness and outer radius feed downstream geometry (chamber
//! profiles, revolves) that lives outside this crate. The crate offers
//!
//! - closed-form thick-cylinder stresses (`stress` module),
//! - request value types (`vessel` module) and search settings (`options` module),
//! - the step search itself (`solver` module),
//! - parallel sizing of independent requests (`batch` module), and
//! - a labelled set of reference design points (`reference` module).
//!
//! All inputs are plain magnitudes in one consistent unit system; unit
//! conversion is the caller's job.
//!
//! # Quick start
//!
//! ```
//! use chamberwall::WallThicknessSolver;
//!
//! // INCONEL 718 chamber, inch/psi.
//! let mut solver =
//!     WallThicknessSolver::new(5.2399, 0.1, 4236.04, 0.001, 156e3, 1.5, Some(0.001))
//!         .expect("valid solver inputs");
//! let result = solver.calculate_wall_thickness().expect("search converged");
//!
//! assert!((result.thickness - 0.218).abs() < 1e-3);
//! println!("outer radius: {:.3} in", result.outer_radius);
//! ```

pub mod batch;
pub mod error;
pub mod options;
pub mod reference;
pub mod solver;
pub mod stress;
pub mod vessel;

pub use batch::{solve_batch, SizingRequest};
pub use error::{ErrorKind, Result, SizingError};
pub use options::SolverOptions;
pub use solver::{SearchDirection, SolverResult, WallThicknessSolver, WallThicknessSolverBuilder};
pub use stress::{max_factored_stress, radial_stress, stress_state, tangential_stress, StressState};
pub use vessel::{LoadCondition, MaterialLimit, VesselGeometry};
