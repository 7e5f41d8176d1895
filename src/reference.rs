//! Reference sizing cases for regeneratively cooled chambers, taken from
//! J. Simmons' dissertation.
//!
//! Inputs are inch/psi magnitudes. Every case shares the same initial guess,
//! ambient pressure, factor of safety and step size; expected thicknesses are
//! quoted to three decimals.

use crate::batch::SizingRequest;
use crate::error::Result;
use crate::options::SolverOptions;
use crate::solver::WallThicknessSolver;
use crate::vessel::{LoadCondition, MaterialLimit};

/// Initial thickness guess, in.
pub const THICKNESS_GUESS: f64 = 0.1;
/// Ambient pressure, psi.
pub const AMBIENT_PRESSURE: f64 = 0.001;
pub const FACTOR_OF_SAFETY: f64 = 1.5;
/// Search step, in.
pub const STEP_SIZE: f64 = 0.001;

/// One labelled chamber design point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceCase {
    /// Material and run number, e.g. `"INCONEL 718, run 63"`.
    pub name: &'static str,
    pub inner_radius: f64,
    pub internal_pressure: f64,
    pub allowable_strength: f64,
    pub expected_thickness: f64,
}

impl ReferenceCase {
    /// The case expressed as a sizing request with the shared search settings.
    pub fn request(&self) -> SizingRequest {
        SizingRequest {
            inner_radius: self.inner_radius,
            load: LoadCondition::new(self.internal_pressure, AMBIENT_PRESSURE),
            material: MaterialLimit::new(self.allowable_strength, FACTOR_OF_SAFETY),
            options: SolverOptions::default()
                .with_initial_thickness(THICKNESS_GUESS)
                .with_step_size(STEP_SIZE),
        }
    }

    /// An unsolved solver for this case.
    pub fn solver(&self) -> Result<WallThicknessSolver> {
        self.request().solver()
    }
}

const fn case(
    name: &'static str,
    inner_radius: f64,
    internal_pressure: f64,
    allowable_strength: f64,
    expected_thickness: f64,
) -> ReferenceCase {
    ReferenceCase {
        name,
        inner_radius,
        internal_pressure,
        allowable_strength,
        expected_thickness,
    }
}

/// All reference cases, in dissertation order.
pub static REFERENCE_CASES: [ReferenceCase; 9] = [
    case("INCONEL 718, run 63", 5.2399, 1333.29, 156e3, 0.067),
    case("INCONEL 718, run 57", 5.2399, 4236.04, 156e3, 0.218),
    case("INCONEL 718, run 55", 9.5433, 4125.37, 156e3, 0.387),
    case("Alloy 188, run 45", 5.2399, 1333.29, 42e3, 0.256),
    case("Alloy 188, run 40", 9.5433, 2583.42, 42e3, 0.926),
    case("Alloy 188, run 37", 9.5433, 4125.37, 42e3, 1.527),
    case("Ox-Free Copper, run 18", 5.2399, 1333.29, 56.6e3, 0.189),
    case("Ox-Free Copper, run 11", 7.745, 4351.64, 46.4e3, 1.179),
    case("Ox-Free Copper, run 13", 9.5433, 2583.42, 17.4e3, 2.426),
];

/// Looks up a case by its label.
pub fn find(name: &str) -> Option<&'static ReferenceCase> {
    REFERENCE_CASES.iter().find(|case| case.name == name)
}
