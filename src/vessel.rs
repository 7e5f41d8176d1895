//! Plain value types describing a sizing request: cylinder geometry, the pressures it
//! carries, and the material limit it is designed against.
//!
//! All quantities are bare magnitudes in one unit system chosen by the caller (for
//! example inch/psi or metre/pascal). No conversion happens in this crate.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizingError};

/// Radii of a thick-walled cylinder section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VesselGeometry {
    inner_radius: f64,
    outer_radius: f64,
    evaluation_radius: f64,
}

impl VesselGeometry {
    /// Builds the geometry for a wall of `thickness` around `inner_radius`.
    ///
    /// Stresses are evaluated at the inner wall, where hoop tension peaks under
    /// internal pressure.
    pub fn from_thickness(inner_radius: f64, thickness: f64) -> Self {
        Self {
            inner_radius,
            outer_radius: inner_radius + thickness,
            evaluation_radius: inner_radius,
        }
    }

    /// Inner radius `r_i`.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Outer radius `r_o = r_i + t`.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Radius at which stresses are evaluated.
    pub fn evaluation_radius(&self) -> f64 {
        self.evaluation_radius
    }

    /// Wall thickness `r_o - r_i`.
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Moves the outer wall so that the thickness becomes `thickness`.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.outer_radius = self.inner_radius + thickness;
    }
}

/// Internal and external pressures acting on the vessel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadCondition {
    /// Chamber pressure `p_c`.
    pub internal_pressure: f64,
    /// Ambient pressure `p_amb`.
    pub ambient_pressure: f64,
}

impl LoadCondition {
    pub fn new(internal_pressure: f64, ambient_pressure: f64) -> Self {
        Self {
            internal_pressure,
            ambient_pressure,
        }
    }
}

/// Strength limit the factored stress must stay under.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialLimit {
    /// Maximum allowable stress (yield or ultimate, at the caller's discretion).
    pub allowable_strength: f64,
    /// Multiplier applied to computed stress before comparing it to the limit.
    pub factor_of_safety: f64,
}

impl MaterialLimit {
    pub fn new(allowable_strength: f64, factor_of_safety: f64) -> Self {
        Self {
            allowable_strength,
            factor_of_safety,
        }
    }
}

/// Rejects NaN and infinite inputs before they reach the search loop.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SizingError::non_finite(name, value))
    }
}
