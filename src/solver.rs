//! Incremental search for the thinnest wall that keeps the factored Lamé stress
//! within the material limit.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SizingError};
use crate::options::SolverOptions;
use crate::stress::max_factored_stress;
use crate::vessel::{ensure_finite, LoadCondition, MaterialLimit, VesselGeometry};

/// Which way the search moved the wall from the initial guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDirection {
    /// The guess was over-designed and the wall was thinned.
    Thinner,
    /// The guess was under-designed and the wall was thickened.
    Thicker,
}

/// Outcome of a converged thickness search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Final wall thickness. Not rounded.
    pub thickness: f64,
    /// `inner_radius + thickness`.
    pub outer_radius: f64,
    /// Factored maximum stress at `thickness`.
    pub factored_stress: f64,
    /// Number of steps taken, excluding the step back in the thinning branch.
    pub iterations: usize,
    pub direction: SearchDirection,
}

/// Owns one vessel sizing request and its trial thickness.
#[derive(Clone, Debug)]
pub struct WallThicknessSolver {
    geometry: VesselGeometry,
    load: LoadCondition,
    material: MaterialLimit,
    trial_thickness: f64,
    step_size: f64,
    max_iterations: usize,
}

impl WallThicknessSolver {
    /// Constructs a solver from raw magnitudes.
    ///
    /// `step_size` is required: `None` or zero is rejected here rather than when
    /// the search runs.
    pub fn new(
        inner_radius: f64,
        initial_thickness_guess: f64,
        internal_pressure: f64,
        ambient_pressure: f64,
        allowable_strength: f64,
        factor_of_safety: f64,
        step_size: Option<f64>,
    ) -> Result<Self> {
        let mut options = SolverOptions::default().with_initial_thickness(initial_thickness_guess);
        options.step_size = step_size;
        Self::builder(inner_radius)
            .load(LoadCondition::new(internal_pressure, ambient_pressure))
            .material(MaterialLimit::new(allowable_strength, factor_of_safety))
            .options(options)
            .build()
    }

    /// Starts a builder for a vessel with the given inner radius.
    pub fn builder(inner_radius: f64) -> WallThicknessSolverBuilder {
        WallThicknessSolverBuilder::new(inner_radius)
    }

    /// Current trial thickness.
    pub fn thickness(&self) -> f64 {
        self.trial_thickness
    }

    /// Outer radius implied by the current trial thickness.
    pub fn outer_radius(&self) -> f64 {
        self.geometry.outer_radius()
    }

    pub fn geometry(&self) -> &VesselGeometry {
        &self.geometry
    }

    pub fn load(&self) -> &LoadCondition {
        &self.load
    }

    pub fn material(&self) -> &MaterialLimit {
        &self.material
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Factored maximum stress at the current trial thickness.
    pub fn factored_stress(&self) -> Result<f64> {
        max_factored_stress(
            self.geometry.inner_radius(),
            self.geometry.outer_radius(),
            self.geometry.evaluation_radius(),
            self.load.internal_pressure,
            self.load.ambient_pressure,
            self.material.factor_of_safety,
        )
    }

    /// Runs the step search and leaves the solver at the resulting thickness.
    ///
    /// An over-designed guess is thinned until the limit is reached, then moved back
    /// one step. An under-designed guess is thickened until the stress no longer
    /// exceeds the limit, with no step back. Callers comparing against tabulated
    /// thicknesses rely on this asymmetry.
    pub fn calculate_wall_thickness(&mut self) -> Result<SolverResult> {
        let limit = self.material.allowable_strength;
        let mut stress = self.factored_stress()?;
        let mut iterations = 0usize;

        debug!(
            "sizing wall: inner radius {}, guess {}, factored stress {} against limit {}",
            self.geometry.inner_radius(),
            self.trial_thickness,
            stress,
            limit
        );

        let direction = if stress < limit {
            while stress < limit {
                self.advance(-self.step_size, &mut iterations)?;
                stress = self.factored_stress()?;
            }
            // The loop exits one step past the last safe thickness.
            self.set_trial_thickness(self.trial_thickness + self.step_size);
            stress = self.factored_stress()?;
            SearchDirection::Thinner
        } else {
            while stress > limit {
                self.advance(self.step_size, &mut iterations)?;
                stress = self.factored_stress()?;
            }
            SearchDirection::Thicker
        };

        debug!(
            "wall sized to {} after {} steps ({:?}), factored stress {}",
            self.trial_thickness, iterations, direction, stress
        );

        Ok(SolverResult {
            thickness: self.trial_thickness,
            outer_radius: self.geometry.outer_radius(),
            factored_stress: stress,
            iterations,
            direction,
        })
    }

    fn advance(&mut self, delta: f64, iterations: &mut usize) -> Result<()> {
        if *iterations >= self.max_iterations {
            warn!(
                "thickness search hit the cap of {} steps at thickness {}",
                self.max_iterations, self.trial_thickness
            );
            return Err(SizingError::SearchDidNotTerminate {
                iterations: *iterations,
                thickness: self.trial_thickness,
            });
        }
        *iterations += 1;
        self.set_trial_thickness(self.trial_thickness + delta);
        if self.trial_thickness <= 0.0 {
            return Err(SizingError::NonPositiveThickness {
                thickness: self.trial_thickness,
            });
        }
        trace!("step {}: thickness {}", iterations, self.trial_thickness);
        Ok(())
    }

    fn set_trial_thickness(&mut self, thickness: f64) {
        self.trial_thickness = thickness;
        self.geometry.set_thickness(thickness);
    }
}

/// Builder that validates inputs before constructing a [`WallThicknessSolver`].
#[derive(Clone, Debug)]
pub struct WallThicknessSolverBuilder {
    inner_radius: f64,
    load: Option<LoadCondition>,
    material: Option<MaterialLimit>,
    options: SolverOptions,
}

impl WallThicknessSolverBuilder {
    pub fn new(inner_radius: f64) -> Self {
        Self {
            inner_radius,
            load: None,
            material: None,
            options: SolverOptions::default(),
        }
    }

    /// Sets the chamber and ambient pressures.
    pub fn load(mut self, load: LoadCondition) -> Self {
        self.load = Some(load);
        self
    }

    /// Sets the strength limit and factor of safety.
    pub fn material(mut self, material: MaterialLimit) -> Self {
        self.material = Some(material);
        self
    }

    /// Replaces the search options.
    pub fn options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Shorthand for setting only the step size.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.options.step_size = Some(step_size);
        self
    }

    /// Finalizes construction. The step size is checked first.
    pub fn build(self) -> Result<WallThicknessSolver> {
        let step_size = match self.options.step_size {
            None => return Err(SizingError::MissingStepSize),
            Some(step) if step == 0.0 => return Err(SizingError::ZeroStepSize),
            Some(step) => ensure_finite("step size", step)?,
        };

        let load = self
            .load
            .ok_or_else(|| SizingError::missing_component("load condition"))?;
        let material = self
            .material
            .ok_or_else(|| SizingError::missing_component("material limit"))?;

        let inner_radius = ensure_finite("inner radius", self.inner_radius)?;
        let thickness = ensure_finite(
            "initial thickness guess",
            self.options.initial_thickness_guess,
        )?;
        ensure_finite("internal pressure", load.internal_pressure)?;
        ensure_finite("ambient pressure", load.ambient_pressure)?;
        ensure_finite("allowable strength", material.allowable_strength)?;
        ensure_finite("factor of safety", material.factor_of_safety)?;

        Ok(WallThicknessSolver {
            geometry: VesselGeometry::from_thickness(inner_radius, thickness),
            load,
            material,
            trial_thickness: thickness,
            step_size,
            max_iterations: self.options.max_iterations,
        })
    }
}
