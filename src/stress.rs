//! Lamé stresses in a thick-walled cylinder under internal and external pressure.
//!
//! Sign convention: tension is positive. At the inner wall of a vessel with
//! `p_c > p_amb` the tangential (hoop) component is the largest tensile stress.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizingError};

/// Both principal in-plane stress components at one radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Circumferential (hoop) stress.
    pub tangential: f64,
    /// Stress along the radial direction.
    pub radial: f64,
}

impl StressState {
    /// The larger of the two components.
    pub fn max(&self) -> f64 {
        self.tangential.max(self.radial)
    }
}

fn check_geometry(r_i: f64, r_o: f64, r: f64) -> Result<()> {
    if r_o == r_i {
        return Err(SizingError::degenerate(r_i, r_o));
    }
    if r == 0.0 {
        return Err(SizingError::ZeroEvaluationRadius);
    }
    Ok(())
}

/// Tangential (hoop) stress at radius `r`.
pub fn tangential_stress(r_i: f64, r_o: f64, r: f64, p_c: f64, p_amb: f64) -> Result<f64> {
    check_geometry(r_i, r_o, r)?;
    let (ri2, ro2) = (r_i * r_i, r_o * r_o);
    Ok((p_c * ri2 - p_amb * ro2 - ri2 * ro2 * (p_amb - p_c) / (r * r)) / (ro2 - ri2))
}

/// Radial stress at radius `r`.
pub fn radial_stress(r_i: f64, r_o: f64, r: f64, p_c: f64, p_amb: f64) -> Result<f64> {
    check_geometry(r_i, r_o, r)?;
    let (ri2, ro2) = (r_i * r_i, r_o * r_o);
    Ok((p_c * ri2 - p_amb * ro2 + ri2 * ro2 * (p_amb - p_c) / (r * r)) / (ro2 - ri2))
}

/// Evaluates both stress components at radius `r`.
pub fn stress_state(r_i: f64, r_o: f64, r: f64, p_c: f64, p_amb: f64) -> Result<StressState> {
    Ok(StressState {
        tangential: tangential_stress(r_i, r_o, r, p_c, p_amb)?,
        radial: radial_stress(r_i, r_o, r, p_c, p_amb)?,
    })
}

/// `fs * max(tangential, radial)`, the value compared against the material limit.
pub fn max_factored_stress(
    r_i: f64,
    r_o: f64,
    r: f64,
    p_c: f64,
    p_amb: f64,
    fs: f64,
) -> Result<f64> {
    Ok(fs * stress_state(r_i, r_o, r, p_c, p_amb)?.max())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inner_wall_matches_textbook_forms() {
        // Internal pressure only: hoop = p (ro² + ri²) / (ro² - ri²), radial = -p at r = ri.
        let (r_i, r_o, p) = (2.0, 3.0, 100.0);
        let hoop = tangential_stress(r_i, r_o, r_i, p, 0.0).unwrap();
        let radial = radial_stress(r_i, r_o, r_i, p, 0.0).unwrap();
        assert_relative_eq!(hoop, p * (9.0 + 4.0) / (9.0 - 4.0), epsilon = 1e-12);
        assert_relative_eq!(radial, -p, epsilon = 1e-12);
    }

    #[test]
    fn radial_stress_equals_minus_ambient_at_outer_wall() {
        let radial = radial_stress(1.0, 1.5, 1.5, 250.0, 14.7).unwrap();
        assert_relative_eq!(radial, -14.7, epsilon = 1e-10);
    }

    #[test]
    fn uniform_pressure_gives_uniform_compression() {
        for r in [1.0, 1.2, 1.4] {
            let state = stress_state(1.0, 1.4, r, 30.0, 30.0).unwrap();
            assert_relative_eq!(state.tangential, -30.0, epsilon = 1e-10);
            assert_relative_eq!(state.radial, -30.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn factored_stress_scales_the_larger_component() {
        let state = stress_state(5.0, 5.5, 5.0, 1000.0, 0.0).unwrap();
        let factored = max_factored_stress(5.0, 5.5, 5.0, 1000.0, 0.0, 1.5).unwrap();
        assert_relative_eq!(factored, 1.5 * state.tangential, epsilon = 1e-9);
        assert!(state.tangential > state.radial);
    }

    #[test]
    fn zero_thickness_is_a_domain_error() {
        let err = tangential_stress(4.0, 4.0, 4.0, 10.0, 0.0).unwrap_err();
        assert!(matches!(err, SizingError::DegenerateVessel { .. }));
        let err = max_factored_stress(4.0, 4.0, 4.0, 10.0, 0.0, 2.0).unwrap_err();
        assert!(matches!(err, SizingError::DegenerateVessel { .. }));
    }

    #[test]
    fn zero_evaluation_radius_is_a_domain_error() {
        let err = radial_stress(1.0, 2.0, 0.0, 10.0, 0.0).unwrap_err();
        assert_eq!(err, SizingError::ZeroEvaluationRadius);
    }
}
