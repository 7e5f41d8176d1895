use approx::assert_relative_eq;
use chamberwall::{
    max_factored_stress, radial_stress, tangential_stress, ErrorKind, LoadCondition,
    MaterialLimit, SizingError, SizingRequest, SolverOptions, SolverResult, WallThicknessSolver,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// With `p_c > p_amb`, a thicker wall always carries less factored stress.
#[test]
fn factored_stress_decreases_with_thickness() {
    let mut rng = SmallRng::seed_from_u64(2015);
    for _ in 0..500 {
        let r_i: f64 = rng.gen_range(0.5..12.0);
        let p_amb: f64 = rng.gen_range(0.0..15.0);
        let p_c = p_amb + rng.gen_range(10.0..5000.0);
        let fs: f64 = rng.gen_range(1.0..3.0);
        let t: f64 = rng.gen_range(0.01..2.0);
        let dt: f64 = rng.gen_range(0.001..0.5);

        let thin = max_factored_stress(r_i, r_i + t, r_i, p_c, p_amb, fs).unwrap();
        let thick = max_factored_stress(r_i, r_i + t + dt, r_i, p_c, p_amb, fs).unwrap();
        assert!(
            thick < thin,
            "r_i={r_i} p_c={p_c} p_amb={p_amb} t={t} dt={dt}: {thick} >= {thin}"
        );
    }
}

/// Equal pressures on both faces load the wall in uniform compression everywhere.
#[test]
fn equal_pressures_follow_the_closed_form() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..100 {
        let r_i: f64 = rng.gen_range(0.5..10.0);
        let r_o = r_i + rng.gen_range(0.05..3.0);
        let r = rng.gen_range(r_i..r_o);
        let p: f64 = rng.gen_range(1.0..5000.0);

        let hoop = tangential_stress(r_i, r_o, r, p, p).unwrap();
        let radial = radial_stress(r_i, r_o, r, p, p).unwrap();
        let expected = (p * r_i * r_i - p * r_o * r_o) / (r_o * r_o - r_i * r_i);
        assert_relative_eq!(hoop, expected, max_relative = 1e-9);
        assert_relative_eq!(radial, expected, max_relative = 1e-9);
        assert!(hoop.is_finite() && radial.is_finite());
    }
}

#[test]
fn repeated_solves_are_stable() {
    let mut solver =
        WallThicknessSolver::new(9.5433, 0.1, 2583.42, 0.001, 42e3, 1.5, Some(0.001)).unwrap();
    let first = solver.calculate_wall_thickness().unwrap();
    for _ in 0..3 {
        let again = solver.calculate_wall_thickness().unwrap();
        assert_relative_eq!(again.thickness, first.thickness, epsilon = 1e-9);
        assert_relative_eq!(again.outer_radius, first.outer_radius, epsilon = 1e-9);
    }
}

#[test]
fn step_size_is_validated_before_anything_else() {
    for step_size in [None, Some(0.0)] {
        let err = WallThicknessSolver::new(5.2399, 0.1, 4236.04, 0.001, 156e3, 1.5, step_size)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    let err = WallThicknessSolver::builder(5.2399)
        .load(LoadCondition::new(f64::NAN, 0.001))
        .material(MaterialLimit::new(156e3, 1.5))
        .step_size(0.001)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SizingError::NonFiniteParameter {
            name: "internal pressure",
            ..
        }
    ));
}

#[test]
fn requests_load_from_json() {
    let json = r#"{
        "inner_radius": 7.745,
        "load": { "internal_pressure": 4351.64, "ambient_pressure": 0.001 },
        "material": { "allowable_strength": 46400.0, "factor_of_safety": 1.5 },
        "options": { "initial_thickness_guess": 0.1, "step_size": 0.001, "max_iterations": 100000 }
    }"#;
    let request: SizingRequest = serde_json::from_str(json).unwrap();
    let result = request.solve().unwrap();
    assert_relative_eq!(result.thickness, 1.179, epsilon = 1e-3);

    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: SolverResult = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.direction, result.direction);
    assert_eq!(decoded.iterations, result.iterations);
}

#[test]
fn request_without_options_needs_a_step_size() {
    let json = r#"{
        "inner_radius": 5.2399,
        "load": { "internal_pressure": 1333.29, "ambient_pressure": 0.001 },
        "material": { "allowable_strength": 156000.0, "factor_of_safety": 1.5 }
    }"#;
    let request: SizingRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.options, SolverOptions::default());
    assert_eq!(request.solve().unwrap_err(), SizingError::MissingStepSize);
}
