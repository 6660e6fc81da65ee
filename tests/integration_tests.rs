use approx::assert_relative_eq;
use rocket_performance::{
    area_mach_relation, errors::SimulationError, simulate, solve_exit_mach, solve_nozzle,
    Bisection, LaunchParameters, NozzleConfig, NozzleInputs, NozzleSolver, Termination,
    ThrustToWeightBasis, TrajectoryConfig, TrajectoryIntegrator, GRAVITY,
};

// Helper function to create the reference engine
fn reference_engine() -> NozzleInputs {
    NozzleInputs {
        chamber_pressure: 5.0e6,
        chamber_temperature: 3500.0,
        gamma: 1.2,
        throat_area: 0.05,
        exit_area: 0.5,
        ambient_pressure: 101_325.0,
    }
}

fn sounding_rocket(angle: f64) -> LaunchParameters {
    LaunchParameters {
        initial_velocity: 0.0,
        launch_angle_degrees: angle,
        thrust: 300.0,
        initial_mass: 10.0,
        fuel_mass: 4.0,
        burn_time: 2.0,
        total_time: 60.0,
        initial_height: 0.0,
    }
}

#[test]
fn test_reference_engine_is_supersonic_and_plausible() {
    println!("INTEGRATION TEST: Reference Nozzle");

    let perf = solve_nozzle(&reference_engine()).expect("reference engine should solve");

    println!(
        "Me = {:.3}, F = {:.2} N, Isp = {:.2} s",
        perf.exit_mach, perf.thrust, perf.specific_impulse
    );
    assert!(perf.exit_mach > 1.0, "exit flow must be supersonic");
    assert!(perf.thrust > 0.0);
    assert!(
        (200.0..=400.0).contains(&perf.specific_impulse),
        "Isp {:.1} s outside the chemical-rocket range",
        perf.specific_impulse
    );
    assert!(perf.exit_pressure < reference_engine().chamber_pressure);
    assert!(perf.exit_temperature < reference_engine().chamber_temperature);
    assert_relative_eq!(perf.thrust, 384914.36987445026, max_relative = 1e-8);
    assert_relative_eq!(perf.specific_impulse, 242.5488526572447, max_relative = 1e-8);
}

#[test]
fn test_root_finder_round_trip_over_geometries() {
    for gamma in [1.15, 1.25, 1.3, 1.4] {
        for ratio in [1.0, 1.2, 3.0, 8.0, 25.0, 77.0, 200.0] {
            let mach = solve_exit_mach(ratio, gamma).expect("area ratio >= 1 must solve");
            assert_relative_eq!(area_mach_relation(mach, gamma), ratio, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_exit_mach_never_decreases_with_expansion() {
    let mut previous = 0.0;
    for step in 0..40 {
        let inputs = NozzleInputs {
            exit_area: 0.05 * (1.0 + step as f64 * 0.5),
            ..reference_engine()
        };
        let mach = solve_nozzle(&inputs).unwrap().exit_mach;
        assert!(mach >= previous);
        previous = mach;
    }
}

#[test]
fn test_newton_and_bisection_agree() {
    let config = NozzleConfig::default();
    let newton = NozzleSolver::new(config).solve(&reference_engine()).unwrap();
    let bisection = NozzleSolver::new(config)
        .with_root_finder(Bisection::default())
        .solve(&reference_engine())
        .unwrap();
    assert_relative_eq!(newton.exit_mach, bisection.exit_mach, max_relative = 1e-9);
}

#[test]
fn test_overexpanded_nozzle_is_reported_as_invalid() {
    let inputs = NozzleInputs {
        exit_area: 0.01,
        ..reference_engine()
    };
    match solve_nozzle(&inputs) {
        Err(SimulationError::InvalidInput(message)) => assert!(message.contains("throat area")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_ballistic_flight_matches_closed_form() {
    println!("INTEGRATION TEST: Ballistic Flight");

    let v0: f64 = 100.0;
    let theta = 45f64.to_radians();
    let telemetry = simulate(LaunchParameters {
        initial_velocity: v0,
        launch_angle_degrees: 45.0,
        thrust: 0.0,
        initial_mass: 10.0,
        fuel_mass: 0.0,
        burn_time: 0.0,
        total_time: 20.0,
        initial_height: 0.0,
    })
    .unwrap();

    let expected_height = v0.powi(2) * theta.sin().powi(2) / (2.0 * GRAVITY);
    let expected_range = v0.powi(2) * (2.0 * theta).sin() / GRAVITY;
    println!(
        "Max height {:.2} m (closed form {:.2}), range {:.2} m (closed form {:.2})",
        telemetry.max_height(),
        expected_height,
        telemetry.range(),
        expected_range
    );

    assert_relative_eq!(telemetry.max_height(), expected_height, max_relative = 5e-3);
    assert_relative_eq!(telemetry.range(), expected_range, max_relative = 5e-3);
    assert_eq!(telemetry.final_mass(), 10.0);
}

#[test]
fn test_mass_never_increases_or_drops_below_dry_mass() {
    let params = sounding_rocket(60.0);
    let dry_mass = params.initial_mass - params.fuel_mass;
    let telemetry = simulate(params).unwrap();

    assert!(!telemetry.samples().is_empty());
    for pair in telemetry.samples().windows(2) {
        assert!(pair[1].mass <= pair[0].mass);
    }
    for sample in telemetry.samples() {
        assert!(sample.mass >= dry_mass);
    }
    assert_eq!(telemetry.final_mass(), dry_mass);
}

#[test]
fn test_no_retained_sample_below_ground() {
    for angle in [5.0, 30.0, 45.0, 70.0, 90.0] {
        let telemetry = simulate(sounding_rocket(angle)).unwrap();
        assert!(telemetry.samples().iter().all(|s| s.y >= 0.0));
        assert!(matches!(
            telemetry.termination(),
            Termination::GroundImpact { .. }
        ));
    }
}

#[test]
fn test_samples_are_time_ordered_on_the_grid() {
    let telemetry = simulate(sounding_rocket(45.0)).unwrap();
    for (i, sample) in telemetry.samples().iter().enumerate() {
        assert_relative_eq!(sample.time, i as f64 * 0.01, epsilon = 1e-9);
    }
}

#[test]
fn test_thrusting_flight_outranges_ballistic_coast() {
    let powered = simulate(sounding_rocket(45.0)).unwrap();
    let unpowered = simulate(LaunchParameters {
        thrust: 0.0,
        fuel_mass: 0.0,
        initial_velocity: 10.0,
        ..sounding_rocket(45.0)
    })
    .unwrap();
    assert!(powered.range() > unpowered.range());
    assert!(powered.max_height() > unpowered.max_height());
}

#[test]
fn test_thrust_to_weight_basis_after_full_burn() {
    let telemetry = simulate(sounding_rocket(90.0)).unwrap();
    let initial = telemetry
        .thrust_to_weight(ThrustToWeightBasis::InitialMass)
        .unwrap();
    let depleted = telemetry
        .thrust_to_weight(ThrustToWeightBasis::FinalMass)
        .unwrap();

    assert_relative_eq!(initial, 300.0 / (10.0 * GRAVITY), epsilon = 1e-12);
    assert_relative_eq!(depleted, 300.0 / (6.0 * GRAVITY), epsilon = 1e-12);
}

#[test]
fn test_degenerate_horizon() {
    let telemetry = simulate(LaunchParameters {
        total_time: 0.0,
        ..sounding_rocket(90.0)
    })
    .unwrap();

    assert!(telemetry.samples().len() <= 1);
    assert_eq!(telemetry.max_height(), telemetry.samples().first().map_or(0.0, |s| s.y));
}

#[test]
fn test_degenerate_ground_start() {
    let telemetry = simulate(LaunchParameters {
        initial_velocity: 0.0,
        thrust: 0.0,
        fuel_mass: 0.0,
        total_time: 10.0,
        ..sounding_rocket(45.0)
    })
    .unwrap();

    assert!(telemetry.samples().is_empty());
    assert_eq!(telemetry.final_mass(), 10.0);
    assert_eq!(telemetry.max_height(), 0.0);
    assert_eq!(telemetry.range(), 0.0);
}

#[test]
fn test_custom_gravity_and_step() {
    let config = TrajectoryConfig::new(0.05, 1.62).unwrap();
    let integrator = TrajectoryIntegrator::new(sounding_rocket(45.0), config).unwrap();
    let lunar = integrator.simulate();
    let earth = simulate(sounding_rocket(45.0)).unwrap();

    assert_eq!(integrator.grid_points(), 1201);
    assert!(lunar.range() > earth.range());
}
