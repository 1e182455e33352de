use nalgebra::{Point2, Vector2};

use crate::body::{Body, Color};
use crate::forces::DirectGravity;
use crate::simulation::{Simulation, SimulationError};

fn unit_body(x: f64, radius: f64) -> Body {
    Body::with_radius(
        1.0,
        Point2::new(x, 0.0),
        Vector2::new(0.0, 0.0),
        radius,
        Color::new(255, 255, 255),
    )
}

#[test]
fn test_construction_accepts_valid_bodies() {
    let sim = Simulation::new(vec![unit_body(0.0, 0.1), unit_body(10.0, 0.1)], 1.0);

    assert!(sim.is_ok());
}

#[test]
fn test_construction_rejects_zero_mass() {
    let mut bad = unit_body(0.0, 0.1);
    bad.mass = 0.0;

    let err = Simulation::new(vec![bad], 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidMass { index: 0, .. }));
}

#[test]
fn test_construction_rejects_negative_mass() {
    let mut bad = unit_body(0.0, 0.1);
    bad.mass = -5.0;

    let err = Simulation::new(vec![unit_body(0.0, 0.1), bad], 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidMass { index: 1, .. }));
}

#[test]
fn test_construction_rejects_nan_mass() {
    let mut bad = unit_body(0.0, 0.1);
    bad.mass = f64::NAN;

    let err = Simulation::new(vec![bad], 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidMass { index: 0, .. }));
}

#[test]
fn test_construction_rejects_non_positive_density() {
    let mut bad = unit_body(0.0, 0.1);
    bad.density = -3.0;

    let err = Simulation::new(vec![bad], 1.0).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidDensity { index: 0, .. }
    ));
}

#[test]
fn test_construction_rejects_nan_density() {
    let mut bad = unit_body(5.0, 0.1);
    bad.density = f64::NAN;

    let err = Simulation::new(vec![unit_body(0.0, 0.1), bad], 1.0).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidDensity { index: 1, .. }
    ));
}

#[test]
fn test_construction_rejects_non_finite_position() {
    let mut bad = unit_body(0.0, 0.1);
    bad.position.x = f64::NAN;

    let err = Simulation::new(vec![bad], 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::NonFiniteState { index: 0 }));
}

#[test]
fn test_construction_rejects_non_finite_velocity() {
    let mut bad = unit_body(0.0, 0.1);
    bad.velocity.y = f64::INFINITY;

    let err = Simulation::new(vec![bad], 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::NonFiniteState { index: 0 }));
}

#[test]
fn test_construction_rejects_bad_time_step() {
    let bodies = vec![unit_body(0.0, 0.1)];

    assert!(matches!(
        Simulation::new(bodies.clone(), 0.0),
        Err(SimulationError::InvalidTimeStep { .. })
    ));
    assert!(matches!(
        Simulation::new(bodies.clone(), -1.0),
        Err(SimulationError::InvalidTimeStep { .. })
    ));
    assert!(matches!(
        Simulation::new(bodies, f64::NAN),
        Err(SimulationError::InvalidTimeStep { .. })
    ));
}

#[test]
fn test_step_advances_time_by_fixed_step() {
    let mut sim = Simulation::new(vec![unit_body(0.0, 0.1)], 0.25).unwrap();

    sim.step();
    sim.step();

    assert_eq!(sim.time(), 0.5);
    assert_eq!(sim.time_step(), 0.25);
}

#[test]
fn test_step_merges_overlapping_bodies() {
    // Overlap from the start: radii sum 1.2 > separation 1.0
    let mut sim = Simulation::with_gravity(
        vec![unit_body(0.0, 0.6), unit_body(1.0, 0.6)],
        1.0,
        DirectGravity::with_constant(1.0),
    )
    .unwrap();

    sim.step();

    assert_eq!(sim.body_count(), 1);
    assert!((sim.bodies()[0].mass - 2.0).abs() < 1e-12);
}

#[test]
fn test_merging_disabled_keeps_bodies() {
    let mut sim = Simulation::with_gravity(
        vec![unit_body(0.0, 0.6), unit_body(1.0, 0.6)],
        1.0,
        DirectGravity::with_constant(1.0),
    )
    .unwrap();
    sim.set_merging(false);

    sim.run(3);

    assert_eq!(sim.body_count(), 2);
}

#[test]
fn test_run_returns_final_time() {
    let mut sim = Simulation::new(vec![unit_body(0.0, 0.1)], 0.5).unwrap();

    let t = sim.run(4);

    assert_eq!(t, 2.0);
    assert_eq!(sim.time(), 2.0);
}

#[test]
fn test_single_body_never_moves() {
    let mut sim = Simulation::new(vec![unit_body(3.0, 0.1)], 10.0).unwrap();

    sim.run(100);

    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.bodies()[0].velocity, Vector2::new(0.0, 0.0));
    assert_eq!(sim.bodies()[0].position, Point2::new(3.0, 0.0));
}

#[test]
fn test_bodies_exposes_current_collection() {
    let sim = Simulation::new(vec![unit_body(0.0, 0.1), unit_body(5.0, 0.2)], 1.0).unwrap();

    let bodies = sim.bodies();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[1].position.x, 5.0);
    assert_eq!(sim.state().total_mass(), 2.0);
}

#[test]
fn test_simulation_debug_output() {
    let sim = Simulation::new(vec![unit_body(0.0, 0.1)], 1.0).unwrap();

    let printed = format!("{:?}", sim);
    assert!(printed.contains("Simulation"));
    assert!(printed.contains("merge_on_contact: true"));
}
