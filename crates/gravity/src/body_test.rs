use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

use crate::body::{radius_from_mass_density, Body, Color};

#[test]
fn test_with_density_derives_radius() {
    let body = Body::with_density(
        1000.0,
        Point2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        1000.0,
        Color::new(255, 255, 255),
    );

    // r = (3m / 4πρ)^(1/3) = (3000 / (4π·1000))^(1/3)
    let expected = (3.0 * 1000.0 / (4.0 * PI * 1000.0)).powf(1.0 / 3.0);
    assert_eq!(body.radius, expected);
    assert_eq!(body.density, 1000.0);
}

#[test]
fn test_with_radius_back_derives_density() {
    let body = Body::with_radius(
        12.0,
        Point2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        2.0,
        Color::new(0, 0, 0),
    );

    // ρ = 3m / 4πr³ = 36 / 32π
    let expected = 3.0 * 12.0 / (4.0 * PI * 8.0);
    assert!((body.density - expected).abs() < 1e-12);
    assert_eq!(body.radius, 2.0);
}

#[test]
fn test_radius_density_round_trip() {
    let body = Body::with_radius(
        5.0e22,
        Point2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        1.7e6,
        Color::new(120, 120, 120),
    );

    // Re-deriving the radius from the implied density lands back on it
    let r = radius_from_mass_density(body.mass, body.density);
    assert_relative_eq!(r, body.radius, max_relative = 1e-12);
}

#[test]
fn test_momentum() {
    let body = Body::with_radius(
        2.0,
        Point2::new(1.0, 0.0),
        Vector2::new(3.0, 4.0),
        0.5,
        Color::new(1, 2, 3),
    );

    assert_eq!(body.momentum(), Vector2::new(6.0, 8.0));
}

#[test]
fn test_kinetic_energy() {
    let body = Body::with_radius(
        2.0,
        Point2::new(0.0, 0.0),
        Vector2::new(3.0, 4.0),
        0.5,
        Color::new(1, 2, 3),
    );

    // KE = 0.5 * m * v²
    // v² = 3² + 4² = 25
    // KE = 0.5 * 2 * 25 = 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
    let a = Body::with_radius(
        1.0,
        Point2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        0.1,
        Color::new(0, 0, 0),
    );
    let b = Body::with_radius(
        1.0,
        Point2::new(3.0, 4.0),
        Vector2::new(0.0, 0.0),
        0.1,
        Color::new(0, 0, 0),
    );

    // Distance = sqrt(3² + 4²) = 5
    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_speed() {
    let body = Body::with_radius(
        1.0,
        Point2::new(0.0, 0.0),
        Vector2::new(3.0, 4.0),
        0.1,
        Color::new(0, 0, 0),
    );

    assert_eq!(body.speed(), 5.0);
}

#[test]
fn test_volume_consistent_with_radius() {
    let body = Body::with_density(
        8.0e20,
        Point2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        3000.0,
        Color::new(0, 0, 0),
    );

    // V = m/ρ must equal the sphere volume of the derived radius
    let sphere = 4.0 / 3.0 * PI * body.radius.powi(3);
    assert_relative_eq!(body.volume(), sphere, max_relative = 1e-12);
}

#[test]
fn test_body_copy() {
    let body1 = Body::with_radius(
        1.0,
        Point2::new(1.0, 2.0),
        Vector2::new(3.0, 4.0),
        0.1,
        Color::new(9, 9, 9),
    );
    let body2 = body1; // Should copy, not move

    // Both should be usable
    assert_eq!(body1.mass, body2.mass);
    assert_eq!(body1.position, body2.position);
    assert_eq!(body1.velocity, body2.velocity);
    assert_eq!(body1.color, body2.color);
}
