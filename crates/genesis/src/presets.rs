//! Fixed initial-condition presets
//!
//! Published SI values throughout: masses in kg, orbital radii in m, mean
//! orbital speeds in m/s. Every planet starts on the +x axis moving in +y,
//! which puts the whole system on counterclockwise orbits around the Sun.

use nalgebra::{Point2, Vector2};

use gravity::{Body, Color};

/// 100 days in seconds, a workable step for whole-system solar orbits.
pub const SOLAR_TIME_STEP: f64 = 100.0 * 86_400.0;

/// The Sun and eight planets.
///
/// Radii are display-scale rather than physical; at true scale the
/// planets would be invisible next to their orbital separations. Nothing
/// in this preset ever collides, the gaps are ten orders of magnitude
/// wider than the radii.
///
/// # Examples
///
/// ```
/// use genesis::presets::{solar_system, SOLAR_TIME_STEP};
/// use gravity::Simulation;
///
/// let mut sim = Simulation::new(solar_system(), SOLAR_TIME_STEP).unwrap();
/// sim.step();
/// assert_eq!(sim.body_count(), 9);
/// ```
pub fn solar_system() -> Vec<Body> {
    vec![
        // Sun
        Body::with_radius(
            1.989e30,
            Point2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            20.0,
            Color::new(255, 255, 0),
        ),
        // Mercury
        Body::with_radius(
            3.285e23,
            Point2::new(5.791e10, 0.0),
            Vector2::new(0.0, 47_000.0),
            3.0,
            Color::new(200, 200, 200),
        ),
        // Venus
        Body::with_radius(
            4.867e24,
            Point2::new(1.082e11, 0.0),
            Vector2::new(0.0, 35_000.0),
            4.0,
            Color::new(255, 165, 0),
        ),
        // Earth
        Body::with_radius(
            5.972e24,
            Point2::new(1.496e11, 0.0),
            Vector2::new(0.0, 30_000.0),
            5.0,
            Color::new(0, 0, 255),
        ),
        // Mars
        Body::with_radius(
            6.39e23,
            Point2::new(2.279e11, 0.0),
            Vector2::new(0.0, 24_000.0),
            4.0,
            Color::new(255, 0, 0),
        ),
        // Jupiter
        Body::with_radius(
            1.898e27,
            Point2::new(7.786e11, 0.0),
            Vector2::new(0.0, 13_000.0),
            15.0,
            Color::new(255, 69, 0),
        ),
        // Saturn
        Body::with_radius(
            5.683e26,
            Point2::new(1.429e12, 0.0),
            Vector2::new(0.0, 10_000.0),
            12.0,
            Color::new(255, 215, 0),
        ),
        // Uranus
        Body::with_radius(
            8.681e25,
            Point2::new(2.871e12, 0.0),
            Vector2::new(0.0, 6_800.0),
            8.0,
            Color::new(173, 216, 230),
        ),
        // Neptune
        Body::with_radius(
            1.024e26,
            Point2::new(4.495e12, 0.0),
            Vector2::new(0.0, 5_400.0),
            8.0,
            Color::new(0, 0, 128),
        ),
    ]
}
