//! Seeded random system synthesis

use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use gravity::{Body, Color};

/// Sampling bounds for synthesized bodies.
///
/// The defaults span small moons up to stellar masses, densities from ice
/// to iron, and a square spawn region wider than the solar preset's
/// outermost orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRanges {
    /// Body mass bounds in kg.
    pub mass: (f64, f64),
    /// Half-width of the square spawn region in m.
    pub position_extent: f64,
    /// Material density bounds in kg/m³.
    pub density: (f64, f64),
    /// Largest velocity component magnitude in m/s. Zero spawns every
    /// body at rest.
    pub max_speed: f64,
}

impl SynthesisRanges {
    /// Standard bounds with every body spawned motionless.
    pub fn at_rest() -> Self {
        Self {
            mass: (1.0e20, 1.0e30),
            position_extent: 1.0e14,
            density: (500.0, 10_000.0),
            max_speed: 0.0,
        }
    }

    /// Standard bounds with per-axis velocity components up to ±1 km/s.
    pub fn drifting() -> Self {
        Self {
            max_speed: 1.0e3,
            ..Self::at_rest()
        }
    }
}

impl Default for SynthesisRanges {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Synthesize `count` bodies by uniform sampling within `ranges`.
///
/// Sampling draws only from the caller's rng, so a seeded rng reproduces
/// the same system every run.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// use genesis::random::{random_system, SynthesisRanges};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let bodies = random_system(&mut rng, 12, &SynthesisRanges::at_rest());
/// assert_eq!(bodies.len(), 12);
/// ```
pub fn random_system(rng: &mut ChaChaRng, count: usize, ranges: &SynthesisRanges) -> Vec<Body> {
    (0..count).map(|_| random_body(rng, ranges)).collect()
}

fn random_body(rng: &mut ChaChaRng, ranges: &SynthesisRanges) -> Body {
    let (mass_min, mass_max) = ranges.mass;
    let mass = rng.random_range(mass_min..=mass_max);

    let extent = ranges.position_extent;
    let position = Point2::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    );

    let velocity = if ranges.max_speed > 0.0 {
        Vector2::new(
            rng.random_range(-ranges.max_speed..=ranges.max_speed),
            rng.random_range(-ranges.max_speed..=ranges.max_speed),
        )
    } else {
        Vector2::zeros()
    };

    let (density_min, density_max) = ranges.density;
    let density = rng.random_range(density_min..=density_max);

    let color = Color::new(rng.random(), rng.random(), rng.random());

    Body::with_density(mass, position, velocity, density, color)
}
