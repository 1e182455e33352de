use crate::body::Body;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Complete state of the body system at a given time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemState {
    /// Elapsed simulation time in seconds
    pub time: f64,
    /// Ordered body collection; a body's identity is its index here
    pub bodies: Vec<Body>,
}

impl SystemState {
    /// Creates a system at time zero from an initial body collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::state::SystemState;
    /// use gravity::{Body, Color};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let sun = Body::with_radius(
    ///     1.989e30,
    ///     Point2::new(0.0, 0.0),
    ///     Vector2::new(0.0, 0.0),
    ///     6.96e8,
    ///     Color::new(255, 255, 0),
    /// );
    /// let system = SystemState::new(vec![sun]);
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { time: 0.0, bodies }
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the total mass of all bodies
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all bodies
    ///
    /// Merges conserve this exactly; integration drift shows up here
    /// only through floating-point rounding.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Returns the total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted barycenter of the system.
    ///
    /// Returns the origin for an empty system.
    pub fn center_of_mass(&self) -> Point2<f64> {
        let total = self.total_mass();
        if total == 0.0 {
            return Point2::origin();
        }

        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Point2::from(weighted / total)
    }
}
