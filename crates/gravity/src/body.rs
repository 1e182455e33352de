use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// RGB color carried through the simulation for the rendering collaborator.
///
/// The engine never interprets it; a merge passes the winner's color on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A point-mass body in the 2D system.
///
/// Bodies carry no identifier: identity is the index in the owning
/// collection, and a merge destroys two entries and inserts one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,              // kg
    pub position: Point2<f64>,  // m (2D Cartesian)
    pub velocity: Vector2<f64>, // m/s
    pub density: f64,           // kg/m³
    pub radius: f64,            // m (collision and display radius)
    pub color: Color,
}

impl Body {
    /// Creates a body from mass and density, deriving the radius of a
    /// uniform sphere of that mass.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::{Body, Color};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let earth = Body::with_density(
    ///     5.972e24,
    ///     Point2::new(1.496e11, 0.0),
    ///     Vector2::new(0.0, 3.0e4),
    ///     5514.0,
    ///     Color::new(0, 0, 255),
    /// );
    ///
    /// // Roughly the real Earth radius
    /// assert!((earth.radius - 6.37e6).abs() < 0.01e6);
    /// ```
    pub fn with_density(
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        density: f64,
        color: Color,
    ) -> Self {
        Body {
            mass,
            position,
            velocity,
            density,
            radius: radius_from_mass_density(mass, density),
            color,
        }
    }

    /// Creates a body with an explicit radius (display-sized variant).
    ///
    /// The density is back-derived from mass and radius so that both
    /// fields stay populated and consistent with each other.
    pub fn with_radius(
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Self {
        Body {
            mass,
            position,
            velocity,
            density: 3.0 * mass / (4.0 * PI * radius.powi(3)),
            radius,
            color,
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Volume implied by mass and density (constant-density sphere).
    pub fn volume(&self) -> f64 {
        self.mass / self.density
    }
}

/// Radius of a uniform sphere with the given mass and density.
pub fn radius_from_mass_density(mass: f64, density: f64) -> f64 {
    (3.0 * mass / (4.0 * PI * density)).powf(1.0 / 3.0)
}
