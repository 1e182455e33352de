//! Direct pairwise Newtonian gravity (O(n²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, G};
use crate::state::SystemState;
use nalgebra::Vector2;

/// Force exerted on `a` by `b` under Newton's law of gravitation.
///
/// Magnitude `g·mA·mB/d²`, directed from `a` toward `b`. Coincident
/// positions yield the zero vector, so a degenerate pair never
/// propagates a non-finite value into the system.
///
/// # Examples
///
/// ```
/// use gravity::forces::newtonian_force;
/// use gravity::{Body, Color};
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::with_radius(
///     2.0,
///     Point2::new(0.0, 0.0),
///     Vector2::new(0.0, 0.0),
///     0.1,
///     Color::new(255, 0, 0),
/// );
/// let b = Body::with_radius(
///     3.0,
///     Point2::new(10.0, 0.0),
///     Vector2::new(0.0, 0.0),
///     0.1,
///     Color::new(0, 0, 255),
/// );
///
/// // |F| = g·mA·mB/d² = 1·2·3/100
/// let f = newtonian_force(&a, &b, 1.0);
/// assert!((f.x - 0.06).abs() < 1e-12);
/// assert_eq!(f.y, 0.0);
/// ```
pub fn newtonian_force(a: &Body, b: &Body, g: f64) -> Vector2<f64> {
    let dr = b.position - a.position;
    let d2 = dr.magnitude_squared();
    if d2 == 0.0 {
        return Vector2::zeros();
    }
    let d = d2.sqrt();
    dr * (g * a.mass * b.mass / (d2 * d))
}

/// Direct O(n²) gravitational force computation
///
/// Computes each body's acceleration by summing contributions from every
/// other body. Simple and exact for the target scale (tens to low
/// hundreds of bodies); deliberately not backed by any spatial
/// acceleration structure.
///
/// The gravitational constant is carried explicitly so tests can scale
/// it (e.g. to 1) without touching global state.
#[derive(Debug, Clone, Copy)]
pub struct DirectGravity {
    /// Gravitational constant in m³ kg⁻¹ s⁻²
    pub g: f64,
    /// Optional Plummer softening length (m) to tame close encounters
    pub softening: f64,
}

impl DirectGravity {
    /// Creates the standard configuration: `G`, no softening
    pub fn new() -> Self {
        Self {
            g: G,
            softening: 0.0,
        }
    }

    /// Creates a model with a custom gravitational constant
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity::forces::DirectGravity;
    ///
    /// // Unit-G configuration for analytically checkable setups
    /// let force = DirectGravity::with_constant(1.0);
    /// assert_eq!(force.g, 1.0);
    /// ```
    pub fn with_constant(g: f64) -> Self {
        Self { g, softening: 0.0 }
    }

    /// Creates a model with the standard constant and a softening length
    pub fn with_softening(softening: f64) -> Self {
        Self { g: G, softening }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        let body = &state.bodies[idx];
        let g = self.g;
        let eps2 = self.softening * self.softening;

        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| {
                let dr = other.position - body.position;
                let d2 = dr.magnitude_squared();
                if d2 == 0.0 {
                    return Vector2::zeros();
                }
                let r2 = d2 + eps2;
                let r = r2.sqrt();
                dr * (g * other.mass / (r2 * r))
            })
            .fold(Vector2::zeros(), |acc, a| acc + a)
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let g = self.g;
        let eps2 = self.softening * self.softening;

        // Each unique pair counted once
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let dr = a.position - b.position;
                    let d2 = dr.magnitude_squared();
                    if d2 == 0.0 {
                        return 0.0;
                    }
                    let r = (d2 + eps2).sqrt();
                    -g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
