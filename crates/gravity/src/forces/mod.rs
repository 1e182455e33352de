//! Force models for the N-body system
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity implementation used by the integrator.

use crate::state::SystemState;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::{newtonian_force, DirectGravity};

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.674e-11;

/// A source of acceleration on bodies in the system
///
/// Force models are pure: they read the system state and return
/// accelerations, never mutating anything themselves.
///
/// # Examples
///
/// ```
/// use gravity::forces::{DirectGravity, ForceModel};
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
/// let earth = Body::with_radius(
///     5.972e24,
///     Point2::new(1.496e11, 0.0),
///     Vector2::new(0.0, 2.98e4),
///     6.371e6,
///     Color::new(0, 0, 255),
/// );
/// let system = SystemState::new(vec![sun, earth]);
///
/// let force = DirectGravity::new();
/// let accel = force.acceleration(1, &system);
///
/// // Earth accelerates toward the sun (negative x direction)
/// assert!(accel.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute acceleration on body at index `idx` given full system state
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64>;

    /// Compute potential energy contribution (optional)
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that contribute to potential energy.
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}
