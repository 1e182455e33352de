//! Time integration for the body system
//!
//! One integrator is provided: explicit (forward) Euler. It is first
//! order and not symplectic, so energy drifts over long runs; that drift
//! is accepted behavior of the scheme, not a defect to be integrated
//! away.

use crate::forces::ForceModel;
use crate::state::SystemState;
use nalgebra::Vector2;

/// A time integrator for the body system
///
/// Integrators advance the system state forward in time by computing
/// accelerations from a force model and updating velocities and
/// positions in place.
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }
}

/// Explicit (forward) Euler integrator
///
/// Each step runs two full passes over the collection:
///
/// 1. every acceleration is evaluated against the start-of-step position
///    snapshot, then all velocities update as if simultaneously:
///    `v += a·dt`;
/// 2. every position then advances with its freshly updated velocity:
///    `x += v·dt`.
///
/// A body's updated velocity is never visible to another body's force
/// evaluation within the same step.
///
/// # Examples
///
/// ```
/// use gravity::integrator::{Euler, Integrator};
/// use gravity::forces::DirectGravity;
/// use gravity::state::SystemState;
/// use gravity::{Body, Color};
/// use nalgebra::{Point2, Vector2};
///
/// let bodies = vec![
///     Body::with_radius(
///         1.0,
///         Point2::new(0.0, 0.0),
///         Vector2::new(0.0, 0.0),
///         0.1,
///         Color::new(255, 0, 0),
///     ),
///     Body::with_radius(
///         1.0,
///         Point2::new(10.0, 0.0),
///         Vector2::new(0.0, 0.0),
///         0.1,
///         Color::new(0, 0, 255),
///     ),
/// ];
/// let mut system = SystemState::new(bodies);
///
/// let integrator = Euler;
/// let force = DirectGravity::with_constant(1.0);
/// integrator.step(&mut system, 1.0, &force);
///
/// // Unit masses at separation 10: each picks up speed 0.01 toward the other
/// assert!((system.bodies[0].velocity.x - 0.01).abs() < 1e-12);
/// assert_eq!(system.time, 1.0);
/// ```
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        // Accelerations from the start-of-step snapshot
        let accelerations: Vec<Vector2<f64>> = (0..state.bodies.len())
            .map(|i| force.acceleration(i, state))
            .collect();

        // Velocity pass
        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt;
            });

        // Position pass, using the velocities just written
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });

        state.time += dt;
    }
}
