//! The owning simulation engine
//!
//! `Simulation` wires the force model, the Euler integrator, and the
//! collision pipeline behind the construct/step/read surface that
//! external collaborators (rendering, timing) consume.

use crate::body::Body;
use crate::collisions::{detect_collisions, resolve_collisions};
use crate::forces::DirectGravity;
use crate::integrator::{Euler, Integrator};
use crate::state::SystemState;
use thiserror::Error;

/// Rejected input at engine construction.
///
/// Everything the step loop relies on is checked up front; once a
/// `Simulation` exists, stepping never fails.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: density must be positive and finite, got {density}")]
    InvalidDensity { index: usize, density: f64 },

    #[error("body {index}: position and velocity must be finite")]
    NonFiniteState { index: usize },

    #[error("time step must be positive and finite, got {time_step}")]
    InvalidTimeStep { time_step: f64 },
}

/// The simulation engine: sole owner and mutator of the body collection.
///
/// One step is atomic from the caller's perspective: a full velocity
/// pass over all pairs evaluated against the start-of-step snapshot, a
/// full position pass with the new velocities, then collision detection
/// and merge resolution on the post-update positions. Between steps the
/// state is readable only.
///
/// # Examples
///
/// ```
/// use gravity::{Body, Color, Simulation};
/// use gravity::forces::DirectGravity;
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
///
/// let mut sim = Simulation::with_gravity(bodies, 1.0, DirectGravity::with_constant(1.0))
///     .expect("valid initial conditions");
/// sim.step();
///
/// assert_eq!(sim.time(), 1.0);
/// assert!(sim.bodies()[0].velocity.x > 0.0);
/// ```
#[derive(Debug)]
pub struct Simulation {
    state: SystemState,
    time_step: f64,
    gravity: DirectGravity,
    merge_on_contact: bool,
}

impl Simulation {
    /// Creates an engine with the standard gravitational constant.
    ///
    /// Every supplied body is validated against the engine's invariants
    /// (positive finite mass and density, finite position and velocity),
    /// as is the time step; the first offending input aborts
    /// construction.
    pub fn new(bodies: Vec<Body>, time_step: f64) -> Result<Self, SimulationError> {
        Self::with_gravity(bodies, time_step, DirectGravity::new())
    }

    /// Creates an engine with a caller-supplied force configuration.
    pub fn with_gravity(
        bodies: Vec<Body>,
        time_step: f64,
        gravity: DirectGravity,
    ) -> Result<Self, SimulationError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SimulationError::InvalidTimeStep { time_step });
        }

        for (index, body) in bodies.iter().enumerate() {
            validate_body(index, body)?;
        }

        Ok(Self {
            state: SystemState::new(bodies),
            time_step,
            gravity,
            merge_on_contact: true,
        })
    }

    /// Enables or disables merge-on-collision (enabled by default).
    ///
    /// With merging off, overlapping bodies pass through each other and
    /// the collection size never changes.
    pub fn set_merging(&mut self, enabled: bool) {
        self.merge_on_contact = enabled;
    }

    /// Advances the system by one fixed time step.
    pub fn step(&mut self) {
        Euler.step(&mut self.state, self.time_step, &self.gravity);

        if self.merge_on_contact {
            let events = detect_collisions(&self.state);
            resolve_collisions(&mut self.state, &events);
        }
    }

    /// Advances the system by `n_steps` fixed time steps.
    ///
    /// # Returns
    ///
    /// The simulation time after the final step.
    pub fn run(&mut self, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step();
        }
        self.state.time
    }

    /// Current ordered body collection, for projection and drawing.
    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    /// Elapsed simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// The fixed per-step duration in seconds.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn body_count(&self) -> usize {
        self.state.body_count()
    }

    /// Full state view (time, bodies, and the diagnostic totals).
    pub fn state(&self) -> &SystemState {
        &self.state
    }
}

fn validate_body(index: usize, body: &Body) -> Result<(), SimulationError> {
    if !body.mass.is_finite() || body.mass <= 0.0 {
        return Err(SimulationError::InvalidMass {
            index,
            mass: body.mass,
        });
    }
    if !body.density.is_finite() || body.density <= 0.0 {
        return Err(SimulationError::InvalidDensity {
            index,
            density: body.density,
        });
    }
    let finite_position = body.position.x.is_finite() && body.position.y.is_finite();
    let finite_velocity = body.velocity.x.is_finite() && body.velocity.y.is_finite();
    if !finite_position || !finite_velocity {
        return Err(SimulationError::NonFiniteState { index });
    }
    Ok(())
}
