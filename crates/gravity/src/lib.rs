//! 2D Newtonian N-body engine
//!
//! Simulates massive bodies under mutual gravity: direct O(n²) pairwise
//! forces, explicit Euler integration (velocity pass first, then a
//! position pass with the updated velocities), and merge-on-collision
//! resolution. The engine owns its body collection exclusively;
//! rendering, input handling, and initial-condition generation are
//! external collaborators that construct it and read it back.

pub mod body;
pub mod collisions;
pub mod forces;
pub mod integrator;
pub mod simulation;
pub mod state;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod simulation_test;

pub use body::{Body, Color};
pub use simulation::{Simulation, SimulationError};
pub use state::SystemState;
