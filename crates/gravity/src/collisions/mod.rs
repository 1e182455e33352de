//! Collision detection and resolution for the body system
//!
//! Detection sweeps every pair for overlap; resolution merges each
//! overlapping pair into a single body that conserves mass, momentum,
//! and volume.

pub mod detection;
pub mod resolution;


pub use detection::{check_pair, detect_collisions, CollisionEvent};
pub use resolution::{merge_bodies, resolve_collisions};
