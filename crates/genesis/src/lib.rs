//! Initial conditions for the gravity engine
//!
//! Two ways to produce a body collection: a fixed nine-body solar preset
//! and a seeded random synthesizer. Both hand back a plain `Vec<Body>`
//! that `gravity::Simulation::new` accepts.

pub mod presets;
pub mod random;

// Re-export main types at crate root
pub use presets::{solar_system, SOLAR_TIME_STEP};
pub use random::{random_system, SynthesisRanges};
