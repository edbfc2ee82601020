//! Simulation engine - main event loop
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{Simulation, SimulationError, SimulationStats};
