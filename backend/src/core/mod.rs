//! Core infrastructure for the simulation

pub mod queue;

// Re-exports
pub use queue::{EmptyQueueError, EventQueue};
