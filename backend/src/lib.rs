//! Checkout Simulator Core - Rust Engine
//!
//! Deterministic discrete-event simulation of a retail checkout area.
//! Customers arrive carrying items, choose among heterogeneous checkout
//! lines under capacity and eligibility constraints, and are served to
//! completion while the simulation accumulates throughput statistics.
//!
//! # Architecture
//!
//! - **core**: Event queue (time-ordered with deterministic tie-breaking)
//! - **models**: Domain types (Item, Customer, CheckoutLine, Store, Event)
//! - **events**: Event-file parsing (textual event log -> typed events)
//! - **config**: Store configuration descriptor
//! - **simulation**: Main event loop and statistics
//!
//! # Critical Invariants
//!
//! 1. Simulated time is a monotonically non-decreasing integer
//! 2. A line never holds more customers than its capacity
//! 3. A customer is in at most one line at a time (enforced by ownership)
//! 4. Identical config + event input produces bit-identical statistics

// Module declarations
pub mod config;
pub mod core;
pub mod events;
pub mod models;
pub mod simulation;

// Re-exports for convenience
pub use crate::config::{ConfigError, StoreConfig};
pub use crate::core::queue::{EmptyQueueError, EventQueue};
pub use crate::events::parser::{create_event_list, ParseError};
pub use crate::models::{
    customer::{Customer, Item},
    event::Event,
    line::{CheckoutLine, LineKind, EXPRESS_LIMIT},
    store::{EnterOutcome, Store, StoreError},
};
pub use crate::simulation::{Simulation, SimulationError, SimulationStats};
