//! Domain models for the checkout simulator

pub mod customer;
pub mod event;
pub mod line;
pub mod store;

// Re-exports
pub use customer::{Customer, Item};
pub use event::Event;
pub use line::{CheckoutLine, LineKind, EXPRESS_LIMIT};
pub use store::{EnterOutcome, Store, StoreError};
