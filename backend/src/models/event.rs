//! Simulation events
//!
//! The [`Event`] enum captures everything that can happen at a simulated
//! instant:
//!
//! - **CustomerArrival**: a customer shows up (or re-attempts entry after a
//!   rejection or a line closure) and tries to join a line
//! - **CheckoutCompleted**: the customer at the front of a line finishes
//!   checking out
//! - **CloseLine**: a line stops admitting customers; everyone behind the
//!   currently-served customer is redirected
//!
//! Events carry a timestamp for temporal ordering plus a type priority used
//! to break same-time ties deterministically (see
//! [`crate::core::queue::EventQueue`]).

use crate::models::customer::Customer;

/// A scheduled simulation occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A customer attempts to join a checkout line
    CustomerArrival {
        timestamp: u64,
        customer: Customer,
    },

    /// The front customer of a line finishes their checkout
    CheckoutCompleted {
        timestamp: u64,
        line_number: usize,
    },

    /// A line closes to new customers
    CloseLine {
        timestamp: u64,
        line_number: usize,
    },
}

impl Event {
    /// The simulated time at which this event occurs
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::CustomerArrival { timestamp, .. } => *timestamp,
            Event::CheckoutCompleted { timestamp, .. } => *timestamp,
            Event::CloseLine { timestamp, .. } => *timestamp,
        }
    }

    /// Tie-break rank among same-time events (lower runs first)
    ///
    /// Completions run before closures run before arrivals, so a slot freed
    /// at tick `t` is visible to every tick-`t` admission attempt and a
    /// closing line redistributes before new arrivals compete for lines.
    pub fn type_priority(&self) -> u8 {
        match self {
            Event::CheckoutCompleted { .. } => 0,
            Event::CloseLine { .. } => 1,
            Event::CustomerArrival { .. } => 2,
        }
    }

    /// A short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::CustomerArrival { .. } => "CustomerArrival",
            Event::CheckoutCompleted { .. } => "CheckoutCompleted",
            Event::CloseLine { .. } => "CloseLine",
        }
    }
}
