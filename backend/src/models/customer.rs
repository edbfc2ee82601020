//! Customers and the items they carry
//!
//! An [`Item`] is an immutable `(name, service seconds)` value. A
//! [`Customer`] carries an ordered list of items and records the simulated
//! time of their first arrival event. The total time to check a customer out
//! is the sum of their items' service seconds (doubled on self-serve lines,
//! see [`crate::models::line`]).
//!
//! # Example
//!
//! ```rust
//! use checkout_simulator_core_rs::{Customer, Item};
//!
//! let customer = Customer::new("Bo", vec![Item::new("bananas", 7), Item::new("cheese", 3)]);
//! assert_eq!(customer.num_items(), 2);
//! assert_eq!(customer.item_time(), 10);
//! assert_eq!(customer.arrival_time(), None);
//! ```

use serde::{Deserialize, Serialize};

/// An item to be checked out
///
/// Immutable value: a name and the number of seconds it takes to check out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    time: u64,
}

impl Item {
    /// Create a new item taking `time` seconds to check out
    pub fn new(name: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }

    /// The item's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds it takes to check out this item
    pub fn time(&self) -> u64 {
        self.time
    }
}

/// A checkout customer
///
/// `name` is the unique identifier within a simulation. `arrival_time` is
/// `None` until the customer's first arrival event is processed; it is never
/// overwritten afterwards, so a customer redirected from a closed line keeps
/// waiting "on the clock" from their original arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    arrival_time: Option<u64>,
    items: Vec<Item>,
}

impl Customer {
    /// Create a customer who has not yet arrived
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            items,
        }
    }

    /// The customer's name (unique per simulation)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time of the customer's first arrival event, if they have arrived
    pub fn arrival_time(&self) -> Option<u64> {
        self.arrival_time
    }

    /// Record the first arrival time; later calls are ignored
    pub fn record_arrival(&mut self, timestamp: u64) {
        if self.arrival_time.is_none() {
            self.arrival_time = Some(timestamp);
        }
    }

    /// Number of items this customer has
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Total seconds it takes to check out all of this customer's items
    pub fn item_time(&self) -> u64 {
        self.items.iter().map(Item::time).sum()
    }

    /// The customer's items, in checkout order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
