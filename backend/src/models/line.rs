//! Checkout lines and their three service variants
//!
//! A [`CheckoutLine`] is a capacity-bounded FIFO queue of waiting customers
//! with an open/closed flag. The three variants differ only in admission
//! eligibility and the service-time formula, so they are modelled as a closed
//! tagged set ([`LineKind`]) on a single struct rather than as an inheritance
//! hierarchy:
//!
//! - **Regular**: no extra eligibility, service time = sum of item seconds
//! - **Express**: only customers with fewer than [`EXPRESS_LIMIT`] items,
//!   service time = sum of item seconds
//! - **SelfServe**: no extra eligibility, service time = double the sum
//!   (customers scan their own items)
//!
//! # Example
//!
//! ```rust
//! use checkout_simulator_core_rs::{CheckoutLine, Customer, Item, LineKind};
//!
//! let mut line = CheckoutLine::new(LineKind::SelfServe, 2);
//! let accepted = line.accept(Customer::new("Bo", vec![Item::new("milk", 5)]));
//! assert!(accepted.is_ok());
//! assert_eq!(line.service_time(), Some(10));
//! ```

use crate::models::customer::Customer;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum item count (exclusive) admitted to an express line
pub const EXPRESS_LIMIT: usize = 7;

/// The three checkout line variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Standard cashier line
    Regular,
    /// Cashier line restricted to customers with few items
    Express,
    /// Customer-operated line; scanning takes twice as long
    SelfServe,
}

impl LineKind {
    /// Variant-specific eligibility beyond capacity and open-state
    fn is_eligible(&self, customer: &Customer) -> bool {
        match self {
            LineKind::Regular | LineKind::SelfServe => true,
            LineKind::Express => customer.num_items() < EXPRESS_LIMIT,
        }
    }

    /// Service time for a customer at a line of this kind
    fn service_time(&self, customer: &Customer) -> u64 {
        match self {
            LineKind::Regular | LineKind::Express => customer.item_time(),
            LineKind::SelfServe => 2 * customer.item_time(),
        }
    }
}

/// A capacity-bounded FIFO checkout line
///
/// Invariants:
/// - `len() <= capacity` at all times
/// - the front customer is the next (or currently) served
/// - a closed line admits nobody but keeps serving its front customer
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    kind: LineKind,
    capacity: usize,
    is_open: bool,
    queue: VecDeque<Customer>,
}

impl CheckoutLine {
    /// Create an open, empty line
    ///
    /// `capacity` must be at least 1; this is validated at configuration
    /// load, before any line is constructed.
    pub fn new(kind: LineKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            is_open: true,
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// This line's variant
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Maximum number of customers this line may hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// False once the line has been closed
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of customers currently in this line
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True iff nobody is in this line
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The customer at the front of the line, if any
    pub fn first(&self) -> Option<&Customer> {
        self.queue.front()
    }

    /// True iff this line can admit `customer`
    ///
    /// Requires the line to be open, to have spare capacity, and the
    /// variant-specific eligibility to hold.
    pub fn can_accept(&self, customer: &Customer) -> bool {
        self.is_open && self.queue.len() < self.capacity && self.kind.is_eligible(customer)
    }

    /// Admit `customer` at the back of the line
    ///
    /// The single mutation path for admission: either the customer is
    /// appended, or the line is left untouched and the customer is handed
    /// back via `Err`.
    pub fn accept(&mut self, customer: Customer) -> Result<(), Customer> {
        if self.can_accept(&customer) {
            self.queue.push_back(customer);
            Ok(())
        } else {
            Err(customer)
        }
    }

    /// True iff exactly one customer is waiting
    ///
    /// The transition from empty to a single customer is what triggers
    /// scheduling that customer's checkout.
    pub fn is_ready(&self) -> bool {
        self.queue.len() == 1
    }

    /// Seconds to check out the front customer, or `None` if the line is empty
    pub fn service_time(&self) -> Option<u64> {
        self.queue.front().map(|c| self.kind.service_time(c))
    }

    /// Remove the front customer (checkout finished)
    ///
    /// Returns whether customers remain in the line.
    pub fn complete_checkout(&mut self) -> bool {
        self.queue.pop_front();
        !self.queue.is_empty()
    }

    /// Close this line and drain the customers who must move elsewhere
    ///
    /// The front customer is mid-checkout and stays put; the line only closes
    /// to new joiners. The drained customers are returned with the most
    /// recently arrived first and the rest in their original relative order,
    /// which is the order they should re-enter line selection. Closing an
    /// already-closed line returns nothing.
    pub fn close(&mut self) -> Vec<Customer> {
        if !self.is_open {
            return Vec::new();
        }
        self.is_open = false;

        // Keep the front customer; everyone behind them moves.
        let mut moved: Vec<Customer> = self.queue.split_off(1.min(self.queue.len())).into();
        if let Some(last) = moved.pop() {
            moved.insert(0, last);
        }
        moved
    }
}
