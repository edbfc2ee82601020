//! The store: line collection and the admission algorithm
//!
//! A [`Store`] owns its checkout lines in a fixed positional order: regular
//! lines first, then express, then self-serve. The position within that
//! concatenation is the externally visible line number; it never changes
//! during a run (closed lines persist as closed rather than being removed).
//!
//! Admission ([`Store::enter_line`]) scans all lines that can accept the
//! customer and picks the one with the fewest waiting customers, breaking
//! ties by lowest line number. A customer nobody can accept is handed back
//! untouched; the simulation engine retries them one tick later rather than
//! dropping them.
//!
//! # Example
//!
//! ```rust
//! use checkout_simulator_core_rs::{Customer, EnterOutcome, Item, Store, StoreConfig};
//!
//! let store = &mut Store::new(&StoreConfig {
//!     regular_count: 1,
//!     express_count: 1,
//!     self_serve_count: 0,
//!     line_capacity: 2,
//! });
//!
//! let customer = Customer::new("Jugo", vec![Item::new("bread", 3)]);
//! match store.enter_line(customer) {
//!     EnterOutcome::Joined(line_number) => assert_eq!(line_number, 0),
//!     EnterOutcome::Rejected(_) => unreachable!("two open empty lines"),
//! }
//! ```

use crate::config::StoreConfig;
use crate::models::customer::Customer;
use crate::models::line::{CheckoutLine, LineKind};
use thiserror::Error;

/// Errors from store operations
///
/// Both variants indicate an engine/dispatch bug, not a recoverable domain
/// outcome: the engine only ever addresses lines it was told about by its own
/// scheduled events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Line number out of range
    #[error("invalid line number {line_number}: store has {num_lines} lines")]
    InvalidLineIndex { line_number: usize, num_lines: usize },

    /// Checkout requested on a line with nobody in it
    #[error("line {line_number} is empty: no customer to check out")]
    LineEmpty { line_number: usize },
}

/// Result of asking the store to place a customer
///
/// The frequent, expected "no line available" branch is data, not an error.
#[derive(Debug)]
pub enum EnterOutcome {
    /// Customer joined the line with this number
    Joined(usize),
    /// No line can currently accept the customer; here they are, unchanged
    Rejected(Customer),
}

/// A store with an ordered collection of checkout lines
#[derive(Debug, Clone)]
pub struct Store {
    /// Regular lines, then express lines, then self-serve lines
    lines: Vec<CheckoutLine>,
}

impl Store {
    /// Build the store's lines from a validated configuration
    pub fn new(config: &StoreConfig) -> Self {
        let mut lines = Vec::with_capacity(config.num_lines());
        for _ in 0..config.regular_count {
            lines.push(CheckoutLine::new(LineKind::Regular, config.line_capacity));
        }
        for _ in 0..config.express_count {
            lines.push(CheckoutLine::new(LineKind::Express, config.line_capacity));
        }
        for _ in 0..config.self_serve_count {
            lines.push(CheckoutLine::new(LineKind::SelfServe, config.line_capacity));
        }
        Self { lines }
    }

    /// Number of lines in the store
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Borrow a line by number
    pub fn line(&self, line_number: usize) -> Result<&CheckoutLine, StoreError> {
        self.lines
            .get(line_number)
            .ok_or(StoreError::InvalidLineIndex {
                line_number,
                num_lines: self.lines.len(),
            })
    }

    fn line_mut(&mut self, line_number: usize) -> Result<&mut CheckoutLine, StoreError> {
        let num_lines = self.lines.len();
        self.lines
            .get_mut(line_number)
            .ok_or(StoreError::InvalidLineIndex {
                line_number,
                num_lines,
            })
    }

    /// Pick a line for `customer` to join
    ///
    /// Among all lines that can accept the customer, the one with the fewest
    /// waiting customers wins; ties go to the lowest line number. On
    /// rejection nothing is mutated and the customer is returned to the
    /// caller for rescheduling.
    pub fn enter_line(&mut self, customer: Customer) -> EnterOutcome {
        let chosen = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.can_accept(&customer))
            .min_by_key(|(index, line)| (line.len(), *index))
            .map(|(index, _)| index);

        match chosen {
            Some(index) => match self.lines[index].accept(customer) {
                Ok(()) => EnterOutcome::Joined(index),
                // can_accept held above; accept cannot refuse
                Err(customer) => EnterOutcome::Rejected(customer),
            },
            None => EnterOutcome::Rejected(customer),
        }
    }

    /// True iff the line is ready to start a checkout (exactly one customer)
    pub fn line_is_ready(&self, line_number: usize) -> Result<bool, StoreError> {
        Ok(self.line(line_number)?.is_ready())
    }

    /// Seconds it will take to check out the front customer of the line
    pub fn start_checkout(&self, line_number: usize) -> Result<u64, StoreError> {
        self.line(line_number)?
            .service_time()
            .ok_or(StoreError::LineEmpty { line_number })
    }

    /// Finish the front customer's checkout
    ///
    /// Returns whether customers remain in the line.
    pub fn complete_checkout(&mut self, line_number: usize) -> Result<bool, StoreError> {
        Ok(self.line_mut(line_number)?.complete_checkout())
    }

    /// Close a line and drain the customers who must rejoin elsewhere
    ///
    /// See [`CheckoutLine::close`] for the redistribution order.
    pub fn close_line(&mut self, line_number: usize) -> Result<Vec<Customer>, StoreError> {
        Ok(self.line_mut(line_number)?.close())
    }

    /// The first customer in a line, or `None` if the line is empty
    pub fn first_in_line(&self, line_number: usize) -> Result<Option<&Customer>, StoreError> {
        Ok(self.line(line_number)?.first())
    }
}
