//! Simulation engine
//!
//! The engine owns the event queue and the store outright; there are no
//! process-wide singletons, so independent simulations can run side by side
//! and tests can construct engines freely.
//!
//! # Event loop
//!
//! ```text
//! push all initial events
//! while the queue is non-empty:
//!     pop the next-due event (time, then type priority, then FIFO)
//!     dispatch it:
//!         CustomerArrival   -> try to join a line; retry at t+1 if rejected;
//!                              schedule the checkout if the line became ready
//!         CheckoutCompleted -> record statistics, remove the front customer,
//!                              schedule the next checkout if anyone remains
//!         CloseLine         -> close the line, re-inject the drained
//!                              customers as arrivals at the same tick
//! return the accumulated statistics
//! ```
//!
//! One event is fully processed (all its store mutations and every event it
//! schedules) before the next is popped. Nothing blocks mid-loop, so the run
//! is purely sequential and deterministic.
//!
//! # Example
//!
//! ```rust
//! use checkout_simulator_core_rs::{create_event_list, Simulation, StoreConfig};
//!
//! let config = StoreConfig {
//!     regular_count: 1,
//!     express_count: 0,
//!     self_serve_count: 0,
//!     line_capacity: 1,
//! };
//! let events = create_event_list(
//!     "10 Arrive Tamara Bananas 7\n\
//!      5 Arrive Jugo Bread 3 Cheese 3\n",
//! )
//! .unwrap();
//!
//! let stats = Simulation::new(&config).run(events).unwrap();
//! assert_eq!(stats.num_customers, 2);
//! assert_eq!(stats.total_time, 18);
//! assert_eq!(stats.max_wait, 8);
//! ```

use crate::config::StoreConfig;
use crate::core::queue::{EmptyQueueError, EventQueue};
use crate::models::customer::Customer;
use crate::models::event::Event;
use crate::models::store::{EnterOutcome, Store, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors during a simulation run
///
/// Every variant indicates an engine bug, never an expected outcome: a
/// customer finding no open line is normal control flow (retry next tick),
/// not an error.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The loop popped an empty queue
    #[error("event queue error: {0}")]
    Queue(#[from] EmptyQueueError),

    /// A dispatched event addressed the store incorrectly
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Aggregate statistics of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Customers who completed checkout
    pub num_customers: usize,
    /// Timestamp of the last processed event, i.e. when the simulation ended
    pub total_time: u64,
    /// Longest span from a customer's arrival to their checkout completing,
    /// or -1 if no customer ever completed checkout
    pub max_wait: i64,
}

/// A checkout-area simulation
///
/// Create one per run with [`Simulation::new`], then feed it the initial
/// events with [`Simulation::run`].
#[derive(Debug)]
pub struct Simulation {
    events: EventQueue,
    store: Store,
    num_customers: usize,
    max_wait: Option<u64>,
    last_event_time: u64,
}

impl Simulation {
    /// Create a simulation over a store built from `config`
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            events: EventQueue::new(),
            store: Store::new(config),
            num_customers: 0,
            max_wait: None,
            last_event_time: 0,
        }
    }

    /// Run the simulation to exhaustion of its events
    ///
    /// Records may arrive in any time order. Termination requires the input
    /// to be finite and satisfiable: an arrival that no line can ever accept
    /// again (every line closed) would retry forever, mirroring the event
    /// semantics this engine models.
    ///
    /// # Errors
    ///
    /// Any [`SimulationError`] indicates a bug in event dispatch, not a
    /// property of the input.
    pub fn run(&mut self, initial_events: Vec<Event>) -> Result<SimulationStats, SimulationError> {
        for event in initial_events {
            self.events.push(event);
        }

        while !self.events.is_empty() {
            let event = self.events.pop()?;
            self.last_event_time = event.timestamp();
            match event {
                Event::CustomerArrival {
                    timestamp,
                    customer,
                } => self.handle_arrival(timestamp, customer)?,
                Event::CheckoutCompleted {
                    timestamp,
                    line_number,
                } => self.handle_checkout_completed(timestamp, line_number)?,
                Event::CloseLine {
                    timestamp,
                    line_number,
                } => self.handle_close_line(timestamp, line_number)?,
            }
        }

        Ok(self.stats())
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            num_customers: self.num_customers,
            total_time: self.last_event_time,
            max_wait: self.max_wait.map_or(-1, |wait| wait as i64),
        }
    }

    /// A customer attempts to join a line
    ///
    /// The arrival time is stamped at the customer's first arrival event,
    /// before admission is attempted, so waiting through rejections and
    /// redirections counts against their wait.
    fn handle_arrival(
        &mut self,
        timestamp: u64,
        mut customer: Customer,
    ) -> Result<(), SimulationError> {
        customer.record_arrival(timestamp);

        match self.store.enter_line(customer) {
            EnterOutcome::Rejected(customer) => {
                // Never drop a customer: re-attempt one simulated second later.
                self.events.push(Event::CustomerArrival {
                    timestamp: timestamp + 1,
                    customer,
                });
            }
            EnterOutcome::Joined(line_number) => {
                if self.store.line_is_ready(line_number)? {
                    self.schedule_checkout(timestamp, line_number)?;
                }
            }
        }
        Ok(())
    }

    /// The front customer of a line finishes checking out at `timestamp`
    fn handle_checkout_completed(
        &mut self,
        timestamp: u64,
        line_number: usize,
    ) -> Result<(), SimulationError> {
        // Read the departing customer's arrival time before removal.
        let arrival_time = self
            .store
            .first_in_line(line_number)?
            .ok_or(StoreError::LineEmpty { line_number })?
            .arrival_time();

        self.num_customers += 1;
        if let Some(arrival_time) = arrival_time {
            let wait = timestamp - arrival_time;
            self.max_wait = Some(self.max_wait.map_or(wait, |max| max.max(wait)));
        }

        if self.store.complete_checkout(line_number)? {
            self.schedule_checkout(timestamp, line_number)?;
        }
        Ok(())
    }

    /// A line closes; everyone behind the served customer is redirected
    ///
    /// Re-injection happens at the same tick (the customers are actively
    /// being redirected, not rejected), in the order the line returned them:
    /// most recently arrived first, so insertion order preserves the policy
    /// through the queue's FIFO tie-break.
    fn handle_close_line(
        &mut self,
        timestamp: u64,
        line_number: usize,
    ) -> Result<(), SimulationError> {
        for customer in self.store.close_line(line_number)? {
            self.events.push(Event::CustomerArrival {
                timestamp,
                customer,
            });
        }
        Ok(())
    }

    /// Schedule the completion of the checkout now starting on `line_number`
    fn schedule_checkout(
        &mut self,
        timestamp: u64,
        line_number: usize,
    ) -> Result<(), SimulationError> {
        let service_time = self.store.start_checkout(line_number)?;
        self.events.push(Event::CheckoutCompleted {
            timestamp: timestamp + service_time,
            line_number,
        });
        Ok(())
    }
}
