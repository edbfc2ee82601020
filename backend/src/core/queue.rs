//! Time-ordered event queue with deterministic tie-breaking
//!
//! The simulation is driven by pulling the next-due event off this queue.
//! Events are ordered by the total key `(timestamp, type_priority,
//! insertion_sequence)`:
//!
//! - **timestamp**: earlier events first
//! - **type_priority**: same-time checkout completions run before line
//!   closures, which run before arrivals, so capacity freed at tick `t` is
//!   visible to every tick-`t` arrival
//! - **insertion_sequence**: equal time and priority pops in FIFO insertion
//!   order
//!
//! The tie-break is part of the contract, not an implementation detail:
//! reproducible execution order for simultaneous events is what makes the
//! whole simulation replayable.
//!
//! # Example
//!
//! ```rust
//! use checkout_simulator_core_rs::{Customer, Event, EventQueue};
//!
//! let mut queue = EventQueue::new();
//! queue.push(Event::CustomerArrival {
//!     timestamp: 10,
//!     customer: Customer::new("Tamara", vec![]),
//! });
//! queue.push(Event::CheckoutCompleted { timestamp: 5, line_number: 0 });
//!
//! let next = queue.pop().unwrap();
//! assert_eq!(next.timestamp(), 5);
//! ```

use crate::models::event::Event;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use thiserror::Error;

/// Error popping from an empty queue
///
/// Always a caller bug: the simulation loop checks `is_empty()` before
/// every pop, so this never occurs during normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot pop from an empty event queue")]
pub struct EmptyQueueError;

/// An event tagged with its ordering key.
///
/// `seq` is assigned at push time from a monotone counter, making the
/// comparison a total order even for identical events.
#[derive(Debug, Clone)]
struct ScheduledEvent {
    timestamp: u64,
    priority: u8,
    seq: u64,
    event: Event,
}

impl ScheduledEvent {
    fn key(&self) -> (u64, u8, u64) {
        (self.timestamp, self.priority, self.seq)
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Priority queue of pending simulation events
///
/// `push` and `pop` are `O(log n)`; the earliest-ordered event pops first.
///
/// # Example
///
/// ```rust
/// use checkout_simulator_core_rs::{Event, EventQueue};
///
/// let mut queue = EventQueue::new();
/// assert!(queue.is_empty());
///
/// queue.push(Event::CheckoutCompleted { timestamp: 3, line_number: 1 });
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    /// Min-heap via `Reverse`: smallest ordering key on top
    heap: BinaryHeap<Reverse<ScheduledEvent>>,
    /// Next insertion sequence number
    next_seq: u64,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule an event
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledEvent {
            timestamp: event.timestamp(),
            priority: event.type_priority(),
            seq,
            event,
        }));
    }

    /// Remove and return the earliest-ordered event
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty. Callers must check
    /// [`EventQueue::is_empty`] first or handle the error.
    pub fn pop(&mut self) -> Result<Event, EmptyQueueError> {
        match self.heap.pop() {
            Some(Reverse(scheduled)) => Ok(scheduled.event),
            None => Err(EmptyQueueError),
        }
    }

    /// True iff no events are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
