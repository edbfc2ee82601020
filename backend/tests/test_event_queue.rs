//! Tests for the event queue ordering contract
//!
//! The queue's total order is (timestamp, type priority, insertion order).
//! Reproducible ordering of simultaneous events is a correctness
//! requirement, not a detail, so it gets its own suite.

use checkout_simulator_core_rs::{Customer, EmptyQueueError, Event, EventQueue};

fn arrival(timestamp: u64, name: &str) -> Event {
    Event::CustomerArrival {
        timestamp,
        customer: Customer::new(name, vec![]),
    }
}

#[test]
fn test_pop_returns_earliest_timestamp() {
    let mut queue = EventQueue::new();
    queue.push(arrival(10, "Tamara"));
    queue.push(arrival(5, "Jugo"));
    queue.push(arrival(7, "Mona"));

    assert_eq!(queue.pop().unwrap().timestamp(), 5);
    assert_eq!(queue.pop().unwrap().timestamp(), 7);
    assert_eq!(queue.pop().unwrap().timestamp(), 10);
    assert!(queue.is_empty());
}

#[test]
fn test_same_time_arrivals_pop_in_insertion_order() {
    let mut queue = EventQueue::new();
    queue.push(arrival(5, "first"));
    queue.push(arrival(5, "second"));
    queue.push(arrival(5, "third"));

    for expected in ["first", "second", "third"] {
        match queue.pop().unwrap() {
            Event::CustomerArrival { customer, .. } => assert_eq!(customer.name(), expected),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}

#[test]
fn test_type_priority_orders_same_time_events() {
    let mut queue = EventQueue::new();
    // Push in reverse priority order to prove insertion order does not win.
    queue.push(arrival(5, "Jugo"));
    queue.push(Event::CloseLine {
        timestamp: 5,
        line_number: 0,
    });
    queue.push(Event::CheckoutCompleted {
        timestamp: 5,
        line_number: 0,
    });

    assert_eq!(queue.pop().unwrap().event_type(), "CheckoutCompleted");
    assert_eq!(queue.pop().unwrap().event_type(), "CloseLine");
    assert_eq!(queue.pop().unwrap().event_type(), "CustomerArrival");
}

#[test]
fn test_timestamp_beats_type_priority() {
    let mut queue = EventQueue::new();
    queue.push(Event::CheckoutCompleted {
        timestamp: 9,
        line_number: 0,
    });
    queue.push(arrival(3, "Jugo"));

    assert_eq!(queue.pop().unwrap().timestamp(), 3);
}

#[test]
fn test_pop_empty_queue_is_an_error() {
    let mut queue = EventQueue::new();
    assert_eq!(queue.pop(), Err(EmptyQueueError));

    queue.push(arrival(1, "Jugo"));
    queue.pop().unwrap();
    assert_eq!(queue.pop(), Err(EmptyQueueError));
}

#[test]
fn test_len_tracks_pushes_and_pops() {
    let mut queue = EventQueue::new();
    assert_eq!(queue.len(), 0);

    queue.push(arrival(1, "a"));
    queue.push(arrival(2, "b"));
    assert_eq!(queue.len(), 2);

    queue.pop().unwrap();
    assert_eq!(queue.len(), 1);
    assert!(!queue.is_empty());
}
