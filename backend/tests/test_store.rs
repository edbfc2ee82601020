//! Tests for the Store: line layout, the admission algorithm and dispatch

use checkout_simulator_core_rs::{
    Customer, EnterOutcome, Item, LineKind, Store, StoreConfig, StoreError,
};

fn store(regular: usize, express: usize, self_serve: usize, capacity: usize) -> Store {
    Store::new(&StoreConfig {
        regular_count: regular,
        express_count: express,
        self_serve_count: self_serve,
        line_capacity: capacity,
    })
}

fn customer(name: &str, item_secs: &[u64]) -> Customer {
    let items = item_secs
        .iter()
        .enumerate()
        .map(|(i, &secs)| Item::new(format!("item_{}", i), secs))
        .collect();
    Customer::new(name, items)
}

/// Join or panic; returns the line number
fn join(store: &mut Store, customer: Customer) -> usize {
    match store.enter_line(customer) {
        EnterOutcome::Joined(line_number) => line_number,
        EnterOutcome::Rejected(customer) => {
            panic!("customer {} unexpectedly rejected", customer.name())
        }
    }
}

#[test]
fn test_lines_are_grouped_by_variant_in_declared_order() {
    let store = store(2, 1, 1, 3);
    assert_eq!(store.num_lines(), 4);
    assert_eq!(store.line(0).unwrap().kind(), LineKind::Regular);
    assert_eq!(store.line(1).unwrap().kind(), LineKind::Regular);
    assert_eq!(store.line(2).unwrap().kind(), LineKind::Express);
    assert_eq!(store.line(3).unwrap().kind(), LineKind::SelfServe);
}

#[test]
fn test_enter_line_prefers_fewest_waiting() {
    let mut store = store(2, 0, 0, 3);
    assert_eq!(join(&mut store, customer("a", &[1])), 0);
    // Line 0 now has one customer; line 1 is empty.
    assert_eq!(join(&mut store, customer("b", &[1])), 1);
}

#[test]
fn test_enter_line_breaks_ties_by_lowest_index() {
    let mut store = store(3, 0, 0, 3);
    assert_eq!(join(&mut store, customer("a", &[1])), 0);
    assert_eq!(join(&mut store, customer("b", &[1])), 1);
    assert_eq!(join(&mut store, customer("c", &[1])), 2);
    // All equal again: back to the lowest index.
    assert_eq!(join(&mut store, customer("d", &[1])), 0);
}

#[test]
fn test_enter_line_skips_ineligible_express() {
    let mut store = store(1, 1, 0, 5);
    // The express line is emptier, but seven items disqualify it.
    join(&mut store, customer("early", &[1]));
    assert_eq!(join(&mut store, customer("bulk", &[1; 7])), 0);
    // A light customer still gets the emptier express line.
    assert_eq!(join(&mut store, customer("light", &[1])), 1);
}

#[test]
fn test_enter_line_rejection_returns_customer_unchanged() {
    let mut store = store(1, 0, 0, 1);
    join(&mut store, customer("a", &[1]));

    match store.enter_line(customer("b", &[4, 5])) {
        EnterOutcome::Rejected(returned) => {
            assert_eq!(returned.name(), "b");
            assert_eq!(returned.num_items(), 2);
        }
        EnterOutcome::Joined(line_number) => {
            panic!("joined line {} of a full store", line_number)
        }
    }
    // No mutation on rejection.
    assert_eq!(store.line(0).unwrap().len(), 1);
}

#[test]
fn test_closed_lines_never_selected() {
    let mut store = store(2, 0, 0, 2);
    store.close_line(0).unwrap();
    assert_eq!(join(&mut store, customer("a", &[1])), 1);
}

#[test]
fn test_line_is_ready_after_first_join() {
    let mut store = store(1, 0, 0, 2);
    assert!(!store.line_is_ready(0).unwrap());

    join(&mut store, customer("a", &[1]));
    assert!(store.line_is_ready(0).unwrap());

    join(&mut store, customer("b", &[1]));
    assert!(!store.line_is_ready(0).unwrap());
}

#[test]
fn test_start_checkout_uses_front_customer() {
    let mut store = store(0, 0, 1, 2);
    join(&mut store, customer("front", &[2, 3]));
    join(&mut store, customer("back", &[100]));
    // Self-serve doubles the front customer's five seconds.
    assert_eq!(store.start_checkout(0).unwrap(), 10);
}

#[test]
fn test_start_checkout_on_empty_line_is_an_error() {
    let store = store(1, 0, 0, 1);
    assert_eq!(
        store.start_checkout(0),
        Err(StoreError::LineEmpty { line_number: 0 })
    );
}

#[test]
fn test_complete_checkout_reports_remaining() {
    let mut store = store(1, 0, 0, 2);
    join(&mut store, customer("a", &[1]));
    join(&mut store, customer("b", &[1]));

    assert!(store.complete_checkout(0).unwrap());
    assert!(!store.complete_checkout(0).unwrap());
}

#[test]
fn test_close_line_drains_most_recent_first() {
    let mut store = store(1, 0, 0, 4);
    for name in ["serving", "first", "second", "third"] {
        join(&mut store, customer(name, &[1]));
    }

    let moved = store.close_line(0).unwrap();
    let names: Vec<&str> = moved.iter().map(Customer::name).collect();
    assert_eq!(names, ["third", "first", "second"]);
    assert_eq!(store.first_in_line(0).unwrap().unwrap().name(), "serving");
}

#[test]
fn test_first_in_line_of_empty_line_is_none() {
    let store = store(1, 0, 0, 1);
    assert_eq!(store.first_in_line(0).unwrap(), None);
}

#[test]
fn test_out_of_range_line_number_is_an_error() {
    let mut store = store(1, 1, 0, 2);

    assert_eq!(
        store.line_is_ready(2),
        Err(StoreError::InvalidLineIndex {
            line_number: 2,
            num_lines: 2,
        })
    );
    assert!(matches!(
        store.start_checkout(2),
        Err(StoreError::InvalidLineIndex { line_number: 2, .. })
    ));
    assert!(matches!(
        store.complete_checkout(2),
        Err(StoreError::InvalidLineIndex { line_number: 2, .. })
    ));
    assert!(matches!(
        store.close_line(2),
        Err(StoreError::InvalidLineIndex { line_number: 2, .. })
    ));
    assert!(matches!(
        store.first_in_line(2),
        Err(StoreError::InvalidLineIndex { line_number: 2, .. })
    ));
}
