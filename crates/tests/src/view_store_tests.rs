use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use shared_types::{View, ViewStore};

use crate::common::recorded_store;

#[test]
fn test_set_same_value_twice_notifies_once() {
    let (store, seen) = recorded_store(View::User);

    assert!(store.set(View::Admin));
    assert!(!store.set(View::Admin));

    assert_eq!(*seen.borrow(), vec![View::Admin]);
    assert_eq!(store.get(), View::Admin);
}

#[test]
fn test_setting_current_value_notifies_nobody() {
    let (store, seen) = recorded_store(View::User);
    assert!(!store.set(View::User));
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_toggle_round_trips() {
    let (store, seen) = recorded_store(View::User);
    assert_eq!(store.toggle(), View::Admin);
    assert_eq!(store.toggle(), View::User);
    assert_eq!(*seen.borrow(), vec![View::Admin, View::User]);
}

#[test]
fn test_every_observer_sees_value_before_set_returns() {
    let store = ViewStore::new(View::User);
    let first = Rc::new(Cell::new(View::User));
    let second = Rc::new(Cell::new(View::User));
    let (a, b) = (Rc::clone(&first), Rc::clone(&second));
    store.subscribe(move |v| a.set(v));
    store.subscribe(move |v| b.set(v));

    store.set(View::Admin);

    assert_eq!(first.get(), View::Admin);
    assert_eq!(second.get(), View::Admin);
}

#[test]
fn test_observer_may_read_the_store() {
    let store = ViewStore::new(View::User);
    let observed = Rc::new(Cell::new(View::User));
    let (handle, sink) = (store.clone(), Rc::clone(&observed));
    store.subscribe(move |_| sink.set(handle.get()));

    store.set(View::Admin);

    assert_eq!(observed.get(), View::Admin);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let store = ViewStore::new(View::User);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = store.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
    store.set(View::Admin);

    assert_eq!(calls.get(), 0);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn test_sessions_are_isolated() {
    let first = ViewStore::new(View::User);
    let second = ViewStore::new(View::User);
    let shared = first.clone();

    first.set(View::Admin);

    assert_eq!(shared.get(), View::Admin);
    assert_eq!(second.get(), View::User);
    assert!(first.same_store(&shared));
    assert!(!first.same_store(&second));
}
