//! Multicast composition, ordering and invocation.

use lazy_static::lazy_static;
use std::{cell::RefCell, sync::Mutex};
use tether::{BoxError, Delegate, MulticastDelegate, testing::CallLog};

mod common;
use common::{OrderRecorder, Thermostat, double, square};

lazy_static! {
    static ref NOTIFIED: Mutex<Vec<u32>> = Mutex::new(Vec::new());
}

fn notify_one() {
    NOTIFIED.lock().unwrap().push(1);
}

fn notify_two() {
    NOTIFIED.lock().unwrap().push(2);
}

fn notify_three() {
    NOTIFIED.lock().unwrap().push(3);
}

fn explode() {
    panic!("handler failed");
}

#[test]
fn test_free_functions_run_in_registration_order() {
    let mut multicast = MulticastDelegate::<()>::new();
    multicast += Delegate::<()>::from_fn(notify_one);
    multicast += Delegate::<()>::from_fn(notify_two);
    multicast += Delegate::<()>::from_fn(notify_three);

    multicast.invoke();
    assert_eq!(*NOTIFIED.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_methods_run_in_registration_order() {
    let order = RefCell::new(Vec::new());
    let recorders: Vec<_> = (1..=3)
        .map(|id| OrderRecorder { id, order: &order })
        .collect();

    let mut multicast = MulticastDelegate::<()>::with_capacity(recorders.len());
    for recorder in &recorders {
        multicast.push(Delegate::<()>::from_method(recorder, OrderRecorder::record));
    }
    multicast.invoke();

    assert_eq!(*order.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_push_single_delegate() {
    let mut with_null = MulticastDelegate::<(i32,), i32>::new();
    with_null.push(Delegate::null());
    assert_eq!(with_null.len(), 0);

    let mut with_bound = MulticastDelegate::<(i32,), i32>::new();
    with_bound.push(Delegate::<(i32,), i32>::from_fn(double));
    assert_eq!(with_bound.len(), 1);
}

#[test]
fn test_observer_receives_indexed_results() {
    let ten = || 10;
    let twenty = || 20;
    let thirty = || 30;

    let mut multicast = MulticastDelegate::<(), i32>::new();
    multicast.push_closure(&ten);
    multicast.push_closure(&twenty);
    multicast.push_closure(&thirty);

    let mut observed = Vec::new();
    multicast.invoke_observed(|index, value| observed.push((index, *value)));
    assert_eq!(observed, vec![(0, 10), (1, 20), (2, 30)]);
}

#[test]
fn test_observer_runs_before_next_handler() {
    let log = CallLog::new();
    let first = || {
        log.push("first");
        1
    };
    let second = || {
        log.push("second");
        2
    };

    let mut multicast = MulticastDelegate::<(), i32>::new();
    multicast.push_closure(&first);
    multicast.push_closure(&second);
    multicast.invoke_observed(|index, _| log.push(if index == 0 { "observe 0" } else { "observe 1" }));

    assert_eq!(log.entries(), vec!["first", "observe 0", "second", "observe 1"]);
}

#[test]
fn test_arguments_reach_every_handler() {
    let thermostat = RefCell::new(Thermostat::new(0));
    let log = CallLog::new();
    let record = |value: i32| {
        log.push(value);
        value
    };

    let mut multicast = MulticastDelegate::<(i32,), i32>::new();
    multicast.push(Delegate::<(i32,), i32>::from_fn(square));
    multicast.push(Delegate::<(i32,), i32>::from_method_mut(&thermostat, Thermostat::set_target));
    multicast.push_closure(&record);

    let mut results = Vec::new();
    multicast.invoke_observed(6, |_, value| results.push(*value));

    assert_eq!(results, vec![36, 6, 6]);
    assert_eq!(thermostat.borrow().target, 6);
    assert_eq!(log.entries(), vec![6]);
}

#[test]
fn test_merge_appends_clones_in_order() {
    let a = Delegate::<(i32,), i32>::from_fn(double);
    let b = Delegate::<(i32,), i32>::from_fn(square);
    let offset = |value: i32| value + 100;
    let c = Delegate::<(i32,), i32>::from_closure(&offset);

    let mut m1: MulticastDelegate<'_, (i32,), i32> = [a, b].into_iter().collect();
    let mut m2: MulticastDelegate<'_, (i32,), i32> = [c].into_iter().collect();
    let nested: MulticastDelegate<'_, (i32,), i32> = [a].into_iter().collect();
    m2.merge(&nested);

    m1 += &m2;

    assert_eq!(m1.len(), 4);
    assert_eq!(m2.len(), 2);
    let expected: MulticastDelegate<'_, (i32,), i32> = [a, b, c, a].into_iter().collect();
    assert_eq!(m1, expected);

    let mut results = Vec::new();
    m1.invoke_observed(3, |_, value| results.push(*value));
    assert_eq!(results, vec![6, 9, 103, 6]);
}

#[test]
fn test_repeated_merges_stay_flat() {
    let a = Delegate::<(), i32>::from_fn(|| 1);
    let mut accumulated = MulticastDelegate::<(), i32>::new();
    accumulated.push(a);

    for _ in 0..4 {
        let mut next = MulticastDelegate::<(), i32>::new();
        next.merge(&accumulated);
        next.merge(&accumulated);
        accumulated = next;
    }

    assert_eq!(accumulated.len(), 16);
    assert!(accumulated.iter().all(|delegate| delegate == a));
}

#[test]
fn test_collect_and_extend_skip_null() {
    let a = Delegate::<(i32,), i32>::from_fn(double);
    let b = Delegate::<(i32,), i32>::from_fn(square);

    let collected: MulticastDelegate<'_, (i32,), i32> =
        [a, Delegate::null(), b].into_iter().collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(collected.iter().collect::<Vec<_>>(), vec![a, b]);

    let mut extended = MulticastDelegate::<(i32,), i32>::new();
    extended.extend([Delegate::null(), b, Delegate::null(), a]);
    assert_eq!(extended.len(), 2);
    assert_eq!(extended.iter().collect::<Vec<_>>(), vec![b, a]);

    let mut results = Vec::new();
    collected.invoke_observed(5, |_, value| results.push(*value));
    assert_eq!(results, vec![10, 25]);
}

#[test]
fn test_ordered_equality() {
    let a = Delegate::<(i32,), i32>::from_fn(double);
    let b = Delegate::<(i32,), i32>::from_fn(square);

    let ab: MulticastDelegate<'_, (i32,), i32> = [a, b].into_iter().collect();
    let ba: MulticastDelegate<'_, (i32,), i32> = [b, a].into_iter().collect();
    let ab_again: MulticastDelegate<'_, (i32,), i32> = [a, b].into_iter().collect();

    assert_ne!(ab, ba);
    assert_eq!(ab, ab_again);
}

#[test]
fn test_cross_type_equality() {
    let a = Delegate::<(i32,), i32>::from_fn(double);
    let b = Delegate::<(i32,), i32>::from_fn(square);

    let empty = MulticastDelegate::<(i32,), i32>::new();
    let single: MulticastDelegate<'_, (i32,), i32> = [a].into_iter().collect();
    let pair: MulticastDelegate<'_, (i32,), i32> = [a, b].into_iter().collect();

    assert_eq!(empty, Delegate::<(i32,), i32>::null());
    assert_ne!(empty, a);
    assert_eq!(single, a);
    assert_ne!(single, Delegate::<(i32,), i32>::null());
    assert_ne!(pair, a);
    assert_ne!(pair, b);
}

#[test]
fn test_remove_by_identity() {
    let log = CallLog::new();
    let first = || log.push(1);
    let second = || log.push(2);

    let mut multicast = MulticastDelegate::<()>::new();
    multicast.push_closure(&first);
    multicast.push_closure(&second);
    multicast.push_closure(&first);

    assert!(multicast.remove(&Delegate::from_closure(&first)));
    multicast.invoke();
    assert_eq!(log.entries(), vec![1, 2]);

    let stranger = || log.push(3);
    assert!(!multicast.remove(&Delegate::from_closure(&stranger)));
    assert_eq!(multicast.len(), 2);
}

#[test]
fn test_panicking_handler_aborts_sequence() {
    let log = CallLog::new();
    let before = || log.push("before");
    let after = || log.push("after");

    let mut multicast = MulticastDelegate::<()>::new();
    multicast.push_closure(&before);
    multicast.push(Delegate::<()>::from_fn(explode));
    multicast.push_closure(&after);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| multicast.invoke()));
    assert!(outcome.is_err());
    assert_eq!(log.entries(), vec!["before"]);
}

#[test]
fn test_try_invoke_reports_failing_index() {
    let log = CallLog::new();
    let accept = |value: u8| -> Result<(), BoxError> {
        log.push(value);
        Ok(())
    };
    let reject = |value: u8| -> Result<(), BoxError> {
        Err(format!("rejected {value}").into())
    };

    let mut multicast = MulticastDelegate::<(u8,), Result<(), BoxError>>::new();
    multicast.push_closure(&accept);
    multicast.push_closure(&reject);
    multicast.push_closure(&accept);

    let error = multicast.try_invoke(7).unwrap_err();
    assert_eq!(error.index, 1);
    assert_eq!(error.to_string(), "handler 1 failed");
    assert_eq!(error.into_source().to_string(), "rejected 7");
    assert_eq!(log.entries(), vec![7]);

    let mut passing = MulticastDelegate::<(u8,), Result<(), BoxError>>::new();
    passing.push_closure(&accept);
    assert!(passing.try_invoke(8).is_ok());
}

#[test]
fn test_empty_multicast_is_safe() {
    let multicast = MulticastDelegate::<(i32,), i32>::default();
    assert!(multicast.is_null());
    multicast.invoke(1);
    multicast.invoke_observed(1, |_, _| unreachable!());
}
