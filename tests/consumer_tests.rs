//! Integration tests for the `ConsumerN` family.
//!
//! Consumers are side-effecting by contract, so these tests observe
//! external counters and logs shared through `Rc`.

#![cfg(feature = "consumer")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fnkit::consumer::{Consumer1, Consumer2, Consumer4};
use rstest::{fixture, rstest};

#[fixture]
fn counters() -> (Rc<Cell<i32>>, Rc<Cell<i32>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[rstest]
fn chaining_mutates_both_counters(counters: (Rc<Cell<i32>>, Rc<Cell<i32>>)) {
    let (first, second) = counters;
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);

    let chained = Consumer1::of(move |amount: &i32| first_sink.set(first_sink.get() + amount))
        .and_then(move |amount: &i32| second_sink.set(second_sink.get() + amount * 2));
    chained.apply(&5);

    assert_eq!(first.get(), 5);
    assert_eq!(second.get(), 10);
}

#[rstest]
fn absent_continuation_mutates_only_first(counters: (Rc<Cell<i32>>, Rc<Cell<i32>>)) {
    let (first, second) = counters;
    let first_sink = Rc::clone(&first);

    let chained = Consumer1::of(move |amount: &i32| first_sink.set(first_sink.get() + amount))
        .and_then_optional(None::<Consumer1<i32>>);
    chained.apply(&5);

    assert_eq!(first.get(), 5);
    assert_eq!(second.get(), 0);
}

#[rstest]
fn present_continuation_through_optional_form(counters: (Rc<Cell<i32>>, Rc<Cell<i32>>)) {
    let (first, second) = counters;
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);

    let continuation = Consumer1::of(move |_: &i32| second_sink.set(second_sink.get() + 1));
    let chained = Consumer1::of(move |_: &i32| first_sink.set(first_sink.get() + 1))
        .and_then_optional(Some(continuation));
    chained.apply(&0);
    chained.apply(&0);

    assert_eq!((first.get(), second.get()), (2, 2));
}

#[rstest]
fn chained_actions_run_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sinks: Vec<_> = (0..3).map(|_| Rc::clone(&log)).collect();

    let chained = sinks
        .into_iter()
        .enumerate()
        .map(|(index, sink)| {
            Consumer2::of(move |key: &String, value: &i32| {
                sink.borrow_mut().push(format!("{index}:{key}={value}"));
            })
        })
        .reduce(|chain, next| chain.and_then(next))
        .unwrap();
    chained.apply(&"k".to_string(), &1);

    assert_eq!(*log.borrow(), vec!["0:k=1", "1:k=1", "2:k=1"]);
}

#[rstest]
fn all_arguments_are_shared_with_continuation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&seen);
    let second = Rc::clone(&seen);

    let consumer = Consumer4::of(move |a: &u8, b: &u8, c: &u8, d: &u8| {
        first.borrow_mut().push(a + b + c + d);
    })
    .and_then(move |a: &u8, b: &u8, c: &u8, d: &u8| {
        second.borrow_mut().push(a * b * c * d);
    });
    consumer.apply(&1, &2, &3, &4);

    assert_eq!(*seen.borrow(), vec![10, 24]);
}

#[rstest]
fn try_of_with_present_action() {
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    let consumer = Consumer1::try_of(Some(move |_: &()| sink.set(sink.get() + 1))).unwrap();
    consumer.apply(&());
    assert_eq!(calls.get(), 1);
}
