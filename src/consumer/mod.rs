//! Named wrappers around side-effecting callables.
//!
//! [`Consumer1`] through [`Consumer5`] wrap actions that take their arguments
//! by reference and return nothing. Chaining with `and_then` runs both
//! actions, in order, against the same arguments.
//!
//! `and_then_optional` is the one combinator in this crate that tolerates an
//! absent argument: a missing continuation leaves the consumer unchanged.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use fnkit::consumer::Consumer1;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let first = Rc::clone(&log);
//! let second = Rc::clone(&log);
//!
//! let record = Consumer1::of(move |value: &i32| first.borrow_mut().push(*value))
//!     .and_then(move |value: &i32| second.borrow_mut().push(value * 10));
//! record.apply(&4);
//!
//! assert_eq!(*log.borrow(), vec![4, 40]);
//! ```

mod macros;

use macros::define_consumer;

define_consumer!(1; T1 first);
define_consumer!(2; T1 first, T2 second);
define_consumer!(3; T1 first, T2 second, T3 third);
define_consumer!(4; T1 first, T2 second, T3 third, T4 fourth);
define_consumer!(5; T1 first, T2 second, T3 third, T4 fourth, T5 fifth);

static_assertions::assert_not_impl_any!(Consumer1<i32>: Send, Sync);
