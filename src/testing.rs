//! Testing utilities and helpers for Stillcheck
//!
//! This module provides assertion macros for predicates and a [`Probe`]
//! predicate that records when it is consulted, which makes short-circuit
//! and ordering behavior observable in tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use stillcheck::predicate::*;
//! use stillcheck::{assert_holds, assert_rejects};
//!
//! assert_holds!(greater_than(1), &2);
//! assert_rejects!(is_blank_string(), "text");
//! ```
//!
//! ## Probe
//!
//! ```rust
//! use stillcheck::when;
//! use stillcheck::testing::Probe;
//!
//! let first = Probe::new("first", false);
//! let second = Probe::sharing("second", true, &first);
//!
//! when((), first.clone()).and_when((), second).then(|| ());
//! assert_eq!(first.calls(), vec!["first"]);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

/// A predicate with a fixed outcome that logs every time it is checked.
///
/// Probes created with [`Probe::sharing`] write to the same log, so the log
/// shows the order in which a group of predicates was consulted.
#[derive(Clone, Debug)]
pub struct Probe {
    name: &'static str,
    outcome: bool,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Probe {
    /// Create a probe with its own empty log.
    pub fn new(name: &'static str, outcome: bool) -> Self {
        Self {
            name,
            outcome,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a probe that writes to the same log as `other`.
    pub fn sharing(name: &'static str, outcome: bool, other: &Probe) -> Self {
        Self {
            name,
            outcome,
            log: Arc::clone(&other.log),
        }
    }

    /// Names of the probes checked so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times this particular probe was checked.
    pub fn call_count(&self) -> usize {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|name| **name == self.name)
            .count()
    }
}

impl<T: ?Sized> crate::predicate::Predicate<T> for Probe {
    fn check(&self, _value: &T) -> bool {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.name);
        self.outcome
    }
}

/// Assert that a predicate holds for a value.
///
/// The value is passed the way [`Predicate::check`](crate::predicate::Predicate::check)
/// takes it, by reference.
///
/// # Example
///
/// ```rust
/// use stillcheck::assert_holds;
/// use stillcheck::predicate::*;
///
/// assert_holds!(is_null(), &None::<i32>);
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($predicate:expr, $value:expr) => {{
        let value = $value;
        if !$crate::predicate::Predicate::check(&$predicate, value) {
            panic!("Expected predicate to hold, it rejected: {:?}", value);
        }
    }};
}

/// Assert that a predicate rejects a value.
///
/// # Example
///
/// ```rust
/// use stillcheck::assert_rejects;
/// use stillcheck::predicate::*;
///
/// assert_rejects!(greater_than(5), &5);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {{
        let value = $value;
        if $crate::predicate::Predicate::check(&$predicate, value) {
            panic!("Expected predicate to reject, it held for: {:?}", value);
        }
    }};
}
