//! Tests and examples for the testing utilities
//!
//! Demonstrates observing predicate evaluation with probes and asserting on
//! predicates with the exported macros.

use stillcheck::predicate::*;
use stillcheck::testing::Probe;
use stillcheck::{assert_holds, assert_rejects, when};

#[test]
fn test_assertion_macros_on_builtins() {
    assert_holds!(is_null(), &None::<String>);
    assert_rejects!(is_null(), &Some("NOT NULL"));

    assert_holds!(is_empty_string(), "");
    assert_rejects!(is_empty_string(), "NOT EMPTY");
    assert_holds!(is_empty_string(), &None::<&str>);

    assert_holds!(is_blank_string(), " \t\n");
    assert_rejects!(is_blank_string(), "a");

    assert_holds!(greater_than(1), &2);
    assert_rejects!(greater_than(2), &1);
    assert_holds!(greater_than_or_equal(2), &2);
    assert_holds!(less_than(2), &1);
    assert_holds!(less_than_or_equal(2), &2);
    assert_rejects!(less_than_or_equal(1), &2);
}

#[test]
fn test_assertion_macros_on_combinators() {
    assert_holds!(is_all([is_null(), is_null()]).unwrap(), &None::<u8>);
    assert_rejects!(is_all([is_null(), is_null()]).unwrap(), &Some(1));
    assert_holds!(is_not(is_null()), &Some(1));
    assert_rejects!(is_not(is_null()), &None::<u8>);
}

#[test]
fn test_probe_observes_guard_chain() {
    let name = Probe::new("name", true);
    let age = Probe::sharing("age", false, &name);
    let email = Probe::sharing("email", true, &name);

    let mut sent = false;
    when("ada", name.clone())
        .and_when(9, age.clone())
        .and_when("ada@example.com", email.clone())
        .then(|| sent = true);

    assert!(!sent);
    assert_eq!(name.calls(), vec!["name", "age"]);
    assert_eq!(email.call_count(), 0);
}

#[test]
#[should_panic(expected = "Expected predicate to hold")]
fn test_assert_holds_reports_value() {
    assert_holds!(greater_than(10), &3);
}
