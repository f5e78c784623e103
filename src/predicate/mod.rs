//! Predicate combinators for composable checks
//!
//! Predicates are pure, reusable tests over a single value. This module
//! ships the [`Predicate`] trait, logical combinators (`and`, `or`, `not`,
//! [`all_of`], [`none_of`], [`negate`]), and a small standard set of
//! presence, string and numeric predicates.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::predicate::*;
//!
//! let adult = greater_than_or_equal(18);
//! let retired = greater_than_or_equal(67);
//! let working_age = adult.and(retired.not());
//!
//! assert!(working_age.check(&30));
//! assert!(!working_age.check(&12));
//! assert!(!working_age.check(&70));
//! ```
//!
//! Predicates plug straight into guard chains:
//!
//! ```rust
//! use stillcheck::when;
//! use stillcheck::predicate::*;
//!
//! let name: Option<&str> = None;
//! let outcome = when(name, is(is_blank_string())).then_fail(|| "name is required");
//! assert_eq!(outcome, Err("name is required"));
//! ```

mod combinators;
mod number;
mod object;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinators
pub use combinators::{
    all_of, is, is_all, is_none, is_not, negate, none_of, AllOf, And, NoneOf, Not, Or,
};

// Re-export presence predicates
pub use object::{is_null, IsNull};

// Re-export string predicates
pub use string::{is_blank_string, is_empty_string, IsBlankString, IsEmptyString};

// Re-export number predicates
pub use number::{
    greater_than, greater_than_or_equal, less_than, less_than_or_equal, Ge, Gt, Le, Lt, Widen,
};
