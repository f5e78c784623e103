//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::predicate::prelude::*;
//!
//! let valid_age = greater_than_or_equal(0).and(less_than_or_equal(150));
//! assert!(valid_age.check(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, is, is_all, is_none, is_not, negate, none_of};

// Presence predicates
pub use super::object::is_null;

// String predicates
pub use super::string::{is_blank_string, is_empty_string};

// Number predicates
pub use super::number::{greater_than, greater_than_or_equal, less_than, less_than_or_equal};
