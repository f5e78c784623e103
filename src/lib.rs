//! # Stillcheck
//!
//! > *"Check before you leap"*
//!
//! A small Rust library for composable predicates and guard chains.
//!
//! ## Philosophy
//!
//! Checks should be values, not control flow:
//! - **Predicates** are pure, reusable tests that compose with `and`, `or`,
//!   `not`, [`all_of`](predicate::all_of) and [`none_of`](predicate::none_of)
//! - **Guard chains** pair values with predicates and decide, lazily and in
//!   order, whether to run an action or fail
//!
//! ## Quick Example
//!
//! ```rust
//! use stillcheck::when;
//! use stillcheck::predicate::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     MissingEmail,
//!     TooYoung(u32),
//! }
//!
//! fn signup(email: Option<&str>, age: u32) -> Result<(), SignupError> {
//!     when(email, is_blank_string()).then_fail(|| SignupError::MissingEmail)?;
//!     when(email, is_not(is_blank_string()))
//!         .and_when(age, less_than(13))
//!         .then_fail(|| SignupError::TooYoung(age))?;
//!     Ok(())
//! }
//!
//! assert_eq!(signup(Some("ada@example.com"), 36), Ok(()));
//! assert_eq!(signup(None, 36), Err(SignupError::MissingEmail));
//! assert_eq!(signup(Some("kid@example.com"), 9), Err(SignupError::TooYoung(9)));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chain;
pub mod error;
pub mod predicate;
pub mod testing;

// Re-exports
pub use chain::{try_when, when, When};
pub use error::InvalidArgument;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::{try_when, when, When};
    pub use crate::error::InvalidArgument;
    pub use crate::predicate::prelude::*;
}
