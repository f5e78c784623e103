//! Presence predicates

use super::combinators::Predicate;

/// Predicate that checks if an optional value is absent.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl<T> Predicate<Option<T>> for IsNull {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

/// Create a predicate that checks if an optional value is `None`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(is_null().check(&None::<u8>));
/// assert!(!is_null().check(&Some("NOT NULL")));
/// ```
pub fn is_null() -> IsNull {
    IsNull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(is_null().check(&None::<String>));
        assert!(!is_null().check(&Some(String::from("NOT NULL"))));
        assert!(!is_null().check(&Some(())));
    }
}
