//! String predicates
//!
//! Both predicates treat an absent string (`None`) as empty.

use super::combinators::Predicate;

/// Predicate that checks if a string is absent or has zero length.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmptyString;

impl Predicate<str> for IsEmptyString {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty()
    }
}

impl Predicate<String> for IsEmptyString {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.is_empty()
    }
}

impl<'s> Predicate<&'s str> for IsEmptyString {
    #[inline]
    fn check(&self, value: &&'s str) -> bool {
        value.is_empty()
    }
}

impl Predicate<Option<String>> for IsEmptyString {
    #[inline]
    fn check(&self, value: &Option<String>) -> bool {
        value.as_deref().is_none_or(str::is_empty)
    }
}

impl<'s> Predicate<Option<&'s str>> for IsEmptyString {
    #[inline]
    fn check(&self, value: &Option<&'s str>) -> bool {
        value.is_none_or(str::is_empty)
    }
}

/// Create a predicate that checks if a string is absent or empty.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(is_empty_string().check(""));
/// assert!(!is_empty_string().check("a"));
/// assert!(is_empty_string().check(&None::<String>));
/// ```
pub fn is_empty_string() -> IsEmptyString {
    IsEmptyString
}

/// Predicate that checks if a string is absent or only whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBlankString;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Predicate<str> for IsBlankString {
    #[inline]
    fn check(&self, value: &str) -> bool {
        blank(value)
    }
}

impl Predicate<String> for IsBlankString {
    #[inline]
    fn check(&self, value: &String) -> bool {
        blank(value)
    }
}

impl<'s> Predicate<&'s str> for IsBlankString {
    #[inline]
    fn check(&self, value: &&'s str) -> bool {
        blank(value)
    }
}

impl Predicate<Option<String>> for IsBlankString {
    #[inline]
    fn check(&self, value: &Option<String>) -> bool {
        value.as_deref().is_none_or(blank)
    }
}

impl<'s> Predicate<Option<&'s str>> for IsBlankString {
    #[inline]
    fn check(&self, value: &Option<&'s str>) -> bool {
        value.is_none_or(blank)
    }
}

/// Create a predicate that checks if a string is absent, empty, or
/// whitespace only.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(is_blank_string().check(" \t\n"));
/// assert!(!is_blank_string().check("a"));
/// assert!(is_blank_string().check(&None::<&str>));
/// ```
pub fn is_blank_string() -> IsBlankString {
    IsBlankString
}
