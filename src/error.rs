//! Error types for predicate and chain construction.

/// Error returned when a predicate or guard chain is constructed from
/// malformed arguments.
///
/// This is the only error the crate originates. It is always returned at
/// construction time, before any predicate has been evaluated.
///
/// # Examples
///
/// ```rust
/// use stillcheck::{try_when, InvalidArgument};
/// use stillcheck::predicate::IsNull;
///
/// let result = try_when(Some(1), None::<IsNull>);
/// assert_eq!(
///     result.err(),
///     Some(InvalidArgument::MissingPredicate { position: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A chain link was given no predicate.
    MissingPredicate {
        /// Index the link would have occupied, counting from the root.
        position: usize,
    },
    /// A variadic combinator was given an empty collection.
    NoPredicates {
        /// Name of the combinator that rejected the input.
        combinator: &'static str,
    },
}

impl InvalidArgument {
    /// Create a missing-predicate error for the given link position.
    pub fn missing_predicate(position: usize) -> Self {
        Self::MissingPredicate { position }
    }

    /// Create an empty-collection error for the named combinator.
    pub fn no_predicates(combinator: &'static str) -> Self {
        Self::NoPredicates { combinator }
    }

    /// Returns true if a chain link was missing its predicate.
    pub fn is_missing_predicate(&self) -> bool {
        matches!(self, Self::MissingPredicate { .. })
    }

    /// Returns true if a combinator was given no predicates.
    pub fn is_no_predicates(&self) -> bool {
        matches!(self, Self::NoPredicates { .. })
    }
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPredicate { position } => {
                write!(f, "predicate must not be absent (chain link {})", position)
            }
            Self::NoPredicates { combinator } => {
                write!(f, "{} requires at least one predicate", combinator)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_predicate_display() {
        let err = InvalidArgument::missing_predicate(3);
        assert!(err.is_missing_predicate());
        assert!(!err.is_no_predicates());
        assert_eq!(
            err.to_string(),
            "predicate must not be absent (chain link 3)"
        );
    }

    #[test]
    fn test_no_predicates_display() {
        let err = InvalidArgument::no_predicates("is_all");
        assert!(err.is_no_predicates());
        assert_eq!(err.to_string(), "is_all requires at least one predicate");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(InvalidArgument::missing_predicate(0));
        assert!(err.source().is_none());
    }
}
