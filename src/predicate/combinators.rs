//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the binary
//! combinators reached through [`PredicateExt`], and the collection
//! combinators [`all_of`], [`none_of`] and [`negate`] together with their
//! "reads like English" entry points ([`is`], [`is_all`], [`is_not`],
//! [`is_none`]).

use crate::error::InvalidArgument;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let in_range = greater_than(0).and(less_than_or_equal(150));
/// assert!(in_range.check(&25));
/// assert!(!in_range.check(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods except `boxed` return concrete types.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let p = greater_than(0).and(less_than(100)).not();
/// assert!(p.check(&-5));
/// assert!(!p.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The second predicate is only consulted when the first holds.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// The second predicate is only consulted when the first fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::predicate::*;
    ///
    /// let p = less_than(0).or(greater_than(100));
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the predicate's concrete type.
    ///
    /// Useful for putting differently-typed predicates into one
    /// [`all_of`] or [`none_of`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::predicate::*;
    ///
    /// let p = all_of([
    ///     greater_than(0).boxed(),
    ///     (|n: &i32| n % 2 == 0).boxed(),
    /// ]);
    /// assert!(p.check(&4));
    /// assert!(!p.check(&3));
    /// ```
    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        BoxedPredicate(Box::new(self))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// A type-erased predicate.
///
/// Created by [`PredicateExt::boxed`].
pub struct BoxedPredicate<'a, T: ?Sized>(Box<dyn Predicate<T> + 'a>);

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value)
    }
}

impl<T: ?Sized> std::fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedPredicate")
    }
}

/// Holds when every wrapped predicate holds.
///
/// Predicates are consulted in order and evaluation stops at the first one
/// that fails. An empty `AllOf` holds for every input.
#[derive(Clone, Debug)]
pub struct AllOf<P>(Vec<P>);

impl<P> AllOf<P> {
    /// Number of wrapped predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no predicates are wrapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when all given predicates hold.
///
/// All predicates must share one type; use [`PredicateExt::boxed`] to mix
/// different ones.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let bounds = all_of([greater_than(0), greater_than(-10), greater_than(-100)]);
/// assert!(bounds.check(&50));
/// assert!(!bounds.check(&-50));
/// ```
pub fn all_of<P, I>(predicates: I) -> AllOf<P>
where
    I: IntoIterator<Item = P>,
{
    AllOf(predicates.into_iter().collect())
}

/// Holds when none of the wrapped predicates hold.
///
/// Predicates are consulted in order and evaluation stops at the first one
/// that holds. An empty `NoneOf` holds for every input.
#[derive(Clone, Debug)]
pub struct NoneOf<P>(Vec<P>);

impl<P> NoneOf<P> {
    /// Number of wrapped predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no predicates are wrapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NoneOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when no given predicate holds.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let outside = none_of([less_than(0).boxed(), greater_than(100).boxed()]);
/// assert!(outside.check(&7));
/// assert!(!outside.check(&-5));
/// ```
pub fn none_of<P, I>(predicates: I) -> NoneOf<P>
where
    I: IntoIterator<Item = P>,
{
    NoneOf(predicates.into_iter().collect())
}

/// Create a predicate that holds exactly when `predicate` does not.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let present = negate(is_null());
/// assert!(present.check(&Some(1)));
/// assert!(!present.check(&None::<i32>));
/// ```
pub fn negate<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Return `predicate` unchanged.
///
/// Lets guard chains read naturally: `when(name, is(is_blank_string()))`.
#[inline]
pub fn is<P>(predicate: P) -> P {
    predicate
}

/// Require every predicate in a non-empty collection.
///
/// A single predicate behaves exactly like [`is`]; several compose through
/// [`all_of`].
///
/// # Errors
///
/// Returns [`InvalidArgument::NoPredicates`] when `predicates` is empty.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let p = is_all([greater_than(0), greater_than(-10)]).unwrap();
/// assert!(p.check(&5));
/// assert!(is_all(Vec::<Gt<i32>>::new()).is_err());
/// ```
pub fn is_all<P, I>(predicates: I) -> Result<AllOf<P>, InvalidArgument>
where
    I: IntoIterator<Item = P>,
{
    let all = all_of(predicates);
    if all.is_empty() {
        return Err(InvalidArgument::no_predicates("is_all"));
    }
    Ok(all)
}

/// Require that `predicate` does not hold.
///
/// Alias of [`negate`] for guard chains.
#[inline]
pub fn is_not<P>(predicate: P) -> Not<P> {
    negate(predicate)
}

/// Require that no predicate in a non-empty collection holds.
///
/// A single predicate behaves exactly like [`negate`]; several compose
/// through [`none_of`].
///
/// # Errors
///
/// Returns [`InvalidArgument::NoPredicates`] when `predicates` is empty.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let p = is_none([is_null(), is_null()]).unwrap();
/// assert!(p.check(&Some("set")));
/// assert!(!p.check(&None::<&str>));
/// ```
pub fn is_none<P, I>(predicates: I) -> Result<NoneOf<P>, InvalidArgument>
where
    I: IntoIterator<Item = P>,
{
    let none = none_of(predicates);
    if none.is_empty() {
        return Err(InvalidArgument::no_predicates("is_none"));
    }
    Ok(none)
}
