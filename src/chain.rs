//! Guard chains: "when these values pass these checks, then ..."
//!
//! A guard chain is an immutable, linked sequence of (value, predicate)
//! pairs. The chain holds when every pair holds, and it is only evaluated
//! when one of its terminal operations runs:
//!
//! - [`When::then`] runs an action when the chain holds.
//! - [`When::then_fail`] produces a caller-built error when the chain holds.
//!
//! Links are checked oldest to newest and evaluation stops at the first
//! link that fails, so later predicates are never consulted once an earlier
//! one rejects its value.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::when;
//! use stillcheck::predicate::*;
//!
//! fn register(name: Option<&str>, age: u32) -> Result<String, String> {
//!     when(name, is(is_blank_string()))
//!         .then_fail(|| "name is required".to_string())?;
//!     when(age, less_than(18))
//!         .then_fail(|| format!("{} is too young", age))?;
//!     Ok(format!("registered {}", name.unwrap_or_default()))
//! }
//!
//! assert_eq!(register(Some("ada"), 36), Ok("registered ada".to_string()));
//! assert_eq!(register(Some("  "), 36), Err("name is required".to_string()));
//! assert_eq!(register(Some("bob"), 12), Err("12 is too young".to_string()));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::InvalidArgument;
use crate::predicate::Predicate;

/// A link's value and predicate, erased to a single deferred test.
type Test<'a> = Box<dyn Fn() -> bool + Send + Sync + 'a>;

struct Link<'a> {
    previous: Option<Arc<Link<'a>>>,
    position: usize,
    test: Test<'a>,
}

// Unlink iteratively so dropping a very long chain cannot overflow the stack.
impl Drop for Link<'_> {
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(link) = previous {
            match Arc::try_unwrap(link) {
                Ok(mut link) => previous = link.previous.take(),
                Err(_) => break,
            }
        }
    }
}

/// A guard chain of one or more (value, predicate) links.
///
/// Created by [`when`] or [`try_when`] and extended with
/// [`When::and_when`]. Every extension returns a new chain; the chain it
/// was called on is left untouched and can be extended again, which yields
/// a second chain sharing the same ancestors.
///
/// Values and predicates are captured by move. Cloning a `When` is cheap:
/// clones share their links.
#[derive(Clone)]
pub struct When<'a> {
    head: Arc<Link<'a>>,
}

/// Start a guard chain with a single link.
///
/// The predicate is not evaluated until a terminal operation runs.
///
/// # Example
///
/// ```rust
/// use stillcheck::when;
/// use stillcheck::predicate::*;
///
/// let mut ran = false;
/// when(None::<&str>, is_null()).then(|| ran = true);
/// assert!(ran);
/// ```
pub fn when<'a, T, P>(value: T, predicate: P) -> When<'a>
where
    T: Send + Sync + 'a,
    P: Predicate<T> + 'a,
{
    When::link(None, value, predicate)
}

/// Start a guard chain from a predicate that may be absent.
///
/// # Errors
///
/// Returns [`InvalidArgument::MissingPredicate`] with position 0 when
/// `predicate` is `None`.
///
/// # Example
///
/// ```rust
/// use stillcheck::{try_when, InvalidArgument};
/// use stillcheck::predicate::*;
///
/// assert!(try_when(3, Some(greater_than(1))).is_ok());
///
/// let missing: Option<Gt<i32>> = None;
/// assert_eq!(
///     try_when(3, missing).err(),
///     Some(InvalidArgument::MissingPredicate { position: 0 })
/// );
/// ```
pub fn try_when<'a, T, P>(value: T, predicate: Option<P>) -> Result<When<'a>, InvalidArgument>
where
    T: Send + Sync + 'a,
    P: Predicate<T> + 'a,
{
    let predicate = predicate.ok_or_else(|| InvalidArgument::missing_predicate(0))?;
    Ok(when(value, predicate))
}

impl<'a> When<'a> {
    fn link<T, P>(previous: Option<Arc<Link<'a>>>, value: T, predicate: P) -> Self
    where
        T: Send + Sync + 'a,
        P: Predicate<T> + 'a,
    {
        let position = previous.as_ref().map_or(0, |link| link.position + 1);
        let test: Test<'a> = Box::new(move || predicate.check(&value));
        Self {
            head: Arc::new(Link {
                previous,
                position,
                test,
            }),
        }
    }

    /// Extend the chain with another link.
    ///
    /// The new link's value type may differ from the rest of the chain. It
    /// is evaluated after every existing link, and only if they all hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::when;
    /// use stillcheck::predicate::*;
    ///
    /// let chain = when(Some("ada"), is_not(is_null()))
    ///     .and_when(36, greater_than_or_equal(18));
    /// assert!(chain.holds());
    /// assert_eq!(chain.link_count(), 2);
    /// ```
    pub fn and_when<T, P>(&self, value: T, predicate: P) -> When<'a>
    where
        T: Send + Sync + 'a,
        P: Predicate<T> + 'a,
    {
        Self::link(Some(Arc::clone(&self.head)), value, predicate)
    }

    /// Extend the chain with a predicate that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingPredicate`] carrying the position
    /// the new link would have had when `predicate` is `None`.
    pub fn try_and_when<T, P>(
        &self,
        value: T,
        predicate: Option<P>,
    ) -> Result<When<'a>, InvalidArgument>
    where
        T: Send + Sync + 'a,
        P: Predicate<T> + 'a,
    {
        let predicate =
            predicate.ok_or_else(|| InvalidArgument::missing_predicate(self.link_count()))?;
        Ok(self.and_when(value, predicate))
    }

    /// Number of links in the chain. Always at least one.
    pub fn link_count(&self) -> usize {
        self.head.position + 1
    }

    /// Evaluate the chain.
    ///
    /// Returns true when every link holds. Links are checked from the root
    /// forward and checking stops at the first link that fails.
    pub fn holds(&self) -> bool {
        let mut links = Vec::with_capacity(self.link_count());
        let mut cursor = Some(&self.head);
        while let Some(link) = cursor {
            links.push(link);
            cursor = link.previous.as_ref();
        }

        for link in links.into_iter().rev() {
            let held = (link.test)();

            #[cfg(feature = "tracing")]
            tracing::trace!(position = link.position, held, "evaluated guard link");

            if !held {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    position = link.position,
                    links = self.link_count(),
                    "guard chain short-circuited"
                );
                return false;
            }
        }
        true
    }

    /// Run `action` if the chain holds.
    ///
    /// Returns the action's result, or `None` when the chain does not hold
    /// and the action was not run. Whatever the action returns, errors
    /// included, is handed back unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::when;
    /// use stillcheck::predicate::*;
    ///
    /// assert_eq!(when(5, greater_than(1)).then(|| "big"), Some("big"));
    /// assert_eq!(when(0, greater_than(1)).then(|| "big"), None);
    /// ```
    pub fn then<R, F>(&self, action: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        self.holds().then(action)
    }

    /// Fail with the signal built by `signal` if the chain holds.
    ///
    /// The signal is only constructed when the chain holds. Returns `Ok(())`
    /// otherwise, so the call composes with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::when;
    /// use stillcheck::predicate::*;
    ///
    /// let outcome = when(None::<u32>, is_null()).then_fail(|| "boom");
    /// assert_eq!(outcome, Err("boom"));
    ///
    /// let outcome = when(Some(1), is_null()).then_fail(|| "boom");
    /// assert_eq!(outcome, Ok(()));
    /// ```
    pub fn then_fail<E, F>(&self, signal: F) -> Result<(), E>
    where
        F: FnOnce() -> E,
    {
        if self.holds() {
            #[cfg(feature = "tracing")]
            tracing::debug!(links = self.link_count(), "guard chain held, raising signal");
            return Err(signal());
        }
        Ok(())
    }
}

impl fmt::Debug for When<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("links", &self.link_count())
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::predicate::{greater_than, is_null};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_short_circuit_is_logged() {
        let chain = when(0, greater_than(1)).and_when(None::<u8>, is_null());
        assert!(!chain.holds());
        assert!(logs_contain("guard chain short-circuited"));
    }

    #[traced_test]
    #[test]
    fn test_signal_is_logged() {
        let outcome = when(None::<u8>, is_null()).then_fail(|| "boom");
        assert_eq!(outcome, Err("boom"));
        assert!(logs_contain("evaluated guard link"));
        assert!(logs_contain("raising signal"));
    }
}
