//! Number predicates
//!
//! Comparisons widen both the input and the threshold to `f64` before
//! comparing, so integers beyond 2^53 lose precision.

use super::combinators::Predicate;

/// Numeric types that can be widened to `f64` for comparison.
pub trait Widen: Copy + Send + Sync {
    /// Widen this value to `f64`.
    fn widen(self) -> f64;
}

macro_rules! impl_widen {
    ($($t:ty),* $(,)?) => {
        $(
            impl Widen for $t {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_widen!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<N>(pub N);

impl<N: Widen> Predicate<N> for Gt<N> {
    #[inline]
    fn check(&self, value: &N) -> bool {
        value.widen() > self.0.widen()
    }
}

/// Create a predicate that checks if value is greater than threshold.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(greater_than(1).check(&2));
/// assert!(!greater_than(2).check(&2));
/// assert!(!greater_than(2).check(&1));
/// ```
pub fn greater_than<N: Widen>(threshold: N) -> Gt<N> {
    Gt(threshold)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<N>(pub N);

impl<N: Widen> Predicate<N> for Ge<N> {
    #[inline]
    fn check(&self, value: &N) -> bool {
        value.widen() >= self.0.widen()
    }
}

/// Create a predicate that checks if value is greater than or equal to threshold.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(greater_than_or_equal(2).check(&2));
/// assert!(!greater_than_or_equal(2).check(&1));
/// ```
pub fn greater_than_or_equal<N: Widen>(threshold: N) -> Ge<N> {
    Ge(threshold)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<N>(pub N);

impl<N: Widen> Predicate<N> for Lt<N> {
    #[inline]
    fn check(&self, value: &N) -> bool {
        value.widen() < self.0.widen()
    }
}

/// Create a predicate that checks if value is less than threshold.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(less_than(2).check(&1));
/// assert!(!less_than(1).check(&2));
/// ```
pub fn less_than<N: Widen>(threshold: N) -> Lt<N> {
    Lt(threshold)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<N>(pub N);

impl<N: Widen> Predicate<N> for Le<N> {
    #[inline]
    fn check(&self, value: &N) -> bool {
        value.widen() <= self.0.widen()
    }
}

/// Create a predicate that checks if value is less than or equal to threshold.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(less_than_or_equal(2).check(&2));
/// assert!(!less_than_or_equal(1).check(&2));
/// ```
pub fn less_than_or_equal<N: Widen>(threshold: N) -> Le<N> {
    Le(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(greater_than(1).check(&2));
        assert!(!greater_than(2).check(&1));
        assert!(!greater_than(2).check(&2));
    }

    #[test]
    fn test_greater_than_or_equal() {
        assert!(greater_than_or_equal(2).check(&2));
        assert!(greater_than_or_equal(2).check(&3));
        assert!(!greater_than_or_equal(2).check(&1));
    }

    #[test]
    fn test_less_than() {
        assert!(less_than(2).check(&1));
        assert!(!less_than(1).check(&2));
        assert!(!less_than(2).check(&2));
    }

    #[test]
    fn test_less_than_or_equal() {
        assert!(less_than_or_equal(2).check(&2));
        assert!(less_than_or_equal(2).check(&1));
        assert!(!less_than_or_equal(1).check(&2));
    }

    #[test]
    fn test_floats() {
        assert!(greater_than(0.5_f32).check(&0.75));
        assert!(less_than_or_equal(1.0_f64).check(&1.0));
        assert!(!greater_than(f64::NAN).check(&1.0));
        assert!(!less_than_or_equal(1.0).check(&f64::NAN));
    }

    #[test]
    fn test_wide_integers() {
        // Both round to the same f64.
        assert!(!greater_than(u64::MAX - 1).check(&u64::MAX));
        assert!(greater_than(-1_i128).check(&0));
        assert!(less_than(300_u16).check(&299));
    }
}
