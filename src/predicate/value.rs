//! Predicates over plain values

use super::combinators::Predicate;

/// Predicate that checks a value is one of a fixed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneOf<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Predicate<T> for OneOf<T, N>
where
    T: PartialEq + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

/// Create a predicate that accepts only the listed values.
///
/// ```rust
/// use contact_form::predicate::*;
///
/// let ticked = one_of([true]);
/// assert!(ticked.check(&true));
/// assert!(!ticked.check(&false));
/// ```
pub fn one_of<T, const N: usize>(allowed: [T; N]) -> OneOf<T, N> {
    OneOf(allowed)
}
