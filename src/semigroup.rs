//! Semigroup trait for accumulating validation failures
//!
//! A Semigroup is a type with an associative binary operation. Validation uses it to
//! merge the failures reported by independent field rules instead of stopping at the
//! first one.
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use contact_form::{FieldError, FieldName, Semigroup};
//!
//! let first = vec![FieldError::new(FieldName::FirstName, "Too Short!")];
//! let second = vec![FieldError::new(FieldName::Consent, "Consent is required.")];
//!
//! let all = first.combine(second);
//! assert_eq!(all.len(), 2);
//! assert_eq!(all[0].field, FieldName::FirstName);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
