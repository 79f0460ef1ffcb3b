//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result`, but combining two of them keeps the failures of
//! both sides instead of short-circuiting on the first. The contact schema relies on this
//! to report every invalid field from a single pass.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use contact_form::Validation;
//!
//! let v1 = Validation::<(), _>::failure(vec!["First name is required."]);
//! let v2 = Validation::<(), _>::failure(vec!["Consent is required."]);
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["First name is required.", "Consent is required."])
//! );
//! ```
//!
//! ## Checking one value against ordered constraints
//!
//! ```
//! use contact_form::Validation;
//! use contact_form::predicate::{len_max, len_min};
//!
//! let v = Validation::<_, &str>::success("J".to_string())
//!     .ensure(len_min(2), "Too Short!")
//!     .ensure(len_max(50), "Too Long!");
//!
//! // Only the first failing constraint is kept
//! assert_eq!(v, Validation::Failure("Too Short!"));
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// ```
    /// use contact_form::{FieldError, FieldName, Validation};
    ///
    /// let v = Validation::<(), _>::failure("Invalid email")
    ///     .map_err(|message| vec![FieldError::new(FieldName::Email, message)]);
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Require the success value to satisfy `predicate`
    ///
    /// A failed validation is returned untouched, so chained `ensure` calls report only
    /// the first constraint that did not hold.
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Validation::Success(value) if !predicate.check(&value) => Validation::Failure(error),
            other => other,
        }
    }

    /// Like [`ensure`](Validation::ensure), building the error only when the
    /// predicate fails.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: Predicate<T>,
        F: FnOnce(&T) -> E,
    {
        match self {
            Validation::Success(value) if !predicate.check(&value) => {
                Validation::Failure(error_fn(&value))
            }
            other => other,
        }
    }

    /// Combine all validations in a tuple
    ///
    /// Delegates to [`ValidateAll`]; implemented for the five-rule tuple the schema builds.
    pub fn all<V, E2>(validations: V) -> Validation<V::Output, E2>
    where
        E2: Semigroup,
        V: ValidateAll<E2>,
    {
        validations.validate_all()
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If either or both fail, the errors are merged left to right.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

/// Trait for combining multiple validations in a tuple
///
/// Lets `Validation::all` accept heterogeneous success types while still
/// accumulating one error type.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E: Semigroup, T1, T2, T3, T4, T5> ValidateAll<E>
    for (
        Validation<T1, E>,
        Validation<T2, E>,
        Validation<T3, E>,
        Validation<T4, E>,
        Validation<T5, E>,
    )
{
    type Output = (T1, T2, T3, T4, T5);

    fn validate_all(self) -> Validation<Self::Output, E> {
        self.0
            .and(self.1)
            .and(self.2)
            .and(self.3)
            .and(self.4)
            .map(|((((a, b), c), d), e)| (a, b, c, d, e))
    }
}
