//! Validation integration for predicates

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use contact_form::{Validation, predicate::*};
///
/// let result = validate(false, one_of([true]), "Consent is required.");
/// assert_eq!(result, Validation::failure("Consent is required."));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}
