//! Error types
//!
//! Validation failures are data: a [`FieldError`] per violated field, collected into an
//! [`ErrorSet`] for display. [`FormError`] covers the other direction, field-change
//! events the form cannot accept at all.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use thiserror::Error;

use crate::field::FieldName;

/// One violated constraint: the field and the message declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Field that failed
    pub field: FieldName,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Current invalid fields, one message each.
///
/// A field without an entry is currently valid. Iteration follows field
/// declaration order.
///
/// # Example
///
/// ```
/// use contact_form::{ErrorSet, FieldError, FieldName};
///
/// let errors: ErrorSet = vec![
///     FieldError::new(FieldName::Email, "Invalid email"),
///     FieldError::new(FieldName::FirstName, "Too Short!"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(errors.get(FieldName::Email), Some("Invalid email"));
/// assert_eq!(errors.get(FieldName::LastName), None);
/// assert_eq!(errors.fields().next(), Some(FieldName::FirstName));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorSet {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Message for `field`, if it is currently invalid.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Whether `field` currently has an error.
    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    /// Whether every field is valid.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Invalid fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }

    /// `(field, message)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<FieldError> for ErrorSet {
    /// Later entries for the same field win.
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        for error in iter {
            set.insert(error.field, error.message);
        }
        set
    }
}

impl IntoIterator for ErrorSet {
    type Item = (FieldName, String);
    type IntoIter = btree_map::IntoIter<FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A field-change event the form state cannot apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The event named a field the form does not have
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The query type was neither `general`, `support`, nor empty
    #[error("unknown query type `{0}`")]
    UnknownQueryType(String),

    /// A checkbox event arrived for a text field, or a text event for a checkbox
    #[error("field `{field}` expects {expected} input")]
    KindMismatch {
        /// Field the event targeted
        field: FieldName,
        /// Input kind the field accepts
        expected: &'static str,
    },
}
