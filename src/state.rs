//! Form state holder
//!
//! [`FormState`] owns the one live snapshot, the one live error set, and the success
//! banner for a single form instance. It has no history: every update replaces what
//! was there.

use crate::error::{ErrorSet, FormError};
use crate::field::FieldName;
use crate::values::{FieldChange, FormValues};

/// State of one active contact form.
///
/// # Example
///
/// ```
/// use contact_form::{FieldChange, FormState};
///
/// let mut state = FormState::new();
/// state.update_field(&FieldChange::text("firstName", "Jo")).unwrap();
/// state.update_field(&FieldChange::checkbox("consent", true)).unwrap();
///
/// assert_eq!(state.current_values().first_name, "Jo");
/// assert!(state.current_values().consent);
/// assert!(state.current_errors().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ErrorSet,
    success_message: Option<String>,
}

impl FormState {
    /// A freshly mounted form: default values, no errors, no banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, e.g. one restored by the host.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// The live snapshot, for rendering controlled inputs.
    pub fn current_values(&self) -> &FormValues {
        &self.values
    }

    /// The live error set, for per-field messages.
    pub fn current_errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Message shown next to `field`, if any.
    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Banner left by the last successful submit.
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Merge one field change into the snapshot.
    ///
    /// Errors and the banner are left alone. A rejected change leaves the snapshot
    /// exactly as it was.
    pub fn update_field(&mut self, change: &FieldChange) -> Result<(), FormError> {
        match self.values.with_change(change) {
            Ok(next) => {
                tracing::debug!(field = %change.name, "field updated");
                self.values = next;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(field = %change.name, error = %err, "field change rejected");
                Err(err)
            }
        }
    }

    /// Put every field back to its default.
    pub fn reset_to_defaults(&mut self) {
        self.values = FormValues::default();
    }

    /// Replace the error set wholesale.
    pub fn set_errors(&mut self, errors: ErrorSet) {
        self.errors = errors;
    }

    /// Record the banner for a successful submit.
    pub fn set_success_message(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }

    /// Hide the banner. The submission flow never calls this; it is up to the host.
    pub fn clear_success_message(&mut self) {
        self.success_message = None;
    }
}
