//! Submission controller
//!
//! The single decision point of the form: validate the live snapshot, then either
//! clear everything and show the banner, or publish the errors and keep what the
//! user typed. Validation failures never escape as `Err`; they become an
//! [`ErrorSet`] inside the returned [`SubmitOutcome`].

use crate::config::SchemaConfig;
use crate::error::ErrorSet;
use crate::schema::{FieldErrors, ValidationSchema};
use crate::state::FormState;

/// What a submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule held; the form was reset
    Sent {
        /// Confirmation banner text
        message: String,
    },
    /// At least one rule failed; the snapshot was kept
    Rejected {
        /// One message per invalid field
        errors: ErrorSet,
    },
}

impl SubmitOutcome {
    /// Whether the submit went through.
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

/// Runs submits for any number of forms against one shared schema.
///
/// # Example
///
/// ```
/// use contact_form::{FieldChange, FormState, SubmissionController, SubmitOutcome};
///
/// let controller = SubmissionController::contact();
/// let mut state = FormState::new();
/// state.update_field(&FieldChange::text("email", "bad")).unwrap();
///
/// match controller.on_submit(&mut state) {
///     SubmitOutcome::Rejected { errors } => assert_eq!(errors.len(), 5),
///     SubmitOutcome::Sent { .. } => unreachable!(),
/// }
/// assert_eq!(state.current_values().email, "bad");
/// ```
#[derive(Debug, Clone)]
pub struct SubmissionController<'a> {
    schema: &'a ValidationSchema,
    success_message: String,
}

impl SubmissionController<'static> {
    /// Controller for the shipped contact schema and banner.
    pub fn contact() -> Self {
        Self::new(ValidationSchema::contact(), SchemaConfig::default().success_message)
    }
}

impl<'a> SubmissionController<'a> {
    /// Controller validating against `schema` and announcing `success_message`.
    pub fn new(schema: &'a ValidationSchema, success_message: impl Into<String>) -> Self {
        Self {
            schema,
            success_message: success_message.into(),
        }
    }

    /// Schema submits are checked against.
    pub fn schema(&self) -> &ValidationSchema {
        self.schema
    }

    /// Validate `state`'s snapshot and apply the result to `state`.
    pub fn on_submit(&self, state: &mut FormState) -> SubmitOutcome {
        let result = self.schema.validate(state.current_values());
        self.apply(state, result)
    }

    /// Awaitable form of [`on_submit`](Self::on_submit).
    ///
    /// The borrow of `state` spans the whole call, so a second submit on the same
    /// form cannot start until this one has applied its result.
    pub async fn on_submit_async(&self, state: &mut FormState) -> SubmitOutcome {
        let result = self.schema.validate_async(state.current_values()).await;
        self.apply(state, result)
    }

    fn apply(&self, state: &mut FormState, result: Result<(), FieldErrors>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                tracing::info!("contact form submitted");
                state.set_errors(ErrorSet::new());
                state.reset_to_defaults();
                state.set_success_message(self.success_message.clone());
                SubmitOutcome::Sent {
                    message: self.success_message.clone(),
                }
            }
            Err(failures) => {
                let errors: ErrorSet = failures.into_iter().collect();
                tracing::warn!(invalid_fields = errors.len(), "contact form rejected");
                state.set_errors(errors.clone());
                SubmitOutcome::Rejected { errors }
            }
        }
    }
}
