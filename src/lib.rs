//! # contact-form
//!
//! Validation and submission core for a contact form: first name, last name, email,
//! query type, message, and a consent checkbox.
//!
//! ## Philosophy
//!
//! The rules are pure data checked against a snapshot; the only mutable thing is the
//! [`FormState`] of one form instance.
//! - [`ValidationSchema`] evaluates every rule and reports all invalid fields at once
//! - [`SubmissionController`] turns the result into a reset or an [`ErrorSet`]
//!
//! ## Quick Example
//!
//! ```rust
//! use contact_form::{FieldChange, FieldName, FormState, SubmissionController, SubmitOutcome};
//!
//! let controller = SubmissionController::contact();
//! let mut form = FormState::new();
//!
//! form.update_field(&FieldChange::text("firstName", "J")).unwrap();
//! form.update_field(&FieldChange::text("email", "not-an-email")).unwrap();
//!
//! match controller.on_submit(&mut form) {
//!     SubmitOutcome::Rejected { errors } => {
//!         assert_eq!(errors.get(FieldName::FirstName), Some("Too Short!"));
//!         assert_eq!(errors.get(FieldName::Email), Some("Invalid email"));
//!     }
//!     SubmitOutcome::Sent { .. } => unreachable!(),
//! }
//!
//! // What the user typed is kept so they can fix it
//! assert_eq!(form.current_values().first_name, "J");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod field;
pub mod predicate;
pub mod schema;
pub mod semigroup;
pub mod state;
pub mod submit;
pub mod testing;
pub mod validation;
pub mod values;

// Re-exports
pub use config::SchemaConfig;
pub use error::{ErrorSet, FieldError, FormError};
pub use field::FieldName;
pub use schema::{validate_contact, FieldErrors, ValidationSchema};
pub use semigroup::Semigroup;
pub use state::FormState;
pub use submit::{SubmissionController, SubmitOutcome};
pub use validation::Validation;
pub use values::{FieldChange, FormValues, InputKind, QueryType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorSet, FieldError, FormError};
    pub use crate::field::FieldName;
    pub use crate::state::FormState;
    pub use crate::submit::{SubmissionController, SubmitOutcome};
    pub use crate::validation::Validation;
    pub use crate::values::{FieldChange, FormValues, QueryType};
}
