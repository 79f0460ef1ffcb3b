//! The contact form validation schema
//!
//! A [`ValidationSchema`] holds one rule per validated field and never changes after
//! construction. Each rule reports at most one message: the required check runs first,
//! then the remaining checks in the order they were declared. Rules for different
//! fields are independent, so a single pass reports every invalid field.
//!
//! `queryType` has no rule.
//!
//! # Example
//!
//! ```
//! use contact_form::{FieldName, FormValues, ValidationSchema};
//!
//! let values = FormValues {
//!     first_name: "J".to_string(),
//!     ..FormValues::default()
//! };
//!
//! let errors = ValidationSchema::contact().validate(&values).unwrap_err();
//! assert_eq!(errors[0].field, FieldName::FirstName);
//! assert_eq!(errors[0].message, "Too Short!");
//! assert_eq!(errors.len(), 5);
//! ```

use once_cell::sync::Lazy;

use crate::config::SchemaConfig;
use crate::error::FieldError;
use crate::field::FieldName;
use crate::predicate::{
    is_email, len_max, len_min, not_empty, one_of, validate, IsEmail, LenBetween, OneOf,
};
use crate::values::FormValues;
use crate::Validation;

static CONTACT_SCHEMA: Lazy<ValidationSchema> =
    Lazy::new(|| ValidationSchema::new(&SchemaConfig::default()));

/// Failures of one validation pass, in field declaration order.
pub type FieldErrors = Vec<FieldError>;

/// A predicate paired with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check<P> {
    predicate: P,
    message: String,
}

impl<P> Check<P> {
    /// Pair `predicate` with `message`.
    pub fn new(predicate: P, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    /// Message reported when the predicate does not hold.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A constraint on a text field beyond being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCheck {
    /// Length bound, in UTF-16 code units
    Length(Check<LenBetween>),
    /// Must look like an email address
    Email(Check<IsEmail>),
}

impl TextCheck {
    fn apply(&self, validation: Validation<String, String>) -> Validation<String, String> {
        match self {
            TextCheck::Length(check) => {
                validation.ensure_with(check.predicate, |_| check.message.clone())
            }
            TextCheck::Email(check) => {
                validation.ensure_with(check.predicate, |_| check.message.clone())
            }
        }
    }

    /// Message reported when this check fails.
    pub fn message(&self) -> &str {
        match self {
            TextCheck::Length(check) => check.message(),
            TextCheck::Email(check) => check.message(),
        }
    }
}

/// Rule for a required text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRule {
    field: FieldName,
    required: String,
    checks: Vec<TextCheck>,
}

impl TextRule {
    /// A required text field with no further constraints.
    pub fn required(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            required: message.into(),
            checks: Vec::new(),
        }
    }

    /// Add a constraint, evaluated after every constraint added before it.
    pub fn with_check(mut self, check: TextCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Field this rule applies to.
    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Message reported for an empty value.
    pub fn required_message(&self) -> &str {
        &self.required
    }

    /// Additional constraints in evaluation order.
    pub fn checks(&self) -> &[TextCheck] {
        &self.checks
    }

    /// Evaluate the rule against `value`, reporting the first violated constraint.
    pub fn evaluate(&self, value: &str) -> Validation<(), FieldErrors> {
        let present = Validation::success(value.to_string())
            .ensure_with(not_empty(), |_| self.required.clone());

        self.checks
            .iter()
            .fold(present, |acc, check| check.apply(acc))
            .map(|_| ())
            .map_err(|message| vec![FieldError::new(self.field, message)])
    }
}

/// Rule for the consent checkbox: only a ticked box passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRule {
    check: Check<OneOf<bool, 1>>,
}

impl ConsentRule {
    /// Consent must be `true`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            check: Check::new(one_of([true]), message),
        }
    }

    /// Message reported when consent is missing.
    pub fn message(&self) -> &str {
        self.check.message()
    }

    /// Evaluate the rule against the checkbox state.
    pub fn evaluate(&self, consent: bool) -> Validation<(), FieldErrors> {
        validate(consent, self.check.predicate, ())
            .map(|_| ())
            .map_err(|()| vec![FieldError::new(FieldName::Consent, self.check.message.clone())])
    }
}

/// The immutable set of rules a submitted snapshot is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    first_name: TextRule,
    last_name: TextRule,
    email: TextRule,
    message: TextRule,
    consent: ConsentRule,
}

impl ValidationSchema {
    /// Build the contact schema from `config`.
    pub fn new(config: &SchemaConfig) -> Self {
        Self {
            first_name: TextRule::required(FieldName::FirstName, &config.first_name_required)
                .with_check(TextCheck::Length(Check::new(
                    len_min(config.first_name_min),
                    &config.too_short,
                )))
                .with_check(TextCheck::Length(Check::new(
                    len_max(config.first_name_max),
                    &config.too_long,
                ))),
            last_name: TextRule::required(FieldName::LastName, &config.last_name_required),
            email: TextRule::required(FieldName::Email, &config.email_required)
                .with_check(TextCheck::Email(Check::new(is_email(), &config.email_invalid))),
            message: TextRule::required(FieldName::Message, &config.message_required),
            consent: ConsentRule::new(&config.consent_required),
        }
    }

    /// The shipped contact schema, built once and shared.
    pub fn contact() -> &'static ValidationSchema {
        &CONTACT_SCHEMA
    }

    /// Text rules in declaration order.
    pub fn text_rules(&self) -> [&TextRule; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.message]
    }

    /// The consent rule.
    pub fn consent_rule(&self) -> &ConsentRule {
        &self.consent
    }

    /// Whether the schema constrains `field` at all.
    pub fn constrains(&self, field: FieldName) -> bool {
        field == FieldName::Consent || self.text_rules().iter().any(|rule| rule.field() == field)
    }

    /// Evaluate every rule, accumulating one failure per invalid field.
    pub fn check(&self, values: &FormValues) -> Validation<(), FieldErrors> {
        let result = Validation::<(), FieldErrors>::all((
            self.first_name.evaluate(&values.first_name),
            self.last_name.evaluate(&values.last_name),
            self.email.evaluate(&values.email),
            self.message.evaluate(&values.message),
            self.consent.evaluate(values.consent),
        ))
        .map(|_| ());

        match &result {
            Validation::Success(()) => tracing::debug!("form snapshot passed validation"),
            Validation::Failure(errors) => tracing::debug!(
                failed = errors.len(),
                fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                "form snapshot failed validation"
            ),
        }

        result
    }

    /// Validate a complete snapshot.
    ///
    /// Returns every violated field in declaration order (firstName, lastName, email,
    /// message, consent), one message per field.
    pub fn validate(&self, values: &FormValues) -> Result<(), FieldErrors> {
        self.check(values).into_result()
    }

    /// Awaitable form of [`validate`](Self::validate).
    ///
    /// Completes on first poll; it exists so hosts with async submit handlers can
    /// await validation uniformly.
    ///
    /// ```
    /// use contact_form::{FormValues, ValidationSchema};
    ///
    /// # tokio_test::block_on(async {
    /// let result = ValidationSchema::contact()
    ///     .validate_async(&FormValues::default())
    ///     .await;
    /// assert!(result.is_err());
    /// # });
    /// ```
    pub async fn validate_async(&self, values: &FormValues) -> Result<(), FieldErrors> {
        self.validate(values)
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::new(&SchemaConfig::default())
    }
}

/// Check `values` against the shipped contact schema.
pub fn validate_contact(values: &FormValues) -> Result<(), FieldErrors> {
    ValidationSchema::contact().validate(values)
}
