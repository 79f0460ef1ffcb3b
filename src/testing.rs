//! Testing utilities for code that validates contact forms
//!
//! Assertion macros for validation results and, behind the `proptest` feature,
//! strategies that generate form snapshots.
//!
//! # Examples
//!
//! ```rust
//! use contact_form::{assert_field_error, assert_valid, FieldName, FormValues, QueryType};
//! use contact_form::validate_contact;
//!
//! let values = FormValues {
//!     first_name: "Jo".to_string(),
//!     last_name: "Lee".to_string(),
//!     email: "jo@x.com".to_string(),
//!     query_type: QueryType::Support,
//!     message: "Hi".to_string(),
//!     consent: true,
//! };
//! assert_valid!(validate_contact(&values));
//!
//! let values = FormValues { consent: false, ..values };
//! assert_field_error!(validate_contact(&values), FieldName::Consent, "Consent is required.");
//! ```

/// Assert that a validation result is `Ok`.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(errors) => {
                panic!("Expected valid snapshot, got errors: {:?}", errors);
            }
        }
    };
}

/// Assert that a validation result failed on exactly these fields, in this order.
///
/// ```rust
/// use contact_form::{assert_invalid_fields, FieldName, FormValues, validate_contact};
///
/// let values = FormValues { email: "bad".to_string(), ..FormValues::default() };
/// assert_invalid_fields!(
///     validate_contact(&values),
///     [
///         FieldName::FirstName,
///         FieldName::LastName,
///         FieldName::Email,
///         FieldName::Message,
///         FieldName::Consent,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! assert_invalid_fields {
    ($result:expr, [$($field:expr),* $(,)?]) => {
        match $result {
            Err(errors) => {
                let actual: Vec<$crate::FieldName> = errors.iter().map(|e| e.field).collect();
                let expected: Vec<$crate::FieldName> = vec![$($field),*];
                assert_eq!(actual, expected);
            }
            Ok(_) => {
                panic!("Expected invalid snapshot, got Ok");
            }
        }
    };
}

/// Assert that a validation result reports `message` for `field`.
#[macro_export]
macro_rules! assert_field_error {
    ($result:expr, $field:expr, $message:expr) => {
        match $result {
            Err(errors) => {
                let found = errors.iter().find(|e| e.field == $field);
                match found {
                    Some(error) => assert_eq!(error.message, $message),
                    None => panic!("Expected an error for {}, got: {:?}", $field, errors),
                }
            }
            Ok(_) => {
                panic!("Expected an error for {}, got Ok", $field);
            }
        }
    };
}

/// Proptest strategies for form snapshots.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::values::{FormValues, QueryType};

    /// Any query type, including unset.
    pub fn query_type() -> impl Strategy<Value = QueryType> {
        prop_oneof![
            Just(QueryType::General),
            Just(QueryType::Support),
            Just(QueryType::Unset),
        ]
    }

    /// Addresses the email rule accepts.
    pub fn valid_email() -> impl Strategy<Value = String> {
        "[a-z0-9._+-]{1,16}@[a-z0-9]{1,12}(\\.[a-z]{2,6}){0,2}"
    }

    /// Snapshots that satisfy every rule of the shipped schema.
    pub fn valid_form_values() -> impl Strategy<Value = FormValues> {
        (
            "[A-Za-z][A-Za-z' -]{1,49}",
            "[A-Za-z][A-Za-z' -]{0,39}",
            valid_email(),
            query_type(),
            "[^\\x00]{1,200}",
        )
            .prop_map(|(first_name, last_name, email, query_type, message)| FormValues {
                first_name,
                last_name,
                email,
                query_type,
                message,
                consent: true,
            })
    }

    /// Arbitrary snapshots, valid or not.
    pub fn any_form_values() -> impl Strategy<Value = FormValues> {
        (
            ".{0,60}",
            ".{0,20}",
            prop_oneof![valid_email(), ".{0,30}"],
            query_type(),
            ".{0,40}",
            any::<bool>(),
        )
            .prop_map(
                |(first_name, last_name, email, query_type, message, consent)| FormValues {
                    first_name,
                    last_name,
                    email,
                    query_type,
                    message,
                    consent,
                },
            )
    }
}
