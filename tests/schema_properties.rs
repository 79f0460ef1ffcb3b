//! Property-based tests for the contact schema

use contact_form::testing::strategies::{any_form_values, valid_form_values};
use contact_form::{FieldName, FormState, FormValues, SubmissionController, ValidationSchema};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_valid_snapshots_pass_and_reset(values in valid_form_values()) {
        prop_assert_eq!(ValidationSchema::contact().validate(&values), Ok(()));

        let mut form = FormState::with_values(values);
        prop_assert!(SubmissionController::contact().on_submit(&mut form).is_sent());
        prop_assert_eq!(form.current_values(), &FormValues::default());
        prop_assert!(form.current_errors().is_empty());
    }

    #[test]
    fn prop_validate_is_pure(values in any_form_values()) {
        let schema = ValidationSchema::contact();
        prop_assert_eq!(schema.validate(&values), schema.validate(&values));
    }

    #[test]
    fn prop_at_most_one_error_per_field_in_order(values in any_form_values()) {
        if let Err(errors) = ValidationSchema::contact().validate(&values) {
            let fields: Vec<FieldName> = errors.iter().map(|e| e.field).collect();
            let mut sorted = fields.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(fields, sorted);
        }
    }

    #[test]
    fn prop_consent_decides_its_own_rule(values in any_form_values()) {
        let consent_failed = |v: &FormValues| match ValidationSchema::contact().validate(v) {
            Ok(()) => false,
            Err(errors) => errors.iter().any(|e| e.field == FieldName::Consent),
        };
        let ticked = FormValues { consent: true, ..values.clone() };
        let unticked = FormValues { consent: false, ..values };
        prop_assert!(!consent_failed(&ticked));
        prop_assert!(consent_failed(&unticked));
    }

    #[test]
    fn prop_failed_submit_keeps_snapshot(values in any_form_values()) {
        let mut form = FormState::with_values(values.clone());
        if !SubmissionController::contact().on_submit(&mut form).is_sent() {
            prop_assert_eq!(form.current_values(), &values);
            prop_assert!(!form.current_errors().is_empty());
        }
    }

    #[test]
    fn prop_query_type_never_reported(values in any_form_values()) {
        if let Err(errors) = ValidationSchema::contact().validate(&values) {
            prop_assert!(errors.iter().all(|e| e.field != FieldName::QueryType));
        }
    }
}
