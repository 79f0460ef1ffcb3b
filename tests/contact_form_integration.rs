//! End-to-end submit flows through the public API

use contact_form::prelude::*;
use contact_form::{assert_field_error, assert_invalid_fields, assert_valid, validate_contact};
use tracing_test::traced_test;

const SENT: &str = "Message Sent!Thanks for completing the form. We'll be in touch soon.";

fn type_into(form: &mut FormState, changes: &[FieldChange]) {
    for change in changes {
        form.update_field(change).expect("field change should apply");
    }
}

#[test]
fn complete_form_is_sent_and_reset() {
    let controller = SubmissionController::contact();
    let mut form = FormState::new();
    type_into(
        &mut form,
        &[
            FieldChange::text("firstName", "Jo"),
            FieldChange::text("lastName", "Lee"),
            FieldChange::text("email", "jo@x.com"),
            FieldChange::radio("queryType", "general"),
            FieldChange::text("message", "Hi"),
            FieldChange::checkbox("consent", true),
        ],
    );

    let outcome = controller.on_submit(&mut form);

    assert_eq!(
        outcome,
        SubmitOutcome::Sent {
            message: SENT.to_string()
        }
    );
    assert_eq!(form.current_values(), &FormValues::default());
    assert!(form.current_errors().is_empty());
    assert_eq!(form.success_message(), Some(SENT));
}

#[test]
fn empty_form_reports_five_fields_and_keeps_input() {
    let controller = SubmissionController::contact();
    let mut form = FormState::new();
    type_into(&mut form, &[FieldChange::text("email", "bad")]);
    let typed = form.current_values().clone();

    let outcome = controller.on_submit(&mut form);

    let errors = match outcome {
        SubmitOutcome::Rejected { errors } => errors,
        other => panic!("expected rejection, got {other:?}"),
    };
    let entries: Vec<(FieldName, &str)> = errors.iter().collect();
    assert_eq!(
        entries,
        vec![
            (FieldName::FirstName, "First name is required."),
            (FieldName::LastName, "Last name is required."),
            (FieldName::Email, "Invalid email"),
            (FieldName::Message, "Message is required enter it please."),
            (FieldName::Consent, "Consent is required."),
        ]
    );
    assert_eq!(form.current_values(), &typed);
    assert_eq!(form.current_errors(), &errors);
    assert_eq!(form.success_message(), None);
}

#[test]
fn query_type_is_never_required() {
    let values = FormValues {
        first_name: "Jo".to_string(),
        last_name: "Lee".to_string(),
        email: "jo@x.com".to_string(),
        query_type: QueryType::Unset,
        message: "Hi".to_string(),
        consent: true,
    };
    assert_valid!(validate_contact(&values));
}

#[test]
fn each_missing_required_field_gets_exactly_one_message() {
    let complete = FormValues {
        first_name: "Jo".to_string(),
        last_name: "Lee".to_string(),
        email: "jo@x.com".to_string(),
        query_type: QueryType::Support,
        message: "Hi".to_string(),
        consent: true,
    };

    let cases = [
        (
            FieldName::FirstName,
            FormValues { first_name: String::new(), ..complete.clone() },
            "First name is required.",
        ),
        (
            FieldName::LastName,
            FormValues { last_name: String::new(), ..complete.clone() },
            "Last name is required.",
        ),
        (
            FieldName::Email,
            FormValues { email: String::new(), ..complete.clone() },
            "Email address is required.",
        ),
        (
            FieldName::Message,
            FormValues { message: String::new(), ..complete.clone() },
            "Message is required enter it please.",
        ),
    ];

    for (field, values, message) in cases {
        assert_invalid_fields!(validate_contact(&values), [field]);
        assert_field_error!(validate_contact(&values), field, message);
    }
}

#[test]
fn whitespace_counts_as_present() {
    let values = FormValues {
        first_name: "  ".to_string(),
        last_name: " ".to_string(),
        email: "jo@x.com".to_string(),
        query_type: QueryType::General,
        message: " ".to_string(),
        consent: true,
    };
    assert_valid!(validate_contact(&values));
}

#[test]
fn form_stays_usable_after_many_failures() {
    let controller = SubmissionController::contact();
    let mut form = FormState::new();
    for _ in 0..3 {
        assert!(!controller.on_submit(&mut form).is_sent());
    }
    type_into(
        &mut form,
        &[
            FieldChange::text("firstName", "Jo"),
            FieldChange::text("lastName", "Lee"),
            FieldChange::text("email", "a@b.com"),
            FieldChange::text("message", "Hi"),
            FieldChange::checkbox("consent", true),
        ],
    );
    assert!(controller.on_submit(&mut form).is_sent());
}

#[test]
fn rejected_field_change_is_reported() {
    let mut form = FormState::new();
    let err = form
        .update_field(&FieldChange::radio("queryType", "billing"))
        .unwrap_err();
    assert_eq!(err, FormError::UnknownQueryType("billing".to_string()));
    assert_eq!(err.to_string(), "unknown query type `billing`");
}

#[traced_test]
#[test]
fn submit_outcomes_are_logged() {
    let controller = SubmissionController::contact();
    let mut form = FormState::new();
    controller.on_submit(&mut form);
    assert!(logs_contain("contact form rejected"));
    assert!(logs_contain("invalid_fields=5"));

    form.update_field(&FieldChange::text("secondName", "Lee")).ok();
    assert!(logs_contain("field change rejected"));
}

#[tokio::test]
async fn async_submit_resets_on_success() {
    let controller = SubmissionController::contact();
    let mut form = FormState::with_values(FormValues {
        first_name: "Jo".to_string(),
        last_name: "Lee".to_string(),
        email: "jo@x.com".to_string(),
        query_type: QueryType::General,
        message: "Hi".to_string(),
        consent: true,
    });

    assert!(controller.on_submit_async(&mut form).await.is_sent());
    assert_eq!(form.current_values(), &FormValues::default());
}
