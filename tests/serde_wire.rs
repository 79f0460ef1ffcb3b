//! JSON shapes exchanged with a presentation layer

use contact_form::{ErrorSet, FieldError, FieldName, FormValues, QueryType, SchemaConfig};
use serde_json::json;

#[test]
fn form_values_use_camel_case_names() {
    let values = FormValues {
        first_name: "Jo".to_string(),
        last_name: "Lee".to_string(),
        email: "jo@x.com".to_string(),
        query_type: QueryType::General,
        message: "Hi".to_string(),
        consent: true,
    };
    assert_eq!(
        serde_json::to_value(&values).unwrap(),
        json!({
            "firstName": "Jo",
            "lastName": "Lee",
            "email": "jo@x.com",
            "queryType": "general",
            "message": "Hi",
            "consent": true
        })
    );
}

#[test]
fn unset_query_type_is_empty_string() {
    let values: FormValues = serde_json::from_value(json!({ "queryType": "" })).unwrap();
    assert_eq!(values, FormValues::default());
}

#[test]
fn missing_fields_take_defaults() {
    let values: FormValues = serde_json::from_value(json!({ "email": "bad" })).unwrap();
    assert_eq!(values.email, "bad");
    assert!(!values.consent);
}

#[test]
fn error_set_is_a_field_keyed_object() {
    let errors: ErrorSet = vec![
        FieldError::new(FieldName::Consent, "Consent is required."),
        FieldError::new(FieldName::FirstName, "Too Short!"),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({ "firstName": "Too Short!", "consent": "Consent is required." })
    );
}

#[test]
fn partial_config_overrides_defaults() {
    let config: SchemaConfig =
        serde_json::from_value(json!({ "firstNameMax": 20, "tooLong": "Max 20 characters" }))
            .unwrap();
    assert_eq!(config.first_name_max, 20);
    assert_eq!(config.too_long, "Max 20 characters");
    assert_eq!(config.too_short, "Too Short!");
}
