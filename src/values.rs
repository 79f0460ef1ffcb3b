//! Form snapshot and field-change events

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::field::FieldName;

/// The kind of enquiry selected by the radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum QueryType {
    /// General enquiry
    General,
    /// Support request
    Support,
    /// Nothing selected yet
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Unset,
}

impl QueryType {
    /// Radio value for this choice; empty when unset.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::Support => "support",
            QueryType::Unset => "",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(QueryType::General),
            "support" => Ok(QueryType::Support),
            "" => Ok(QueryType::Unset),
            other => Err(FormError::UnknownQueryType(other.to_string())),
        }
    }
}

/// Every field value at one instant.
///
/// `Default` is the reset snapshot: empty text, no query type, consent unticked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormValues {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Reply address
    pub email: String,
    /// Selected enquiry kind
    pub query_type: QueryType,
    /// Free-text body
    pub message: String,
    /// Consent-to-contact checkbox
    pub consent: bool,
}

impl FormValues {
    /// A copy of this snapshot with `change` applied.
    ///
    /// Other fields are carried over untouched. Text is stored verbatim.
    ///
    /// ```
    /// use contact_form::{FieldChange, FormValues};
    ///
    /// let before = FormValues::default();
    /// let after = before.with_change(&FieldChange::text("email", " jo@x.com ")).unwrap();
    ///
    /// assert_eq!(after.email, " jo@x.com ");
    /// assert_eq!(after.first_name, before.first_name);
    /// ```
    pub fn with_change(&self, change: &FieldChange) -> Result<Self, FormError> {
        let field: FieldName = change.name.parse()?;
        let mut next = self.clone();

        let checkbox_event = matches!(change.kind, InputKind::Checkbox { .. });
        if field.is_checkbox() != checkbox_event {
            return Err(FormError::KindMismatch {
                field,
                expected: if field.is_checkbox() {
                    "checkbox"
                } else {
                    "text or radio"
                },
            });
        }

        match field {
            FieldName::Consent => {
                next.consent = matches!(change.kind, InputKind::Checkbox { checked: true })
            }
            FieldName::QueryType => next.query_type = change.raw_value.parse()?,
            FieldName::FirstName => next.first_name = change.raw_value.clone(),
            FieldName::LastName => next.last_name = change.raw_value.clone(),
            FieldName::Email => next.email = change.raw_value.clone(),
            FieldName::Message => next.message = change.raw_value.clone(),
        }

        Ok(next)
    }
}

/// How the presentation layer captured a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Text input or textarea
    Text,
    /// One option of a radio group
    Radio,
    /// Checkbox; its checked state is the value
    Checkbox {
        /// Whether the box is ticked
        checked: bool,
    },
}

/// One input event from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Field name as rendered, e.g. `firstName`
    pub name: String,
    /// Raw input value; ignored for checkboxes
    pub raw_value: String,
    /// Kind of input that produced the event
    pub kind: InputKind,
}

impl FieldChange {
    /// A text or textarea edit.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: value.into(),
            kind: InputKind::Text,
        }
    }

    /// A radio selection.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: value.into(),
            kind: InputKind::Radio,
        }
    }

    /// A checkbox toggle. Browsers still send the box's `value` attribute, which
    /// defaults to `on`.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            raw_value: "on".to_string(),
            kind: InputKind::Checkbox { checked },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reset_snapshot() {
        let values = FormValues::default();
        assert_eq!(values.first_name, "");
        assert_eq!(values.last_name, "");
        assert_eq!(values.email, "");
        assert_eq!(values.query_type, QueryType::Unset);
        assert_eq!(values.message, "");
        assert!(!values.consent);
    }

    #[test]
    fn test_text_change_touches_only_named_field() {
        let before = FormValues {
            last_name: "Lee".to_string(),
            consent: true,
            ..FormValues::default()
        };
        let after = before.with_change(&FieldChange::text("firstName", "Jo")).unwrap();
        assert_eq!(after.first_name, "Jo");
        assert_eq!(after.last_name, "Lee");
        assert!(after.consent);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let after = FormValues::default()
            .with_change(&FieldChange::text("message", "  hi \n"))
            .unwrap();
        assert_eq!(after.message, "  hi \n");
    }

    #[test]
    fn test_checkbox_stores_checked_state() {
        let after = FormValues::default()
            .with_change(&FieldChange::checkbox("consent", true))
            .unwrap();
        assert!(after.consent);

        let after = after.with_change(&FieldChange::checkbox("consent", false)).unwrap();
        assert!(!after.consent);
    }

    #[test]
    fn test_radio_selects_query_type() {
        let after = FormValues::default()
            .with_change(&FieldChange::radio("queryType", "support"))
            .unwrap();
        assert_eq!(after.query_type, QueryType::Support);
    }

    #[test]
    fn test_unknown_query_type_rejected() {
        let err = FormValues::default()
            .with_change(&FieldChange::radio("queryType", "sales"))
            .unwrap_err();
        assert_eq!(err, FormError::UnknownQueryType("sales".to_string()));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let err = FormValues::default()
            .with_change(&FieldChange::text("consent", "true"))
            .unwrap_err();
        assert!(matches!(err, FormError::KindMismatch { field: FieldName::Consent, .. }));

        let err = FormValues::default()
            .with_change(&FieldChange::checkbox("email", true))
            .unwrap_err();
        assert!(matches!(err, FormError::KindMismatch { field: FieldName::Email, .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FormValues::default()
            .with_change(&FieldChange::text("phone", "555"))
            .unwrap_err();
        assert_eq!(err, FormError::UnknownField("phone".to_string()));
    }
}
