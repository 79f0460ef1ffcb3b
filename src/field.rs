//! Names of the contact form fields
//!
//! Variant order is the schema declaration order, so sorting by `FieldName`
//! yields errors in the order the form presents them.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldName {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Reply address
    Email,
    /// General enquiry or support request
    QueryType,
    /// Free-text body
    Message,
    /// Consent-to-contact checkbox
    Consent,
}

impl FieldName {
    /// Every field, in declaration order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::QueryType,
        FieldName::Message,
        FieldName::Consent,
    ];

    /// The name the presentation layer uses for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::QueryType => "queryType",
            FieldName::Message => "message",
            FieldName::Consent => "consent",
        }
    }

    /// Whether the field is rendered as a checkbox and stores a boolean.
    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldName::Consent)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
