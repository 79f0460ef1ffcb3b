//! Schema configuration
//!
//! [`SchemaConfig::default`] is the contact form as shipped. Other values let a host
//! reword messages or adjust the first-name bounds without touching the rules.

/// Bounds and messages a [`ValidationSchema`](crate::ValidationSchema) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SchemaConfig {
    /// Shortest accepted first name, in UTF-16 code units
    pub first_name_min: usize,
    /// Longest accepted first name, in UTF-16 code units
    pub first_name_max: usize,
    /// Shown when the first name is shorter than `first_name_min`
    pub too_short: String,
    /// Shown when the first name is longer than `first_name_max`
    pub too_long: String,
    /// Shown when the first name is empty
    pub first_name_required: String,
    /// Shown when the last name is empty
    pub last_name_required: String,
    /// Shown when the email is empty
    pub email_required: String,
    /// Shown when the email is not an address
    pub email_invalid: String,
    /// Shown when the message is empty
    pub message_required: String,
    /// Shown when consent is not given
    pub consent_required: String,
    /// Banner text after a successful submit
    pub success_message: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            first_name_min: 2,
            first_name_max: 50,
            too_short: "Too Short!".to_string(),
            too_long: "Too Long!".to_string(),
            first_name_required: "First name is required.".to_string(),
            last_name_required: "Last name is required.".to_string(),
            email_required: "Email address is required.".to_string(),
            email_invalid: "Invalid email".to_string(),
            message_required: "Message is required enter it please.".to_string(),
            consent_required: "Consent is required.".to_string(),
            success_message: "Message Sent!Thanks for completing the form. We'll be in touch soon."
                .to_string(),
        }
    }
}
