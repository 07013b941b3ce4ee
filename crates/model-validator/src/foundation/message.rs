//! Validation failure messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One validation failure: text, the field it concerns, and a type tag.
///
/// The field is carried through untouched; validators normally store the
/// field name as a string, but callers may attach any value.
///
/// # Examples
///
/// ```rust,ignore
/// use model_validator::foundation::Message;
///
/// let message = Message::new("'name' is required", Some("name".into()), "PresenceOf");
/// assert_eq!(message.field_name(), Some("name"));
/// assert_eq!(message.to_string(), "'name' is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<Value>,
    #[serde(rename = "type")]
    kind: String,
}

impl Message {
    /// Creates a message.
    pub fn new(text: impl Into<String>, field: Option<Value>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            field,
            kind: kind.into(),
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The field value as supplied by the validator.
    #[must_use]
    pub fn field(&self) -> Option<&Value> {
        self.field.as_ref()
    }

    /// The field as a string, when it is one.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_ref().and_then(Value::as_str)
    }

    /// The type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
