//! Built-in record validators
//!
//! Every validator reads the attribute named by its `field` option and
//! appends one message when the attribute fails the check.
//!
//! # Common options
//!
//! - `field` (required) — attribute to validate
//! - `message` — replaces the default text; `:field` is substituted
//! - `allowEmpty` — skip null / empty-string values (all but `PresenceOf`)
//!
//! # Validators
//!
//! - **Presence**: [`PresenceOfValidator`]
//! - **Content**: [`EmailValidator`], [`RegexValidator`], [`UrlValidator`]
//! - **Length**: [`StringLengthValidator`]
//! - **Membership**: [`InclusioninValidator`], [`ExclusioninValidator`]
//! - **Numeric**: [`NumericalityValidator`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use model_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validators: Vec<Box<dyn ModelValidator>> = vec![
//!     Box::new(presence_of("name")),
//!     Box::new(EmailValidator::from_value(json!({"field": "email", "allowEmpty": true}))?),
//! ];
//! let messages = validate_record(&mut validators, &json!({"name": "Ada"}))?;
//! assert!(messages.is_empty());
//! ```

pub mod content;
pub mod length;
pub mod membership;
pub mod numeric;
pub mod presence;

pub use content::{EmailValidator, RegexValidator, UrlValidator, email, url};
pub use length::StringLengthValidator;
pub use membership::{ExclusioninValidator, InclusioninValidator};
pub use numeric::{NumericalityValidator, numericality};
pub use presence::{PresenceOfValidator, presence_of};

use crate::foundation::{ModelValidator, ValidatorError, ValidatorResult};
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// SHARED OPTION HELPERS
// ============================================================================

/// Reads the mandatory `field` option.
pub(crate) fn required_field<V>(validator: &V) -> ValidatorResult<String>
where
    V: ModelValidator + ?Sized,
{
    match validator.base().options().get("field") {
        Some(Value::String(field)) => Ok(field.clone()),
        None | Some(Value::Null) => Err(ValidatorError::missing_option(
            validator.type_name(),
            "field",
        )),
        Some(_) => Err(ValidatorError::invalid_option(
            validator.type_name(),
            "field",
            "must be a string",
        )),
    }
}

/// Message text: the `key` option when it is a non-empty string, else
/// `default`, with every `(placeholder, value)` substituted.
///
/// Substitution is a single left-to-right pass that prefers the longest
/// placeholder at each position; substituted values are never rescanned.
pub(crate) fn message_text<V>(
    validator: &V,
    key: &str,
    default: &str,
    replacements: &[(&str, &str)],
) -> String
where
    V: ModelValidator + ?Sized,
{
    let template = match validator.base().option_str(key) {
        Some(custom) if !custom.is_empty() => custom,
        _ => default,
    };
    substitute(template, replacements)
}

fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        let hit = replacements
            .iter()
            .filter(|(placeholder, _)| !placeholder.is_empty() && rest.starts_with(placeholder))
            .max_by_key(|(placeholder, _)| placeholder.len());
        if let Some((placeholder, value)) = hit {
            text.push_str(value);
            rest = &rest[placeholder.len()..];
        } else {
            let mut chars = rest.chars();
            text.extend(chars.next());
            rest = chars.as_str();
        }
    }
    text
}

/// Whether `allowEmpty` is on and the value is empty.
pub(crate) fn skips_empty<V>(validator: &V, value: Option<&Value>) -> bool
where
    V: ModelValidator + ?Sized,
{
    is_empty_value(value) && validator.base().option_enabled("allowEmpty")
}

/// Missing, null and `""` count as empty.
pub(crate) fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// String form of a scalar value; `None` for null, arrays and objects.
pub(crate) fn scalar_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Appends a message for `field` and reports failure.
pub(crate) fn fail<V>(validator: &mut V, text: &str, field: String, kind: Option<&str>) -> bool
where
    V: ModelValidator + ?Sized,
{
    validator.append_message(Some(text), Some(Value::String(field)), kind);
    false
}
