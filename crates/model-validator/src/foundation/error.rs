//! Errors raised at the validator argument boundary.
//!
//! Validation *failures* are never errors: they are recorded as
//! [`Message`](crate::foundation::Message)s on the validator. A
//! [`ValidatorError`] means the caller handed the validator something it
//! cannot work with (wrong argument type, broken option set) and is
//! surfaced immediately.

use serde_json::Value;
use std::borrow::Cow;

/// Error type for validator construction, argument checks and option
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The constructor received something other than a mapping.
    #[error("options argument must be an Array (got {found})")]
    OptionsNotMapping { found: &'static str },

    /// A string parameter received a value that is neither string nor null.
    #[error("Parameter '{parameter}' must be a string (got {found})")]
    InvalidArgument {
        parameter: &'static str,
        found: &'static str,
    },

    /// A validator needs an option that was not supplied.
    #[error("{validator} requires option '{option}'")]
    MissingOption {
        validator: Cow<'static, str>,
        option: Cow<'static, str>,
    },

    /// An option is present but unusable.
    #[error("{validator}: option '{option}' is invalid: {reason}")]
    InvalidOption {
        validator: Cow<'static, str>,
        option: Cow<'static, str>,
        reason: String,
    },
}

impl ValidatorError {
    /// Creates an `OptionsNotMapping` error describing `value`.
    #[must_use]
    pub fn options_not_mapping(value: &Value) -> Self {
        Self::OptionsNotMapping {
            found: json_type_name(value),
        }
    }

    /// Creates an `InvalidArgument` error for `parameter`.
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, value: &Value) -> Self {
        Self::InvalidArgument {
            parameter,
            found: json_type_name(value),
        }
    }

    pub fn missing_option(
        validator: impl Into<Cow<'static, str>>,
        option: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::MissingOption {
            validator: validator.into(),
            option: option.into(),
        }
    }

    pub fn invalid_option(
        validator: impl Into<Cow<'static, str>>,
        option: impl Into<Cow<'static, str>>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            validator: validator.into(),
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for argument-type failures.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            Self::OptionsNotMapping { .. } | Self::InvalidArgument { .. }
        )
    }

    /// Returns true for option-set configuration failures.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingOption { .. } | Self::InvalidOption { .. })
    }
}

/// Name of a JSON value's type, for error messages.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result alias used throughout the crate.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
