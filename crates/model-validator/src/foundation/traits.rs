//! The model validator contract.

use crate::foundation::base::{Options, ValidatorBase, is_falsy_str, string_or_null};
use crate::foundation::error::ValidatorResult;
use crate::foundation::message::Message;
use crate::foundation::record::Record;
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// MODEL VALIDATOR TRAIT
// ============================================================================

/// The trait every model validator implements.
///
/// Implementors embed a [`ValidatorBase`] and expose it through
/// [`base`](Self::base) / [`base_mut`](Self::base_mut); everything else
/// (message accumulation, option access) is provided. The only required
/// behaviour is [`validate`](Self::validate).
///
/// The trait is object safe, so heterogeneous validators can be stored as
/// `Box<dyn ModelValidator>`.
///
/// # Examples
///
/// ```rust,ignore
/// use model_validator::prelude::*;
///
/// struct NotBlankValidator {
///     base: ValidatorBase,
/// }
///
/// impl ModelValidator for NotBlankValidator {
///     fn base(&self) -> &ValidatorBase { &self.base }
///     fn base_mut(&mut self) -> &mut ValidatorBase { &mut self.base }
///
///     fn validate(&mut self, record: &dyn Record) -> ValidatorResult<bool> {
///         if record.read_attribute("name").is_some() {
///             return Ok(true);
///         }
///         self.append_message(Some("name is blank"), Some("name".into()), None);
///         Ok(false)
///     }
/// }
///
/// // type tag derived from the type name: "NotBlank"
/// ```
pub trait ModelValidator {
    /// Shared state.
    fn base(&self) -> &ValidatorBase;

    /// Shared state, mutably.
    fn base_mut(&mut self) -> &mut ValidatorBase;

    /// Checks `record`, appending a message for every failure.
    ///
    /// Returns `Ok(false)` when at least one message was appended.
    /// Errors are reserved for unusable configuration.
    fn validate(&mut self, record: &dyn Record) -> ValidatorResult<bool>;

    /// Simple name of the concrete validator type.
    ///
    /// Derived from the runtime type by default; override to register a
    /// different identifier.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(simple_type_name(std::any::type_name::<Self>()))
    }

    /// Type tag used for messages appended without one.
    fn message_type(&self) -> String {
        default_message_type(&self.type_name())
    }

    /// Appends a message.
    ///
    /// `None` text is stored as `""`. A missing or falsy `kind` (`""`,
    /// `"0"`) falls back to [`message_type`](Self::message_type).
    fn append_message(&mut self, message: Option<&str>, field: Option<Value>, kind: Option<&str>) {
        let kind = match kind {
            Some(kind) if !is_falsy_str(kind) => kind.to_owned(),
            _ => self.message_type(),
        };
        tracing::debug!(
            validator = %self.type_name(),
            field = ?field,
            kind = %kind,
            "validation message appended"
        );
        self.base_mut()
            .push_message(Message::new(message.unwrap_or_default(), field, kind));
    }

    /// Dynamic-argument variant of [`append_message`](Self::append_message).
    ///
    /// Fails when `message` is neither a string nor null.
    fn try_append_message(
        &mut self,
        message: &Value,
        field: Option<Value>,
        kind: Option<&str>,
    ) -> ValidatorResult<()> {
        let message = string_or_null("message", message)?;
        self.append_message(Some(&message), field, kind);
        Ok(())
    }

    /// Messages appended so far, in order.
    fn get_messages(&self) -> &[Message] {
        self.base().messages()
    }

    /// All options.
    fn get_options(&self) -> &Options {
        self.base().options()
    }

    /// Option `key`, or `""` when it is not set.
    fn get_option(&self, key: Option<&str>) -> &Value {
        self.base().get_option(key)
    }

    /// Whether option `key` is set.
    fn is_set_option(&self, key: Option<&str>) -> bool {
        self.base().is_set_option(key)
    }
}

impl<V: ModelValidator + ?Sized> ModelValidator for Box<V> {
    fn base(&self) -> &ValidatorBase {
        (**self).base()
    }

    fn base_mut(&mut self) -> &mut ValidatorBase {
        (**self).base_mut()
    }

    fn validate(&mut self, record: &dyn Record) -> ValidatorResult<bool> {
        (**self).validate(record)
    }

    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn message_type(&self) -> String {
        (**self).message_type()
    }
}

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Strips the module path and generic arguments from a full type name.
///
/// `my_app::validators::EmailValidator<u8>` becomes `EmailValidator`.
#[must_use]
pub fn simple_type_name(full: &str) -> &str {
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

/// Removes every `"Validator"` substring from a type name.
#[must_use]
pub fn default_message_type(type_name: &str) -> String {
    type_name.replace("Validator", "")
}
