//! Core validator types and traits
//!
//! This module contains the building blocks every model validator uses:
//!
//! - **State**: [`ValidatorBase`] holds the option set and the messages
//! - **Traits**: [`ModelValidator`] (the validator contract), [`Record`]
//! - **Messages**: [`Message`]
//! - **Errors**: [`ValidatorError`]
//!
//! # Architecture
//!
//! A validator is created once per validation pass with a fixed option set.
//! While it inspects a record it appends [`Message`]s; failures never abort
//! the pass. Errors are only returned for arguments or options the
//! validator cannot work with.
//!
//! ```rust,ignore
//! use model_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut presence = PresenceOfValidator::from_value(json!({"field": "name"}))?;
//! assert!(!presence.validate(&json!({"name": ""}))?);
//! assert_eq!(presence.get_messages()[0].kind(), "PresenceOf");
//! ```

pub mod base;
pub mod error;
pub mod message;
pub mod record;
pub mod traits;

pub use base::{Options, ValidatorBase, is_truthy, string_or_null};
pub use error::{ValidatorError, ValidatorResult, json_type_name};
pub use message::Message;
pub use record::Record;
pub use serde_json::Value;
pub use traits::{ModelValidator, default_message_type, simple_type_name};

// ============================================================================
// VALIDATION PASS
// ============================================================================

/// Runs every validator against `record` and collects their messages.
///
/// Validators run in slice order and never short-circuit each other. The
/// returned messages are grouped by validator, each group in append order.
/// Each validator's message list is drained, so the same validators can be
/// reused for the next record.
///
/// Messages are only drained once every validator has run. On a
/// configuration error nothing is drained: messages appended so far stay
/// on their validators and can be read with
/// [`get_messages`](ModelValidator::get_messages).
///
/// # Examples
///
/// ```rust,ignore
/// use model_validator::prelude::*;
///
/// let mut validators: Vec<Box<dyn ModelValidator>> = vec![
///     Box::new(PresenceOfValidator::from_value(json!({"field": "name"}))?),
///     Box::new(EmailValidator::from_value(json!({"field": "email"}))?),
/// ];
/// let messages = validate_record(&mut validators, &json!({"email": "nope"}))?;
/// assert_eq!(messages.len(), 2);
/// ```
pub fn validate_record<V>(validators: &mut [V], record: &dyn Record) -> ValidatorResult<Vec<Message>>
where
    V: ModelValidator,
{
    for validator in validators.iter_mut() {
        let passed = validator.validate(record)?;
        tracing::trace!(validator = %validator.type_name(), passed, "validator finished");
    }

    Ok(validators
        .iter_mut()
        .flat_map(|validator| validator.base_mut().take_messages())
        .collect())
}
