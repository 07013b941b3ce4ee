//! Domain membership validators
//!
//! Both validators read a `domain` option holding an array of allowed (or
//! forbidden) scalars. Values are compared through their string form, so
//! `3` and `"3"` are the same member.

use crate::foundation::{ModelValidator, ValidatorError, ValidatorResult};
use crate::validators::{fail, message_text, required_field, scalar_string, skips_empty};
use serde_json::Value;

/// The `domain` option as string members, plus its display form.
fn domain<V>(validator: &V) -> ValidatorResult<(Vec<String>, String)>
where
    V: ModelValidator + ?Sized,
{
    let members = match validator.base().options().get("domain") {
        Some(Value::Array(members)) => members,
        None | Some(Value::Null) => {
            return Err(ValidatorError::missing_option(
                validator.type_name(),
                "domain",
            ));
        }
        Some(_) => {
            return Err(ValidatorError::invalid_option(
                validator.type_name(),
                "domain",
                "must be an array",
            ));
        }
    };

    let members: Vec<String> = members
        .iter()
        .filter_map(scalar_string)
        .map(|member| member.into_owned())
        .collect();
    let listed = members.join(", ");
    Ok((members, listed))
}

/// Whether `value` appears in `members`.
fn contains(members: &[String], value: Option<&Value>) -> bool {
    value
        .and_then(scalar_string)
        .is_some_and(|s| members.iter().any(|member| *member == *s))
}

// ============================================================================
// INCLUSION
// ============================================================================

crate::model_validator! {
    /// Validates that the attribute is one of the `domain` members.
    pub InclusioninValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let (members, listed) = domain(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) || contains(&members, value) {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "Value of field ':field' must be part of list: :domain",
            &[(":field", &field), (":domain", &listed)],
        );
        Ok(fail(self, &text, field, Some("Inclusion")))
    }
}

// ============================================================================
// EXCLUSION
// ============================================================================

crate::model_validator! {
    /// Validates that the attribute is none of the `domain` members.
    pub ExclusioninValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let (members, listed) = domain(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) || !contains(&members, value) {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "Value of field ':field' must not be part of list: :domain",
            &[(":field", &field), (":domain", &listed)],
        );
        Ok(fail(self, &text, field, Some("Exclusion")))
    }
}
