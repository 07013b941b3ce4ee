//! Numeric validator

use crate::validators::{fail, message_text, required_field, skips_empty};
use serde_json::Value;

/// Whether `s` is a decimal number, optionally signed, with optional
/// fraction and exponent. Leading whitespace is allowed; `inf`/`NaN` are not.
fn is_numeric_str(s: &str) -> bool {
    let s = s.trim_start();
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && s.parse::<f64>().is_ok()
}

/// Numbers always pass; strings pass when they parse as decimal numbers.
fn is_numeric(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => is_numeric_str(s),
        _ => false,
    }
}

crate::model_validator! {
    /// Validates that the attribute is numeric.
    pub NumericalityValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) || is_numeric(value) {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "Value of field ':field' must be numeric",
            &[(":field", &field)],
        );
        Ok(fail(self, &text, field, None))
    }
    fn numericality(field);
}
