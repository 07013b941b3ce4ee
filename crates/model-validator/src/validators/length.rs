//! String length validator
//!
//! Length is measured in Unicode scalar values (chars). Numbers and
//! booleans are measured through their string form; missing and null
//! attributes have length 0. Arrays and objects have no length and fail
//! whichever bound is configured.

use crate::foundation::{Value, ValidatorError};
use crate::validators::{fail, message_text, required_field, scalar_string, skips_empty};

/// Char length of a scalar attribute, `None` for arrays and objects.
fn measure(value: Option<&Value>) -> Option<usize> {
    match value {
        None | Some(Value::Null) => Some(0),
        Some(value) => scalar_string(value).map(|s| s.chars().count()),
    }
}

crate::model_validator! {
    /// Validates that the attribute length lies within `min` / `max`.
    ///
    /// At least one bound is required. The maximum is checked first and
    /// only one message is appended per call.
    ///
    /// Options: `min`, `max`, `messageMinimum`, `messageMaximum`.
    pub StringLengthValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let name = self.type_name();
        let min = self.base().option_as::<usize>(&name, "min")?;
        let max = self.base().option_as::<usize>(&name, "max")?;
        if min.is_none() && max.is_none() {
            return Err(ValidatorError::missing_option(name, "min or max"));
        }

        let value = record.read_attribute(&field);
        if skips_empty(self, value) {
            return Ok(true);
        }
        let length = measure(value);

        if let Some(max) = max.filter(|max| length.is_none_or(|length| length > *max)) {
            let max = max.to_string();
            let text = message_text(
                self,
                "messageMaximum",
                "Value of field ':field' exceeds the maximum :max characters",
                &[(":field", &field), (":max", &max)],
            );
            return Ok(fail(self, &text, field, Some("TooLong")));
        }

        if let Some(min) = min.filter(|min| length.is_none_or(|length| length < *min)) {
            let min = min.to_string();
            let text = message_text(
                self,
                "messageMinimum",
                "Value of field ':field' is less than the minimum :min characters",
                &[(":field", &field), (":min", &min)],
            );
            return Ok(fail(self, &text, field, Some("TooShort")));
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ModelValidator;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn length(options: Value) -> StringLengthValidator {
        StringLengthValidator::from_value(options).unwrap()
    }

    #[rstest]
    #[case(json!("abc"), true)]
    #[case(json!("ab"), false)]
    #[case(json!("abcdef"), false)]
    #[case(json!("héllo"), true)]
    #[case(json!(12345), true)]
    #[case(json!(null), false)]
    #[case(json!(["a", "b", "c"]), false)]
    #[case(json!({"a": 1, "b": 2, "c": 3}), false)]
    fn test_bounds(#[case] value: Value, #[case] expected: bool) {
        let mut v = length(json!({"field": "name", "min": 3, "max": 5}));
        assert_eq!(v.validate(&json!({"name": value})).unwrap(), expected);
    }

    #[test]
    fn test_too_long_message() {
        let mut v = length(json!({"field": "name", "max": 3}));
        v.validate(&json!({"name": "abcd"})).unwrap();
        let message = &v.get_messages()[0];
        assert_eq!(
            message.text(),
            "Value of field 'name' exceeds the maximum 3 characters"
        );
        assert_eq!(message.kind(), "TooLong");
    }

    #[rstest]
    #[case(json!({"field": "tags", "max": 3}), "TooLong")]
    #[case(json!({"field": "tags", "min": 1}), "TooShort")]
    fn test_structured_values_fail(#[case] options: Value, #[case] kind: &str) {
        let mut v = length(options);
        assert!(!v.validate(&json!({"tags": ["a"]})).unwrap());
        assert!(!v.validate(&json!({"tags": {}})).unwrap());
        assert_eq!(v.get_messages().len(), 2);
        assert!(v.get_messages().iter().all(|m| m.kind() == kind));
    }

    #[test]
    fn test_missing_attribute_has_zero_length() {
        let mut v = length(json!({"field": "name", "max": 3}));
        assert!(v.validate(&json!({})).unwrap());
        assert!(v.validate(&json!({"name": null})).unwrap());
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let mut v = length(json!({"field": "a:max", "max": 2}));
        v.validate(&json!({"a:max": "abc"})).unwrap();
        assert_eq!(
            v.get_messages()[0].text(),
            "Value of field 'a:max' exceeds the maximum 2 characters"
        );
    }

    #[test]
    fn test_too_short_message() {
        let mut v = length(json!({
            "field": "name",
            "min": 4,
            "messageMinimum": ":field needs :min chars"
        }));
        v.validate(&json!({"name": "ab"})).unwrap();
        let message = &v.get_messages()[0];
        assert_eq!(message.text(), "name needs 4 chars");
        assert_eq!(message.kind(), "TooShort");
    }

    #[test]
    fn test_one_message_per_call() {
        // contradictory bounds: only the maximum is reported
        let mut v = length(json!({"field": "name", "min": 10, "max": 2}));
        assert!(!v.validate(&json!({"name": "abcde"})).unwrap());
        assert_eq!(v.get_messages().len(), 1);
        assert_eq!(v.get_messages()[0].kind(), "TooLong");
    }

    #[test]
    fn test_allow_empty() {
        let mut v = length(json!({"field": "name", "min": 2, "allowEmpty": true}));
        assert!(v.validate(&json!({"name": ""})).unwrap());
    }

    #[test]
    fn test_configuration_errors() {
        let mut no_bounds = length(json!({"field": "name"}));
        assert!(matches!(
            no_bounds.validate(&json!({})).unwrap_err(),
            ValidatorError::MissingOption { .. }
        ));

        let mut bad_bound = length(json!({"field": "name", "min": "three"}));
        assert!(matches!(
            bad_bound.validate(&json!({})).unwrap_err(),
            ValidatorError::InvalidOption { .. }
        ));
    }
}
