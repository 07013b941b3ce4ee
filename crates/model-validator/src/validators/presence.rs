//! Presence validator

use crate::validators::{fail, is_empty_value, message_text, required_field};

crate::model_validator! {
    /// Fails when the attribute is missing, null or an empty string.
    ///
    /// `allowEmpty` is ignored: presence is the whole point.
    pub PresenceOfValidator;
    validate(self, record) {
        let field = required_field(self)?;
        if !is_empty_value(record.read_attribute(&field)) {
            return Ok(true);
        }
        let text = message_text(self, "message", "':field' is required", &[(":field", &field)]);
        Ok(fail(self, &text, field, None))
    }
    fn presence_of(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ModelValidator;
    use crate::foundation::ValidatorError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!({"name": "Ada"}), true)]
    #[case(json!({"name": 0}), true)]
    #[case(json!({"name": false}), true)]
    #[case(json!({"name": " "}), true)]
    #[case(json!({"name": ""}), false)]
    #[case(json!({"name": null}), false)]
    #[case(json!({}), false)]
    fn test_presence(#[case] record: Value, #[case] expected: bool) {
        let mut v = presence_of("name");
        assert_eq!(v.validate(&record).unwrap(), expected);
        assert_eq!(v.get_messages().len(), usize::from(!expected));
    }

    #[test]
    fn test_message_shape() {
        let mut v = presence_of("name");
        v.validate(&json!({})).unwrap();

        let message = &v.get_messages()[0];
        assert_eq!(message.text(), "'name' is required");
        assert_eq!(message.field_name(), Some("name"));
        assert_eq!(message.kind(), "PresenceOf");
    }

    #[test]
    fn test_allow_empty_is_ignored() {
        let mut v =
            PresenceOfValidator::from_value(json!({"field": "name", "allowEmpty": true})).unwrap();
        assert!(!v.validate(&json!({"name": ""})).unwrap());
    }

    #[test]
    fn test_custom_message() {
        let mut v = PresenceOfValidator::from_value(
            json!({"field": "name", "message": "Tell us your :field"}),
        )
        .unwrap();
        v.validate(&json!({})).unwrap();
        assert_eq!(v.get_messages()[0].text(), "Tell us your name");
    }

    #[test]
    fn test_missing_field_option() {
        let mut v = PresenceOfValidator::from_value(json!({})).unwrap();
        let err = v.validate(&json!({"name": "Ada"})).unwrap_err();
        assert!(matches!(err, ValidatorError::MissingOption { .. }));
        assert!(v.get_messages().is_empty());
    }
}
