//! Shared validator state: the option set and the accumulated messages.

use crate::foundation::error::{ValidatorError, ValidatorResult};
use crate::foundation::message::Message;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Validator configuration: an insertion-ordered string-keyed mapping.
pub type Options = Map<String, Value>;

/// Returned by option lookups when the key is absent.
static EMPTY_OPTION: Value = Value::String(String::new());

/// State every model validator embeds.
///
/// Options are fixed at construction. Messages only ever grow, and keep
/// the order in which failures were detected.
///
/// # Examples
///
/// ```rust,ignore
/// use model_validator::foundation::ValidatorBase;
/// use serde_json::json;
///
/// let base = ValidatorBase::from_value(json!({"field": "email"}))?;
/// assert!(base.is_set_option(Some("field")));
/// assert_eq!(base.get_option(Some("missing")), &json!(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorBase {
    options: Options,
    messages: Vec<Message>,
}

impl ValidatorBase {
    /// Creates a base over `options` with no messages.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            messages: Vec::new(),
        }
    }

    /// Creates a base from a dynamic value, which must be a mapping.
    pub fn from_value(options: Value) -> ValidatorResult<Self> {
        match options {
            Value::Object(options) => Ok(Self::new(options)),
            other => Err(ValidatorError::options_not_mapping(&other)),
        }
    }

    /// Appends an already-built message.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Messages in the order they were appended.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Hands the accumulated messages to the caller, leaving the list empty.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// The stored option set.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the option stored under `key`, or `""` when there is none.
    ///
    /// A `None` key is looked up as the empty string.
    #[must_use]
    pub fn get_option(&self, key: Option<&str>) -> &Value {
        self.options
            .get(key.unwrap_or_default())
            .unwrap_or(&EMPTY_OPTION)
    }

    /// Returns whether `key` exists in the option set.
    #[must_use]
    pub fn is_set_option(&self, key: Option<&str>) -> bool {
        self.options.contains_key(key.unwrap_or_default())
    }

    /// Dynamic-key variant of [`get_option`](Self::get_option).
    pub fn try_get_option(&self, key: &Value) -> ValidatorResult<&Value> {
        let key = string_or_null("option", key)?;
        Ok(self.get_option(Some(&key)))
    }

    /// Dynamic-key variant of [`is_set_option`](Self::is_set_option).
    pub fn try_is_set_option(&self, key: &Value) -> ValidatorResult<bool> {
        let key = string_or_null("option", key)?;
        Ok(self.is_set_option(Some(&key)))
    }

    /// Returns the option under `key` as a string slice, if it is one.
    #[must_use]
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Deserializes the option under `key` into `T`.
    ///
    /// `Ok(None)` when the option is absent or null. `validator` names the
    /// owner in the error when the value does not fit `T`.
    pub fn option_as<T: DeserializeOwned>(
        &self,
        validator: &str,
        key: &str,
    ) -> ValidatorResult<Option<T>> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value).map(Some).map_err(|err| {
                ValidatorError::invalid_option(validator.to_owned(), key.to_owned(), err.to_string())
            }),
        }
    }

    /// Whether the option under `key` is set to a truthy value.
    #[must_use]
    pub fn option_enabled(&self, key: &str) -> bool {
        self.options.get(key).is_some_and(is_truthy)
    }
}

/// Normalizes a dynamic string-or-null argument.
///
/// Null becomes the empty string; any other non-string value is an
/// `InvalidArgument` for `parameter`.
pub fn string_or_null<'a>(parameter: &'static str, value: &'a Value) -> ValidatorResult<Cow<'a, str>> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Null => Ok(Cow::Borrowed("")),
        other => Err(ValidatorError::invalid_argument(parameter, other)),
    }
}

/// Loose truthiness of a dynamic value.
///
/// Null, `false`, zero, `""`, `"0"` and empty arrays/objects are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !is_falsy_str(s),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// `""` and `"0"` are falsy strings.
#[must_use]
pub fn is_falsy_str(s: &str) -> bool {
    s.is_empty() || s == "0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn base(options: Value) -> ValidatorBase {
        ValidatorBase::from_value(options).unwrap()
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("options"))]
    #[case(json!(42))]
    #[case(json!(true))]
    #[case(json!(["a", "b"]))]
    fn test_from_value_rejects_non_mapping(#[case] value: Value) {
        let err = ValidatorBase::from_value(value).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(matches!(err, ValidatorError::OptionsNotMapping { .. }));
    }

    #[test]
    fn test_from_value_keeps_options() {
        let empty = base(json!({}));
        assert!(empty.options().is_empty());
        assert!(empty.messages().is_empty());

        let full = base(json!({"field": "name", "min": 3}));
        assert_eq!(Value::Object(full.options().clone()), json!({"field": "name", "min": 3}));
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let b = base(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = b.options().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_get_option_missing_is_empty_string() {
        let b = base(json!({}));
        assert_eq!(b.get_option(Some("missing")), &json!(""));
        assert!(!b.is_set_option(Some("missing")));
    }

    #[test]
    fn test_get_option_present() {
        let b = base(json!({"k": "v", "n": null}));
        assert_eq!(b.get_option(Some("k")), &json!("v"));
        assert!(b.is_set_option(Some("k")));
        // a stored null is still "set"
        assert!(b.is_set_option(Some("n")));
        assert_eq!(b.get_option(Some("n")), &Value::Null);
    }

    #[test]
    fn test_none_key_is_empty_key() {
        let b = base(json!({"": "blank"}));
        assert_eq!(b.get_option(None), &json!("blank"));
        assert!(b.is_set_option(None));
        assert_eq!(b.try_get_option(&Value::Null).unwrap(), &json!("blank"));
    }

    #[rstest]
    #[case(json!(123))]
    #[case(json!(1.5))]
    #[case(json!(false))]
    #[case(json!(["k"]))]
    #[case(json!({"k": 1}))]
    fn test_try_option_rejects_non_string_key(#[case] key: Value) {
        let b = base(json!({"k": "v"}));
        let err = b.try_get_option(&key).unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::InvalidArgument { parameter: "option", .. }
        ));
        assert!(b.try_is_set_option(&key).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_try_option_string_key() {
        let b = base(json!({"k": "v"}));
        assert_eq!(b.try_get_option(&json!("k")).unwrap(), &json!("v"));
        assert!(b.try_is_set_option(&json!("k")).unwrap());
        assert!(!b.try_is_set_option(&json!("other")).unwrap());
    }

    #[test]
    fn test_option_as() {
        let b = base(json!({"min": 3, "domain": ["a", "b"], "bad": "x", "nothing": null}));
        assert_eq!(b.option_as::<usize>("StringLength", "min").unwrap(), Some(3));
        assert_eq!(
            b.option_as::<Vec<String>>("Inclusionin", "domain").unwrap(),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(b.option_as::<usize>("StringLength", "max").unwrap(), None);
        assert_eq!(b.option_as::<usize>("StringLength", "nothing").unwrap(), None);

        let err = b.option_as::<usize>("StringLength", "bad").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_push_and_take_messages() {
        let mut b = base(json!({}));
        b.push_message(Message::new("one", None, "A"));
        b.push_message(Message::new("two", None, "B"));
        assert_eq!(b.messages().len(), 2);

        let taken = b.take_messages();
        assert_eq!(taken[0].text(), "one");
        assert_eq!(taken[1].text(), "two");
        assert!(b.messages().is_empty());
    }

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(""), false)]
    #[case(json!("0"), false)]
    #[case(json!([]), false)]
    #[case(json!({}), false)]
    #[case(json!(true), true)]
    #[case(json!(1), true)]
    #[case(json!("false"), true)]
    #[case(json!([0]), true)]
    fn test_is_truthy(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn test_option_enabled() {
        let b = base(json!({"allowEmpty": true, "strict": "0"}));
        assert!(b.option_enabled("allowEmpty"));
        assert!(!b.option_enabled("strict"));
        assert!(!b.option_enabled("absent"));
    }
}
