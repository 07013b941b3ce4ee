//! String content validators
//!
//! Validators for checking attribute content and formats.

use std::sync::LazyLock;

use crate::foundation::{
    ModelValidator, Options, Record, ValidatorBase, ValidatorError, ValidatorResult, Value,
    simple_type_name,
};
use crate::validators::{fail, message_text, required_field, scalar_string, skips_empty};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::model_validator! {
    /// Validates e-mail format.
    pub EmailValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) {
            return Ok(true);
        }
        if value
            .and_then(scalar_string)
            .is_some_and(|s| EMAIL_REGEX.is_match(&s))
        {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "Value of field ':field' must have a valid e-mail format",
            &[(":field", &field)],
        );
        Ok(fail(self, &text, field, None))
    }
    fn email(field);
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that the whole attribute matches the `pattern` option.
///
/// The first match must span the entire value; a match on a substring
/// fails. The pattern is compiled once, when the validator is built.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    base: ValidatorBase,
    pattern: regex::Regex,
}

impl RegexValidator {
    /// Creates the validator over `options`, compiling `pattern`.
    pub fn new(options: Options) -> ValidatorResult<Self> {
        Self::with_base(ValidatorBase::new(options))
    }

    /// Creates the validator from a dynamic value, which must be a mapping.
    pub fn from_value(options: Value) -> ValidatorResult<Self> {
        Self::with_base(ValidatorBase::from_value(options)?)
    }

    fn with_base(base: ValidatorBase) -> ValidatorResult<Self> {
        let name = simple_type_name(std::any::type_name::<Self>());
        let Some(source) = base.option_str("pattern") else {
            return Err(ValidatorError::missing_option(name, "pattern"));
        };
        let pattern = regex::Regex::new(source)
            .map_err(|err| ValidatorError::invalid_option(name, "pattern", err.to_string()))?;
        Ok(Self { base, pattern })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &regex::Regex {
        &self.pattern
    }

    fn matches_whole(&self, s: &str) -> bool {
        self.pattern
            .find(s)
            .is_some_and(|m| m.start() == 0 && m.end() == s.len())
    }
}

impl ModelValidator for RegexValidator {
    fn base(&self) -> &ValidatorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ValidatorBase {
        &mut self.base
    }

    fn validate(&mut self, record: &dyn Record) -> ValidatorResult<bool> {
        let field = required_field(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) {
            return Ok(true);
        }
        if value
            .and_then(scalar_string)
            .is_some_and(|s| self.matches_whole(&s))
        {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "Value of field ':field' doesn't match regular expression",
            &[(":field", &field)],
        );
        Ok(fail(self, &text, field, None))
    }
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::model_validator! {
    /// Validates that the attribute is an absolute URL with a host.
    pub UrlValidator;
    validate(self, record) {
        let field = required_field(self)?;
        let value = record.read_attribute(&field);
        if skips_empty(self, value) {
            return Ok(true);
        }
        let valid = value
            .and_then(scalar_string)
            .and_then(|s| ::url::Url::parse(&s).ok())
            .is_some_and(|parsed| parsed.has_host());
        if valid {
            return Ok(true);
        }
        let text = message_text(
            self,
            "message",
            "':field' does not have a valid url format",
            &[(":field", &field)],
        );
        Ok(fail(self, &text, field, None))
    }
    fn url(field);
}

// ============================================================================
// TESTS
// ============================================================================
