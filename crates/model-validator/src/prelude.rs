//! Prelude module for convenient imports.
//!
//! Provides a single `use model_validator::prelude::*;` import that brings
//! in the validator contract, its state, messages, errors and every
//! built-in validator.

// ============================================================================
// FOUNDATION: Core traits, state, messages, errors
// ============================================================================

pub use crate::foundation::{
    Message, ModelValidator, Options, Record, ValidatorBase, ValidatorError, ValidatorResult,
    validate_record,
};

// ============================================================================
// BUILTIN-GATED: Record validators
// ============================================================================

#[cfg(feature = "builtin")]
pub use crate::validators::{
    EmailValidator, ExclusioninValidator, InclusioninValidator, NumericalityValidator,
    PresenceOfValidator, RegexValidator, StringLengthValidator, UrlValidator, email, numericality,
    presence_of, url,
};
