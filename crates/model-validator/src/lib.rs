//! # model-validator
//!
//! Validator base and built-in record validators for ORM models.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use model_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validators: Vec<Box<dyn ModelValidator>> = vec![
//!     Box::new(presence_of("name")),
//!     Box::new(email("email")),
//! ];
//! let messages = validate_record(&mut validators, &json!({"email": "nope"}))?;
//! assert_eq!(messages[0].kind(), "PresenceOf");
//! assert_eq!(messages[1].kind(), "Email");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`model_validator!`] macro, or implement
//! [`ModelValidator`](foundation::ModelValidator) by hand around an embedded
//! [`ValidatorBase`](foundation::ValidatorBase). Messages appended without an
//! explicit type are tagged with the validator's type name minus
//! `"Validator"`.
//!
//! ## Built-in Validators
//!
//! Enabled by the `builtin` feature (on by default):
//!
//! - **Presence**: [`PresenceOfValidator`](validators::PresenceOfValidator)
//! - **Content**: [`EmailValidator`](validators::EmailValidator),
//!   [`RegexValidator`](validators::RegexValidator),
//!   [`UrlValidator`](validators::UrlValidator)
//! - **Length**: [`StringLengthValidator`](validators::StringLengthValidator)
//! - **Membership**: [`InclusioninValidator`](validators::InclusioninValidator),
//!   [`ExclusioninValidator`](validators::ExclusioninValidator)
//! - **Numeric**: [`NumericalityValidator`](validators::NumericalityValidator)

pub mod foundation;
mod macros;
pub mod prelude;
#[cfg(feature = "builtin")]
pub mod validators;
