//! Macros for declaring model validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`model_validator!`] — struct embedding a `ValidatorBase`, constructors,
//!   the `ModelValidator` impl and an optional single-field factory fn
//!
//! # Examples
//!
//! ```rust,ignore
//! use model_validator::model_validator;
//! use model_validator::foundation::ModelValidator;
//!
//! model_validator! {
//!     /// Fails when the record has no `id`.
//!     pub HasIdValidator;
//!     validate(self, record) {
//!         if record.read_attribute("id").is_some() {
//!             return Ok(true);
//!         }
//!         self.append_message(Some("id is missing"), Some("id".into()), None);
//!         Ok(false)
//!     }
//! }
//! ```

// ============================================================================
// MODEL VALIDATOR MACRO
// ============================================================================

/// Declares a model validator: struct, `new` / `from_value` constructors and
/// the `ModelValidator` implementation.
///
/// `#[derive(Debug, Clone, PartialEq)]` is always applied.
///
/// # Variants
///
/// **Plain**:
/// ```rust,ignore
/// model_validator! {
///     pub NotBlankValidator;
///     validate(self, record) { Ok(true) }
/// }
/// ```
///
/// **With factory** (`fn name(field)` builds `{"field": field}`):
/// ```rust,ignore
/// model_validator! {
///     pub PresenceOfValidator;
///     validate(self, record) { Ok(true) }
///     fn presence_of(field);
/// }
/// ```
#[macro_export]
macro_rules! model_validator {
    // ── Variant 1: with factory fn ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        validate($self_:ident, $record:ident) $body:block
        fn $factory:ident($field:ident);
    ) => {
        $crate::model_validator! {
            $(#[$meta])*
            $vis $name;
            validate($self_, $record) $body
        }

        /// Creates the validator for a single field with default options.
        #[must_use]
        $vis fn $factory($field: impl Into<String>) -> $name {
            let mut options = $crate::foundation::Options::new();
            options.insert(
                "field".to_owned(),
                $crate::foundation::Value::String($field.into()),
            );
            $name::new(options)
        }
    };

    // ── Variant 2: plain ─────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        validate($self_:ident, $record:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            base: $crate::foundation::ValidatorBase,
        }

        impl $name {
            /// Creates the validator over `options`.
            #[must_use]
            pub fn new(options: $crate::foundation::Options) -> Self {
                Self {
                    base: $crate::foundation::ValidatorBase::new(options),
                }
            }

            /// Creates the validator from a dynamic value, which must be a mapping.
            pub fn from_value(
                options: $crate::foundation::Value,
            ) -> $crate::foundation::ValidatorResult<Self> {
                Ok(Self {
                    base: $crate::foundation::ValidatorBase::from_value(options)?,
                })
            }
        }

        impl $crate::foundation::ModelValidator for $name {
            fn base(&self) -> &$crate::foundation::ValidatorBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::foundation::ValidatorBase {
                &mut self.base
            }

            fn validate(
                &mut $self_,
                $record: &dyn $crate::foundation::Record,
            ) -> $crate::foundation::ValidatorResult<bool> {
                // provided methods (`type_name`, `base`, ...) in the body
                #[allow(unused_imports)]
                use $crate::foundation::ModelValidator as _;
                $body
            }
        }
    };
}
