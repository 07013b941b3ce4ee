//! Read access to the data under validation.

use serde_json::{Map, Value};

/// Anything a validator can read attributes from.
///
/// Models expose their columns through this trait; a missing attribute
/// and a null attribute are treated the same by the built-in validators.
pub trait Record {
    /// Returns the value of attribute `field`, if the record has one.
    fn read_attribute(&self, field: &str) -> Option<&Value>;
}

impl Record for Map<String, Value> {
    fn read_attribute(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

/// Only objects have attributes.
impl Record for Value {
    fn read_attribute(&self, field: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(field))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn read_attribute(&self, field: &str) -> Option<&Value> {
        (**self).read_attribute(field)
    }
}
