//! composite/data.rs
//! The named-field container object codecs parse into and pack from.
//!
//! A fresh bag is created at the start of every object parse; the bag a
//! caller supplies to pack is read, never retained. Ownership stays with
//! the caller.

use std::collections::{BTreeMap, BTreeSet};

use crate::composite::value::{FieldValue, Value};
use crate::composite::FieldError;
use crate::types::CodecError;

/// A mutable mapping from field id to value. Ids are unique; iteration
/// order carries no meaning.
pub trait FieldBag {
    /// Ids currently set.
    fn fields(&self) -> BTreeSet<&str>;

    /// Value under `id`, if set.
    fn get(&self, id: &str) -> Option<&Value>;

    /// Sets `id` to `value`, replacing any previous value. Fluent.
    fn set(&mut self, id: &str, value: Value) -> &mut Self;

    /// Removes `id`. Fluent.
    fn clear(&mut self, id: &str) -> &mut Self;
}

/// The provided map-backed bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: BTreeMap<String, Value>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed read: `Missing` if the id is unset, `TypeMismatch` if the
    /// stored value has a different tag.
    pub fn get_as<T: FieldValue>(&self, id: &str) -> Result<T, CodecError> {
        match self.fields.get(id) {
            Some(value) => T::try_from_value(value, id),
            None => Err(FieldError::Missing { id: id.to_string() }.into()),
        }
    }
}

impl FieldBag for FieldMap {
    fn fields(&self) -> BTreeSet<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    fn get(&self, id: &str) -> Option<&Value> {
        self.fields.get(id)
    }

    fn set(&mut self, id: &str, value: Value) -> &mut Self {
        self.fields.insert(id.to_string(), value);
        self
    }

    fn clear(&mut self, id: &str) -> &mut Self {
        self.fields.remove(id);
        self
    }
}
