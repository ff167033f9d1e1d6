//! composite/field.rs
//! One named field of an object schema: child codec plus applicability.
//!
//! Design notes:
//! - The predicate is captured at schema construction as a plain closure
//!   over the partially-built bag. A field whose predicate is false is
//!   skipped entirely on both pack and parse: zero bytes, no bag access.
//! - Applicability lives here, on the wrapper, not on leaf codecs; leaves
//!   stay parent-agnostic.

use std::io::Write;

use crate::codec::Codec;
use crate::composite::value::{FieldValue, Value};
use crate::io::ByteSource;
use crate::types::CodecError;

/// A child codec bound to a field id and an applicability predicate over
/// the bag type `B`.
pub struct Field<B> {
    id: String,
    codec: Box<dyn Codec<Value = Value>>,
    applicable: Box<dyn Fn(&B) -> bool + Send + Sync>,
}

impl<B> Field<B> {
    /// A field that is always present.
    pub fn new<C>(id: impl Into<String>, codec: C) -> Self
    where
        C: Codec + 'static,
        C::Value: FieldValue,
    {
        Self::when(id, codec, |_| true)
    }

    /// A field present only when `applicable` holds over the fields
    /// processed before it in declaration order.
    pub fn when<C, F>(id: impl Into<String>, codec: C, applicable: F) -> Self
    where
        C: Codec + 'static,
        C::Value: FieldValue,
        F: Fn(&B) -> bool + Send + Sync + 'static,
    {
        let id = id.into();
        Self {
            codec: Box::new(ValueAdapter {
                id: id.clone(),
                inner: codec,
            }),
            applicable: Box::new(applicable),
            id,
        }
    }

    /// The bag key this field reads and writes.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn applicable(&self, bag: &B) -> bool {
        (self.applicable)(bag)
    }

    pub(crate) fn pack(&self, value: &Value, sink: &mut dyn Write) -> Result<(), CodecError> {
        self.codec.pack(value, sink)
    }

    pub(crate) fn parse(&self, source: &mut dyn ByteSource) -> Result<Value, CodecError> {
        self.codec.parse(source)
    }
}

/// Bridges a typed child codec to the bag's `Value` representation.
/// Type mismatches are reported against the field id, the key the caller
/// actually set.
struct ValueAdapter<C> {
    id: String,
    inner: C,
}

impl<C> Codec for ValueAdapter<C>
where
    C: Codec,
    C::Value: FieldValue,
{
    type Value = Value;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &Value, sink: &mut dyn Write) -> Result<(), CodecError> {
        let typed = C::Value::try_from_value(value, &self.id)?;
        self.inner.pack(&typed, sink)
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<Value, CodecError> {
        Ok(self.inner.parse(source)?.into_value())
    }
}
