//! composite/object.rs
//! Ordered field composition into and out of a field bag.
//!
//! Field order is significant and caller-defined. Later fields'
//! predicates may inspect earlier fields' values, so a format byte can
//! gate an optional block further down the schema.

use std::io::Write;

use crate::codec::Codec;
use crate::composite::data::FieldBag;
use crate::composite::field::Field;
use crate::composite::FieldError;
use crate::io::ByteSource;
use crate::types::CodecError;

/// A codec for a record of named fields, parameterized over the bag
/// type.
pub struct ObjectCodec<B> {
    id: String,
    factory: Box<dyn Fn() -> B + Send + Sync>,
    fields: Vec<Field<B>>,
}

impl<B: FieldBag> ObjectCodec<B> {
    /// `factory` produces the fresh, empty bag each parse starts from.
    pub fn new(
        id: impl Into<String>,
        factory: impl Fn() -> B + Send + Sync + 'static,
        fields: Vec<Field<B>>,
    ) -> Self {
        Self {
            id: id.into(),
            factory: Box::new(factory),
            fields,
        }
    }
}

impl<B: FieldBag> Codec for ObjectCodec<B> {
    type Value = B;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &B, sink: &mut dyn Write) -> Result<(), CodecError> {
        for field in &self.fields {
            if field.applicable(value) {
                let stored = value.get(field.id()).ok_or_else(|| FieldError::Missing {
                    id: field.id().to_string(),
                })?;
                field.pack(stored, sink)?;
            }
        }
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<B, CodecError> {
        let mut bag = (self.factory)();
        for field in &self.fields {
            if field.applicable(&bag) {
                let value = field.parse(source)?;
                bag.set(field.id(), value);
            }
        }
        Ok(bag)
    }
}
