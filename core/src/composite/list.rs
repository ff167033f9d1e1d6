//! composite/list.rs
//! Repetition of one item codec until the source is exhausted.
//!
//! No count, no terminator. The list adds no boundary checking beyond
//! "is there more data": an item codec that disagrees with the remaining
//! byte count surfaces its own error.

use std::io::Write;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::types::CodecError;

/// A codec for back-to-back repetitions of a single item codec.
pub struct ListCodec<C> {
    id: String,
    item: C,
}

impl<C: Codec> ListCodec<C> {
    pub fn new(id: impl Into<String>, item: C) -> Self {
        Self {
            id: id.into(),
            item,
        }
    }
}

impl<C: Codec> Codec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &Vec<C::Value>, sink: &mut dyn Write) -> Result<(), CodecError> {
        for item in value {
            self.item.pack(item, sink)?;
        }
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<Vec<C::Value>, CodecError> {
        let mut items = Vec::new();
        while source.available() > 0 {
            items.push(self.item.parse(source)?);
        }
        Ok(items)
    }
}
