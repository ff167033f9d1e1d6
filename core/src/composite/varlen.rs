//! composite/varlen.rs
//! Length-prefixed fields with value-dependent content codecs.
//!
//! The packed byte length and the decoded value are related by two
//! caller-supplied pure functions captured at schema construction:
//! `length_of` computes the length when packing, `select` yields the
//! codec for a given length on both sides. This is the mechanism for
//! TLV-like fields.

use std::io::Write;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::scalar::ValueError;
use crate::types::CodecError;

/// A codec that writes a length field followed by content whose codec is
/// chosen from that length.
///
/// `L` is the length codec; any codec over an unsigned integer that
/// converts to and from `usize` fits, so `UnsignedByteCodec` and
/// `UnsignedShortCodec` slot in directly.
pub struct VariableLengthCodec<L: Codec, V> {
    id: String,
    length_codec: L,
    select: Box<dyn Fn(usize) -> Box<dyn Codec<Value = V>> + Send + Sync>,
    length_of: Box<dyn Fn(&V) -> usize + Send + Sync>,
}

impl<L: Codec, V> VariableLengthCodec<L, V> {
    pub fn new(
        id: impl Into<String>,
        length_codec: L,
        select: impl Fn(usize) -> Box<dyn Codec<Value = V>> + Send + Sync + 'static,
        length_of: impl Fn(&V) -> usize + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            length_codec,
            select: Box::new(select),
            length_of: Box::new(length_of),
        }
    }
}

impl<L, V> Codec for VariableLengthCodec<L, V>
where
    L: Codec,
    L::Value: Copy + Into<usize> + TryFrom<usize>,
{
    type Value = V;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &V, sink: &mut dyn Write) -> Result<(), CodecError> {
        let length = (self.length_of)(value);
        // A length the length codec cannot carry fails before any byte
        // is written.
        let encoded =
            L::Value::try_from(length).map_err(|_| ValueError::LengthUnrepresentable {
                id: self.id.clone(),
                length,
            })?;
        self.length_codec.pack(&encoded, sink)?;
        (self.select)(length).pack(value, sink)
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<V, CodecError> {
        let length: usize = self.length_codec.parse(source)?.into();
        (self.select)(length).parse(source)
    }
}
