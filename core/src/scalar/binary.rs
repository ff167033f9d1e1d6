//! scalar/binary.rs
//! Fixed-length raw binary codec.

use std::io::Write;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::scalar::ValueError;
use crate::stream::read_exact_bytes;
use crate::types::CodecError;

/// A codec for fixed-length binary data, written and read verbatim.
pub struct BinaryCodec {
    id: String,
    length: usize,
}

impl BinaryCodec {
    /// `length` is the exact number of bytes this field occupies.
    pub fn new(id: impl Into<String>, length: usize) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }
}

impl Codec for BinaryCodec {
    type Value = Vec<u8>;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &Vec<u8>, sink: &mut dyn Write) -> Result<(), CodecError> {
        if value.len() != self.length {
            return Err(ValueError::InvalidLength {
                id: self.id.clone(),
                expected: self.length,
                actual: value.len(),
            }
            .into());
        }
        sink.write_all(value)?;
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<Vec<u8>, CodecError> {
        read_exact_bytes(source, self.length)
    }
}
