//! scalar/number.rs
//! Unsigned fixed-width integer codecs.
//!
//! The value types carry the range contract: a `u8` cannot be out of
//! `[0, 255]` and parsing cannot sign-extend, so no runtime bounds checks
//! are needed on either side. Multi-byte integers are big-endian
//! (network byte order).

use std::io::Write;

use byteorder::{BigEndian, ByteOrder};

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::stream::read_exact_bytes;
use crate::types::CodecError;

/// A codec for a single unsigned byte.
pub struct UnsignedByteCodec {
    id: String,
}

impl UnsignedByteCodec {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Codec for UnsignedByteCodec {
    type Value = u8;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &u8, sink: &mut dyn Write) -> Result<(), CodecError> {
        sink.write_all(&[*value])?;
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<u8, CodecError> {
        Ok(read_exact_bytes(source, 1)?[0])
    }
}

/// A codec for two consecutive bytes as a big-endian unsigned integer.
pub struct UnsignedShortCodec {
    id: String,
}

impl UnsignedShortCodec {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Codec for UnsignedShortCodec {
    type Value = u16;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &u16, sink: &mut dyn Write) -> Result<(), CodecError> {
        let mut bytes = [0u8; 2];
        BigEndian::write_u16(&mut bytes, *value);
        sink.write_all(&bytes)?;
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<u16, CodecError> {
        let bytes = read_exact_bytes(source, 2)?;
        Ok(BigEndian::read_u16(&bytes))
    }
}
