//! scalar/text.rs
//! Fixed code-point-length text codec for an arbitrary character encoding.
//!
//! Design notes:
//! - Length counts Unicode code points, never bytes and never UTF-16
//!   units. Three CJK characters in UTF-8 occupy nine bytes and still
//!   count as three.
//! - Decoding substitutes malformed or unmappable content, it never
//!   fails; this mirrors the field-content policy of the formats this
//!   library targets. The strict reader remains available through
//!   `stream::CodePointReader` for callers that must observe failures.

use std::io::Write;

use encoding_rs::Encoding;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::scalar::ValueError;
use crate::stream::{encode_str, read_exact_codepoints, ErrorPolicy};
use crate::types::CodecError;

/// A codec for text of a fixed number of code points in a configured
/// character encoding.
pub struct CharStringCodec {
    id: String,
    length: usize,
    encoding: &'static Encoding,
}

impl CharStringCodec {
    pub fn new(id: impl Into<String>, length: usize, encoding: &'static Encoding) -> Self {
        Self {
            id: id.into(),
            length,
            encoding,
        }
    }
}

impl Codec for CharStringCodec {
    type Value = String;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &String, sink: &mut dyn Write) -> Result<(), CodecError> {
        let count = value.chars().count();
        if count != self.length {
            return Err(ValueError::InvalidLength {
                id: self.id.clone(),
                expected: self.length,
                actual: count,
            }
            .into());
        }
        let encoded = encode_str(self.encoding, value, ErrorPolicy::Replace)?;
        sink.write_all(&encoded)?;
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<String, CodecError> {
        read_exact_codepoints(source, self.length, self.encoding, ErrorPolicy::Replace)
    }
}
