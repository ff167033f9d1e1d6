//! scalar/hex.rs
//! Fixed-digit hexadecimal and BCD digit-string codecs.
//!
//! Design notes:
//! - A field of N digits occupies ceil(N/2) bytes. Odd digit counts gain
//!   a synthetic leading zero on pack and drop it again on parse.
//! - BCD is hex restricted to decimal digits, built by composition over
//!   the hex codec rather than inheritance: a digit-only validation pass
//!   runs before pack and after parse.

use std::io::Write;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::scalar::{pad_start, ValueError};
use crate::stream::read_exact_bytes;
use crate::types::CodecError;

/// A codec for a fixed-digit hexadecimal string. Parsed digits are
/// lowercase.
pub struct HexStringCodec {
    id: String,
    length: usize,
}

impl HexStringCodec {
    /// `length` is the number of hex digits, not bytes.
    pub fn new(id: impl Into<String>, length: usize) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }

    fn byte_size(&self) -> usize {
        (self.length + 1) / 2
    }
}

impl Codec for HexStringCodec {
    type Value = String;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &String, sink: &mut dyn Write) -> Result<(), CodecError> {
        let actual = value.chars().count();
        if actual > self.length {
            return Err(ValueError::LengthExceeded {
                id: self.id.clone(),
                max: self.length,
                actual,
            }
            .into());
        }
        let padded = pad_start(value, self.byte_size() * 2, '0');
        let bytes = hex::decode(&padded).map_err(|_| ValueError::InvalidHexDigit {
            id: self.id.clone(),
            value: value.clone(),
        })?;
        sink.write_all(&bytes)?;
        Ok(())
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<String, CodecError> {
        let digits = hex::encode(read_exact_bytes(source, self.byte_size())?);
        Ok(digits[digits.len() - self.length..].to_string())
    }
}

/// A codec for a fixed-digit BCD string: hex digits restricted to `0-9`.
pub struct BcdStringCodec {
    hex: HexStringCodec,
}

impl BcdStringCodec {
    pub fn new(id: impl Into<String>, length: usize) -> Self {
        Self {
            hex: HexStringCodec::new(id, length),
        }
    }

    fn check_digits(&self, value: &str) -> Result<(), CodecError> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValueError::InvalidBcd {
                id: self.hex.id().to_string(),
                value: value.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Codec for BcdStringCodec {
    type Value = String;

    fn id(&self) -> &str {
        self.hex.id()
    }

    fn pack(&self, value: &String, sink: &mut dyn Write) -> Result<(), CodecError> {
        self.check_digits(value)?;
        self.hex.pack(value, sink)
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<String, CodecError> {
        let parsed = self.hex.parse(source)?;
        self.check_digits(&parsed)?;
        Ok(parsed)
    }
}
