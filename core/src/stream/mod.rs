//! stream/mod.rs
//! Exact-count reads over a streaming byte source.
//!
//! Design notes:
//! - `read_exact_bytes` stops at exactly N bytes; it never over-reads a
//!   source that still has data, and a short source reports how much was
//!   actually obtained.
//! - `read_exact_codepoints` counts Unicode code points, not bytes and not
//!   UTF-16 units. Field boundaries in text fields are code-point exact.

use std::fmt;
use std::io::Read;

use encoding_rs::Encoding;
use thiserror::Error;

use crate::types::CodecError;

mod reader;

pub use reader::{encode_str, CodePointReader, ErrorPolicy};

/// What a short read was counting when it hit end of stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Bytes,
    Chars,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Bytes => write!(f, "bytes"),
            Unit::Chars => write!(f, "chars"),
        }
    }
}

/// Stream-level error (short read, decode failure).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Fewer bytes or code points were available than required.
    /// `read` reports how much was actually consumed.
    #[error("end of stream reached after reading {read} {unit}, {unit} expected [{expected}]")]
    EndOfStream {
        read: usize,
        expected: usize,
        unit: Unit,
    },

    /// Malformed byte sequence, raised only under `ErrorPolicy::Strict`.
    /// Carries the offending byte length.
    #[error("malformed input of length [{length}]")]
    Malformed { length: usize },

    /// Character with no representation in the target encoding, raised
    /// only when encoding under `ErrorPolicy::Strict`.
    #[error("unmappable character [{character:?}]")]
    Unmappable { character: char },
}

/// Reads exactly `length` bytes, or fails with `EndOfStream` reporting the
/// count actually obtained.
pub fn read_exact_bytes<R: Read + ?Sized>(
    source: &mut R,
    length: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut bytes = vec![0u8; length];
    let mut total = 0;
    while total < length {
        let read = source.read(&mut bytes[total..])?;
        if read == 0 {
            break;
        }
        total += read;
    }
    if total != length {
        return Err(StreamError::EndOfStream {
            read: total,
            expected: length,
            unit: Unit::Bytes,
        }
        .into());
    }
    Ok(bytes)
}

/// Reads exactly `length` Unicode code points in the given encoding, or
/// fails with `EndOfStream` counting code points, not bytes.
pub fn read_exact_codepoints<R: Read + ?Sized>(
    source: &mut R,
    length: usize,
    encoding: &'static Encoding,
    policy: ErrorPolicy,
) -> Result<String, CodecError> {
    let mut reader = CodePointReader::new(source, encoding, policy);
    let mut value = String::with_capacity(length);
    for read in 0..length {
        match reader.read()? {
            Some(code_point) => value.push(code_point),
            None => {
                return Err(StreamError::EndOfStream {
                    read,
                    expected: length,
                    unit: Unit::Chars,
                }
                .into())
            }
        }
    }
    Ok(value)
}
