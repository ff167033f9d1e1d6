//! scalar/mod.rs
//! Leaf codecs: fixed-width binary, text, digit strings, and integers.
//!
//! All pack-time contract violations fail before any byte is written, so a
//! rejected value never leaves a partial write in the sink.

use thiserror::Error;

pub mod binary;
pub mod hex;
pub mod number;
pub mod string_number;
pub mod text;

pub use binary::BinaryCodec;
pub use hex::{BcdStringCodec, HexStringCodec};
pub use number::{UnsignedByteCodec, UnsignedShortCodec};
pub use string_number::{StringIntegerCodec, StringLongCodec, StringNumberCodec};
pub use text::CharStringCodec;

/// Pack-time contract violations and number-format failures.
/// Every variant names the codec id so the failing field of a composed
/// schema is visible in the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("{id}: value must be of length {expected}, but was [{actual}]")]
    InvalidLength {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{id}: value length must be less than or equal to {max}, but was [{actual}]")]
    LengthExceeded { id: String, max: usize, actual: usize },

    #[error("{id}: invalid hex string [{value}]")]
    InvalidHexDigit { id: String, value: String },

    #[error("{id}: invalid BCD string [{value}]")]
    InvalidBcd { id: String, value: String },

    #[error("{id}: cannot parse [{value}] as a radix {radix} number")]
    NumberFormat {
        id: String,
        value: String,
        radix: u32,
    },

    #[error("{id}: length {length} is not representable by the length codec")]
    LengthUnrepresentable { id: String, length: usize },
}

/// Pads the start of `value` with `padding` until it reaches `length`
/// characters. Values already at or beyond `length` come back unchanged.
pub(crate) fn pad_start(value: &str, length: usize, padding: char) -> String {
    let count = value.chars().count();
    if count >= length {
        value.to_string()
    } else {
        let mut padded = String::with_capacity(length);
        for _ in count..length {
            padded.push(padding);
        }
        padded.push_str(value);
        padded
    }
}
