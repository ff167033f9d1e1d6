//! scalar/string_number.rs
//! Numbers stored as fixed-width digit text in a configurable radix.
//!
//! Design notes:
//! - Byte encoding is delegated to an injected text codec (CharString,
//!   BcdString, ...), so the same numeric field works across character
//!   sets and digit encodings.
//! - A value whose padded representation exceeds the configured digit
//!   width is rejected before anything is written.
//! - Overflow on parse surfaces as a number-format failure, never a
//!   silent wrap.

use std::io::Write;
use std::marker::PhantomData;
use std::num::ParseIntError;

use crate::codec::Codec;
use crate::io::ByteSource;
use crate::scalar::{pad_start, ValueError};
use crate::types::CodecError;

/// Integer types a `StringNumberCodec` can carry.
pub trait RadixNumber: Copy + Send + Sync {
    fn format_radix(self, radix: u32) -> String;
    fn parse_radix(text: &str, radix: u32) -> Result<Self, ParseIntError>;
}

macro_rules! radix_number {
    ($($ty:ty),*) => {$(
        impl RadixNumber for $ty {
            fn format_radix(self, radix: u32) -> String {
                // Magnitude in u128 so MIN has a representable absolute
                // value.
                let negative = self < 0;
                let mut magnitude = i128::from(self).unsigned_abs();
                let base = u128::from(radix);
                let mut digits = Vec::new();
                loop {
                    let digit = (magnitude % base) as u32;
                    digits.push(char::from_digit(digit, radix).unwrap_or('0'));
                    magnitude /= base;
                    if magnitude == 0 {
                        break;
                    }
                }
                if negative {
                    digits.push('-');
                }
                digits.iter().rev().collect()
            }

            fn parse_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
                <$ty>::from_str_radix(text, radix)
            }
        }
    )*};
}

radix_number!(i32, i64);

/// A codec for a number formatted as `length` digits of radix `radix`
/// text, left-padded with '0'.
pub struct StringNumberCodec<T> {
    id: String,
    text: Box<dyn Codec<Value = String>>,
    length: usize,
    radix: u32,
    _number: PhantomData<fn() -> T>,
}

/// 32-bit variant.
pub type StringIntegerCodec = StringNumberCodec<i32>;
/// 64-bit variant.
pub type StringLongCodec = StringNumberCodec<i64>;

impl<T: RadixNumber> StringNumberCodec<T> {
    /// `text` is the codec that turns the digit string into bytes;
    /// `length` is the fixed digit width; `radix` must be in `2..=36`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`. Schemas are constructed
    /// once, up front; an unusable radix fails there, not mid-parse.
    pub fn new(
        id: impl Into<String>,
        text: impl Codec<Value = String> + 'static,
        length: usize,
        radix: u32,
    ) -> Self {
        assert!(
            (2..=36).contains(&radix),
            "radix must be in 2..=36, got {radix}"
        );
        Self {
            id: id.into(),
            text: Box::new(text),
            length,
            radix,
            _number: PhantomData,
        }
    }
}

impl<T: RadixNumber + 'static> Codec for StringNumberCodec<T> {
    type Value = T;

    fn id(&self) -> &str {
        &self.id
    }

    fn pack(&self, value: &T, sink: &mut dyn Write) -> Result<(), CodecError> {
        let padded = pad_start(&value.format_radix(self.radix), self.length, '0');
        let actual = padded.chars().count();
        if actual != self.length {
            return Err(ValueError::InvalidLength {
                id: self.id.clone(),
                expected: self.length,
                actual,
            }
            .into());
        }
        self.text.pack(&padded, sink)
    }

    fn parse(&self, source: &mut dyn ByteSource) -> Result<T, CodecError> {
        let text = self.text.parse(source)?;
        match T::parse_radix(text.trim(), self.radix) {
            Ok(value) => Ok(value),
            Err(_) => Err(ValueError::NumberFormat {
                id: self.id.clone(),
                value: text,
                radix: self.radix,
            }
            .into()),
        }
    }
}
