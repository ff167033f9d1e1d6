//! stream/reader.rs
//! One code point at a time from a byte stream, for any supported encoding.
//!
//! Design notes:
//! - Bytes are fed to the incremental decoder one at a time, so the reader
//!   stops at the exact code point boundary. Sibling fields begin
//!   immediately after; over-reading would corrupt them.
//! - The decoder emits whole scalar values only. Surrogate pairs in the
//!   UTF-16 family are combined before anything surfaces here.
//! - A malformed sequence can resolve to two scalar values at once (the
//!   replacement plus the byte that terminated the sequence); the extra
//!   one is queued so no consumed byte is ever dropped.

use std::collections::VecDeque;
use std::io::Read;

use encoding_rs::{Decoder, DecoderResult, EncoderResult, Encoding};

use crate::stream::StreamError;
use crate::types::CodecError;

/// Decoder error policy.
///
/// `Replace` substitutes U+FFFD for malformed input and `b'?'` for
/// unmappable characters when encoding. `Strict` surfaces both as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    Replace,
    Strict,
}

/// Reads one Unicode code point per call from a byte-oriented source.
pub struct CodePointReader<'a, R: Read + ?Sized> {
    source: &'a mut R,
    decoder: Decoder,
    policy: ErrorPolicy,
    decoded: VecDeque<char>,
    /// Set once the source is exhausted and the decoder has been flushed;
    /// a flushed decoder must not be fed again.
    finished: bool,
}

impl<'a, R: Read + ?Sized> CodePointReader<'a, R> {
    /// Decoders are built without BOM handling: a byte-order mark inside a
    /// fixed field is data, and sniffing would consume sibling bytes.
    pub fn new(source: &'a mut R, encoding: &'static Encoding, policy: ErrorPolicy) -> Self {
        Self {
            source,
            decoder: encoding.new_decoder_without_bom_handling(),
            policy,
            decoded: VecDeque::new(),
            finished: false,
        }
    }

    /// Next code point, or `Ok(None)` once the source is exhausted.
    ///
    /// End of source with no bytes consumed toward the next code point is
    /// the `None` signal. End of source mid-character is a decode problem
    /// instead: replaced under `Replace`, `StreamError::Malformed` under
    /// `Strict`.
    pub fn read(&mut self) -> Result<Option<char>, CodecError> {
        if let Some(code_point) = self.decoded.pop_front() {
            return Ok(Some(code_point));
        }
        if self.finished {
            return Ok(None);
        }
        loop {
            let mut byte = [0u8; 1];
            if self.source.read(&mut byte)? == 0 {
                // Source exhausted: flush once. A flush with bytes held
                // mid-character yields a replacement under Replace and a
                // Malformed error under Strict; an empty flush yields
                // nothing and the reader reports end of stream.
                self.finished = true;
                self.decode(&[], true)?;
                return Ok(self.decoded.pop_front());
            }
            self.decode(&byte, false)?;
            if let Some(code_point) = self.decoded.pop_front() {
                return Ok(Some(code_point));
            }
        }
    }

    fn decode(&mut self, input: &[u8], last: bool) -> Result<(), CodecError> {
        // One input byte yields at most a surrogate pair plus a trailing
        // unit; eight slots is comfortably above every flush case.
        let mut units = [0u16; 8];
        let written = match self.policy {
            ErrorPolicy::Replace => {
                let (_, _, written, _) = self.decoder.decode_to_utf16(input, &mut units, last);
                written
            }
            ErrorPolicy::Strict => {
                let (result, _, written) =
                    self.decoder
                        .decode_to_utf16_without_replacement(input, &mut units, last);
                if let DecoderResult::Malformed(length, _) = result {
                    return Err(StreamError::Malformed {
                        length: length as usize,
                    }
                    .into());
                }
                written
            }
        };
        for unit in char::decode_utf16(units[..written].iter().copied()) {
            self.decoded
                .push_back(unit.unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        Ok(())
    }
}

/// Encodes `value` into the target encoding.
///
/// Under `Replace`, unmappable characters become `b'?'`; under `Strict`
/// they fail with `StreamError::Unmappable`. UTF-16BE/LE are produced
/// manually: encoding_rs follows the WHATWG model, which never encodes
/// into UTF-16.
pub fn encode_str(
    encoding: &'static Encoding,
    value: &str,
    policy: ErrorPolicy,
) -> Result<Vec<u8>, CodecError> {
    if encoding == encoding_rs::UTF_16BE {
        return Ok(encode_utf16(value, true));
    }
    if encoding == encoding_rs::UTF_16LE {
        return Ok(encode_utf16(value, false));
    }

    let mut encoder = encoding.new_encoder();
    let mut encoded = Vec::with_capacity(value.len());
    let mut buffer = [0u8; 256];
    let mut rest = value;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
        encoded.extend_from_slice(&buffer[..written]);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(character) => match policy {
                ErrorPolicy::Replace => encoded.push(b'?'),
                ErrorPolicy::Strict => {
                    return Err(StreamError::Unmappable { character }.into());
                }
            },
        }
    }
    Ok(encoded)
}

fn encode_utf16(value: &str, big_endian: bool) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(value.len() * 2);
    for unit in value.encode_utf16() {
        let bytes = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        encoded.extend_from_slice(&bytes);
    }
    encoded
}
