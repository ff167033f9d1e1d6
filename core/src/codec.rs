//! codec.rs
//! The shared contract every codec implements.
//!
//! Design notes:
//! - A codec is identified by a stable string id, used in error messages
//!   and as the field-bag key when wrapped by a `Field`.
//! - `pack` must write the exact byte sequence that `parse` reconstructs
//!   into an equal value (round-trip law), for any value accepted
//!   without error.
//! - Codecs are immutable after construction and hold no per-call state,
//!   so one instance is safely shared and invoked from multiple threads
//!   against independent sources/sinks. Hence the `Send + Sync` bound.

use std::io::Write;

use crate::io::ByteSource;
use crate::types::CodecError;

/// A unit that both encodes (packs) a typed value to bytes and decodes
/// (parses) bytes back into that typed value.
pub trait Codec: Send + Sync {
    /// The value type this codec reads and writes.
    type Value;

    /// Stable identifier, embedded in error messages.
    fn id(&self) -> &str;

    /// Encode `value` into `sink`.
    ///
    /// Contract violations (wrong length, out-of-range number, ...) fail
    /// before any byte is written for this value.
    fn pack(&self, value: &Self::Value, sink: &mut dyn Write) -> Result<(), CodecError>;

    /// Decode one value from `source`, consuming exactly the bytes that
    /// belong to it. Sibling fields begin immediately after.
    fn parse(&self, source: &mut dyn ByteSource) -> Result<Self::Value, CodecError>;
}
