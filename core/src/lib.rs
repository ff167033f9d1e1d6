//! wirecodec-core
//!
//! Schema-driven binary codec library.
//! Byte-exact encoders/decoders for structured wire formats,
//! composed from small, independently testable field codecs.

#![forbid(unsafe_code)]

// Shared and top level
pub mod codec;
pub mod io;
pub mod types;

// Leaf layers
pub mod scalar;
pub mod stream;

// Composite layers
pub mod composite;

pub use crate::codec::Codec;
pub use crate::io::ByteSource;
pub use crate::types::CodecError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::Codec;
    pub use crate::composite::{
        Field, FieldBag, FieldMap, ListCodec, ObjectCodec, Value, VariableLengthCodec,
    };
    pub use crate::io::ByteSource;
    pub use crate::scalar::{
        BcdStringCodec, BinaryCodec, CharStringCodec, HexStringCodec, StringIntegerCodec,
        StringLongCodec, StringNumberCodec, UnsignedByteCodec, UnsignedShortCodec,
    };
    pub use crate::stream::{CodePointReader, ErrorPolicy};
    pub use crate::types::CodecError;
}
