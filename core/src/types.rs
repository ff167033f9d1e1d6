//! types.rs
//! Unified codec error covering I/O, stream, scalar value, and field errors.
//!
//! Design notes:
//! - Ergonomic `From<T>` impls enable `?` across every codec layer.
//! - I/O failures from the underlying source/sink propagate unchanged;
//!   they are never reinterpreted as format errors.
//! - Every error is terminal for the current pack/parse call. No internal
//!   recovery, no retries, no partial results.

use std::io;

use thiserror::Error;

use crate::composite::FieldError;
use crate::scalar::ValueError;
use crate::stream::StreamError;

/// Unified error for `pack`/`parse` calls.
/// Messages embed the failing codec's id where the taxonomy includes one,
/// so the failing leaf of a composed schema is visible to the caller.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error from the underlying byte source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stream-level error (short read, malformed or unmappable characters).
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// Scalar value error (pack-time contract violation or number format).
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Field-level error (bag type mismatch, missing applicable field).
    #[error("field error: {0}")]
    Field(#[from] FieldError),
}
