//! io.rs
//! Normalized byte source boundary for parse calls.
//!
//! Design notes:
//! - Codecs consume a sequential source; no seeking, no backtracking.
//! - `available()` reports bytes readable without blocking. The list codec
//!   uses it to stop at source exhaustion; nothing else needs it.
//! - Sinks are plain `std::io::Write` trait objects.

use std::io::{Cursor, Read};

/// Sequential byte source: standard `Read` plus a non-blocking
/// "how much is left" query.
pub trait ByteSource: Read {
    /// Number of bytes that can be read without blocking.
    fn available(&self) -> usize;
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn available(&self) -> usize {
        let len = self.get_ref().as_ref().len();
        len.saturating_sub(self.position() as usize)
    }
}

impl ByteSource for &[u8] {
    fn available(&self) -> usize {
        self.len()
    }
}
