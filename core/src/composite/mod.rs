//! composite/mod.rs
//! Combinators that assemble leaf codecs into objects, lists, and
//! length-dependent fields.

use thiserror::Error;

pub mod data;
pub mod field;
pub mod list;
pub mod object;
pub mod value;
pub mod varlen;

pub use data::{FieldBag, FieldMap};
pub use field::Field;
pub use list::ListCodec;
pub use object::ObjectCodec;
pub use value::{FieldValue, Value};
pub use varlen::VariableLengthCodec;

/// Field-level errors raised when moving values in and out of a bag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The bag holds a value of a different shape than the field's codec
    /// expects. Fails fast at the field boundary instead of deferring a
    /// bad cast to the point of use.
    #[error("{id}: expected {expected} value, but bag holds {actual}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An applicable field has no value set under its id at pack time.
    #[error("{id}: no value set for applicable field")]
    Missing { id: String },
}
