//! composite/value.rs
//! Tagged union for field values, and the typed conversion seam.
//!
//! Design notes:
//! - One variant per scalar/composite result type a field codec can
//!   produce. Accesses are checked against the tag; a mismatch is a
//!   `FieldError::TypeMismatch`, not a deferred bad cast.
//! - Lists of bytes model as `Bytes`, not `List` of `U8`; the `Vec<u8>`
//!   conversion claims the `Bytes` variant.

use crate::composite::data::FieldMap;
use crate::composite::FieldError;
use crate::types::CodecError;

/// A field value as stored in a bag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bytes(Vec<u8>),
    Text(String),
    U8(u8),
    U16(u16),
    I32(i32),
    I64(i64),
    List(Vec<Value>),
    Map(FieldMap),
}

impl Value {
    /// Tag name used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Value::U8(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Value::U16(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FieldMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Conversion between a codec's typed value and the bag representation.
/// `try_from_value` is tag-checked and fails fast on mismatch.
pub trait FieldValue: Sized {
    fn into_value(self) -> Value;
    fn try_from_value(value: &Value, id: &str) -> Result<Self, CodecError>;
}

fn mismatch(id: &str, expected: &'static str, actual: &Value) -> CodecError {
    FieldError::TypeMismatch {
        id: id.to_string(),
        expected,
        actual: actual.type_name(),
    }
    .into()
}

macro_rules! scalar_field_value {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {$(
        impl FieldValue for $ty {
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn try_from_value(value: &Value, id: &str) -> Result<Self, CodecError> {
                match value {
                    Value::$variant(inner) => Ok(inner.clone()),
                    other => Err(mismatch(id, $name, other)),
                }
            }
        }
    )*};
}

scalar_field_value! {
    Vec<u8> => Bytes, "bytes";
    String => Text, "text";
    u8 => U8, "u8";
    u16 => U16, "u16";
    i32 => I32, "i32";
    i64 => I64, "i64";
    FieldMap => Map, "map";
}

macro_rules! list_field_value {
    ($($ty:ty),*) => {$(
        impl FieldValue for Vec<$ty> {
            fn into_value(self) -> Value {
                Value::List(self.into_iter().map(FieldValue::into_value).collect())
            }

            fn try_from_value(value: &Value, id: &str) -> Result<Self, CodecError> {
                match value {
                    Value::List(items) => items
                        .iter()
                        .map(|item| <$ty>::try_from_value(item, id))
                        .collect(),
                    other => Err(mismatch(id, "list", other)),
                }
            }
        }
    )*};
}

list_field_value!(Vec<u8>, String, u16, i32, i64, FieldMap);
