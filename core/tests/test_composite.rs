// Schema composition: objects over a field bag, conditional fields,
// exhaustion-bounded lists, and length-prefixed variable fields.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wirecodec_core::codec::Codec;
    use wirecodec_core::composite::{
        Field, FieldBag, FieldError, FieldMap, ListCodec, ObjectCodec, Value,
        VariableLengthCodec,
    };
    use wirecodec_core::scalar::{
        BinaryCodec, CharStringCodec, UnsignedByteCodec, UnsignedShortCodec, ValueError,
    };
    use wirecodec_core::types::CodecError;

    /// format byte, then a 2-byte extension present only when format is 1,
    /// then a 3-character code.
    fn message_codec() -> ObjectCodec<FieldMap> {
        ObjectCodec::new(
            "message",
            FieldMap::new,
            vec![
                Field::new("format", UnsignedByteCodec::new("format")),
                Field::when("extension", BinaryCodec::new("extension", 2), |bag: &FieldMap| {
                    matches!(bag.get("format"), Some(Value::U8(1)))
                }),
                Field::new("code", CharStringCodec::new("code", 3, encoding_rs::UTF_8)),
            ],
        )
    }

// # ✅ 1. Object round trip, all fields applicable

    #[test]
    fn object_roundtrip_full() {
        let codec = message_codec();

        let mut source = Cursor::new(vec![0x01, 0xAA, 0xBB, b'U', b'S', b'D']);
        let bag = codec.parse(&mut source).unwrap();

        assert_eq!(bag.get_as::<u8>("format").unwrap(), 1);
        assert_eq!(bag.get_as::<Vec<u8>>("extension").unwrap(), vec![0xAA, 0xBB]);
        assert_eq!(bag.get_as::<String>("code").unwrap(), "USD");

        let mut wire = Vec::new();
        codec.pack(&bag, &mut wire).unwrap();
        assert_eq!(wire, vec![0x01, 0xAA, 0xBB, b'U', b'S', b'D']);
    }

// # ✅ 2. Inapplicable field: zero bytes on both sides

    #[test]
    fn conditional_field_skipped() {
        let codec = message_codec();

        let mut source = Cursor::new(vec![0x00, b'E', b'U', b'R']);
        let bag = codec.parse(&mut source).unwrap();

        assert_eq!(bag.get_as::<u8>("format").unwrap(), 0);
        assert!(bag.get("extension").is_none());
        assert_eq!(bag.get_as::<String>("code").unwrap(), "EUR");

        let mut wire = Vec::new();
        codec.pack(&bag, &mut wire).unwrap();
        assert_eq!(wire, vec![0x00, b'E', b'U', b'R']);
    }

// # ✅ 2b. Inapplicable field contributes zero bytes even when the bag
//         holds a value under its id

    #[test]
    fn inapplicable_field_ignored_even_if_set() {
        let codec = message_codec();

        let mut bag = FieldMap::new();
        bag.set("format", Value::U8(0))
            .set("extension", Value::Bytes(vec![0xAA, 0xBB]))
            .set("code", Value::Text("EUR".to_string()));

        let mut wire = Vec::new();
        codec.pack(&bag, &mut wire).unwrap();
        assert_eq!(wire, vec![0x00, b'E', b'U', b'R']);
    }

// # ❌ 3. Applicable field absent from the bag at pack time

    #[test]
    fn missing_applicable_field() {
        let codec = message_codec();

        let mut bag = FieldMap::new();
        bag.set("format", Value::U8(1))
            .set("code", Value::Text("USD".to_string()));
        let mut wire = Vec::new();

        assert!(matches!(
            codec.pack(&bag, &mut wire),
            Err(CodecError::Field(FieldError::Missing { .. }))
        ));
    }

// # ❌ 4. Bag value of the wrong shape fails at the field boundary

    #[test]
    fn type_mismatch_at_pack() {
        let codec = message_codec();

        let mut bag = FieldMap::new();
        bag.set("format", Value::Text("one".to_string()));
        let mut wire = Vec::new();

        match codec.pack(&bag, &mut wire) {
            Err(CodecError::Field(FieldError::TypeMismatch {
                id,
                expected,
                actual,
            })) => {
                assert_eq!(id, "format");
                assert_eq!(expected, "u8");
                assert_eq!(actual, "text");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

// # ❌ 5. Typed bag read distinguishes missing from mismatched

    #[test]
    fn get_as_errors() {
        let mut bag = FieldMap::new();
        bag.set("format", Value::U8(1));

        assert!(matches!(
            bag.get_as::<String>("format"),
            Err(CodecError::Field(FieldError::TypeMismatch { .. }))
        ));
        assert!(matches!(
            bag.get_as::<u8>("absent"),
            Err(CodecError::Field(FieldError::Missing { .. }))
        ));
    }

// # ✅ 6. Bag edits: set replaces, clear removes

    #[test]
    fn bag_set_and_clear() {
        let mut bag = FieldMap::new();
        bag.set("a", Value::U8(1)).set("a", Value::U8(2));
        assert_eq!(bag.get_as::<u8>("a").unwrap(), 2);

        bag.clear("a");
        assert!(bag.get("a").is_none());
        assert!(bag.fields().is_empty());
    }

// # ✅ 7. List runs to source exhaustion

    #[test]
    fn list_to_exhaustion() {
        let codec = ListCodec::new("readings", UnsignedShortCodec::new("reading"));

        let mut source = Cursor::new(vec![0x00, 0x01, 0x00, 0x02, 0x01, 0x00]);
        assert_eq!(codec.parse(&mut source).unwrap(), vec![1, 2, 256]);

        let mut empty = Cursor::new(Vec::new());
        assert!(codec.parse(&mut empty).unwrap().is_empty());

        let mut wire = Vec::new();
        codec.pack(&vec![1, 2, 256], &mut wire).unwrap();
        assert_eq!(wire, vec![0x00, 0x01, 0x00, 0x02, 0x01, 0x00]);
    }

// # ❌ 8. Trailing bytes that do not fill an item surface the item's error

    #[test]
    fn list_ragged_tail() {
        let codec = ListCodec::new("readings", UnsignedShortCodec::new("reading"));
        let mut source = Cursor::new(vec![0x00, 0x01, 0xFF]);

        assert!(matches!(
            codec.parse(&mut source),
            Err(CodecError::Stream(_))
        ));
    }

// # ✅ 9. List field inside an object consumes the remainder

    #[test]
    fn list_as_trailing_field() {
        let codec = ObjectCodec::new(
            "frame",
            FieldMap::new,
            vec![
                Field::new("kind", UnsignedByteCodec::new("kind")),
                Field::new(
                    "readings",
                    ListCodec::new("readings", UnsignedShortCodec::new("reading")),
                ),
            ],
        );

        let mut source = Cursor::new(vec![0x07, 0x00, 0x01, 0x00, 0x02]);
        let bag = codec.parse(&mut source).unwrap();

        assert_eq!(bag.get_as::<u8>("kind").unwrap(), 7);
        assert_eq!(bag.get_as::<Vec<u16>>("readings").unwrap(), vec![1, 2]);
    }

// # ✅ 10. Nested object stores as a map value

    #[test]
    fn nested_object() {
        let inner = ObjectCodec::new(
            "header",
            FieldMap::new,
            vec![Field::new("version", UnsignedByteCodec::new("version"))],
        );
        let codec = ObjectCodec::new(
            "envelope",
            FieldMap::new,
            vec![
                Field::new("header", inner),
                Field::new("body", BinaryCodec::new("body", 2)),
            ],
        );

        let mut source = Cursor::new(vec![0x02, 0xCA, 0xFE]);
        let bag = codec.parse(&mut source).unwrap();

        let header = bag.get_as::<FieldMap>("header").unwrap();
        assert_eq!(header.get_as::<u8>("version").unwrap(), 2);
        assert_eq!(bag.get_as::<Vec<u8>>("body").unwrap(), vec![0xCA, 0xFE]);

        let mut wire = Vec::new();
        codec.pack(&bag, &mut wire).unwrap();
        assert_eq!(wire, vec![0x02, 0xCA, 0xFE]);
    }

// # ✅ 11. Variable length: one-byte prefix then that many content bytes

    #[test]
    fn varlen_roundtrip() {
        let codec = VariableLengthCodec::new(
            "track",
            UnsignedByteCodec::new("track.len"),
            |length| Box::new(BinaryCodec::new("track.data", length)) as Box<dyn Codec<Value = Vec<u8>>>,
            Vec::len,
        );

        let mut wire = Vec::new();
        codec.pack(&vec![0x0A, 0x0B, 0x0C], &mut wire).unwrap();
        assert_eq!(wire, vec![0x03, 0x0A, 0x0B, 0x0C]);

        let mut source = Cursor::new(wire);
        assert_eq!(codec.parse(&mut source).unwrap(), vec![0x0A, 0x0B, 0x0C]);
    }

// # ✅ 12. Variable length with text content and a two-byte prefix

    #[test]
    fn varlen_text() {
        let codec = VariableLengthCodec::new(
            "memo",
            UnsignedShortCodec::new("memo.len"),
            |length| {
                Box::new(CharStringCodec::new("memo.text", length, encoding_rs::UTF_8))
                    as Box<dyn Codec<Value = String>>
            },
            |value: &String| value.chars().count(),
        );

        let mut wire = Vec::new();
        codec.pack(&"hello".to_string(), &mut wire).unwrap();
        assert_eq!(wire, vec![0x00, 0x05, b'h', b'e', b'l', b'l', b'o']);

        let mut source = Cursor::new(wire);
        assert_eq!(codec.parse(&mut source).unwrap(), "hello");
    }

// # ❌ 13. Length the prefix cannot carry fails before any byte

    #[test]
    fn varlen_unrepresentable_length() {
        let codec = VariableLengthCodec::new(
            "track",
            UnsignedByteCodec::new("track.len"),
            |length| Box::new(BinaryCodec::new("track.data", length)) as Box<dyn Codec<Value = Vec<u8>>>,
            Vec::len,
        );
        let mut wire = Vec::new();

        assert!(matches!(
            codec.pack(&vec![0u8; 300], &mut wire),
            Err(CodecError::Value(ValueError::LengthUnrepresentable {
                length: 300,
                ..
            }))
        ));
        assert!(wire.is_empty());
    }

// # ✅ 14. Empty schema: empty bag from empty source, zero bytes written

    #[test]
    fn object_empty_case() {
        let codec = ObjectCodec::new("empty", FieldMap::new, vec![]);

        let mut source = Cursor::new(Vec::new());
        let bag = codec.parse(&mut source).unwrap();
        assert!(bag.fields().is_empty());

        let mut wire = Vec::new();
        codec.pack(&FieldMap::new(), &mut wire).unwrap();
        assert!(wire.is_empty());
    }

// # ✅ 15. Every field inapplicable behaves the same as no fields

    #[test]
    fn object_all_fields_inapplicable() {
        let codec = ObjectCodec::new(
            "gated",
            FieldMap::new,
            vec![Field::when(
                "extension",
                BinaryCodec::new("extension", 2),
                |_: &FieldMap| false,
            )],
        );

        let mut source = Cursor::new(Vec::new());
        let bag = codec.parse(&mut source).unwrap();
        assert!(bag.fields().is_empty());

        let mut wire = Vec::new();
        codec.pack(&bag, &mut wire).unwrap();
        assert!(wire.is_empty());
    }
}
