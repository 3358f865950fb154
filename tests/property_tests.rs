//! Property-based tests using proptest
//!
//! These tests check codec invariants across randomly generated values:
//! every legal value decodes back to itself, encodings have the expected
//! size, and illegal values never reach the transport.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use mcproto_wire::core::varint::{max_varuint_size, varuint_size};
use mcproto_wire::error::ErrorKind;
use mcproto_wire::{Buffer, ProtoRead, ProtoWrite};
use proptest::prelude::*;

// Property: any value that fits in max_bits decodes to itself
proptest! {
    #[test]
    fn prop_varuint_roundtrip(bits in 1u32..=128, raw in any::<u128>()) {
        let value = raw & (u128::MAX >> (128 - bits));
        let mut buf = Buffer::new();
        buf.write_varuint(value, bits).expect("value fits its width");

        prop_assert_eq!(buf.len(), varuint_size(value));
        prop_assert!(buf.len() <= max_varuint_size(bits));
        prop_assert_eq!(buf.read_varuint(bits).expect("decode should not fail"), value);
        prop_assert_eq!(buf.remaining(), 0);
    }
}

// Property: signed values inside the two's-complement range decode to themselves
proptest! {
    #[test]
    fn prop_varint_roundtrip(bits in 1u32..=128, raw in any::<i128>()) {
        let value = raw >> (128 - bits);
        let mut buf = Buffer::new();
        buf.write_varint(value, bits).expect("value fits its width");
        prop_assert_eq!(buf.read_varint(bits).expect("decode should not fail"), value);
    }
}

// Property: values past the unsigned bound are refused without writing
proptest! {
    #[test]
    fn prop_varuint_out_of_range_writes_nothing(bits in 1u32..128, excess in 1u128..1_000_000) {
        let value = (u128::MAX >> (128 - bits)).saturating_add(excess);
        let mut buf = Buffer::new();
        let err = buf.write_varuint(value, bits).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EncodingRange);
        prop_assert!(buf.is_empty());
    }
}

// Property: a negative signed varint shares its bytes with its unsigned twin
proptest! {
    #[test]
    fn prop_signed_unsigned_bytes_agree(value in i32::MIN..0i32) {
        let mut signed = Buffer::new();
        signed.write_varint32(value).unwrap();
        let mut unsigned = Buffer::new();
        unsigned.write_varuint(u128::from(value as u32), 32).unwrap();
        prop_assert_eq!(signed.as_slice(), unsigned.as_slice());
    }
}

// Property: fixed-width primitives round-trip and take exactly their width
proptest! {
    #[test]
    fn prop_primitives_roundtrip(
        a in any::<i8>(),
        b in any::<u16>(),
        c in any::<i32>(),
        d in any::<u64>(),
        e in any::<f64>().prop_filter("NaN never compares equal", |v| !v.is_nan()),
        flag in any::<bool>(),
    ) {
        let mut buf = Buffer::new();
        buf.write_byte(a).unwrap();
        buf.write_ushort(b).unwrap();
        buf.write_int(c).unwrap();
        buf.write_ulong(d).unwrap();
        buf.write_double(e).unwrap();
        buf.write_bool(flag).unwrap();
        prop_assert_eq!(buf.len(), 1 + 2 + 4 + 8 + 8 + 1);

        prop_assert_eq!(buf.read_byte().unwrap(), a);
        prop_assert_eq!(buf.read_ushort().unwrap(), b);
        prop_assert_eq!(buf.read_int().unwrap(), c);
        prop_assert_eq!(buf.read_ulong().unwrap(), d);
        prop_assert_eq!(buf.read_double().unwrap(), e);
        prop_assert_eq!(buf.read_bool().unwrap(), flag);
    }
}

// Property: byte blocks round-trip with a prefix sized to their length
proptest! {
    #[test]
    fn prop_bytes_roundtrip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let mut buf = Buffer::new();
        buf.write_byte_array(&data).unwrap();
        prop_assert_eq!(buf.len(), varuint_size(data.len() as u128) + data.len());
        prop_assert_eq!(buf.read_byte_array().unwrap(), data);
    }
}

// Property: any UTF-8 string within the 16-bit prefix round-trips
proptest! {
    #[test]
    fn prop_utf8_roundtrip(value in "\\PC{0,512}") {
        let mut buf = Buffer::new();
        buf.write_utf8_string(&value).unwrap();
        prop_assert_eq!(buf.read_utf8_string().unwrap(), value);
    }
}

// Property: Latin-1 strings without NUL round-trip through the ASCII codec
proptest! {
    #[test]
    fn prop_ascii_roundtrip(value in "[\\x01-\\xFF]{0,256}") {
        let mut buf = Buffer::new();
        buf.write_ascii_string(&value).unwrap();
        prop_assert_eq!(buf.len(), value.chars().count() + 1);
        prop_assert_eq!(buf.read_ascii_string().unwrap(), value);
    }
}

// Property: the decoder never panics on arbitrary input
proptest! {
    #[test]
    fn prop_decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..64), bits in 1u32..=128) {
        let _ = Buffer::from_bytes(&data).read_varuint(bits);
        let _ = Buffer::from_bytes(&data).read_varint(bits);
        let _ = Buffer::from_bytes(&data).read_byte_array();
        let _ = Buffer::from_bytes(&data).read_utf8_string();
        let _ = Buffer::from_bytes(&data).read_ascii_string_bounded(32);
    }
}
