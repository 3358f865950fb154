// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::Cell;

use crate::core::format::{StructFormat, Value};
use crate::error::CodecError;
use crate::transport::Buffer;

mod blocking {
    use super::*;
    use crate::config::LimitsConfig;
    use crate::protocol::{ProtoRead, ProtoWrite};

    #[test]
    fn test_optional_none_writes_single_byte() {
        let called = Cell::new(false);
        let mut buf = Buffer::new();
        let result = buf
            .write_optional(None::<i32>, |w, v| {
                called.set(true);
                w.write_varint32(v)
            })
            .unwrap();
        assert!(result.is_none());
        assert!(!called.get());
        assert_eq!(buf.as_slice(), &[0x00]);
    }

    #[test]
    fn test_optional_some_writes_flag_then_value() {
        let mut buf = Buffer::new();
        let result = buf
            .write_optional(Some(300i32), |w, v| {
                w.write_varint32(v)?;
                Ok("written")
            })
            .unwrap();
        assert_eq!(result, Some("written"));
        assert_eq!(buf.as_slice(), &[0x01, 0xAC, 0x02]);
    }

    #[test]
    fn test_read_optional_mirrors_write() {
        let mut buf = Buffer::from_bytes(&[0x00]);
        let called = Cell::new(false);
        let absent = buf
            .read_optional(|r| {
                called.set(true);
                r.read_varint32()
            })
            .unwrap();
        assert_eq!(absent, None);
        assert!(!called.get());
        assert_eq!(buf.remaining(), 0);

        let mut buf = Buffer::from_bytes(&[0x01, 0xAC, 0x02]);
        let present = buf.read_optional(|r| r.read_varint32()).unwrap();
        assert_eq!(present, Some(300));
    }

    #[test]
    fn test_optional_flag_any_nonzero_is_present() {
        let mut buf = Buffer::from_bytes(&[0x7F, 0x05]);
        assert_eq!(buf.read_optional(|r| r.read_ubyte()).unwrap(), Some(5));
    }

    #[test]
    fn test_value_dispatch_by_format() {
        let mut buf = Buffer::new();
        buf.write_value(Value::integer(StructFormat::UShort, 513).unwrap())
            .unwrap();
        buf.write_value(Value::char('A').unwrap()).unwrap();
        assert_eq!(buf.as_slice(), &[0x02, 0x01, 0x41]);
        assert_eq!(
            buf.read_value(StructFormat::UShort).unwrap(),
            Value::UShort(513)
        );
        assert_eq!(
            buf.read_value(StructFormat::Char).unwrap().as_char(),
            Some('A')
        );
    }

    #[test]
    fn test_shorthands() {
        let mut buf = Buffer::new();
        buf.write_bool(true).unwrap();
        buf.write_byte(-20).unwrap();
        buf.write_long(-2).unwrap();
        buf.write_double(1.5).unwrap();
        buf.write_varshort(u16::MAX).unwrap();
        buf.write_varlong(i64::MIN).unwrap();

        assert!(buf.read_bool().unwrap());
        assert_eq!(buf.read_byte().unwrap(), -20);
        assert_eq!(buf.read_long().unwrap(), -2);
        assert_eq!(buf.read_double().unwrap(), 1.5);
        assert_eq!(buf.read_varshort().unwrap(), u16::MAX);
        assert_eq!(buf.read_varlong().unwrap(), i64::MIN);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_byte_array_default_prefix() {
        let mut buf = Buffer::new();
        buf.write_byte_array(&[9, 8, 7]).unwrap();
        assert_eq!(buf.as_slice(), &[0x03, 9, 8, 7]);
        assert_eq!(buf.read_byte_array().unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_writes_into_vec() {
        let mut out: Vec<u8> = Vec::new();
        out.write_varint32(-1).unwrap();
        assert_eq!(out, vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn test_reads_from_slice() {
        let data = [0x04u8, b't', b'e', b's', b't'];
        let mut src: &[u8] = &data;
        assert_eq!(src.read_utf8_string().unwrap(), "test");
        assert!(src.is_empty());
    }

    #[test]
    fn test_invalid_max_bits() {
        let mut buf = Buffer::new();
        assert!(matches!(
            buf.write_varuint(1, 0),
            Err(CodecError::InvalidParameter(_))
        ));
        assert!(matches!(
            buf.read_varuint(129),
            Err(CodecError::InvalidParameter(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ascii_string_limited_by_config() {
        let limits = LimitsConfig {
            max_ascii_length: 4,
            ..LimitsConfig::default()
        };
        let mut buf = Buffer::from_bytes(b"abcd\0abcde\0");
        assert_eq!(buf.read_ascii_string_limited(&limits).unwrap(), "abcd");
        assert!(matches!(
            buf.read_ascii_string_limited(&limits),
            Err(CodecError::Decoding(_))
        ));
    }
}

mod asynchronous {
    use crate::config::LimitsConfig;
    use crate::error::CodecError;
    use crate::protocol::{AsyncProtoRead, AsyncProtoWrite};
    use crate::transport::TokioTransport;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_optional_roundtrip_over_duplex() {
        let (client, server) = tokio::io::duplex(256);
        let mut writer = TokioTransport::new(client);
        let mut reader = TokioTransport::new(server);

        writer
            .write_optional(Some(String::from("hello")), |w, v| {
                Box::pin(async move { w.write_utf8_string(&v).await })
            })
            .await
            .unwrap();
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let skipped = writer
            .write_optional(None::<i32>, move |w, v| {
                Box::pin(async move {
                    flag.store(true, Ordering::SeqCst);
                    w.write_varint32(v).await
                })
            })
            .await
            .unwrap();
        assert!(skipped.is_none());
        assert!(!called.load(Ordering::SeqCst));

        let first = reader
            .read_optional(|r| Box::pin(async move { r.read_utf8_string().await }))
            .await
            .unwrap();
        assert_eq!(first.as_deref(), Some("hello"));

        let second = reader
            .read_optional(|r| Box::pin(async move { r.read_varint32().await }))
            .await
            .unwrap();
        assert_eq!(second, None);
    }

    #[tokio::test]
    async fn test_varint_over_duplex() {
        let (client, server) = tokio::io::duplex(8);
        let mut writer = TokioTransport::new(client);
        let mut reader = TokioTransport::new(server);

        writer.write_varint(-2147483648, 32).await.unwrap();
        assert_eq!(reader.read_varint(32).await.unwrap(), -2147483648);
    }

    #[tokio::test]
    async fn test_async_shorthands() {
        let (client, server) = tokio::io::duplex(64);
        let mut writer = TokioTransport::new(client);
        let mut reader = TokioTransport::new(server);

        writer.write_ushort(0xBEEF).await.unwrap();
        writer.write_float(-0.5).await.unwrap();
        writer.write_ascii_string("abc").await.unwrap();

        assert_eq!(reader.read_ushort().await.unwrap(), 0xBEEF);
        assert_eq!(reader.read_float().await.unwrap(), -0.5);
        assert_eq!(reader.read_ascii_string().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_ascii_string_limited_over_duplex() {
        let (client, server) = tokio::io::duplex(64);
        let mut writer = TokioTransport::new(client);
        let mut reader = TokioTransport::new(server);
        let limits = LimitsConfig {
            max_ascii_length: 3,
            ..LimitsConfig::default()
        };

        writer.write_ascii_string("abc").await.unwrap();
        writer.write_ascii_string("abcd").await.unwrap();

        assert_eq!(reader.read_ascii_string_limited(&limits).await.unwrap(), "abc");
        assert!(matches!(
            reader.read_ascii_string_limited(&limits).await,
            Err(CodecError::Decoding(_))
        ));
    }
}
