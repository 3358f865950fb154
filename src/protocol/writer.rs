//! Write surfaces: [`ProtoWrite`] (blocking) and [`AsyncProtoWrite`] (async).
//!
//! Both are blanket-implemented for every transport of their mode and both
//! delegate to the same core functions, so the bytes they produce are
//! identical for the same sequence of calls.

use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use crate::config::{DEFAULT_BYTES_LENGTH_BITS, VARINT_BITS, VARLONG_BITS, VARSHORT_BITS};
use crate::core::format::{Primitive, Value};
use crate::core::{framing, primitive, varint};
use crate::error::Result;
use crate::transport::{AsyncWriteTransport, Blocking, WriteTransport};

macro_rules! blocking_shorthands {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Write a big-endian `", stringify!($ty), "`.")]
            fn $name(&mut self, value: $ty) -> Result<()> {
                self.write_primitive(value)
            }
        )*
    };
}

macro_rules! async_shorthands {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Write a big-endian `", stringify!($ty), "`.")]
            async fn $name(&mut self, value: $ty) -> Result<()> {
                self.write_primitive(value).await
            }
        )*
    };
}

/// Blocking encoder methods for any [`WriteTransport`].
pub trait ProtoWrite: WriteTransport {
    /// Write a fixed-width value in its format's big-endian layout.
    fn write_value(&mut self, value: Value) -> Result<()> {
        block_on(primitive::write_value(&mut Blocking::new(self), value))
    }

    fn write_primitive<P: Primitive>(&mut self, value: P) -> Result<()> {
        block_on(primitive::write_primitive(&mut Blocking::new(self), value))
    }

    /// Write an unsigned varint; fails with `EncodingRange` above `2^max_bits - 1`.
    fn write_varuint(&mut self, value: u128, max_bits: u32) -> Result<()> {
        block_on(varint::write_varuint(&mut Blocking::new(self), value, max_bits))
    }

    /// Write a signed varint in `max_bits`-wide two's complement.
    fn write_varint(&mut self, value: i128, max_bits: u32) -> Result<()> {
        block_on(varint::write_varint(&mut Blocking::new(self), value, max_bits))
    }

    /// Write `data` prefixed with its length as a varint bounded by `max_varint_bits`.
    fn write_bytes(&mut self, data: &[u8], max_varint_bits: u32) -> Result<()> {
        block_on(framing::write_bytes(&mut Blocking::new(self), data, max_varint_bits))
    }

    /// [`write_bytes`](Self::write_bytes) with the default 32-bit length prefix.
    fn write_byte_array(&mut self, data: &[u8]) -> Result<()> {
        self.write_bytes(data, DEFAULT_BYTES_LENGTH_BITS)
    }

    /// Write a Latin-1 string terminated by `0x00`.
    fn write_ascii_string(&mut self, value: &str) -> Result<()> {
        block_on(framing::write_ascii_string(&mut Blocking::new(self), value))
    }

    /// Write a UTF-8 string prefixed with its byte length as a 16-bit varint.
    fn write_utf8_string(&mut self, value: &str) -> Result<()> {
        block_on(framing::write_utf8_string(&mut Blocking::new(self), value))
    }

    /// Write a presence flag, then the value through `writer` if there is one.
    ///
    /// `writer` is not called for `None`. Returns whatever `writer` returned.
    fn write_optional<T, R, F>(&mut self, value: Option<T>, writer: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut Self, T) -> Result<R>,
    {
        match value {
            None => {
                self.write_bool(false)?;
                Ok(None)
            }
            Some(value) => {
                self.write_bool(true)?;
                writer(self, value).map(Some)
            }
        }
    }

    /// Protocol "VarInt": signed, 32 bits.
    fn write_varint32(&mut self, value: i32) -> Result<()> {
        self.write_varint(value.into(), VARINT_BITS)
    }

    /// Protocol "VarLong": signed, 64 bits.
    fn write_varlong(&mut self, value: i64) -> Result<()> {
        self.write_varint(value.into(), VARLONG_BITS)
    }

    /// Protocol "VarShort": unsigned, 16 bits.
    fn write_varshort(&mut self, value: u16) -> Result<()> {
        self.write_varuint(value.into(), VARSHORT_BITS)
    }

    blocking_shorthands! {
        write_bool: bool,
        write_byte: i8,
        write_ubyte: u8,
        write_short: i16,
        write_ushort: u16,
        write_int: i32,
        write_uint: u32,
        write_long: i64,
        write_ulong: u64,
        write_float: f32,
        write_double: f64,
    }
}

impl<T: WriteTransport + ?Sized> ProtoWrite for T {}

/// Async encoder methods for any [`AsyncWriteTransport`].
#[allow(async_fn_in_trait)]
pub trait AsyncProtoWrite: AsyncWriteTransport {
    /// Write a fixed-width value in its format's big-endian layout.
    async fn write_value(&mut self, value: Value) -> Result<()> {
        primitive::write_value(self, value).await
    }

    async fn write_primitive<P: Primitive>(&mut self, value: P) -> Result<()> {
        primitive::write_primitive(self, value).await
    }

    /// Write an unsigned varint; fails with `EncodingRange` above `2^max_bits - 1`.
    async fn write_varuint(&mut self, value: u128, max_bits: u32) -> Result<()> {
        varint::write_varuint(self, value, max_bits).await
    }

    /// Write a signed varint in `max_bits`-wide two's complement.
    async fn write_varint(&mut self, value: i128, max_bits: u32) -> Result<()> {
        varint::write_varint(self, value, max_bits).await
    }

    /// Write `data` prefixed with its length as a varint bounded by `max_varint_bits`.
    async fn write_bytes(&mut self, data: &[u8], max_varint_bits: u32) -> Result<()> {
        framing::write_bytes(self, data, max_varint_bits).await
    }

    async fn write_byte_array(&mut self, data: &[u8]) -> Result<()> {
        self.write_bytes(data, DEFAULT_BYTES_LENGTH_BITS).await
    }

    /// Write a Latin-1 string terminated by `0x00`.
    async fn write_ascii_string(&mut self, value: &str) -> Result<()> {
        framing::write_ascii_string(self, value).await
    }

    /// Write a UTF-8 string prefixed with its byte length as a 16-bit varint.
    async fn write_utf8_string(&mut self, value: &str) -> Result<()> {
        framing::write_utf8_string(self, value).await
    }

    /// Write a presence flag, then the value through `writer` if there is one.
    ///
    /// ```ignore
    /// transport
    ///     .write_optional(Some(42), |w, v| Box::pin(async move { w.write_varint32(v).await }))
    ///     .await?;
    /// ```
    async fn write_optional<T, R, F>(&mut self, value: Option<T>, writer: F) -> Result<Option<R>>
    where
        F: for<'a> FnOnce(&'a mut Self, T) -> LocalBoxFuture<'a, Result<R>>,
    {
        match value {
            None => {
                self.write_bool(false).await?;
                Ok(None)
            }
            Some(value) => {
                self.write_bool(true).await?;
                writer(self, value).await.map(Some)
            }
        }
    }

    async fn write_varint32(&mut self, value: i32) -> Result<()> {
        self.write_varint(value.into(), VARINT_BITS).await
    }

    async fn write_varlong(&mut self, value: i64) -> Result<()> {
        self.write_varint(value.into(), VARLONG_BITS).await
    }

    async fn write_varshort(&mut self, value: u16) -> Result<()> {
        self.write_varuint(value.into(), VARSHORT_BITS).await
    }

    async_shorthands! {
        write_bool: bool,
        write_byte: i8,
        write_ubyte: u8,
        write_short: i16,
        write_ushort: u16,
        write_int: i32,
        write_uint: u32,
        write_long: i64,
        write_ulong: u64,
        write_float: f32,
        write_double: f64,
    }
}

impl<T: AsyncWriteTransport + ?Sized> AsyncProtoWrite for T {}
