//! Read surfaces: [`ProtoRead`] (blocking) and [`AsyncProtoRead`] (async).

use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use crate::config::{
    LimitsConfig, DEFAULT_BYTES_LENGTH_BITS, VARINT_BITS, VARLONG_BITS, VARSHORT_BITS,
};
use crate::core::format::{Primitive, StructFormat, Value};
use crate::core::{framing, primitive, varint};
use crate::error::Result;
use crate::transport::{AsyncReadTransport, Blocking, ReadTransport};

macro_rules! blocking_shorthands {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Read a big-endian `", stringify!($ty), "`.")]
            fn $name(&mut self) -> Result<$ty> {
                self.read_primitive()
            }
        )*
    };
}

macro_rules! async_shorthands {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Read a big-endian `", stringify!($ty), "`.")]
            async fn $name(&mut self) -> Result<$ty> {
                self.read_primitive().await
            }
        )*
    };
}

/// Blocking decoder methods for any [`ReadTransport`].
pub trait ProtoRead: ReadTransport {
    /// Read exactly `format.size()` bytes and decode them big-endian.
    fn read_value(&mut self, format: StructFormat) -> Result<Value> {
        block_on(primitive::read_value(&mut Blocking::new(self), format))
    }

    fn read_primitive<P: Primitive>(&mut self) -> Result<P> {
        block_on(primitive::read_primitive(&mut Blocking::new(self)))
    }

    /// Read an unsigned varint; fails with `VarintOverflow` above `2^max_bits - 1`.
    fn read_varuint(&mut self, max_bits: u32) -> Result<u128> {
        block_on(varint::read_varuint(&mut Blocking::new(self), max_bits))
    }

    /// Read a signed varint stored in `max_bits`-wide two's complement.
    fn read_varint(&mut self, max_bits: u32) -> Result<i128> {
        block_on(varint::read_varint(&mut Blocking::new(self), max_bits))
    }

    /// Read a byte block prefixed with a varint length bounded by `max_varint_bits`.
    fn read_bytes(&mut self, max_varint_bits: u32) -> Result<Vec<u8>> {
        block_on(framing::read_bytes(&mut Blocking::new(self), max_varint_bits))
    }

    /// [`read_bytes`](Self::read_bytes) with the default 32-bit length prefix.
    fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        self.read_bytes(DEFAULT_BYTES_LENGTH_BITS)
    }

    /// Read a Latin-1 string up to its `0x00` terminator.
    fn read_ascii_string(&mut self) -> Result<String> {
        block_on(framing::read_ascii_string(&mut Blocking::new(self), None))
    }

    /// Like [`read_ascii_string`](Self::read_ascii_string), but fails with
    /// `Decoding` if no terminator shows up within `max_len` bytes.
    fn read_ascii_string_bounded(&mut self, max_len: usize) -> Result<String> {
        block_on(framing::read_ascii_string(
            &mut Blocking::new(self),
            Some(max_len),
        ))
    }

    /// Bounded ASCII read using `limits.max_ascii_length`.
    fn read_ascii_string_limited(&mut self, limits: &LimitsConfig) -> Result<String> {
        self.read_ascii_string_bounded(limits.max_ascii_length)
    }

    /// Read a UTF-8 string prefixed with its byte length as a 16-bit varint.
    fn read_utf8_string(&mut self) -> Result<String> {
        block_on(framing::read_utf8_string(&mut Blocking::new(self)))
    }

    /// Read a presence flag, then the value through `reader` if it is set.
    ///
    /// `reader` is not called when the flag is `false`.
    fn read_optional<R, F>(&mut self, reader: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut Self) -> Result<R>,
    {
        if !self.read_bool()? {
            return Ok(None);
        }
        reader(self).map(Some)
    }

    /// Protocol "VarInt": signed, 32 bits.
    fn read_varint32(&mut self) -> Result<i32> {
        // Bounded to 32 bits by the decoder, so the narrowing is lossless
        Ok(self.read_varint(VARINT_BITS)? as i32)
    }

    /// Protocol "VarLong": signed, 64 bits.
    fn read_varlong(&mut self) -> Result<i64> {
        Ok(self.read_varint(VARLONG_BITS)? as i64)
    }

    /// Protocol "VarShort": unsigned, 16 bits.
    fn read_varshort(&mut self) -> Result<u16> {
        Ok(self.read_varuint(VARSHORT_BITS)? as u16)
    }

    blocking_shorthands! {
        read_bool: bool,
        read_byte: i8,
        read_ubyte: u8,
        read_short: i16,
        read_ushort: u16,
        read_int: i32,
        read_uint: u32,
        read_long: i64,
        read_ulong: u64,
        read_float: f32,
        read_double: f64,
    }
}

impl<T: ReadTransport + ?Sized> ProtoRead for T {}

/// Async decoder methods for any [`AsyncReadTransport`].
#[allow(async_fn_in_trait)]
pub trait AsyncProtoRead: AsyncReadTransport {
    /// Read exactly `format.size()` bytes and decode them big-endian.
    async fn read_value(&mut self, format: StructFormat) -> Result<Value> {
        primitive::read_value(self, format).await
    }

    async fn read_primitive<P: Primitive>(&mut self) -> Result<P> {
        primitive::read_primitive(self).await
    }

    /// Read an unsigned varint; fails with `VarintOverflow` above `2^max_bits - 1`.
    async fn read_varuint(&mut self, max_bits: u32) -> Result<u128> {
        varint::read_varuint(self, max_bits).await
    }

    /// Read a signed varint stored in `max_bits`-wide two's complement.
    async fn read_varint(&mut self, max_bits: u32) -> Result<i128> {
        varint::read_varint(self, max_bits).await
    }

    /// Read a byte block prefixed with a varint length bounded by `max_varint_bits`.
    async fn read_bytes(&mut self, max_varint_bits: u32) -> Result<Vec<u8>> {
        framing::read_bytes(self, max_varint_bits).await
    }

    async fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        self.read_bytes(DEFAULT_BYTES_LENGTH_BITS).await
    }

    /// Read a Latin-1 string up to its `0x00` terminator.
    async fn read_ascii_string(&mut self) -> Result<String> {
        framing::read_ascii_string(self, None).await
    }

    async fn read_ascii_string_bounded(&mut self, max_len: usize) -> Result<String> {
        framing::read_ascii_string(self, Some(max_len)).await
    }

    async fn read_ascii_string_limited(&mut self, limits: &LimitsConfig) -> Result<String> {
        framing::read_ascii_string(self, Some(limits.max_ascii_length)).await
    }

    /// Read a UTF-8 string prefixed with its byte length as a 16-bit varint.
    async fn read_utf8_string(&mut self) -> Result<String> {
        framing::read_utf8_string(self).await
    }

    /// Read a presence flag, then the value through `reader` if it is set.
    ///
    /// ```ignore
    /// let name = transport
    ///     .read_optional(|r| Box::pin(async move { r.read_utf8_string().await }))
    ///     .await?;
    /// ```
    async fn read_optional<R, F>(&mut self, reader: F) -> Result<Option<R>>
    where
        F: for<'a> FnOnce(&'a mut Self) -> LocalBoxFuture<'a, Result<R>>,
    {
        if !self.read_bool().await? {
            return Ok(None);
        }
        reader(self).await.map(Some)
    }

    async fn read_varint32(&mut self) -> Result<i32> {
        Ok(self.read_varint(VARINT_BITS).await? as i32)
    }

    async fn read_varlong(&mut self) -> Result<i64> {
        Ok(self.read_varint(VARLONG_BITS).await? as i64)
    }

    async fn read_varshort(&mut self) -> Result<u16> {
        Ok(self.read_varuint(VARSHORT_BITS).await? as u16)
    }

    async_shorthands! {
        read_bool: bool,
        read_byte: i8,
        read_ubyte: u8,
        read_short: i16,
        read_ushort: u16,
        read_int: i32,
        read_uint: u32,
        read_long: i64,
        read_ulong: u64,
        read_float: f32,
        read_double: f64,
    }
}

impl<T: AsyncReadTransport + ?Sized> AsyncProtoRead for T {}
