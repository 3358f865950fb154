//! Fixed-width primitive codec.
//!
//! Mode-agnostic: every function here is written once against the async
//! transport traits. The blocking surface runs the same functions through
//! [`Blocking`](crate::transport::Blocking).

use crate::core::format::{Primitive, StructFormat, Value};
use crate::error::{CodecError, Result};
use crate::transport::{AsyncReadTransport, AsyncWriteTransport};

/// Write `value` in its format's big-endian layout.
pub async fn write_value<W>(sink: &mut W, value: Value) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    sink.write(&value.to_be_bytes()).await
}

/// Read exactly `format.size()` bytes and decode them.
pub async fn read_value<R>(source: &mut R, format: StructFormat) -> Result<Value>
where
    R: AsyncReadTransport + ?Sized,
{
    let data = source.read(format.size()).await?;
    Value::from_be_bytes(format, &data)
}

pub async fn write_primitive<W, P>(sink: &mut W, value: P) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
    P: Primitive,
{
    write_value(sink, value.into_value()).await
}

pub async fn read_primitive<R, P>(source: &mut R) -> Result<P>
where
    R: AsyncReadTransport + ?Sized,
    P: Primitive,
{
    let value = read_value(source, P::FORMAT).await?;
    P::from_value(value).ok_or_else(|| {
        CodecError::Decoding(format!("expected {} value, got {:?}", P::FORMAT, value))
    })
}
