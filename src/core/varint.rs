//! # Variable-Length Integers
//!
//! Integers of arbitrary magnitude, where smaller values take fewer bytes.
//!
//! Each byte carries 7 value bits in its low bits and a continuation flag in
//! bit 7 (`0x80`). The least significant group comes first, so a varint is
//! little-endian in groups of 7 bits:
//!
//! ```text
//! 300 = 0b10_0101100  ->  [0b1_0101100, 0b0_0000010]  ->  [0xAC, 0x02]
//! ```
//!
//! Every varint field has a `max_bits` bound: 32 for a protocol "VarInt", 64
//! for a "VarLong", 16 for the "VarShort" in front of UTF-8 strings. Values
//! above `2^max_bits - 1` are refused on write and reported as
//! [`CodecError::VarintOverflow`] on read, on the very byte that crossed the
//! bound. A 32-bit varint may still take 5 bytes on the wire, since 7 bits per
//! byte do not divide 32.
//!
//! Signed varints reinterpret the value as a `max_bits`-wide two's-complement
//! number before running the unsigned algorithm, so `-1` in a 32-bit varint is
//! sent exactly like `2^32 - 1`.

use tracing::debug;

use crate::core::twos_complement::{from_twos_complement, to_twos_complement, unsigned_max};
use crate::error::{CodecError, Result};
use crate::transport::{AsyncReadTransport, AsyncWriteTransport};

/// Continuation flag.
const CONTINUE_BIT: u8 = 0x80;
/// Value bits per byte.
const SEGMENT_BITS: u8 = 0x7F;

/// Bytes needed to encode `value`.
pub fn varuint_size(value: u128) -> usize {
    let bits = 128 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Bytes a well-formed varint bounded by `max_bits` can take at most.
pub fn max_varuint_size(max_bits: u32) -> usize {
    (max_bits as usize).div_ceil(7)
}

/// Encode `value` into `out` after checking it fits in `max_bits` bits.
///
/// Nothing is appended when the check fails.
pub fn encode_varuint(value: u128, max_bits: u32, out: &mut Vec<u8>) -> Result<()> {
    let value_max = unsigned_max(max_bits)?;
    if value > value_max {
        return Err(CodecError::range(
            format!("{max_bits}-bit varuint"),
            value,
            0,
            value_max,
        ));
    }

    let mut remaining = value;
    loop {
        if remaining & !(SEGMENT_BITS as u128) == 0 {
            out.push(remaining as u8);
            return Ok(());
        }
        out.push((remaining as u8 & SEGMENT_BITS) | CONTINUE_BIT);
        remaining >>= 7;
    }
}

/// Encode a signed `value` through its `max_bits`-wide two's-complement form.
pub fn encode_varint(value: i128, max_bits: u32, out: &mut Vec<u8>) -> Result<()> {
    let unsigned = to_twos_complement(value, max_bits)?;
    encode_varuint(unsigned, max_bits, out)
}

/// Write an unsigned varint bounded by `max_bits`.
///
/// The whole encoding is handed to the transport in one write, and only
/// after the range check passed.
pub async fn write_varuint<W>(sink: &mut W, value: u128, max_bits: u32) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    let mut encoded = Vec::with_capacity(varuint_size(value));
    encode_varuint(value, max_bits, &mut encoded)?;
    sink.write(&encoded).await
}

/// Write a signed varint bounded by `max_bits`.
pub async fn write_varint<W>(sink: &mut W, value: i128, max_bits: u32) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    let unsigned = to_twos_complement(value, max_bits)?;
    write_varuint(sink, unsigned, max_bits).await
}

/// Read an unsigned varint bounded by `max_bits`.
///
/// Reads one byte at a time and stops with `VarintOverflow` as soon as the
/// accumulated value exceeds `2^max_bits - 1`, or once a continuation bit
/// asks for more bytes than a `max_bits` varint can have.
pub async fn read_varuint<R>(source: &mut R, max_bits: u32) -> Result<u128>
where
    R: AsyncReadTransport + ?Sized,
{
    let value_max = unsigned_max(max_bits)?;
    let max_size = max_varuint_size(max_bits);

    let mut result: u128 = 0;
    let mut shift: u32 = 0;
    let mut consumed = 0usize;
    loop {
        let byte = read_ubyte(source).await?;
        consumed += 1;

        // shift < max_bits <= 128 here, since consumed <= max_size
        let group = u128::from(byte & SEGMENT_BITS);
        if group > value_max >> shift {
            debug!(max_bits, consumed, "varint exceeded its bit bound");
            return Err(CodecError::VarintOverflow { max_bits });
        }
        result |= group << shift;

        if byte & CONTINUE_BIT == 0 {
            return Ok(result);
        }
        if consumed == max_size {
            debug!(max_bits, consumed, "varint continues past its maximum size");
            return Err(CodecError::VarintOverflow { max_bits });
        }
        shift += 7;
    }
}

/// Read a signed varint bounded by `max_bits`.
pub async fn read_varint<R>(source: &mut R, max_bits: u32) -> Result<i128>
where
    R: AsyncReadTransport + ?Sized,
{
    let unsigned = read_varuint(source, max_bits).await?;
    from_twos_complement(unsigned, max_bits)
}

async fn read_ubyte<R>(source: &mut R) -> Result<u8>
where
    R: AsyncReadTransport + ?Sized,
{
    let data = source.read(1).await?;
    data.first().copied().ok_or(CodecError::ShortRead {
        expected: 1,
        actual: 0,
    })
}
