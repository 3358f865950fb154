//! Length-prefixed byte blocks and strings.
//!
//! ## Wire Format
//! ```text
//! bytes:  [varint length][raw bytes]
//! ascii:  [latin-1 bytes][0x00]
//! utf-8:  [varint length, 16 bits][utf-8 bytes]
//! ```
//!
//! Lengths always count bytes, never characters. A length prefix travels as a
//! signed varint of `max_varint_bits`, so the largest block is
//! `2^(max_varint_bits - 1) - 1` bytes; for every legal length the prefix is
//! byte-identical to the unsigned encoding.

use tracing::debug;

use crate::config::UTF8_LENGTH_BITS;
use crate::core::varint::{read_varint, write_varint};
use crate::error::{constants, CodecError, Result};
use crate::transport::{AsyncReadTransport, AsyncWriteTransport};

/// Write `data` prefixed with its length.
pub async fn write_bytes<W>(sink: &mut W, data: &[u8], max_varint_bits: u32) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    write_varint(sink, data.len() as i128, max_varint_bits).await?;
    sink.write(data).await
}

/// Read a length prefix, then exactly that many bytes.
pub async fn read_bytes<R>(source: &mut R, max_varint_bits: u32) -> Result<Vec<u8>>
where
    R: AsyncReadTransport + ?Sized,
{
    let length = read_varint(source, max_varint_bits).await?;
    let length = usize::try_from(length).map_err(|_| {
        debug!(length = %length, "rejected negative length prefix");
        CodecError::Decoding(format!("{}: {length}", constants::ERR_NEGATIVE_LENGTH))
    })?;
    source.read(length).await
}

/// Map every character onto one Latin-1 byte.
pub fn encode_latin1(value: &str) -> Result<Vec<u8>> {
    value
        .chars()
        .map(|c| {
            u8::try_from(u32::from(c)).map_err(|_| {
                CodecError::range("latin-1 char", c.escape_unicode(), "\\u{0}", "\\u{ff}")
            })
        })
        .collect()
}

pub fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Write a Latin-1 string followed by a NUL terminator.
pub async fn write_ascii_string<W>(sink: &mut W, value: &str) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    let mut data = encode_latin1(value)?;
    data.push(0);
    sink.write(&data).await
}

/// Read bytes up to a NUL terminator and decode them as Latin-1.
///
/// With `max_len` set, gives up with a `Decoding` error once that many bytes
/// were read without finding the terminator.
pub async fn read_ascii_string<R>(source: &mut R, max_len: Option<usize>) -> Result<String>
where
    R: AsyncReadTransport + ?Sized,
{
    let mut data = Vec::new();
    loop {
        let byte = source.read(1).await?;
        match byte.first() {
            Some(0) => break,
            Some(&b) => {
                if max_len.is_some_and(|max| data.len() >= max) {
                    return Err(CodecError::Decoding(
                        constants::ERR_UNTERMINATED_STRING.to_string(),
                    ));
                }
                data.push(b);
            }
            None => {
                return Err(CodecError::ShortRead {
                    expected: 1,
                    actual: 0,
                })
            }
        }
    }
    Ok(decode_latin1(&data))
}

/// Write a UTF-8 string prefixed with its byte length as a 16-bit varint.
pub async fn write_utf8_string<W>(sink: &mut W, value: &str) -> Result<()>
where
    W: AsyncWriteTransport + ?Sized,
{
    write_bytes(sink, value.as_bytes(), UTF8_LENGTH_BITS).await
}

/// Read a 16-bit-varint-prefixed UTF-8 string.
pub async fn read_utf8_string<R>(source: &mut R) -> Result<String>
where
    R: AsyncReadTransport + ?Sized,
{
    let data = read_bytes(source, UTF8_LENGTH_BITS).await?;
    String::from_utf8(data)
        .map_err(|e| CodecError::Decoding(format!("{}: {e}", constants::ERR_INVALID_UTF8)))
}
