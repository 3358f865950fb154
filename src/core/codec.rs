//! # Frame Codec
//!
//! Tokio codec splitting a byte stream into varint-length-prefixed frames.
//!
//! This is the outermost framing of the game protocol: every packet travels as
//! `[varint length][payload]`. [`VarintFrameCodec`] plugs into
//! `tokio_util::codec::Framed` and hands out whole payloads; the payload
//! itself is then parsed with the [`ProtoRead`](crate::ProtoRead) surface over
//! a [`Buffer`](crate::Buffer).
//!
//! ## Security
//! - Frame length is bounded by both the prefix bit width and `max_frame_size`
//! - Oversized frames are rejected from the prefix alone, before buffering

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use crate::config::{DEFAULT_FRAME_LENGTH_BITS, MAX_FRAME_SIZE};
use crate::core::twos_complement::check_bits;
use crate::core::varint::{encode_varuint, varuint_size};
use crate::error::{constants, CodecError, Result};
use crate::protocol::ProtoRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarintFrameCodec {
    length_bits: u32,
    max_frame_size: usize,
}

impl Default for VarintFrameCodec {
    fn default() -> Self {
        Self {
            length_bits: DEFAULT_FRAME_LENGTH_BITS,
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}

impl VarintFrameCodec {
    /// Codec with a `length_bits`-wide prefix, which must lie in `1..=128`.
    pub fn new(length_bits: u32, max_frame_size: usize) -> Result<Self> {
        check_bits(length_bits)?;
        Ok(Self {
            length_bits,
            max_frame_size,
        })
    }

    pub fn length_bits(&self) -> u32 {
        self.length_bits
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    fn check_size(&self, length: usize) -> Result<()> {
        if length > self.max_frame_size {
            warn!(
                length,
                max = self.max_frame_size,
                "{}",
                constants::ERR_OVERSIZED_FRAME
            );
            return Err(CodecError::Frame(format!(
                "{}: {length} > {}",
                constants::ERR_OVERSIZED_FRAME,
                self.max_frame_size
            )));
        }
        Ok(())
    }
}

impl Decoder for VarintFrameCodec {
    type Item = BytesMut;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let mut prefix: &[u8] = &src[..];
        let length = match prefix.read_varuint(self.length_bits) {
            Ok(length) => length,
            // Prefix not fully buffered yet
            Err(e) if e.is_short_read() => return Ok(None),
            Err(e) => return Err(e),
        };
        let prefix_len = src.len() - prefix.len();

        let length = usize::try_from(length)
            .map_err(|_| CodecError::Frame(constants::ERR_OVERSIZED_FRAME.to_string()))?;
        self.check_size(length)?;

        let frame_len = prefix_len + length;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        src.advance(prefix_len);
        Ok(Some(src.split_to(length)))
    }
}

impl Encoder<&[u8]> for VarintFrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<()> {
        self.check_size(item.len())?;
        let mut prefix = Vec::with_capacity(varuint_size(item.len() as u128));
        encode_varuint(item.len() as u128, self.length_bits, &mut prefix)?;

        dst.reserve(prefix.len() + item.len());
        dst.put_slice(&prefix);
        dst.put_slice(item);
        Ok(())
    }
}

impl Encoder<Bytes> for VarintFrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        Encoder::<&[u8]>::encode(self, &item[..], dst)
    }
}
