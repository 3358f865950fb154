//! Types that know their own wire representation.
//!
//! Implementors describe how to write themselves into any blocking sink and
//! read themselves back from any blocking source, using the [`ProtoWrite`]
//! and [`ProtoRead`] surfaces. The provided `serialize`/`deserialize` pair
//! goes through a [`Buffer`], which is how packet payloads are assembled
//! before framing.
//!
//! [`ProtoWrite`]: crate::ProtoWrite
//! [`ProtoRead`]: crate::ProtoRead

use crate::error::Result;
use crate::transport::{Buffer, ReadTransport, WriteTransport};

pub trait Serializable: Sized {
    /// Write `self` to `sink`.
    fn serialize_to<W: WriteTransport + ?Sized>(&self, sink: &mut W) -> Result<()>;

    /// Read a value from `source`, consuming exactly its encoding.
    fn deserialize_from<R: ReadTransport + ?Sized>(source: &mut R) -> Result<Self>;

    /// Encode `self` into a fresh buffer.
    fn serialize(&self) -> Result<Buffer> {
        let mut buf = Buffer::new();
        self.serialize_to(&mut buf)?;
        Ok(buf)
    }

    /// Decode a value from the unread part of `buf`. Bytes past the value stay
    /// unread.
    fn deserialize(buf: &mut Buffer) -> Result<Self> {
        Self::deserialize_from(buf)
    }
}
