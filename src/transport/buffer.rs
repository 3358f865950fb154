//! In-memory transport.
//!
//! [`Buffer`] is a growable byte buffer with a read cursor. Writes append to the
//! end, reads consume from the cursor. It is what packet definitions serialize
//! into before the bytes are handed to a real connection, and what they
//! deserialize from after a frame has been received.

use bytes::{Bytes, BytesMut};

use super::{ReadTransport, WriteTransport};
use crate::error::{CodecError, Result};

/// Growable in-memory byte buffer with a read cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    data: BytesMut,
    pos: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Create a buffer holding a copy of `data`, cursor at the start.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: BytesMut::from(data),
            pos: 0,
        }
    }

    /// Total number of bytes held, read or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current read cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the read cursor back to the start.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Drop all data and reset the cursor.
    pub fn clear(&mut self) {
        self.data.clear();
        self.pos = 0;
    }

    /// Take every unread byte out of the buffer, leaving it empty.
    pub fn flush(&mut self) -> Bytes {
        let mut data = std::mem::take(&mut self.data);
        let unread = data.split_off(self.pos);
        self.pos = 0;
        unread.freeze()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> BytesMut {
        self.data
    }
}

impl ReadTransport for Buffer {
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let remaining = self.remaining();
        if length > remaining {
            return Err(CodecError::ShortRead {
                expected: length,
                actual: remaining,
            });
        }
        let start = self.pos;
        self.pos += length;
        Ok(self.data[start..self.pos].to_vec())
    }
}

impl WriteTransport for Buffer {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.data.extend_from_slice(data);
        Ok(())
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: BytesMut::from(&data[..]),
            pos: 0,
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<BytesMut> for Buffer {
    fn from(data: BytesMut) -> Self {
        Self { data, pos: 0 }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
