//! Blocking transport over `std::io` streams.

use std::io::{Read, Write};

use tracing::trace;

use super::{ReadTransport, WriteTransport};
use crate::error::{CodecError, Result};

/// Initial allocation for a read; larger reads grow as bytes actually arrive.
const READ_CHUNK: usize = 8 * 1024;

/// Adapts any `std::io::Read` / `std::io::Write` (a `TcpStream`, a file, a
/// `Cursor`) to the blocking transport traits.
#[derive(Debug)]
pub struct IoTransport<T> {
    inner: T,
}

impl<T> IoTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> ReadTransport for IoTransport<T> {
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(length.min(READ_CHUNK));
        (&mut self.inner)
            .take(length as u64)
            .read_to_end(&mut data)?;
        if data.len() < length {
            return Err(CodecError::ShortRead {
                expected: length,
                actual: data.len(),
            });
        }
        trace!(length, "read from io transport");
        Ok(data)
    }
}

impl<T: Write> WriteTransport for IoTransport<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write_all(data)?;
        trace!(length = data.len(), "wrote to io transport");
        Ok(())
    }
}
