//! Async transport over tokio streams.
//!
//! [`TokioTransport`] wraps any `AsyncRead`/`AsyncWrite` (a `TcpStream`, a
//! `DuplexStream`, a TLS stream) so the async codec surface can run on it. The
//! only suspension points are the reads and writes performed here.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use super::{AsyncReadTransport, AsyncWriteTransport};
use crate::error::{CodecError, Result};

/// Initial allocation for a read; larger reads grow as bytes actually arrive.
const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug)]
pub struct TokioTransport<T> {
    inner: T,
}

impl<T> TokioTransport<T> {
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

impl<T: AsyncWrite + Unpin> TokioTransport<T> {
    /// Flush the underlying stream.
    pub async fn flush(&mut self) -> Result<()> {
        self.inner.flush().await?;
        Ok(())
    }

    /// Shut down the write half of the underlying stream.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.inner.shutdown().await?;
        Ok(())
    }
}

impl<T: AsyncRead + Unpin> AsyncReadTransport for TokioTransport<T> {
    async fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(length.min(READ_CHUNK));
        (&mut self.inner)
            .take(length as u64)
            .read_to_end(&mut data)
            .await?;
        if data.len() < length {
            return Err(CodecError::ShortRead {
                expected: length,
                actual: data.len(),
            });
        }
        trace!(length, "read from tokio transport");
        Ok(data)
    }
}

impl<T: AsyncWrite + Unpin> AsyncWriteTransport for TokioTransport<T> {
    async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write_all(data).await?;
        trace!(length = data.len(), "wrote to tokio transport");
        Ok(())
    }
}
