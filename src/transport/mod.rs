//! # Transport Capability
//!
//! The raw byte source/sink the codec runs against.
//!
//! The codec never owns a socket. It only asks its transport for "exactly N
//! bytes" or hands it "these bytes", through one of two trait pairs:
//!
//! - [`ReadTransport`] / [`WriteTransport`]: blocking, run on the caller's thread
//! - [`AsyncReadTransport`] / [`AsyncWriteTransport`]: may suspend while
//!   waiting on the peer
//!
//! A read must return exactly `length` bytes or fail; a short read surfaces as
//! [`CodecError::ShortRead`](crate::error::CodecError::ShortRead).
//!
//! ## Components
//! - **Buffer**: in-memory growable buffer with a read cursor
//! - **IoTransport**: adapter over `std::io::Read`/`std::io::Write`
//! - **TokioTransport**: adapter over tokio's `AsyncRead`/`AsyncWrite`
//! - **Blocking**: bridge running a blocking transport under the async traits

use crate::error::{CodecError, Result};

pub mod buffer;
pub mod io;
pub mod stream;

pub use buffer::Buffer;
pub use io::IoTransport;
pub use stream::TokioTransport;

/// Blocking byte source.
pub trait ReadTransport {
    /// Read exactly `length` bytes.
    fn read(&mut self, length: usize) -> Result<Vec<u8>>;
}

/// Blocking byte sink.
pub trait WriteTransport {
    /// Write all of `data`.
    fn write(&mut self, data: &[u8]) -> Result<()>;
}

/// Suspension-capable byte source.
#[allow(async_fn_in_trait)]
pub trait AsyncReadTransport {
    /// Read exactly `length` bytes, suspending until they are available.
    async fn read(&mut self, length: usize) -> Result<Vec<u8>>;
}

/// Suspension-capable byte sink.
#[allow(async_fn_in_trait)]
pub trait AsyncWriteTransport {
    /// Write all of `data`, suspending while the sink is busy.
    async fn write(&mut self, data: &[u8]) -> Result<()>;
}

/// Runs a blocking transport under the async transport traits.
///
/// Every future produced through this wrapper is ready on its first poll, so
/// the blocking codec surfaces can drive the shared async core with
/// `futures::executor::block_on` without ever parking the thread.
pub struct Blocking<'a, T: ?Sized> {
    inner: &'a mut T,
}

impl<'a, T: ?Sized> Blocking<'a, T> {
    pub fn new(inner: &'a mut T) -> Self {
        Self { inner }
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner
    }
}

impl<T: ReadTransport + ?Sized> AsyncReadTransport for Blocking<'_, T> {
    async fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        self.inner.read(length)
    }
}

impl<T: WriteTransport + ?Sized> AsyncWriteTransport for Blocking<'_, T> {
    async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write(data)
    }
}

impl<T: ReadTransport + ?Sized> ReadTransport for &mut T {
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        (**self).read(length)
    }
}

impl<T: WriteTransport + ?Sized> WriteTransport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}

/// Reading from a borrowed slice consumes it from the front.
impl ReadTransport for &[u8] {
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        if self.len() < length {
            return Err(CodecError::ShortRead {
                expected: length,
                actual: self.len(),
            });
        }
        let (head, tail) = self.split_at(length);
        *self = tail;
        Ok(head.to_vec())
    }
}

impl WriteTransport for Vec<u8> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}
