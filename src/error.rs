//! # Error Types
//!
//! Error handling for the wire codec.
//!
//! Every failure the codec can produce is a variant of [`CodecError`]. The
//! variants fall into four families, exposed through [`CodecError::kind`]:
//!
//! - **Encoding range**: a value does not fit its fixed-width or varint target.
//!   Raised before a single byte reaches the transport.
//! - **Varint overflow**: a received varint grew past its `max_bits` bound.
//!   Raised on the byte that crossed the bound; nothing further is read.
//! - **Transport**: the underlying byte source/sink failed or returned fewer
//!   bytes than requested.
//! - **Decoding**: bytes arrived but are not valid for the target encoding
//!   (invalid UTF-8, negative length prefix, unterminated string).
//!
//! None of these are retried by the codec.
//!
//! ## Example Usage
//! ```rust
//! use mcproto_wire::error::{CodecError, ErrorKind};
//! use mcproto_wire::{Buffer, ProtoRead};
//!
//! let mut buf = Buffer::from_bytes(&[0x80, 0x80, 0x04]);
//! match buf.read_varuint(16) {
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::VarintOverflow),
//!     Ok(v) => panic!("unexpected value {v}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Decoding errors
    pub const ERR_INVALID_UTF8: &str = "Invalid UTF-8 sequence";
    pub const ERR_NEGATIVE_LENGTH: &str = "Negative length prefix";
    pub const ERR_UNTERMINATED_STRING: &str = "Null-terminated string exceeds maximum length";

    /// Frame codec errors
    pub const ERR_OVERSIZED_FRAME: &str = "Frame exceeds maximum size";
}

/// Classification of [`CodecError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value outside the legal range of its target; nothing was written.
    EncodingRange,
    /// Received varint exceeded its bit bound.
    VarintOverflow,
    /// Transport failed or returned a short read.
    Transport,
    /// Bytes were present but invalid for the target encoding, or a frame
    /// exceeded its size limit.
    Decoding,
    /// Caller misuse: bad parameters or configuration.
    Usage,
}

// CodecError is the error type for every codec operation
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Value {value} out of range for {target} (expected {min}..={max})")]
    EncodingRange {
        target: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Received varint was outside the range of {max_bits}-bit int")]
    VarintOverflow { max_bits: u32 },

    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Frame error: {0}")]
    Frame(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodecError {
    /// Build an [`CodecError::EncodingRange`] from any displayable bounds.
    pub fn range(
        target: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        CodecError::EncodingRange {
            target: target.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Which of the error families this variant belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::EncodingRange { .. } => ErrorKind::EncodingRange,
            CodecError::VarintOverflow { .. } => ErrorKind::VarintOverflow,
            CodecError::ShortRead { .. } | CodecError::Io(_) | CodecError::Transport(_) => {
                ErrorKind::Transport
            }
            CodecError::Decoding(_) | CodecError::Frame(_) => ErrorKind::Decoding,
            CodecError::InvalidParameter(_) | CodecError::Config(_) => ErrorKind::Usage,
        }
    }

    /// True when the transport ran out of bytes before the value was complete.
    pub fn is_short_read(&self) -> bool {
        match self {
            CodecError::ShortRead { .. } => true,
            CodecError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
