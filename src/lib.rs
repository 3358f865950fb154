//! # mcproto-wire
//!
//! Binary wire codec for Minecraft-style game protocols.
//!
//! Translates between a byte stream and typed values: fixed-width big-endian
//! scalars, variable-length integers, length-prefixed byte blocks, Latin-1 and
//! UTF-8 strings, and optional values. Packet definitions for a particular
//! protocol version are built entirely out of these operations.
//!
//! Every operation exists in a blocking flavour ([`ProtoRead`] /
//! [`ProtoWrite`]) and an async flavour ([`AsyncProtoRead`] /
//! [`AsyncProtoWrite`]). Both run the same core algorithms and produce the
//! same bytes.
//!
//! ## Example
//! ```rust
//! use mcproto_wire::{Buffer, ProtoRead, ProtoWrite};
//!
//! let mut buf = Buffer::new();
//! buf.write_varint32(1_000_000).unwrap();
//! buf.write_utf8_string("localhost").unwrap();
//! buf.write_ushort(25565).unwrap();
//!
//! assert_eq!(&buf.as_slice()[..3], &[0xC0, 0x84, 0x3D]);
//! assert_eq!(buf.read_varint32().unwrap(), 1_000_000);
//! assert_eq!(buf.read_utf8_string().unwrap(), "localhost");
//! assert_eq!(buf.read_ushort().unwrap(), 25565);
//! ```
//!
//! ## Modules
//! - [`core`]: the wire encodings
//! - [`protocol`]: blocking and async operation surfaces
//! - [`transport`]: byte source/sink traits and adapters
//! - [`config`]: wire constants and runtime limits
//! - [`error`]: error types

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

pub use crate::core::codec::VarintFrameCodec;
pub use crate::core::format::{Primitive, StructFormat, Value};
pub use crate::error::{CodecError, ErrorKind, Result};
pub use crate::protocol::{
    AsyncProtoRead, AsyncProtoWrite, ProtoRead, ProtoWrite, Serializable,
};
pub use crate::transport::{
    AsyncReadTransport, AsyncWriteTransport, Blocking, Buffer, IoTransport, ReadTransport,
    TokioTransport, WriteTransport,
};
