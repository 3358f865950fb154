//! # Core Codec Components
//!
//! Wire encodings, written once and shared by both execution modes.
//!
//! Every async function in this module only suspends inside a transport
//! `read`/`write` call. Bit manipulation, varint looping and string
//! transcoding never suspend, so running these functions over a
//! [`Blocking`](crate::transport::Blocking) transport completes on the first
//! poll.
//!
//! ## Components
//! - **Format**: `StructFormat` tags, the `Value` union, the `Primitive` trait
//! - **Primitive**: fixed-width big-endian scalars
//! - **Two's complement**: signed/unsigned mapping at arbitrary widths
//! - **Varint**: 7-bit-group variable-length integers
//! - **Framing**: length-prefixed bytes, Latin-1 and UTF-8 strings
//! - **Codec**: Tokio codec for varint-length-framed packets
//!
//! ## Wire Format
//! ```text
//! fixed:    [big-endian bytes]
//! varint:   [1vvvvvvv]* [0vvvvvvv]        least significant group first
//! bytes:    [varint length] [payload]
//! ascii:    [latin-1 bytes] [0x00]
//! utf-8:    [varint16 length] [utf-8 bytes]
//! optional: [0x00] | [0x01] [value]
//! ```

pub mod codec;
pub mod format;
pub mod framing;
pub mod primitive;
pub mod twos_complement;
pub mod varint;
