//! # Codec Surfaces
//!
//! The operations packet definitions are written against, in both execution
//! modes.
//!
//! | Blocking       | Async               | Transport bound           |
//! |----------------|---------------------|---------------------------|
//! | [`ProtoWrite`] | [`AsyncProtoWrite`] | `WriteTransport` / `AsyncWriteTransport` |
//! | [`ProtoRead`]  | [`AsyncProtoRead`]  | `ReadTransport` / `AsyncReadTransport`   |
//!
//! Each trait is implemented for every transport of its mode. The algorithms
//! live once, in [`crate::core`], written against the async transport traits;
//! the async surface awaits them directly and the blocking surface runs them to
//! completion over a [`Blocking`](crate::transport::Blocking) bridge. Both
//! modes therefore emit and accept exactly the same bytes.
//!
//! [`Serializable`] sits on top of the blocking pair for types that carry
//! their own encoding.
//!
//! Import one mode per scope: a type implementing both transport flavours would
//! otherwise make method calls ambiguous.

pub mod reader;
pub mod serializable;
pub mod writer;

pub use reader::{AsyncProtoRead, ProtoRead};
pub use serializable::Serializable;
pub use writer::{AsyncProtoWrite, ProtoWrite};

#[cfg(test)]
mod tests;
