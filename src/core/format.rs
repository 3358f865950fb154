//! # Struct Formats
//!
//! Fixed-width scalar layouts and the values that travel in them.
//!
//! [`StructFormat`] is the closed set of fixed-width layouts the protocol
//! uses. Each tag has a fixed byte width and signedness; both are properties of
//! the tag, never of the value being written. Everything is big-endian.
//!
//! | Format      | Width | Rust type  |
//! |-------------|-------|------------|
//! | `Bool`      | 1     | `bool`     |
//! | `Char`      | 1     | `u8` (Latin-1) |
//! | `Byte`      | 1     | `i8`       |
//! | `UByte`     | 1     | `u8`       |
//! | `Short`     | 2     | `i16`      |
//! | `UShort`    | 2     | `u16`      |
//! | `Int`       | 4     | `i32`      |
//! | `UInt`      | 4     | `u32`      |
//! | `Long`      | 4     | `i32`      |
//! | `ULong`     | 4     | `u32`      |
//! | `Float`     | 4     | `f32`      |
//! | `Double`    | 8     | `f64`      |
//! | `HalfFloat` | 2     | `half::f16`|
//! | `LongLong`  | 8     | `i64`      |
//! | `ULongLong` | 8     | `u64`      |
//!
//! [`Value`] is the tagged union carrying one of these, and [`Primitive`] is the
//! statically typed route for callers that know their Rust type up front.

use bytes::{Buf, BufMut};
use half::f16;

use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructFormat {
    Bool,
    Char,
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    HalfFloat,
    LongLong,
    ULongLong,
}

impl StructFormat {
    /// Encoded width in bytes.
    pub const fn size(self) -> usize {
        match self {
            StructFormat::Bool | StructFormat::Char | StructFormat::Byte | StructFormat::UByte => 1,
            StructFormat::Short | StructFormat::UShort | StructFormat::HalfFloat => 2,
            StructFormat::Int
            | StructFormat::UInt
            | StructFormat::Long
            | StructFormat::ULong
            | StructFormat::Float => 4,
            StructFormat::Double | StructFormat::LongLong | StructFormat::ULongLong => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StructFormat::Bool => "bool",
            StructFormat::Char => "char",
            StructFormat::Byte => "byte",
            StructFormat::UByte => "ubyte",
            StructFormat::Short => "short",
            StructFormat::UShort => "ushort",
            StructFormat::Int => "int",
            StructFormat::UInt => "uint",
            StructFormat::Long => "long",
            StructFormat::ULong => "ulong",
            StructFormat::Float => "float",
            StructFormat::Double => "double",
            StructFormat::HalfFloat => "halffloat",
            StructFormat::LongLong => "longlong",
            StructFormat::ULongLong => "ulonglong",
        }
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            StructFormat::Byte
                | StructFormat::UByte
                | StructFormat::Short
                | StructFormat::UShort
                | StructFormat::Int
                | StructFormat::UInt
                | StructFormat::Long
                | StructFormat::ULong
                | StructFormat::LongLong
                | StructFormat::ULongLong
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(
            self,
            StructFormat::Float | StructFormat::Double | StructFormat::HalfFloat
        )
    }

    /// Inclusive integer range of an integer format, `None` otherwise.
    pub fn int_range(self) -> Option<(i128, i128)> {
        let range = match self {
            StructFormat::Byte => (i8::MIN as i128, i8::MAX as i128),
            StructFormat::UByte => (0, u8::MAX as i128),
            StructFormat::Short => (i16::MIN as i128, i16::MAX as i128),
            StructFormat::UShort => (0, u16::MAX as i128),
            StructFormat::Int | StructFormat::Long => (i32::MIN as i128, i32::MAX as i128),
            StructFormat::UInt | StructFormat::ULong => (0, u32::MAX as i128),
            StructFormat::LongLong => (i64::MIN as i128, i64::MAX as i128),
            StructFormat::ULongLong => (0, u64::MAX as i128),
            _ => return None,
        };
        Some(range)
    }
}

impl std::fmt::Display for StructFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar tagged with the format it is encoded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    /// A single Latin-1 character, stored as its byte.
    Char(u8),
    Byte(i8),
    UByte(u8),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i32),
    ULong(u32),
    Float(f32),
    Double(f64),
    HalfFloat(f16),
    LongLong(i64),
    ULongLong(u64),
}

impl Value {
    pub fn format(&self) -> StructFormat {
        match self {
            Value::Bool(_) => StructFormat::Bool,
            Value::Char(_) => StructFormat::Char,
            Value::Byte(_) => StructFormat::Byte,
            Value::UByte(_) => StructFormat::UByte,
            Value::Short(_) => StructFormat::Short,
            Value::UShort(_) => StructFormat::UShort,
            Value::Int(_) => StructFormat::Int,
            Value::UInt(_) => StructFormat::UInt,
            Value::Long(_) => StructFormat::Long,
            Value::ULong(_) => StructFormat::ULong,
            Value::Float(_) => StructFormat::Float,
            Value::Double(_) => StructFormat::Double,
            Value::HalfFloat(_) => StructFormat::HalfFloat,
            Value::LongLong(_) => StructFormat::LongLong,
            Value::ULongLong(_) => StructFormat::ULongLong,
        }
    }

    /// Build an integer value of `format`, checking it fits.
    ///
    /// # Errors
    /// `EncodingRange` naming the format and its legal range when `value` does
    /// not fit; `InvalidParameter` when `format` is not an integer format.
    pub fn integer(format: StructFormat, value: i128) -> Result<Self> {
        let (min, max) = format.int_range().ok_or_else(|| {
            CodecError::InvalidParameter(format!("{format} is not an integer format"))
        })?;
        if value < min || value > max {
            return Err(CodecError::range(format.name(), value, min, max));
        }
        // The range check above makes every narrowing cast lossless.
        Ok(match format {
            StructFormat::Byte => Value::Byte(value as i8),
            StructFormat::UByte => Value::UByte(value as u8),
            StructFormat::Short => Value::Short(value as i16),
            StructFormat::UShort => Value::UShort(value as u16),
            StructFormat::Int => Value::Int(value as i32),
            StructFormat::UInt => Value::UInt(value as u32),
            StructFormat::Long => Value::Long(value as i32),
            StructFormat::ULong => Value::ULong(value as u32),
            StructFormat::LongLong => Value::LongLong(value as i64),
            StructFormat::ULongLong => Value::ULongLong(value as u64),
            StructFormat::Bool
            | StructFormat::Char
            | StructFormat::Float
            | StructFormat::Double
            | StructFormat::HalfFloat => {
                return Err(CodecError::InvalidParameter(format!(
                    "{format} is not an integer format"
                )))
            }
        })
    }

    /// Build a floating-point value of `format`.
    ///
    /// Finite values too large for the target width are rejected rather than
    /// silently becoming infinity. NaN and infinities pass through.
    pub fn float(format: StructFormat, value: f64) -> Result<Self> {
        match format {
            StructFormat::Double => Ok(Value::Double(value)),
            StructFormat::Float => {
                if value.is_finite() && value.abs() > f32::MAX as f64 {
                    return Err(CodecError::range(format.name(), value, f32::MIN, f32::MAX));
                }
                Ok(Value::Float(value as f32))
            }
            StructFormat::HalfFloat => {
                if value.is_finite() && value.abs() > f16::MAX.to_f64() {
                    return Err(CodecError::range(format.name(), value, f16::MIN, f16::MAX));
                }
                Ok(Value::HalfFloat(f16::from_f64(value)))
            }
            other => Err(CodecError::InvalidParameter(format!(
                "{other} is not a floating-point format"
            ))),
        }
    }

    /// Build a `Char` value; only Latin-1 characters fit in one byte.
    pub fn char(value: char) -> Result<Self> {
        u8::try_from(u32::from(value))
            .map(Value::Char)
            .map_err(|_| CodecError::range("char", value.escape_unicode(), "\\u{0}", "\\u{ff}"))
    }

    /// Encoded big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.format().size());
        match *self {
            Value::Bool(v) => out.put_u8(u8::from(v)),
            Value::Char(v) | Value::UByte(v) => out.put_u8(v),
            Value::Byte(v) => out.put_i8(v),
            Value::Short(v) => out.put_i16(v),
            Value::UShort(v) => out.put_u16(v),
            Value::Int(v) | Value::Long(v) => out.put_i32(v),
            Value::UInt(v) | Value::ULong(v) => out.put_u32(v),
            Value::Float(v) => out.put_f32(v),
            Value::Double(v) => out.put_f64(v),
            Value::HalfFloat(v) => out.put_u16(v.to_bits()),
            Value::LongLong(v) => out.put_i64(v),
            Value::ULongLong(v) => out.put_u64(v),
        }
        out
    }

    /// Decode `data`, which must be exactly `format.size()` bytes long.
    ///
    /// Too few bytes is a `ShortRead`; trailing bytes are a `Decoding` error.
    pub fn from_be_bytes(format: StructFormat, mut data: &[u8]) -> Result<Self> {
        let size = format.size();
        if data.len() < size {
            return Err(CodecError::ShortRead {
                expected: size,
                actual: data.len(),
            });
        }
        if data.len() > size {
            return Err(CodecError::Decoding(format!(
                "{format} takes {size} bytes, got {}",
                data.len()
            )));
        }
        Ok(match format {
            StructFormat::Bool => Value::Bool(data.get_u8() != 0),
            StructFormat::Char => Value::Char(data.get_u8()),
            StructFormat::Byte => Value::Byte(data.get_i8()),
            StructFormat::UByte => Value::UByte(data.get_u8()),
            StructFormat::Short => Value::Short(data.get_i16()),
            StructFormat::UShort => Value::UShort(data.get_u16()),
            StructFormat::Int => Value::Int(data.get_i32()),
            StructFormat::UInt => Value::UInt(data.get_u32()),
            StructFormat::Long => Value::Long(data.get_i32()),
            StructFormat::ULong => Value::ULong(data.get_u32()),
            StructFormat::Float => Value::Float(data.get_f32()),
            StructFormat::Double => Value::Double(data.get_f64()),
            StructFormat::HalfFloat => Value::HalfFloat(f16::from_bits(data.get_u16())),
            StructFormat::LongLong => Value::LongLong(data.get_i64()),
            StructFormat::ULongLong => Value::ULongLong(data.get_u64()),
        })
    }

    /// Integer payload widened to `i128`, `None` for non-integer values.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::Byte(v) => Some(v.into()),
            Value::UByte(v) => Some(v.into()),
            Value::Short(v) => Some(v.into()),
            Value::UShort(v) => Some(v.into()),
            Value::Int(v) | Value::Long(v) => Some(v.into()),
            Value::UInt(v) | Value::ULong(v) => Some(v.into()),
            Value::LongLong(v) => Some(v.into()),
            Value::ULongLong(v) => Some(v.into()),
            _ => None,
        }
    }

    /// Floating-point payload widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v.into()),
            Value::Double(v) => Some(v),
            Value::HalfFloat(v) => Some(v.to_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// `Char` payload decoded as Latin-1.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Value::Char(v) => Some(char::from(v)),
            _ => None,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Native scalar types with a fixed wire layout.
///
/// Sealed: the set of fixed-width layouts is closed.
pub trait Primitive: Copy + sealed::Sealed {
    const FORMAT: StructFormat;

    fn into_value(self) -> Value;

    /// Extract the native value; `None` if `value` has a different format.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const FORMAT: StructFormat = StructFormat::$variant;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => Byte,
    u8 => UByte,
    i16 => Short,
    u16 => UShort,
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    f32 => Float,
    f64 => Double,
    f16 => HalfFloat,
}
