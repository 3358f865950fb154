//! Two's-complement mapping between signed and unsigned integers of an
//! arbitrary bit width.
//!
//! Signed varints are carried through the unsigned varint algorithm by
//! reinterpreting the value as a `bits`-wide two's-complement number. The
//! mapping is a bijection between `[-2^(bits-1), 2^(bits-1) - 1]` and
//! `[0, 2^bits - 1]`. Widths from 1 to 128 bits are supported.

use crate::config::MAX_VARINT_BITS;
use crate::error::{CodecError, Result};

/// Reject bit widths the mapping cannot represent.
pub fn check_bits(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_VARINT_BITS {
        return Err(CodecError::InvalidParameter(format!(
            "bit width must be within 1..={MAX_VARINT_BITS}, got {bits}"
        )));
    }
    Ok(())
}

/// Largest unsigned value representable in `bits` bits (`2^bits - 1`).
pub fn unsigned_max(bits: u32) -> Result<u128> {
    check_bits(bits)?;
    Ok(u128::MAX >> (128 - bits))
}

/// Inclusive signed range representable in `bits` bits.
pub fn signed_range(bits: u32) -> Result<(i128, i128)> {
    check_bits(bits)?;
    let min = i128::MIN >> (128 - bits);
    Ok((min, !min))
}

/// Map a signed value onto its `bits`-wide two's-complement unsigned form.
pub fn to_twos_complement(value: i128, bits: u32) -> Result<u128> {
    let (min, max) = signed_range(bits)?;
    if value < min || value > max {
        return Err(CodecError::range(
            format!("{bits}-bit signed int"),
            value,
            min,
            max,
        ));
    }
    Ok(value as u128 & unsigned_max(bits)?)
}

/// Recover the signed value from its `bits`-wide two's-complement form.
pub fn from_twos_complement(value: u128, bits: u32) -> Result<i128> {
    let max = unsigned_max(bits)?;
    if value > max {
        return Err(CodecError::range(
            format!("{bits}-bit unsigned int"),
            value,
            0,
            max,
        ));
    }
    // Sign-extend from bit `bits - 1`.
    let shift = 128 - bits;
    Ok(((value << shift) as i128) >> shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_ranges() {
        assert_eq!(unsigned_max(8).unwrap(), 255);
        assert_eq!(unsigned_max(1).unwrap(), 1);
        assert_eq!(unsigned_max(128).unwrap(), u128::MAX);
        assert_eq!(signed_range(8).unwrap(), (-128, 127));
        assert_eq!(signed_range(32).unwrap(), (i32::MIN as i128, i32::MAX as i128));
        assert_eq!(signed_range(128).unwrap(), (i128::MIN, i128::MAX));
        assert_eq!(signed_range(1).unwrap(), (-1, 0));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_known_mappings() {
        assert_eq!(to_twos_complement(-1, 32).unwrap(), u32::MAX as u128);
        assert_eq!(to_twos_complement(-2147483648, 32).unwrap(), 1 << 31);
        assert_eq!(to_twos_complement(120, 32).unwrap(), 120);
        assert_eq!(to_twos_complement(-20, 8).unwrap(), 236);
        assert_eq!(from_twos_complement(236, 8).unwrap(), -20);
        assert_eq!(from_twos_complement(u32::MAX as u128, 32).unwrap(), -1);
        assert_eq!(from_twos_complement(1 << 31, 32).unwrap(), -2147483648);
        assert_eq!(from_twos_complement(127, 8).unwrap(), 127);
        assert_eq!(from_twos_complement(u128::MAX, 128).unwrap(), -1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        for value in [-2147483649i128, 2147483648, 10i128.pow(20), -(10i128.pow(20))] {
            assert!(to_twos_complement(value, 32).is_err());
        }
        assert!(from_twos_complement(256, 8).is_err());
    }

    #[test]
    fn test_invalid_widths() {
        assert!(matches!(
            unsigned_max(0),
            Err(CodecError::InvalidParameter(_))
        ));
        assert!(matches!(
            to_twos_complement(0, 129),
            Err(CodecError::InvalidParameter(_))
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_bijection_small_width() {
        for unsigned in 0u128..(1 << 10) {
            let signed = from_twos_complement(unsigned, 10).unwrap();
            assert_eq!(to_twos_complement(signed, 10).unwrap(), unsigned);
        }
    }
}
