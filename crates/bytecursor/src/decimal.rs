// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 128-bit scaled decimal with a fixed four-word layout.
//!
//! Wire/memory layout (four native-endian `u32` words, 16 bytes):
//!
//! ```text
//! +--------+--------+--------+--------+
//! | flags  |   hi   |   lo   |  mid   |
//! +--------+--------+--------+--------+
//!   0..4     4..8     8..12    12..16
//! ```
//!
//! - mantissa: 96-bit unsigned integer `hi:mid:lo`
//! - `flags` bits 16..24: scale (power of ten divisor, 0..=28)
//! - `flags` bit 31: sign
//! - all other `flags` bits are zero
//!
//! This is the in-memory order used by legacy 128-bit decimal producers,
//! so records containing decimals stay byte-compatible with them when both
//! ends share native byte order. Equality is bitwise: `1.0` and `1.00`
//! differ, exactly as their encodings do.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{CursorError, CursorResult};

const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;
const SIGN_MASK: u32 = 0x8000_0000;
const MANTISSA_MAX: u128 = (1u128 << 96) - 1;

/// Fixed-layout 128-bit decimal.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Zeroable, Pod)]
pub struct Decimal {
    flags: u32,
    hi: u32,
    lo: u32,
    mid: u32,
}

impl Decimal {
    /// Largest supported scale.
    pub const MAX_SCALE: u32 = 28;

    /// Zero with scale 0.
    pub const ZERO: Decimal = Decimal {
        flags: 0,
        hi: 0,
        lo: 0,
        mid: 0,
    };

    /// Builds `mantissa / 10^scale`.
    ///
    /// Fails when `|mantissa|` needs more than 96 bits or `scale` exceeds
    /// [`MAX_SCALE`](Self::MAX_SCALE).
    pub fn try_new(mantissa: i128, scale: u32) -> CursorResult<Self> {
        if scale > Self::MAX_SCALE {
            return Err(CursorError::InvalidDecimal {
                reason: "scale exceeds 28",
            });
        }
        let magnitude = mantissa.unsigned_abs();
        if magnitude > MANTISSA_MAX {
            return Err(CursorError::InvalidDecimal {
                reason: "mantissa exceeds 96 bits",
            });
        }
        Ok(Self::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            (magnitude >> 64) as u32,
            mantissa < 0,
            scale,
        ))
    }

    /// Builds a decimal from its raw mantissa words, sign and scale.
    ///
    /// `scale` is masked to 8 bits; callers wanting validation use
    /// [`try_new`](Self::try_new).
    pub const fn from_parts(lo: u32, mid: u32, hi: u32, negative: bool, scale: u32) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        Self {
            flags: sign | ((scale << SCALE_SHIFT) & SCALE_MASK),
            hi,
            lo,
            mid,
        }
    }

    /// Power-of-ten divisor applied to the mantissa.
    #[inline]
    pub const fn scale(&self) -> u32 {
        (self.flags & SCALE_MASK) >> SCALE_SHIFT
    }

    /// Sign bit. A negative zero keeps its sign.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    /// Unsigned 96-bit mantissa `hi:mid:lo`.
    #[inline]
    pub const fn unsigned_mantissa(&self) -> u128 {
        ((self.hi as u128) << 64) | ((self.mid as u128) << 32) | self.lo as u128
    }

    /// Signed mantissa.
    pub const fn mantissa(&self) -> i128 {
        let magnitude = self.unsigned_mantissa() as i128;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Raw `(flags, hi, lo, mid)` words in layout order.
    pub const fn to_words(&self) -> [u32; 4] {
        [self.flags, self.hi, self.lo, self.mid]
    }

    /// True when the reserved flag bits are clear and the scale is in range.
    ///
    /// Values read off the wire are not validated; check here if the
    /// producer is untrusted.
    pub const fn is_valid(&self) -> bool {
        self.flags & !(SCALE_MASK | SIGN_MASK) == 0 && self.scale() <= Self::MAX_SCALE
    }

    /// Lossy conversion to `f64`.
    pub fn to_f64(&self) -> f64 {
        self.mantissa() as f64 / 10f64.powi(self.scale() as i32)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        let magnitude = value.unsigned_abs();
        Self::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, value < 0, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::from_parts(value as u32, (value >> 32) as u32, 0, false, 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unsigned_mantissa().to_string();
        let scale = self.scale() as usize;
        if self.is_negative() {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{:0>width$}", digits, width = scale)
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_sixteen_bytes() {
        assert_eq!(core::mem::size_of::<Decimal>(), 16);
        assert_eq!(core::mem::align_of::<Decimal>(), 4);
    }

    #[test]
    fn test_word_order_flags_hi_lo_mid() {
        let value = Decimal::from_parts(0x1111_1111, 0x2222_2222, 0x3333_3333, true, 5);
        let words: [u32; 4] = bytemuck::cast(value);
        assert_eq!(words, [0x8005_0000, 0x3333_3333, 0x1111_1111, 0x2222_2222]);
        assert_eq!(value.to_words(), words);
    }

    #[test]
    fn test_try_new_roundtrips_parts() {
        let value = Decimal::try_new(-123_456, 3).expect("in range");
        assert_eq!(value.mantissa(), -123_456);
        assert_eq!(value.scale(), 3);
        assert!(value.is_negative());
        assert!(value.is_valid());
        assert_eq!(value.to_string(), "-123.456");
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Decimal::try_new(1, 29).is_err());
        assert!(Decimal::try_new(1i128 << 96, 0).is_err());
        let max = Decimal::try_new((1i128 << 96) - 1, 0).expect("96-bit max");
        assert_eq!(max.unsigned_mantissa(), MANTISSA_MAX);
    }

    #[test]
    fn test_display_pads_small_fractions() {
        let value = Decimal::try_new(5, 3).expect("in range");
        assert_eq!(value.to_string(), "0.005");
        let value = Decimal::try_new(150, 2).expect("in range");
        assert_eq!(value.to_string(), "1.50");
        assert_eq!(Decimal::from(-42i64).to_string(), "-42");
        assert_eq!(Decimal::ZERO.to_string(), "0");
    }

    #[test]
    fn test_equality_is_bitwise() {
        let one = Decimal::try_new(10, 1).expect("in range");
        let one_again = Decimal::try_new(100, 2).expect("in range");
        assert_ne!(one, one_again);
        assert!((one.to_f64() - one_again.to_f64()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reserved_bits_make_value_invalid() {
        let raw: Decimal = bytemuck::cast([0x0000_0001u32, 0, 7, 0]);
        assert!(!raw.is_valid());
        assert_eq!(raw.unsigned_mantissa(), 7);
    }

    #[test]
    fn test_from_u64_uses_two_low_words() {
        let value = Decimal::from(u64::MAX);
        assert_eq!(value.unsigned_mantissa(), u128::from(u64::MAX));
        assert_eq!(value.scale(), 0);
    }
}
