//! Conversions from `UnsignedLong` to floating point
//!
//! Values below 2⁶³ convert natively. For values with the sign bit set,
//! masking it off and adding 2⁶³ back after conversion rounds twice and
//! can land one ulp away from the nearest float. Instead the value is
//! halved with a logical shift, the shifted-out bit is folded back into
//! bit 0 so it still breaks ties, and the converted half is doubled.
//! Doubling is exact, so the result is correctly rounded.

use super::UNSIGNED_MASK;
use crate::primitives::UnsignedLong;

/// Logical halving that keeps the lowest bit as a sticky bit.
#[inline]
const fn halve_sticky(bits: i64) -> i64 {
    ((bits >> 1) & UNSIGNED_MASK) | (bits & 1)
}

impl UnsignedLong {
    /// The value as the nearest `f32` (ties to even).
    pub fn float_value(self) -> f32 {
        if self.0 >= 0 {
            return self.0 as f32;
        }

        halve_sticky(self.0) as f32 * 2.0
    }

    /// The value as the nearest `f64` (ties to even).
    pub fn double_value(self) -> f64 {
        if self.0 >= 0 {
            return self.0 as f64;
        }

        halve_sticky(self.0) as f64 * 2.0
    }
}

impl From<UnsignedLong> for f32 {
    fn from(value: UnsignedLong) -> Self {
        value.float_value()
    }
}

impl From<UnsignedLong> for f64 {
    fn from(value: UnsignedLong) -> Self {
        value.double_value()
    }
}
