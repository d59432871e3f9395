//! Conversions between `UnsignedLong` and native integer types
//!
//! Narrow unsigned types widen losslessly. `u64` and `i64` exchange the raw
//! bit pattern unchanged. Only `TryFrom<i64>` can fail: a negative signed
//! value has no unsigned counterpart.

use crate::primitives::{UnsignedLong, UnsignedLongError};

impl From<u8> for UnsignedLong {
    fn from(value: u8) -> Self {
        UnsignedLong(value as i64)
    }
}

impl From<u16> for UnsignedLong {
    fn from(value: u16) -> Self {
        UnsignedLong(value as i64)
    }
}

impl From<u32> for UnsignedLong {
    fn from(value: u32) -> Self {
        UnsignedLong(value as i64)
    }
}

/// Reinterprets the bits of a `u64`.
impl From<u64> for UnsignedLong {
    fn from(value: u64) -> Self {
        UnsignedLong(value as i64)
    }
}

/// Reinterprets the bits as a `u64`; the numeric value is preserved.
impl From<UnsignedLong> for u64 {
    fn from(value: UnsignedLong) -> Self {
        value.0 as u64
    }
}

/// Returns the raw bit pattern, as [`UnsignedLong::long_value`] does.
impl From<UnsignedLong> for i64 {
    fn from(value: UnsignedLong) -> Self {
        value.long_value()
    }
}

/// Accepts non-negative values only, as [`UnsignedLong::value_of`] does.
impl TryFrom<i64> for UnsignedLong {
    type Error = UnsignedLongError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        UnsignedLong::value_of(value)
    }
}
