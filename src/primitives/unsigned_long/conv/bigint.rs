//! Conversions between `UnsignedLong` and `num_bigint::BigInt`
//!
//! `BigInt` is the arbitrary-precision boundary of this crate. Converting
//! out is always exact. Converting in accepts only non-negative values
//! whose bit length is at most 64.

use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive};

use super::UNSIGNED_MASK;
use crate::primitives::{UnsignedLong, UnsignedLongError};

impl UnsignedLong {
    /// The exact value as a `BigInt`.
    pub fn big_integer_value(self) -> BigInt {
        let mut value = BigInt::from(self.0 & UNSIGNED_MASK);

        if self.0 < 0 {
            value += BigInt::one() << 63u32;
        }

        value
    }

    /// Builds a value from a `BigInt` in `[0, 2⁶⁴ − 1]`.
    ///
    /// # Errors
    /// Returns [`UnsignedLongError::InvalidArgument`] if `value` is
    /// negative or needs more than 64 bits.
    pub fn from_big_int(value: &BigInt) -> Result<Self, UnsignedLongError> {
        let out_of_range = || UnsignedLongError::InvalidArgument(value.to_string());

        if value.sign() == Sign::Minus || value.bits() > u64::from(u64::BITS) {
            return Err(out_of_range());
        }

        value
            .to_u64()
            .map(|bits| UnsignedLong(bits as i64))
            .ok_or_else(out_of_range)
    }
}

impl From<UnsignedLong> for BigInt {
    fn from(value: UnsignedLong) -> Self {
        value.big_integer_value()
    }
}

impl TryFrom<&BigInt> for UnsignedLong {
    type Error = UnsignedLongError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        UnsignedLong::from_big_int(value)
    }
}

impl TryFrom<BigInt> for UnsignedLong {
    type Error = UnsignedLongError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        UnsignedLong::from_big_int(&value)
    }
}
