//! Unsigned 64-bit integer value type
//!
//! `UnsignedLong` wraps a single `i64` whose bit pattern is read as an
//! unsigned integer in `[0, 2⁶⁴ − 1]`. Every bit pattern is a valid value
//! and is its only representation, so equality is bit equality.
//!
//! Addition, subtraction and multiplication reuse native wrapping signed
//! arithmetic, which yields the same bits under either interpretation.
//! Ordering, division, remainder, parsing and formatting go through the
//! unsigned routines in `primitives::unsigned`.

use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};

use crate::primitives::UnsignedLongError;
use crate::primitives::unsigned::{self, DigitBuffer};

/// Unsigned 64-bit integer stored as a signed bit pattern.
///
/// Values are immutable; every operation returns a new value.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct UnsignedLong(pub(crate) i64);

impl UnsignedLong {
    /// The value zero.
    pub const ZERO: Self = Self(0);

    /// The value one.
    pub const ONE: Self = Self(1);

    /// The maximum representable value (2⁶⁴ − 1), all bits set.
    pub const MAX_VALUE: Self = Self(-1);

    /// Builds a value from a raw bit pattern.
    ///
    /// Negative inputs are accepted and denote values `≥ 2⁶³`; `-1` is
    /// `MAX_VALUE`.
    #[inline]
    pub const fn from_long_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// Builds a value from a non-negative signed integer.
    ///
    /// # Errors
    /// Returns [`UnsignedLongError::InvalidArgument`] if `value` is negative.
    pub fn value_of(value: i64) -> Result<Self, UnsignedLongError> {
        if value < 0 {
            return Err(UnsignedLongError::InvalidArgument(value.to_string()));
        }

        Ok(Self(value))
    }

    /// Parses a digit string in the given radix.
    ///
    /// # Errors
    /// Fails with [`UnsignedLongError::InvalidFormat`] for an empty string,
    /// an invalid digit or a radix outside `[2, 36]`, and with
    /// [`UnsignedLongError::Overflow`] above `2⁶⁴ − 1`.
    ///
    /// # Examples
    /// ```
    /// use unsigned_long::UnsignedLong;
    ///
    /// let v = UnsignedLong::from_str_radix("ff", 16).unwrap();
    /// assert_eq!(v, UnsignedLong::from(255u32));
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, UnsignedLongError> {
        unsigned::parse(s, radix).map(Self)
    }

    /// Wrapping addition modulo 2⁶⁴.
    #[must_use]
    #[inline]
    pub const fn plus(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Wrapping subtraction modulo 2⁶⁴.
    #[must_use]
    #[inline]
    pub const fn minus(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Wrapping multiplication modulo 2⁶⁴.
    #[must_use]
    #[inline]
    pub const fn times(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Unsigned division.
    ///
    /// # Errors
    /// Returns [`UnsignedLongError::DivideByZero`] if `rhs` is zero.
    pub fn divided_by(self, rhs: Self) -> Result<Self, UnsignedLongError> {
        unsigned::divide(self.0, rhs.0).map(Self)
    }

    /// Unsigned remainder.
    ///
    /// # Errors
    /// Returns [`UnsignedLongError::DivideByZero`] if `rhs` is zero.
    pub fn modulo(self, rhs: Self) -> Result<Self, UnsignedLongError> {
        unsigned::remainder(self.0, rhs.0).map(Self)
    }

    /// Unsigned division, or `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.divided_by(rhs).ok()
    }

    /// Unsigned remainder, or `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.modulo(rhs).ok()
    }

    /// Low 32 bits reinterpreted as a signed integer.
    #[inline]
    pub const fn int_value(self) -> i32 {
        self.0 as i32
    }

    /// The raw bit pattern.
    ///
    /// Values `≥ 2⁶³` come back negative.
    #[inline]
    pub const fn long_value(self) -> i64 {
        self.0
    }

    /// XOR of the high and low 32-bit halves.
    ///
    /// Equal values always produce equal hash codes.
    #[inline]
    pub const fn hash_code(self) -> i32 {
        (self.0 ^ ((self.0 >> 32) & 0xFFFF_FFFF)) as i32
    }

    /// Renders the value in the given radix, lowercase, without prefix.
    ///
    /// # Errors
    /// Returns [`UnsignedLongError::InvalidFormat`] for a radix outside
    /// `[2, 36]`; no fallback radix is substituted.
    pub fn to_string_radix(self, radix: u32) -> Result<String, UnsignedLongError> {
        unsigned::format(self.0, radix)
    }
}

impl Display for UnsignedLong {
    /// Formats the value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", DigitBuffer::render(self.0, 10).as_str())
    }
}

impl Debug for UnsignedLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnsignedLong")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl LowerHex for UnsignedLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", DigitBuffer::render(self.0, 16).as_str())
    }
}

impl UpperHex for UnsignedLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut digits = DigitBuffer::render(self.0, 16);
        digits.make_ascii_uppercase();

        f.pad_integral(true, "0x", digits.as_str())
    }
}

impl Octal for UnsignedLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", DigitBuffer::render(self.0, 8).as_str())
    }
}

impl Binary for UnsignedLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", DigitBuffer::render(self.0, 2).as_str())
    }
}
