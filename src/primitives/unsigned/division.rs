//! Unsigned division and remainder of signed bit patterns
//!
//! Native signed division only agrees with unsigned division while both
//! operands have their top bit clear. The routines below split the
//! remaining cases so that no 128-bit or arbitrary-precision intermediate
//! is ever needed:
//!
//! - divisor ≥ 2⁶³: the quotient is either 0 or 1
//! - dividend < 2⁶³: the signed and unsigned results coincide
//! - otherwise: halve the dividend with a logical shift, divide, double,
//!   and correct the estimate by at most one

use crate::primitives::UnsignedLongError;
use crate::primitives::unsigned::compare::is_less;

/// Clears the sign bit after an arithmetic shift, making it logical.
#[inline]
const fn logical_shr1(a: i64) -> i64 {
    (a >> 1) & i64::MAX
}

/// Returns `(quotient, remainder)` for a dividend with its top bit set and
/// a divisor with its top bit clear.
///
/// `((dividend >>> 1) / divisor) << 1` is either the exact quotient or one
/// less than it, so a single correction step suffices.
#[inline]
const fn divide_high(dividend: i64, divisor: i64) -> (i64, i64) {
    let quotient = (logical_shr1(dividend) / divisor) << 1;
    let rem = dividend.wrapping_sub(quotient.wrapping_mul(divisor));

    if is_less(rem, divisor) {
        (quotient, rem)
    } else {
        (quotient + 1, rem.wrapping_sub(divisor))
    }
}

/// Unsigned quotient of two bit patterns.
///
/// The divisor must be non-zero; callers outside this module go through
/// [`divide`], which reports a zero divisor as an error.
pub(crate) const fn divide_unchecked(dividend: i64, divisor: i64) -> i64 {
    if divisor < 0 {
        return if is_less(dividend, divisor) { 0 } else { 1 };
    }

    if dividend >= 0 {
        return dividend / divisor;
    }

    divide_high(dividend, divisor).0
}

/// Unsigned remainder of two bit patterns.
///
/// The divisor must be non-zero.
pub(crate) const fn remainder_unchecked(dividend: i64, divisor: i64) -> i64 {
    if divisor < 0 {
        return if is_less(dividend, divisor) {
            dividend
        } else {
            dividend.wrapping_sub(divisor)
        };
    }

    if dividend >= 0 {
        return dividend % divisor;
    }

    divide_high(dividend, divisor).1
}

/// Divides two bit patterns as unsigned 64-bit integers.
///
/// # Errors
/// Returns [`UnsignedLongError::DivideByZero`] if `divisor` is zero,
/// whatever the dividend.
///
/// # Examples
/// ```
/// use unsigned_long::primitives::unsigned::divide;
///
/// // (2⁶⁴ − 1) / (2⁶⁴ − 1)
/// assert_eq!(divide(-1, -1), Ok(1));
/// // 2⁶³ / 2
/// assert_eq!(divide(i64::MIN, 2), Ok(1 << 62));
/// assert!(divide(0, 0).is_err());
/// ```
pub fn divide(dividend: i64, divisor: i64) -> Result<i64, UnsignedLongError> {
    if divisor == 0 {
        return Err(UnsignedLongError::DivideByZero);
    }

    Ok(divide_unchecked(dividend, divisor))
}

/// Computes the unsigned remainder of two bit patterns.
///
/// # Errors
/// Returns [`UnsignedLongError::DivideByZero`] if `divisor` is zero.
pub fn remainder(dividend: i64, divisor: i64) -> Result<i64, UnsignedLongError> {
    if divisor == 0 {
        return Err(UnsignedLongError::DivideByZero);
    }

    Ok(remainder_unchecked(dividend, divisor))
}
