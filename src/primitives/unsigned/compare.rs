//! Unsigned comparison of signed bit patterns.

use core::cmp::Ordering;

/// Maps the unsigned ordering onto the signed ordering.
///
/// `0` becomes `i64::MIN` and `2⁶⁴ − 1` becomes `i64::MAX`.
#[inline]
const fn flip(a: i64) -> i64 {
    a ^ i64::MIN
}

/// Compares two bit patterns as unsigned 64-bit integers.
///
/// # Examples
/// ```
/// use core::cmp::Ordering;
/// use unsigned_long::primitives::unsigned::compare;
///
/// // 2⁶³ is stored as i64::MIN but is greater than 1 when unsigned.
/// assert_eq!(compare(i64::MIN, 1), Ordering::Greater);
/// assert_eq!(compare(-1, -1), Ordering::Equal);
/// ```
#[inline]
pub const fn compare(a: i64, b: i64) -> Ordering {
    let a = flip(a);
    let b = flip(b);

    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if `a < b` when both are read as unsigned.
#[inline]
pub(crate) const fn is_less(a: i64, b: i64) -> bool {
    flip(a) < flip(b)
}
