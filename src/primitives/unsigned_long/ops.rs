//! Operator and ordering traits for `UnsignedLong`
//!
//! `+`, `-` and `*` wrap modulo 2⁶⁴, matching `plus`, `minus` and `times`.
//! `/` and `%` panic on a zero divisor like the native integer operators;
//! use `divided_by` / `modulo` or the `checked_*` forms to get an error
//! instead.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::primitives::UnsignedLong;
use crate::primitives::unsigned::{compare, divide_unchecked, remainder_unchecked};

impl Add<UnsignedLong> for UnsignedLong {
    type Output = UnsignedLong;

    fn add(self, rhs: UnsignedLong) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub<UnsignedLong> for UnsignedLong {
    type Output = UnsignedLong;

    fn sub(self, rhs: UnsignedLong) -> Self::Output {
        self.minus(rhs)
    }
}

impl Mul<UnsignedLong> for UnsignedLong {
    type Output = UnsignedLong;

    fn mul(self, rhs: UnsignedLong) -> Self::Output {
        self.times(rhs)
    }
}

/// Unsigned division.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Div<UnsignedLong> for UnsignedLong {
    type Output = UnsignedLong;

    fn div(self, rhs: UnsignedLong) -> Self::Output {
        assert!(rhs != UnsignedLong::ZERO, "division by zero");

        UnsignedLong(divide_unchecked(self.0, rhs.0))
    }
}

/// Unsigned remainder.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Rem<UnsignedLong> for UnsignedLong {
    type Output = UnsignedLong;

    fn rem(self, rhs: UnsignedLong) -> Self::Output {
        assert!(rhs != UnsignedLong::ZERO, "division by zero");

        UnsignedLong(remainder_unchecked(self.0, rhs.0))
    }
}

impl AddAssign for UnsignedLong {
    fn add_assign(&mut self, rhs: UnsignedLong) {
        *self = *self + rhs;
    }
}

impl SubAssign for UnsignedLong {
    fn sub_assign(&mut self, rhs: UnsignedLong) {
        *self = *self - rhs;
    }
}

impl MulAssign for UnsignedLong {
    fn mul_assign(&mut self, rhs: UnsignedLong) {
        *self = *self * rhs;
    }
}

impl DivAssign for UnsignedLong {
    fn div_assign(&mut self, rhs: UnsignedLong) {
        *self = *self / rhs;
    }
}

impl RemAssign for UnsignedLong {
    fn rem_assign(&mut self, rhs: UnsignedLong) {
        *self = *self % rhs;
    }
}

/// Unsigned ordering: `ZERO` is the minimum and `MAX_VALUE` the maximum.
impl Ord for UnsignedLong {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0, other.0)
    }
}

impl PartialOrd for UnsignedLong {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for UnsignedLong {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Wrapping sum.
impl Sum for UnsignedLong {
    fn sum<I: Iterator<Item = UnsignedLong>>(iter: I) -> Self {
        iter.fold(UnsignedLong::ZERO, UnsignedLong::plus)
    }
}

/// Wrapping product.
impl Product for UnsignedLong {
    fn product<I: Iterator<Item = UnsignedLong>>(iter: I) -> Self {
        iter.fold(UnsignedLong::ONE, UnsignedLong::times)
    }
}
