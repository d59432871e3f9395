//! Unsigned arithmetic over signed 64-bit bit patterns
//!
//! This module holds the leaves the `UnsignedLong` value type is built on.
//! Every function here takes and returns raw `i64` bit patterns and treats
//! them as unsigned integers in `[0, 2⁶⁴ − 1]`, using only signed 64-bit
//! operations:
//! - `compare`: unsigned three-way ordering via sign-bit flipping
//! - `divide` / `remainder`: unsigned division without a wider type
//! - `parse` / `format`: radix string conversion with single-pass
//!   overflow detection
//!
//! Addition, subtraction and multiplication need no dedicated routine:
//! two's-complement wrapping arithmetic produces identical bit patterns
//! for both interpretations.

mod compare;
mod division;
mod radix;

pub use compare::compare;
pub use division::{divide, remainder};
pub use radix::{
    DigitBuffer, MAX_RADIX, MAX_SAFE_DIGITS, MAX_VALUE_DIVS, MAX_VALUE_MODS, MIN_RADIX, format,
    parse,
};

pub(crate) use division::{divide_unchecked, remainder_unchecked};
