//! Decimal string parsing for `UnsignedLong`.

use std::str::FromStr;

use crate::primitives::{UnsignedLong, UnsignedLongError};

/// Parses a decimal digit string.
///
/// Equivalent to `UnsignedLong::from_str_radix(s, 10)`.
impl FromStr for UnsignedLong {
    type Err = UnsignedLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnsignedLong::from_str_radix(s, 10)
    }
}
