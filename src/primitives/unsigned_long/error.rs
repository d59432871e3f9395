//! Errors reported by `UnsignedLong` construction, parsing and division.

use thiserror::Error;

/// Errors produced by fallible `UnsignedLong` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsignedLongError {
    /// A negative or out-of-range value was supplied where an unsigned
    /// 64-bit value is required.
    #[error("value ({0}) is outside the range for an unsigned long value")]
    InvalidArgument(String),

    /// A digit string or radix was malformed.
    #[error(transparent)]
    InvalidFormat(#[from] FormatError),

    /// A well-formed digit string denotes a value above `2⁶⁴ − 1`.
    #[error("too large for unsigned long: {0}")]
    Overflow(String),

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivideByZero,
}

/// Reasons a digit string or radix is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input contains no digits.
    #[error("empty string")]
    Empty,

    /// The radix lies outside `[2, 36]`.
    #[error("illegal radix: {0}")]
    IllegalRadix(u32),

    /// A character is not a digit in the requested radix.
    #[error("invalid digit {digit:?} at position {position} in {input:?}")]
    InvalidDigit {
        input: String,
        position: usize,
        digit: char,
    },
}
