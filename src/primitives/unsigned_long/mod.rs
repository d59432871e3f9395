//! Unsigned 64-bit integer primitive
//!
//! This module defines `UnsignedLong`, a 64-bit unsigned integer whose
//! storage is a signed `i64` bit pattern.
//!
//! The type is a small, explicit value type: wrapping arithmetic, unsigned
//! division and ordering, radix parsing and formatting, and conversions to
//! native integers, floating point and `BigInt`.

mod conv;
mod core;
mod error;
mod ops;

pub use self::core::UnsignedLong;
pub use error::{FormatError, UnsignedLongError};
