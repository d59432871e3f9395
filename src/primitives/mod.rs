//! Primitive types
//!
//! This module defines the low-level numeric primitives of the crate.
//!
//! - `UnsignedLong`: an unsigned 64-bit integer stored as a signed bit
//!   pattern, with unsigned division, ordering, parsing and formatting
//! - `unsigned`: the same unsigned operations as free functions over raw
//!   `i64` bit patterns
//!
//! Both layers are dependency-free apart from error formatting; the
//! `BigInt` bridge is behind the `bigint` feature.

pub mod unsigned;
mod unsigned_long;

pub use unsigned_long::{FormatError, UnsignedLong, UnsignedLongError};
