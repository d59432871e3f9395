//! Unsigned 64-bit integers over signed storage
//!
//! This crate provides `UnsignedLong`, a value type for integers in
//! `[0, 2⁶⁴ − 1]` whose storage is a single signed `i64` bit pattern,
//! together with the unsigned arithmetic needed to use it correctly.
//!
//! Naive signed division, remainder and comparison give wrong answers as
//! soon as the top bit is set. The crate emulates unsigned semantics with
//! signed 64-bit operations only, without 128-bit or arbitrary-precision
//! intermediates.
//!
//! # Module overview
//!
//! - `primitives::unsigned`
//!   Free functions over raw `i64` bit patterns: unsigned `compare`,
//!   `divide`, `remainder`, and radix `parse` / `format` with single-pass
//!   overflow detection. The radix lookup tables are compile-time
//!   constants.
//!
//! - `primitives::UnsignedLong`
//!   The value type built on those functions: wrapping `plus` / `minus` /
//!   `times`, unsigned `divided_by` / `modulo`, unsigned ordering and
//!   hashing, decimal and radix formatting, and conversions to `i32`,
//!   `i64`, `f32`, `f64` and (feature `bigint`) `num_bigint::BigInt`.
//!
//! # Example
//!
//! ```
//! use unsigned_long::UnsignedLong;
//!
//! let max: UnsignedLong = "18446744073709551615".parse().unwrap();
//! assert_eq!(max, UnsignedLong::MAX_VALUE);
//! assert!(max > UnsignedLong::ONE);
//! assert_eq!(max.long_value(), -1);
//! assert_eq!(max.to_string_radix(16).unwrap(), "ffffffffffffffff");
//! ```
//!
//! # Design goals
//!
//! - No heap allocations outside of owned string output and errors
//! - Immutable, `Copy` values with no shared mutable state
//! - All 2⁶⁴ bit patterns valid; equality is bit equality
//! - Strict radix validation for both parsing and formatting

pub mod primitives;

pub use primitives::{FormatError, UnsignedLong, UnsignedLongError};
