//! Conversion utilities
//!
//! Explicit conversions between `UnsignedLong` and other numeric and
//! textual representations, grouped by counterpart type:
//! - `native`: fixed-width Rust integers
//! - `float`: `f32` / `f64`, correctly rounded
//! - `string`: decimal `FromStr`
//! - `bigint`: `num_bigint::BigInt`, exact in both directions
//!
//! Conversions that may lose information or reject input are fallible;
//! bit-pattern reinterpretations are infallible and documented as such.

#[cfg(feature = "bigint")]
mod bigint;
mod float;
mod native;
mod string;

/// Every bit except the sign bit.
const UNSIGNED_MASK: i64 = i64::MAX;
