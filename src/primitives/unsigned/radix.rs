//! Radix string parsing and formatting of unsigned bit patterns
//!
//! Parsing accumulates `value * radix + digit` left to right. The first
//! `MAX_SAFE_DIGITS[radix]` digits can never overflow and are taken
//! without checks; every later digit is checked against the unsigned
//! quotient and remainder of `MAX_VALUE` by the radix before it is
//! accumulated. No intermediate wider than 64 bits is used.
//!
//! Formatting peels off one digit with unsigned division when the top bit
//! is set, after which ordinary signed division is exact.
//!
//! The lookup tables are built by `const fn` at compile time and are
//! indexed directly by radix; entries below `MIN_RADIX` are unused.

use crate::primitives::unsigned::compare::is_less;
use crate::primitives::unsigned::division::{divide_unchecked, remainder_unchecked};
use crate::primitives::{FormatError, UnsignedLongError};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;

const TABLE_LEN: usize = MAX_RADIX as usize + 1;

/// Base 2 needs the most digits: one per bit.
const MAX_DIGITS: usize = 64;

const DIGITS: &[u8; MAX_RADIX as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unsigned `MAX_VALUE / radix`, indexed by radix.
pub const MAX_VALUE_DIVS: [i64; TABLE_LEN] = build_divs();

/// Unsigned `MAX_VALUE % radix`, indexed by radix.
pub const MAX_VALUE_MODS: [u32; TABLE_LEN] = build_mods();

/// Longest digit string in each radix that always fits in 64 bits.
///
/// This is the largest `k` with `radixᵏ ≤ 2⁶⁴`.
pub const MAX_SAFE_DIGITS: [usize; TABLE_LEN] = build_safe_digits();

const fn build_divs() -> [i64; TABLE_LEN] {
    let mut table = [0i64; TABLE_LEN];
    let mut radix = MIN_RADIX as usize;

    while radix < TABLE_LEN {
        table[radix] = divide_unchecked(-1, radix as i64);
        radix += 1;
    }

    table
}

const fn build_mods() -> [u32; TABLE_LEN] {
    let mut table = [0u32; TABLE_LEN];
    let mut radix = MIN_RADIX as usize;

    while radix < TABLE_LEN {
        table[radix] = remainder_unchecked(-1, radix as i64) as u32;
        radix += 1;
    }

    table
}

const fn build_safe_digits() -> [usize; TABLE_LEN] {
    let mut table = [0usize; TABLE_LEN];
    let mut radix = MIN_RADIX as usize;

    while radix < TABLE_LEN {
        let r = radix as i64;
        let div = divide_unchecked(-1, r);
        let rem = remainder_unchecked(-1, r);

        // Stops at the first power with power * r > MAX_VALUE.
        let mut power: i64 = 1;
        let mut digits = 0usize;
        while !is_less(div, power) {
            power = power.wrapping_mul(r);
            digits += 1;
        }

        // power * r == 2⁶⁴ exactly (radix 2, 4 and 16).
        if power == div.wrapping_add(1) && rem == r - 1 {
            digits += 1;
        }

        table[radix] = digits;
        radix += 1;
    }

    table
}

/// Rejects radixes outside `[MIN_RADIX, MAX_RADIX]`.
pub(crate) fn check_radix(radix: u32) -> Result<(), FormatError> {
    if radix < MIN_RADIX || radix > MAX_RADIX {
        return Err(FormatError::IllegalRadix(radix));
    }

    Ok(())
}

/// Returns `true` if `current * radix + digit` exceeds `2⁶⁴ − 1`.
#[inline]
const fn overflows(current: i64, digit: u32, radix: u32) -> bool {
    // Top bit set: already above MAX_VALUE / radix for every radix.
    if current < 0 {
        return true;
    }

    let div = MAX_VALUE_DIVS[radix as usize];

    if current < div {
        false
    } else if current > div {
        true
    } else {
        digit > MAX_VALUE_MODS[radix as usize]
    }
}

/// Parses a digit string in `radix` into an unsigned bit pattern.
///
/// Digits are `0-9` followed by `a-z` or `A-Z`. No sign, prefix or
/// whitespace is accepted.
///
/// # Errors
/// - [`FormatError::Empty`] if `s` is empty
/// - [`FormatError::IllegalRadix`] if `radix` is outside `[2, 36]`
/// - [`FormatError::InvalidDigit`] for the first character that is not a
///   digit in `radix`
/// - [`UnsignedLongError::Overflow`] if the value exceeds `2⁶⁴ − 1`
///
/// # Examples
/// ```
/// use unsigned_long::primitives::unsigned::parse;
///
/// assert_eq!(parse("ff", 16), Ok(255));
/// assert_eq!(parse("18446744073709551615", 10), Ok(-1));
/// assert!(parse("18446744073709551616", 10).is_err());
/// ```
pub fn parse(s: &str, radix: u32) -> Result<i64, UnsignedLongError> {
    if s.is_empty() {
        return Err(FormatError::Empty.into());
    }

    check_radix(radix)?;

    let max_safe = MAX_SAFE_DIGITS[radix as usize];
    let multiplier = radix as i64;
    let mut value: i64 = 0;

    for (position, ch) in s.chars().enumerate() {
        let digit = ch
            .to_digit(radix)
            .ok_or_else(|| FormatError::InvalidDigit {
                input: s.to_owned(),
                position,
                digit: ch,
            })?;

        if position >= max_safe && overflows(value, digit, radix) {
            return Err(UnsignedLongError::Overflow(s.to_owned()));
        }

        value = value.wrapping_mul(multiplier).wrapping_add(digit as i64);
    }

    Ok(value)
}

/// Renders an unsigned bit pattern in `radix` as an owned string.
///
/// # Errors
/// Returns [`FormatError::IllegalRadix`] if `radix` is outside `[2, 36]`,
/// the same error [`parse`] reports.
pub fn format(bits: i64, radix: u32) -> Result<String, UnsignedLongError> {
    Ok(DigitBuffer::new(bits, radix)?.as_str().to_owned())
}

/// Fixed-capacity digit buffer filled from the end backwards.
///
/// Holds the canonical representation of one value: most significant
/// digit first, no leading zeros, `"0"` for zero, lowercase letters.
#[derive(Copy, Clone)]
pub struct DigitBuffer {
    digits: [u8; MAX_DIGITS],
    start: usize,
}

impl DigitBuffer {
    /// Renders `bits` in `radix`.
    ///
    /// # Errors
    /// Returns [`FormatError::IllegalRadix`] for a radix outside `[2, 36]`.
    pub fn new(bits: i64, radix: u32) -> Result<Self, FormatError> {
        check_radix(radix)?;

        Ok(Self::render(bits, radix))
    }

    /// Renders `bits` in a radix already known to be valid.
    pub(crate) fn render(mut bits: i64, radix: u32) -> Self {
        let mut out = Self {
            digits: [0u8; MAX_DIGITS],
            start: MAX_DIGITS,
        };

        if bits == 0 {
            out.push(0);
            return out;
        }

        let divisor = radix as i64;

        if bits < 0 {
            let quotient = divide_unchecked(bits, divisor);
            let rem = bits.wrapping_sub(quotient.wrapping_mul(divisor));

            out.push(rem);
            bits = quotient;
        }

        while bits > 0 {
            out.push(bits % divisor);
            bits /= divisor;
        }

        out
    }

    #[inline]
    fn push(&mut self, digit: i64) {
        self.start -= 1;
        self.digits[self.start] = DIGITS[digit as usize];
    }

    /// Converts the letter digits to uppercase in place.
    pub fn make_ascii_uppercase(&mut self) {
        self.digits[self.start..].make_ascii_uppercase();
    }

    /// Returns the rendered digits.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and letters are ever written.
        core::str::from_utf8(&self.digits[self.start..]).unwrap_or_default()
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        MAX_DIGITS - self.start
    }

    /// Always `false`: zero renders as `"0"`.
    pub fn is_empty(&self) -> bool {
        self.start == MAX_DIGITS
    }
}
