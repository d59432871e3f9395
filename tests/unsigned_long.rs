use unsigned_long::{FormatError, UnsignedLong, UnsignedLongError};

use std::collections::HashSet;

const TWO_POW_63: UnsignedLong = UnsignedLong::from_long_bits(i64::MIN);

#[test]
fn unsigned_long_constants() {
    assert_eq!(UnsignedLong::ZERO.long_value(), 0);
    assert_eq!(UnsignedLong::ONE.long_value(), 1);
    assert_eq!(UnsignedLong::MAX_VALUE.long_value(), -1);
    assert_eq!(UnsignedLong::default(), UnsignedLong::ZERO);
    assert_eq!(u64::from(UnsignedLong::MAX_VALUE), u64::MAX);
}

#[test]
fn unsigned_long_value_of_rejects_negative() {
    assert_eq!(UnsignedLong::value_of(42).unwrap().long_value(), 42);
    assert_eq!(
        UnsignedLong::value_of(i64::MAX).unwrap(),
        UnsignedLong::from(i64::MAX as u64)
    );

    assert_eq!(
        UnsignedLong::value_of(-1),
        Err(UnsignedLongError::InvalidArgument("-1".to_string()))
    );
    assert!(UnsignedLong::try_from(i64::MIN).is_err());
    assert_eq!(UnsignedLong::try_from(7i64).unwrap(), UnsignedLong::from(7u8));
}

#[test]
fn unsigned_long_from_long_bits_keeps_pattern() {
    for bits in [0, 1, -1, i64::MIN, i64::MAX, 0x1234_5678_9ABC_DEF0] {
        let v = UnsignedLong::from_long_bits(bits);
        assert_eq!(v.long_value(), bits);
        assert_eq!(i64::from(v), bits);
    }
}

#[test]
fn unsigned_long_wrapping_arithmetic() {
    assert_eq!(UnsignedLong::MAX_VALUE.plus(UnsignedLong::ONE), UnsignedLong::ZERO);
    assert_eq!(UnsignedLong::ZERO.minus(UnsignedLong::ONE), UnsignedLong::MAX_VALUE);
    assert_eq!(
        TWO_POW_63.times(UnsignedLong::from(2u8)),
        UnsignedLong::ZERO
    );
    assert_eq!(
        UnsignedLong::MAX_VALUE.times(UnsignedLong::MAX_VALUE),
        UnsignedLong::ONE
    );

    let a = UnsignedLong::from(10_000_000_000u64);
    let b = UnsignedLong::from(3u8);
    assert_eq!(a + b, UnsignedLong::from(10_000_000_003u64));
    assert_eq!(a - b, UnsignedLong::from(9_999_999_997u64));
    assert_eq!(a * b, UnsignedLong::from(30_000_000_000u64));
}

#[test]
fn unsigned_long_assign_operators() {
    let mut v = UnsignedLong::from(100u8);

    v += UnsignedLong::from(5u8);
    assert_eq!(v, UnsignedLong::from(105u8));

    v -= UnsignedLong::from(10u8);
    assert_eq!(v, UnsignedLong::from(95u8));

    v *= UnsignedLong::from(2u8);
    assert_eq!(v, UnsignedLong::from(190u8));

    v /= UnsignedLong::from(7u8);
    assert_eq!(v, UnsignedLong::from(27u8));

    v %= UnsignedLong::from(5u8);
    assert_eq!(v, UnsignedLong::from(2u8));
}

#[test]
fn unsigned_long_divided_by_and_modulo() {
    let max = UnsignedLong::MAX_VALUE;

    assert_eq!(max.divided_by(max), Ok(UnsignedLong::ONE));
    assert_eq!(max.modulo(max), Ok(UnsignedLong::ZERO));
    assert_eq!(
        TWO_POW_63.divided_by(UnsignedLong::from(2u8)),
        Ok(UnsignedLong::from(1u64 << 62))
    );
    assert_eq!(
        max.divided_by(UnsignedLong::from(10u8)),
        Ok(UnsignedLong::from(u64::MAX / 10))
    );
    assert_eq!(max.modulo(UnsignedLong::from(10u8)), Ok(UnsignedLong::from(5u8)));
}

#[test]
fn unsigned_long_division_by_zero() {
    for v in [UnsignedLong::ZERO, UnsignedLong::ONE, TWO_POW_63, UnsignedLong::MAX_VALUE] {
        assert_eq!(v.divided_by(UnsignedLong::ZERO), Err(UnsignedLongError::DivideByZero));
        assert_eq!(v.modulo(UnsignedLong::ZERO), Err(UnsignedLongError::DivideByZero));
        assert_eq!(v.checked_div(UnsignedLong::ZERO), None);
        assert_eq!(v.checked_rem(UnsignedLong::ZERO), None);
    }

    assert_eq!(
        UnsignedLong::from(9u8).checked_div(UnsignedLong::from(2u8)),
        Some(UnsignedLong::from(4u8))
    );
}

#[test]
#[should_panic(expected = "division by zero")]
fn unsigned_long_div_operator_panics_on_zero() {
    let _ = UnsignedLong::ONE / UnsignedLong::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn unsigned_long_rem_operator_panics_on_zero() {
    let _ = UnsignedLong::ZERO % UnsignedLong::ZERO;
}

#[test]
fn unsigned_long_ordering_is_unsigned() {
    // Signed comparison would put 2⁶³ below 1.
    assert!(TWO_POW_63 > UnsignedLong::ONE);
    assert!(UnsignedLong::MAX_VALUE > TWO_POW_63);
    assert!(UnsignedLong::ZERO < UnsignedLong::from(i64::MAX as u64));

    let mut values = vec![
        UnsignedLong::MAX_VALUE,
        UnsignedLong::ONE,
        TWO_POW_63,
        UnsignedLong::ZERO,
        UnsignedLong::from(i64::MAX as u64),
        UnsignedLong::from_long_bits(i64::MIN + 1),
    ];
    values.sort();

    assert_eq!(
        values,
        vec![
            UnsignedLong::ZERO,
            UnsignedLong::ONE,
            UnsignedLong::from(i64::MAX as u64),
            TWO_POW_63,
            UnsignedLong::from_long_bits(i64::MIN + 1),
            UnsignedLong::MAX_VALUE,
        ]
    );

    assert_eq!(values.iter().min(), Some(&UnsignedLong::ZERO));
    assert_eq!(values.iter().max(), Some(&UnsignedLong::MAX_VALUE));
}

#[test]
fn unsigned_long_hash_code_folds_halves() {
    assert_eq!(UnsignedLong::ZERO.hash_code(), 0);
    assert_eq!(UnsignedLong::from(5u8).hash_code(), 5);
    assert_eq!(UnsignedLong::from(1u64 << 32).hash_code(), 1);
    assert_eq!(UnsignedLong::MAX_VALUE.hash_code(), 0);
    assert_eq!(UnsignedLong::from(0x0000_0001_8000_0000u64).hash_code(), i32::MIN + 1);
}

#[test]
fn unsigned_long_hash_consistent_with_eq() {
    let mut set = HashSet::new();

    set.insert(UnsignedLong::MAX_VALUE);
    set.insert(UnsignedLong::from(u64::MAX));
    set.insert("18446744073709551615".parse::<UnsignedLong>().unwrap());
    set.insert(UnsignedLong::ONE);

    assert_eq!(set.len(), 2);
    assert!(set.contains(&UnsignedLong::from_long_bits(-1)));
}

#[test]
fn unsigned_long_narrowing_conversions() {
    let v = UnsignedLong::from(0xFFFF_FFFF_0000_0007u64);
    assert_eq!(v.int_value(), 7);
    assert_eq!(v.long_value(), 0xFFFF_FFFF_0000_0007u64 as i64);

    assert_eq!(UnsignedLong::MAX_VALUE.int_value(), -1);
    assert_eq!(UnsignedLong::from(0x8000_0000u32).int_value(), i32::MIN);
}

#[test]
fn unsigned_long_float_conversions() {
    assert_eq!(TWO_POW_63.double_value(), 9_223_372_036_854_775_808.0);
    assert_eq!(TWO_POW_63.float_value(), 9_223_372_036_854_775_808.0f32);
    assert!(TWO_POW_63.double_value() > 0.0);

    assert_eq!(UnsignedLong::MAX_VALUE.double_value(), 18_446_744_073_709_551_616.0);
    assert_eq!(UnsignedLong::ZERO.double_value(), 0.0);
    assert_eq!(UnsignedLong::from(12345u32).float_value(), 12345.0f32);

    assert_eq!(f64::from(UnsignedLong::ONE), 1.0);
    assert_eq!(f32::from(UnsignedLong::MAX_VALUE), u64::MAX as f32);
}

#[test]
fn unsigned_long_float_conversion_rounds_once() {
    // 2⁶³ + 2⁶² + 1025 lies just above the midpoint between two doubles;
    // rounding the low part first would create a false tie.
    let v = (1u64 << 63) + (1u64 << 62) + 1025;
    assert_eq!(UnsignedLong::from(v).double_value(), v as f64);

    let v = (1u64 << 63) + (1u64 << 62) + 1024;
    assert_eq!(UnsignedLong::from(v).double_value(), v as f64);
}

#[test]
fn unsigned_long_display_and_radix_traits() {
    let max = UnsignedLong::MAX_VALUE;

    assert_eq!(max.to_string(), "18446744073709551615");
    assert_eq!(TWO_POW_63.to_string(), "9223372036854775808");
    assert_eq!(UnsignedLong::ZERO.to_string(), "0");

    assert_eq!(format!("{:>5}", UnsignedLong::from(42u8)), "   42");
    assert_eq!(format!("{:05}", UnsignedLong::from(42u8)), "00042");

    assert_eq!(format!("{max:x}"), "ffffffffffffffff");
    assert_eq!(format!("{max:#x}"), "0xffffffffffffffff");
    assert_eq!(format!("{:X}", UnsignedLong::from(0xBEEFu16)), "BEEF");
    assert_eq!(format!("{max:o}"), "1777777777777777777777");
    assert_eq!(format!("{:#b}", UnsignedLong::from(5u8)), "0b101");
    assert_eq!(format!("{:b}", TWO_POW_63), format!("1{}", "0".repeat(63)));
}

#[test]
fn unsigned_long_debug_shows_unsigned_value() {
    assert_eq!(
        format!("{:?}", UnsignedLong::MAX_VALUE),
        "UnsignedLong(18446744073709551615)"
    );
}

#[test]
fn unsigned_long_to_string_radix_is_strict() {
    let v = UnsignedLong::from(255u8);

    assert_eq!(v.to_string_radix(16).unwrap(), "ff");
    assert_eq!(v.to_string_radix(2).unwrap(), "11111111");
    assert_eq!(v.to_string_radix(36).unwrap(), "73");

    for radix in [0, 1, 37, 100] {
        assert_eq!(
            v.to_string_radix(radix),
            Err(UnsignedLongError::InvalidFormat(FormatError::IllegalRadix(radix)))
        );
    }
}

#[test]
fn unsigned_long_from_str_radix() {
    assert_eq!(
        UnsignedLong::from_str_radix("ff", 16).unwrap(),
        UnsignedLong::from(255u8)
    );
    assert_eq!(
        UnsignedLong::from_str_radix("FFFFFFFFFFFFFFFF", 16).unwrap(),
        UnsignedLong::MAX_VALUE
    );
    assert_eq!(
        "18446744073709551615".parse::<UnsignedLong>().unwrap(),
        UnsignedLong::MAX_VALUE
    );
    assert!(matches!(
        "18446744073709551616".parse::<UnsignedLong>(),
        Err(UnsignedLongError::Overflow(_))
    ));
    assert_eq!(
        "".parse::<UnsignedLong>(),
        Err(UnsignedLongError::InvalidFormat(FormatError::Empty))
    );
}

#[test]
fn unsigned_long_sum_and_product_wrap() {
    let total: UnsignedLong = [UnsignedLong::MAX_VALUE, UnsignedLong::from(3u8)]
        .into_iter()
        .sum();
    assert_eq!(total, UnsignedLong::from(2u8));

    let product: UnsignedLong = (1u8..=5).map(UnsignedLong::from).product();
    assert_eq!(product, UnsignedLong::from(120u8));

    let empty: UnsignedLong = std::iter::empty::<UnsignedLong>().product();
    assert_eq!(empty, UnsignedLong::ONE);
}

#[test]
fn unsigned_long_error_messages() {
    assert_eq!(
        UnsignedLongError::InvalidArgument("-5".to_string()).to_string(),
        "value (-5) is outside the range for an unsigned long value"
    );
    assert_eq!(UnsignedLongError::DivideByZero.to_string(), "division by zero");
    assert_eq!(
        UnsignedLongError::from(FormatError::IllegalRadix(40)).to_string(),
        "illegal radix: 40"
    );
    assert_eq!(
        UnsignedLongError::Overflow("99999999999999999999".to_string()).to_string(),
        "too large for unsigned long: 99999999999999999999"
    );
}
