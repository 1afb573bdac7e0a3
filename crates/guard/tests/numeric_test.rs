//! Numeric guard across the whitelisted representations.

use fluent_guard::prelude::*;
use fluent_guard::validators::{NumericKind, numeric_kind};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// WHITELIST
// ============================================================================

#[rstest]
#[case::i8(numeric_kind::<i8>(), Some(NumericKind::I8))]
#[case::u16(numeric_kind::<u16>(), Some(NumericKind::U16))]
#[case::i64(numeric_kind::<i64>(), Some(NumericKind::I64))]
#[case::f32(numeric_kind::<f32>(), Some(NumericKind::F32))]
#[case::f64(numeric_kind::<f64>(), Some(NumericKind::F64))]
#[case::usize(numeric_kind::<usize>(), None)]
#[case::string(numeric_kind::<String>(), None)]
fn whitelist_membership(
    #[case] actual: Option<NumericKind>,
    #[case] expected: Option<NumericKind>,
) {
    assert_eq!(actual, expected);
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_is_whitelisted() {
    use rust_decimal::Decimal;

    assert_eq!(numeric_kind::<Decimal>(), Some(NumericKind::Decimal));

    let price = Decimal::new(1999, 2);
    let guard = for_numeric(price, "price")
        .and_then(NumericGuard::positive)
        .and_then(|g| g.max(Decimal::new(100, 0)))
        .unwrap();
    assert_eq!(guard.kind(), NumericKind::Decimal);

    // 19.99 is not integral, so it has no parity.
    assert!(for_numeric(price, "price").and_then(NumericGuard::even).is_err());
    assert!(for_numeric(price, "price").and_then(NumericGuard::odd).is_err());
    assert!(
        for_numeric(Decimal::new(40, 1), "price")
            .and_then(NumericGuard::even)
            .is_ok()
    );
}

// ============================================================================
// ORDERING AND SIGN
// ============================================================================

#[rstest]
#[case(5, true)]
#[case(0, false)]
#[case(-1, false)]
fn positive_i32(#[case] value: i32, #[case] passes: bool) {
    assert_eq!(for_numeric(value, "n").and_then(NumericGuard::positive).is_ok(), passes);
}

#[rstest]
#[case(0.5, true)]
#[case(0.0, false)]
#[case(-0.0, false)]
#[case(f64::NAN, false)]
#[case(f64::INFINITY, true)]
fn positive_f64(#[case] value: f64, #[case] passes: bool) {
    assert_eq!(for_numeric(value, "x").and_then(NumericGuard::positive).is_ok(), passes);
}

#[rstest]
#[case(10, true)]
#[case(20, true)]
#[case(9, false)]
#[case(21, false)]
fn min_max_is_inclusive(#[case] value: u32, #[case] passes: bool) {
    assert_eq!(for_numeric(value, "n").and_then(|g| g.min_max(10, 20)).is_ok(), passes);
}

#[test]
fn nan_sorts_below_every_number() {
    assert!(for_numeric(f64::NAN, "x").and_then(|g| g.min(f64::MIN)).is_err());
    assert!(for_numeric(f64::NAN, "x").and_then(|g| g.max(f64::MIN)).is_ok());
    assert!(
        for_numeric(f64::NAN, "x")
            .and_then(|g| g.equal_to(f64::NAN))
            .is_ok()
    );
}

// ============================================================================
// PARITY AND DIVISIBILITY
// ============================================================================

#[rstest]
#[case::even(4_i64, true, false)]
#[case::odd(7_i64, false, true)]
#[case::negative_odd(-3_i64, false, true)]
#[case::zero(0_i64, true, false)]
fn parity_i64(#[case] value: i64, #[case] even: bool, #[case] odd: bool) {
    assert_eq!(for_numeric(value, "n").and_then(NumericGuard::even).is_ok(), even);
    assert_eq!(for_numeric(value, "n").and_then(NumericGuard::odd).is_ok(), odd);
}

#[rstest]
#[case::integral(6.0_f64, true, false)]
#[case::odd_integral(3.0_f64, false, true)]
#[case::fractional(2.5_f64, false, false)]
#[case::nan(f64::NAN, false, false)]
#[case::infinite(f64::INFINITY, false, false)]
fn parity_f64(#[case] value: f64, #[case] even: bool, #[case] odd: bool) {
    assert_eq!(for_numeric(value, "x").and_then(NumericGuard::even).is_ok(), even);
    assert_eq!(for_numeric(value, "x").and_then(NumericGuard::odd).is_ok(), odd);
}

#[test]
fn divisible_by_zero_always_fails() {
    let error = for_numeric(0, "n").and_then(|g| g.divisible_by(0)).unwrap_err();
    assert_eq!(error.code, "divisible_by");
    assert_eq!(error.message, "Parameter 'n' must be divisible by 0.");

    assert!(for_numeric(1.5_f32, "x").and_then(|g| g.divisible_by(0.0)).is_err());
}

#[test]
fn divisible_by_handles_signed_extremes() {
    assert!(for_numeric(i32::MIN, "n").and_then(|g| g.divisible_by(-1)).is_ok());
    assert!(for_numeric(i8::MIN, "n").and_then(|g| g.divisible_by(2)).is_ok());
}

#[test]
fn divisible_by_float() {
    assert!(for_numeric(7.5_f64, "x").and_then(|g| g.divisible_by(2.5)).is_ok());
    assert!(for_numeric(7.0_f64, "x").and_then(|g| g.divisible_by(2.5)).is_err());
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

#[test]
fn present_in_lists_values_in_message() {
    let error = for_numeric(4, "level")
        .and_then(|g| g.present_in(&[1, 2, 3]))
        .unwrap_err();

    assert_eq!(
        error.message,
        "Parameter 'level' must be one of the specified values: 1, 2, 3."
    );
    assert!(
        for_numeric(4, "level")
            .and_then(|g| g.not_present_in(&[1, 2, 3]))
            .is_ok()
    );
}
