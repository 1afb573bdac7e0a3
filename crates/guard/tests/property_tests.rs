//! Property-based tests for fluent-guard.

use std::collections::HashSet;

use fluent_guard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// ORDERING: between_exclusive(lo, hi) implies min_max(lo, hi)
// ============================================================================

proptest! {
    #[test]
    fn exclusive_range_is_inside_inclusive(x in -1000_i32..1000, lo in -500_i32..0, hi in 0_i32..500) {
        let exclusive = for_numeric(x, "x").and_then(|g| g.between_exclusive(lo, hi)).is_ok();
        let inclusive = for_numeric(x, "x").and_then(|g| g.min_max(lo, hi)).is_ok();

        prop_assert!(!exclusive || inclusive);
    }
}

// ============================================================================
// EVERY WHITELISTED REPRESENTATION
// ============================================================================

macro_rules! representation_properties {
    ($($name:ident: $ty:ty => $strategy:expr;)+) => {
        $(
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn min_max_matches_min_and_max(x in $strategy, a in $strategy, b in $strategy) {
                        let (lo, hi): ($ty, $ty) = if Numeric::compare(&a, &b).is_le() {
                            (a, b)
                        } else {
                            (b, a)
                        };

                        let both = for_numeric(x, "x")
                            .and_then(|g| g.min(lo))
                            .and_then(|g| g.max(hi))
                            .is_ok();
                        let range = for_numeric(x, "x").and_then(|g| g.min_max(lo, hi)).is_ok();

                        prop_assert_eq!(range, both);
                    }

                    #[test]
                    fn divisible_by_zero_never_passes(x in $strategy) {
                        let zero = <$ty as Numeric>::ZERO;
                        let result = for_numeric::<$ty>(x, "x").and_then(|g| g.divisible_by(zero));

                        prop_assert_eq!(result.unwrap_err().code, "divisible_by");
                    }

                    #[test]
                    fn never_both_even_and_odd(x in $strategy) {
                        let even = for_numeric::<$ty>(x, "x").and_then(NumericGuard::even).is_ok();
                        let odd = for_numeric::<$ty>(x, "x").and_then(NumericGuard::odd).is_ok();

                        prop_assert!(!(even && odd));
                    }
                }
            }
        )+
    };
}

representation_properties! {
    i8_values: i8 => any::<i8>();
    i16_values: i16 => any::<i16>();
    i32_values: i32 => any::<i32>();
    i64_values: i64 => any::<i64>();
    u8_values: u8 => any::<u8>();
    u16_values: u16 => any::<u16>();
    u32_values: u32 => any::<u32>();
    u64_values: u64 => any::<u64>();
    f32_values: f32 => any::<f32>();
    f64_values: f64 => any::<f64>();
}

#[cfg(feature = "decimal")]
representation_properties! {
    decimal_values: rust_decimal::Decimal => (any::<i64>(), 0_u32..=12)
        .prop_map(|(mantissa, scale)| rust_decimal::Decimal::new(mantissa, scale));
}

// ============================================================================
// PARITY AND DIVISIBILITY
// ============================================================================

proptest! {
    #[test]
    fn integers_are_exactly_one_of_even_or_odd(x in any::<i32>()) {
        let even = for_numeric(x, "x").and_then(NumericGuard::even).is_ok();
        let odd = for_numeric(x, "x").and_then(NumericGuard::odd).is_ok();

        prop_assert!(even != odd);
    }

    #[test]
    fn divisible_by_agrees_with_remainder(x in any::<u32>(), d in 1_u32..1000) {
        let divisible = for_numeric(x, "x").and_then(|g| g.divisible_by(d)).is_ok();
        prop_assert_eq!(divisible, x % d == 0);
    }
}

// ============================================================================
// COLLECTIONS AND STRINGS
// ============================================================================

proptest! {
    #[test]
    fn unique_matches_set_size(items in prop::collection::vec(0_u8..16, 0..24)) {
        let distinct = items.iter().collect::<HashSet<_>>().len();
        let unique = for_collection(items.clone(), "items")
            .and_then(CollectionGuard::unique)
            .is_ok();

        prop_assert_eq!(unique, distinct == items.len());
    }

    #[test]
    fn count_between_matches_len(items in prop::collection::vec(any::<i16>(), 0..20), lo in 0_usize..10, span in 0_usize..10) {
        let hi = lo + span;
        let ok = for_collection(items.iter(), "items")
            .and_then(|g| g.count_between(lo, hi))
            .is_ok();

        prop_assert_eq!(ok, (lo..=hi).contains(&items.len()));
    }

    #[test]
    fn checks_are_idempotent(s in ".{0,30}") {
        let first = for_string(s.as_str(), "s").and_then(|g| g.length_between(3, 10)).is_ok();
        let second = for_string(s.as_str(), "s").and_then(|g| g.length_between(3, 10)).is_ok();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn absent_value_with_allow_null_passes_every_bound(lo in any::<i32>(), hi in any::<i32>()) {
        let result = for_numeric::<i32>(None, Param::new("n").allow_null())
            .and_then(|g| g.min(lo))
            .and_then(|g| g.max(hi))
            .and_then(NumericGuard::positive);

        prop_assert!(result.is_ok());
    }
}
