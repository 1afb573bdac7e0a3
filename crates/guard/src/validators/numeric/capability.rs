//! Arithmetic capabilities for the numeric guard.
//!
//! [`Numeric`] is the small set of operations the numeric checks need:
//! ordering, zero tests, and remainder. It is implemented once per
//! representation in the whitelist. The whitelist itself is a `TypeId`-keyed
//! table built on first use and never modified afterwards.

use std::any::TypeId;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// Operations a numeric guard performs on its value.
///
/// Implementing this trait for a new type compiles, but a guard for it is
/// still rejected at construction unless the type is in the whitelist.
pub trait Numeric: Copy + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;

    /// The parity divisor.
    const TWO: Self;

    /// Total order over the representation.
    ///
    /// Floating-point NaN orders below every number and equal to itself.
    fn compare(&self, other: &Self) -> Ordering;

    /// `self mod divisor`, or `None` when `divisor` is zero.
    fn remainder(self, divisor: Self) -> Option<Self>;

    /// Whether the value has no fractional part.
    fn is_integral(self) -> bool;

    /// Whether the value equals zero.
    fn is_zero(self) -> bool {
        self.compare(&Self::ZERO) == Ordering::Equal
    }

    /// Whether `divisor` divides the value evenly. Zero divides nothing.
    fn is_divisible_by(self, divisor: Self) -> bool {
        self.remainder(divisor).is_some_and(Self::is_zero)
    }

    /// Whether the value is an even integer.
    fn is_even(self) -> bool {
        self.is_integral() && self.is_divisible_by(Self::TWO)
    }

    /// Whether the value is an odd integer.
    fn is_odd(self) -> bool {
        self.is_integral() && !self.is_divisible_by(Self::TWO)
    }
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const TWO: Self = 2;

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                // `MIN % -1` overflows; wrapping yields the mathematically correct 0.
                #[inline]
                fn remainder(self, divisor: Self) -> Option<Self> {
                    (divisor != 0).then(|| self.wrapping_rem(divisor))
                }

                #[inline]
                fn is_integral(self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0.0;
                const TWO: Self = 2.0;

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| other.is_nan().cmp(&self.is_nan()))
                }

                #[inline]
                fn remainder(self, divisor: Self) -> Option<Self> {
                    (divisor != 0.0).then(|| self % divisor)
                }

                #[inline]
                fn is_integral(self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float!(f32, f64);

#[cfg(feature = "decimal")]
impl Numeric for rust_decimal::Decimal {
    const ZERO: Self = rust_decimal::Decimal::ZERO;
    const TWO: Self = rust_decimal::Decimal::TWO;

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn remainder(self, divisor: Self) -> Option<Self> {
        self.checked_rem(divisor)
    }

    fn is_integral(self) -> bool {
        self.fract().is_zero()
    }
}

// ============================================================================
// WHITELIST
// ============================================================================

/// The representations a numeric guard accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    #[cfg(feature = "decimal")]
    Decimal,
}

impl NumericKind {
    /// Whether the representation is binary floating point.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether every value of the representation is an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        !self.is_floating() && !self.is_decimal()
    }

    #[cfg(feature = "decimal")]
    const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal)
    }

    #[cfg(not(feature = "decimal"))]
    const fn is_decimal(self) -> bool {
        false
    }
}

static WHITELIST: LazyLock<HashMap<TypeId, NumericKind>> = LazyLock::new(|| {
    #[cfg_attr(not(feature = "decimal"), allow(unused_mut))]
    let mut kinds = HashMap::from([
        (TypeId::of::<i8>(), NumericKind::I8),
        (TypeId::of::<i16>(), NumericKind::I16),
        (TypeId::of::<i32>(), NumericKind::I32),
        (TypeId::of::<i64>(), NumericKind::I64),
        (TypeId::of::<u8>(), NumericKind::U8),
        (TypeId::of::<u16>(), NumericKind::U16),
        (TypeId::of::<u32>(), NumericKind::U32),
        (TypeId::of::<u64>(), NumericKind::U64),
        (TypeId::of::<f32>(), NumericKind::F32),
        (TypeId::of::<f64>(), NumericKind::F64),
    ]);
    #[cfg(feature = "decimal")]
    kinds.insert(
        TypeId::of::<rust_decimal::Decimal>(),
        NumericKind::Decimal,
    );
    kinds
});

/// Looks up `T` in the numeric whitelist.
#[must_use]
pub fn numeric_kind<T: 'static>() -> Option<NumericKind> {
    WHITELIST.get(&TypeId::of::<T>()).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_contains_primitives() {
        assert_eq!(numeric_kind::<i8>(), Some(NumericKind::I8));
        assert_eq!(numeric_kind::<u64>(), Some(NumericKind::U64));
        assert_eq!(numeric_kind::<f32>(), Some(NumericKind::F32));
        assert_eq!(numeric_kind::<i128>(), None);
        assert_eq!(numeric_kind::<usize>(), None);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_whitelist_contains_decimal() {
        assert_eq!(
            numeric_kind::<rust_decimal::Decimal>(),
            Some(NumericKind::Decimal)
        );
        assert!(!NumericKind::Decimal.is_integer());
    }

    #[test]
    fn test_remainder_by_zero_is_none() {
        assert_eq!(7_i32.remainder(0), None);
        assert_eq!(7_u8.remainder(0), None);
        assert_eq!(7.0_f64.remainder(0.0), None);
    }

    #[test]
    fn test_min_by_minus_one_does_not_overflow() {
        assert_eq!(i32::MIN.remainder(-1), Some(0));
        assert!(i64::MIN.is_divisible_by(-1));
    }

    #[test]
    fn test_parity_integers() {
        assert!(4_i32.is_even());
        assert!(!4_i32.is_odd());
        assert!((-3_i32).is_odd());
        assert!(0_u16.is_even());
    }

    #[test]
    fn test_parity_floats() {
        assert!(4.0_f64.is_even());
        assert!(3.0_f32.is_odd());
        assert!(!2.5_f64.is_even());
        assert!(!2.5_f64.is_odd());
        assert!(!f64::NAN.is_even());
        assert!(!f64::INFINITY.is_odd());
    }

    #[test]
    fn test_float_compare_is_total() {
        assert_eq!(f64::NAN.compare(&0.0), Ordering::Less);
        assert_eq!(0.0_f64.compare(&f64::NAN), Ordering::Greater);
        assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Equal);
    }

    #[test]
    fn test_kind_classification() {
        assert!(NumericKind::F64.is_floating());
        assert!(NumericKind::I32.is_integer());
        assert!(!NumericKind::F32.is_integer());
    }
}
