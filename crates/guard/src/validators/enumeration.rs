//! Enum guard
//!
//! An [`IntegralEnum`] is a closed set of named integral values. The guard
//! holds an [`EnumValue`], which can also carry a raw discriminant that names
//! no variant, so values decoded from untrusted integers can be checked with
//! [`EnumGuard::defined`].

use std::fmt;

use crate::foundation::{Guard, GuardState, Param, ValidationResult};

// ============================================================================
// INTEGRAL ENUM
// ============================================================================

/// A fieldless enum with explicit integral discriminants.
///
/// Usually implemented through [`integral_enum!`](crate::integral_enum).
pub trait IntegralEnum: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in declaration order.
    fn variants() -> &'static [Self];

    /// The variant's discriminant.
    fn discriminant(self) -> i64;

    /// Resolves a discriminant to its variant.
    #[must_use]
    fn from_discriminant(raw: i64) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.discriminant() == raw)
    }
}

/// A value of an [`IntegralEnum`] type, defined or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValue<E> {
    /// A named variant.
    Defined(E),
    /// A discriminant that names no variant.
    Undefined(i64),
}

impl<E: IntegralEnum> EnumValue<E> {
    /// Resolves `raw` against the variants of `E`.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        E::from_discriminant(raw).map_or(Self::Undefined(raw), Self::Defined)
    }

    /// The integral value.
    #[must_use]
    pub fn discriminant(self) -> i64 {
        match self {
            Self::Defined(variant) => variant.discriminant(),
            Self::Undefined(raw) => raw,
        }
    }

    /// The named variant, if any.
    #[must_use]
    pub fn variant(self) -> Option<E> {
        match self {
            Self::Defined(variant) => Some(variant),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the value names a variant.
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl<E: IntegralEnum> From<E> for EnumValue<E> {
    fn from(variant: E) -> Self {
        Self::Defined(variant)
    }
}

impl<E: fmt::Debug> fmt::Display for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(variant) => write!(f, "{variant:?}"),
            Self::Undefined(raw) => write!(f, "{raw}"),
        }
    }
}

// ============================================================================
// ENUM GUARD
// ============================================================================

/// Guard over an [`EnumValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumGuard<E> {
    state: GuardState<EnumValue<E>>,
}

impl<E: IntegralEnum> EnumGuard<E> {
    /// Captures `input` under the given label and null policy.
    ///
    /// No default variant is substituted for an absent value.
    ///
    /// # Errors
    ///
    /// Returns `not_null` for an absent input under a disallow-null policy.
    pub fn new(input: Option<EnumValue<E>>, param: impl Into<Param>) -> ValidationResult<Self> {
        Ok(Self {
            state: GuardState::new(input, param)?,
        })
    }

    /// Passes when the value names a variant of `E`.
    ///
    /// # Errors
    ///
    /// Fails with code `defined`.
    pub fn defined(self) -> ValidationResult<Self> {
        self.state.check(
            "defined",
            |v| v.is_defined(),
            |name| format!("Parameter '{name}' must be a defined enum value."),
        )?;
        Ok(self)
    }

    /// Passes when the value names no variant of `E`.
    ///
    /// # Errors
    ///
    /// Fails with code `not_defined`.
    pub fn not_defined(self) -> ValidationResult<Self> {
        self.state.check(
            "not_defined",
            |v| !v.is_defined(),
            |name| format!("Parameter '{name}' must not be a defined enum value."),
        )?;
        Ok(self)
    }

    /// Passes when the value is one of `allowed`.
    ///
    /// # Errors
    ///
    /// Fails with code `one_of`.
    pub fn one_of(self, allowed: &[E]) -> ValidationResult<Self> {
        self.state.check(
            "one_of",
            |v| v.variant().is_some_and(|variant| allowed.contains(&variant)),
            |name| {
                format!(
                    "Parameter '{name}' must be one of the specified enum values: {}.",
                    names(allowed)
                )
            },
        )?;
        Ok(self)
    }

    /// Passes when the value is none of `disallowed`.
    ///
    /// # Errors
    ///
    /// Fails with code `not_one_of`.
    pub fn not_one_of(self, disallowed: &[E]) -> ValidationResult<Self> {
        self.state.check(
            "not_one_of",
            |v| v.variant().is_none_or(|variant| !disallowed.contains(&variant)),
            |name| {
                format!(
                    "Parameter '{name}' must not be one of the specified enum values: {}.",
                    names(disallowed)
                )
            },
        )?;
        Ok(self)
    }
}

impl<E> Guard for EnumGuard<E> {
    type Value = EnumValue<E>;

    fn state(&self) -> &GuardState<EnumValue<E>> {
        &self.state
    }

    fn into_state(self) -> GuardState<EnumValue<E>> {
        self.state
    }
}

fn names<E: fmt::Debug>(variants: &[E]) -> String {
    variants
        .iter()
        .map(|variant| format!("{variant:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
