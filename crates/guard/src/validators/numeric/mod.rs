//! Numeric guard
//!
//! [`NumericGuard`] validates any representation in the numeric whitelist.
//! Ordering, sign, parity and divisibility checks go through the
//! [`Numeric`] capability trait rather than raw operators, so the same code
//! serves integers, floats and decimals.
//!
//! # Examples
//!
//! ```
//! use fluent_guard::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let value = for_numeric(15, "value")?.min(10)?.max(20)?.positive()?.into_value();
//! assert_eq!(value, Some(15));
//!
//! let error = for_numeric(-5, "value")?.positive().unwrap_err();
//! assert_eq!(error.message, "Parameter 'value' must be positive.");
//! # Ok(())
//! # }
//! ```

pub mod capability;

use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::{Guard, GuardState, Param, ValidationResult};

pub use capability::{Numeric, NumericKind, numeric_kind};

/// Guard over a whitelisted numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGuard<T> {
    state: GuardState<T>,
    kind: NumericKind,
}

impl<T: Numeric> NumericGuard<T> {
    /// Captures `input` after checking the null policy and the whitelist.
    ///
    /// # Errors
    ///
    /// Returns `not_null` for an absent input under a disallow-null policy,
    /// or `numeric_type` when `T` is not a whitelisted representation.
    pub fn new(input: Option<T>, param: impl Into<Param>) -> ValidationResult<Self> {
        let state = GuardState::new(input, param)?;
        let Some(kind) = numeric_kind::<T>() else {
            return Err(state.raise(
                "numeric_type",
                format!(
                    "Type '{}' is not a valid numeric type.",
                    std::any::type_name::<T>()
                ),
            ));
        };
        Ok(Self { state, kind })
    }

    /// The whitelisted representation of `T`.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    // ------------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------------

    /// Passes when the value is at least `min`.
    ///
    /// # Errors
    ///
    /// Fails with code `min`.
    pub fn min(self, min: T) -> ValidationResult<Self> {
        self.state.check(
            "min",
            |v| v.compare(&min) != Ordering::Less,
            |name| format!("Parameter '{name}' must be at least {min}."),
        )?;
        Ok(self)
    }

    /// Passes when the value is at most `max`.
    ///
    /// # Errors
    ///
    /// Fails with code `max`.
    pub fn max(self, max: T) -> ValidationResult<Self> {
        self.state.check(
            "max",
            |v| v.compare(&max) != Ordering::Greater,
            |name| format!("Parameter '{name}' must be at most {max}."),
        )?;
        Ok(self)
    }

    /// Passes when `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// Fails with code `min_max`.
    pub fn min_max(self, min: T, max: T) -> ValidationResult<Self> {
        self.state.check(
            "min_max",
            |v| v.compare(&min) != Ordering::Less && v.compare(&max) != Ordering::Greater,
            |name| format!("Parameter '{name}' must be between {min} and {max}."),
        )?;
        Ok(self)
    }

    /// Passes when `min < value < max`.
    ///
    /// # Errors
    ///
    /// Fails with code `between_exclusive`.
    pub fn between_exclusive(self, min: T, max: T) -> ValidationResult<Self> {
        self.state.check(
            "between_exclusive",
            |v| v.compare(&min) == Ordering::Greater && v.compare(&max) == Ordering::Less,
            |name| format!("Parameter '{name}' must be strictly between {min} and {max}."),
        )?;
        Ok(self)
    }

    /// Passes when the value equals `expected`.
    ///
    /// # Errors
    ///
    /// Fails with code `equal_to`.
    pub fn equal_to(self, expected: T) -> ValidationResult<Self> {
        self.state.check(
            "equal_to",
            |v| v.compare(&expected) == Ordering::Equal,
            |name| format!("Parameter '{name}' must be equal to {expected}."),
        )?;
        Ok(self)
    }

    /// Passes when the value differs from `unexpected`.
    ///
    /// # Errors
    ///
    /// Fails with code `not_equal_to`.
    pub fn not_equal_to(self, unexpected: T) -> ValidationResult<Self> {
        self.state.check(
            "not_equal_to",
            |v| v.compare(&unexpected) != Ordering::Equal,
            |name| format!("Parameter '{name}' must not be equal to {unexpected}."),
        )?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Sign
    // ------------------------------------------------------------------------

    /// Passes when the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Fails with code `positive`.
    pub fn positive(self) -> ValidationResult<Self> {
        self.state.check(
            "positive",
            |v| v.compare(&T::ZERO) == Ordering::Greater,
            |name| format!("Parameter '{name}' must be positive."),
        )?;
        Ok(self)
    }

    /// Passes when the value is less than zero.
    ///
    /// # Errors
    ///
    /// Fails with code `negative`.
    pub fn negative(self) -> ValidationResult<Self> {
        self.state.check(
            "negative",
            |v| v.compare(&T::ZERO) == Ordering::Less,
            |name| format!("Parameter '{name}' must be negative."),
        )?;
        Ok(self)
    }

    /// Passes when the value is not zero.
    ///
    /// # Errors
    ///
    /// Fails with code `not_zero`.
    pub fn not_zero(self) -> ValidationResult<Self> {
        self.state.check(
            "not_zero",
            |v| !v.is_zero(),
            |name| format!("Parameter '{name}' must not be zero."),
        )?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Parity and divisibility
    // ------------------------------------------------------------------------

    /// Passes when the value is an even integer.
    ///
    /// Floats and decimals with a fractional part are neither even nor odd.
    ///
    /// # Errors
    ///
    /// Fails with code `even`.
    pub fn even(self) -> ValidationResult<Self> {
        self.state.check(
            "even",
            |v| v.is_even(),
            |name| format!("Parameter '{name}' must be an even number."),
        )?;
        Ok(self)
    }

    /// Passes when the value is an odd integer.
    ///
    /// # Errors
    ///
    /// Fails with code `odd`.
    pub fn odd(self) -> ValidationResult<Self> {
        self.state.check(
            "odd",
            |v| v.is_odd(),
            |name| format!("Parameter '{name}' must be an odd number."),
        )?;
        Ok(self)
    }

    /// Passes when `divisor` divides the value evenly.
    ///
    /// A zero divisor always fails.
    ///
    /// # Errors
    ///
    /// Fails with code `divisible_by`.
    pub fn divisible_by(self, divisor: T) -> ValidationResult<Self> {
        self.state.check(
            "divisible_by",
            |v| v.is_divisible_by(divisor),
            |name| format!("Parameter '{name}' must be divisible by {divisor}."),
        )?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------------

    /// Passes when the value equals one of `values`.
    ///
    /// # Errors
    ///
    /// Fails with code `present_in`.
    pub fn present_in(self, values: &[T]) -> ValidationResult<Self> {
        self.state.check(
            "present_in",
            |v| values.iter().any(|x| v.compare(x) == Ordering::Equal),
            |name| {
                format!(
                    "Parameter '{name}' must be one of the specified values: {}.",
                    join(values)
                )
            },
        )?;
        Ok(self)
    }

    /// Passes when the value equals none of `values`.
    ///
    /// # Errors
    ///
    /// Fails with code `not_present_in`.
    pub fn not_present_in(self, values: &[T]) -> ValidationResult<Self> {
        self.state.check(
            "not_present_in",
            |v| values.iter().all(|x| v.compare(x) != Ordering::Equal),
            |name| {
                format!(
                    "Parameter '{name}' must not be one of the specified values: {}.",
                    join(values)
                )
            },
        )?;
        Ok(self)
    }
}

impl<T> Guard for NumericGuard<T> {
    type Value = T;

    fn state(&self) -> &GuardState<T> {
        &self.state
    }

    fn into_state(self) -> GuardState<T> {
        self.state
    }
}

pub(crate) fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
