//! Date/time guard
//!
//! Checks over a `chrono::DateTime<Utc>`. Past/future checks read the
//! current instant from an injectable [`Clock`], once per check.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fluent_guard::prelude::*;
//! use fluent_guard::validators::FixedClock;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let due = Utc.with_ymd_and_hms(2024, 6, 7, 9, 0, 0).unwrap();
//!
//! for_date(due, "due")?
//!     .with_clock(FixedClock(now))
//!     .in_future()?
//!     .is_weekday()?;
//! # Ok(())
//! # }
//! ```

pub mod clock;

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::foundation::{Guard, GuardState, Param, ValidationResult};

pub use clock::{Clock, FixedClock, SystemClock};

/// Guard over a UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeGuard<C = SystemClock> {
    state: GuardState<DateTime<Utc>>,
    clock: C,
}

impl DateTimeGuard<SystemClock> {
    /// Captures `input` under the given label and null policy.
    ///
    /// # Errors
    ///
    /// Returns `not_null` for an absent input under a disallow-null policy.
    pub fn new(input: Option<DateTime<Utc>>, param: impl Into<Param>) -> ValidationResult<Self> {
        Ok(Self {
            state: GuardState::new(input, param)?,
            clock: SystemClock,
        })
    }
}

impl<C: Clock> DateTimeGuard<C> {
    /// Replaces the time source used by [`in_past`](Self::in_past) and
    /// [`in_future`](Self::in_future).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock<D: Clock>(self, clock: D) -> DateTimeGuard<D> {
        DateTimeGuard {
            state: self.state,
            clock,
        }
    }

    /// Passes unless the value is the Unix epoch sentinel.
    ///
    /// # Errors
    ///
    /// Fails with code `not_default`.
    pub fn not_default(self) -> ValidationResult<Self> {
        self.state.check(
            "not_default",
            |v| *v != DateTime::<Utc>::UNIX_EPOCH,
            |name| format!("Parameter '{name}' must not be the default DateTime value."),
        )?;
        Ok(self)
    }

    /// Passes when the value is strictly before now.
    ///
    /// # Errors
    ///
    /// Fails with code `in_past`.
    pub fn in_past(self) -> ValidationResult<Self> {
        self.state.check(
            "in_past",
            |v| *v < self.clock.now(),
            |name| format!("Parameter '{name}' must be in the past."),
        )?;
        Ok(self)
    }

    /// Passes when the value is strictly after now.
    ///
    /// # Errors
    ///
    /// Fails with code `in_future`.
    pub fn in_future(self) -> ValidationResult<Self> {
        self.state.check(
            "in_future",
            |v| *v > self.clock.now(),
            |name| format!("Parameter '{name}' must be in the future."),
        )?;
        Ok(self)
    }

    /// Passes when the value is on or after `min`.
    ///
    /// # Errors
    ///
    /// Fails with code `min`.
    pub fn min(self, min: DateTime<Utc>) -> ValidationResult<Self> {
        self.state.check(
            "min",
            |v| *v >= min,
            |name| format!("Parameter '{name}' must be on or after {min}."),
        )?;
        Ok(self)
    }

    /// Passes when the value is on or before `max`.
    ///
    /// # Errors
    ///
    /// Fails with code `max`.
    pub fn max(self, max: DateTime<Utc>) -> ValidationResult<Self> {
        self.state.check(
            "max",
            |v| *v <= max,
            |name| format!("Parameter '{name}' must be on or before {max}."),
        )?;
        Ok(self)
    }

    /// Passes when `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// Fails with code `between`.
    pub fn between(self, min: DateTime<Utc>, max: DateTime<Utc>) -> ValidationResult<Self> {
        self.state.check(
            "between",
            |v| (min..=max).contains(v),
            |name| format!("Parameter '{name}' must be between {min} and {max}."),
        )?;
        Ok(self)
    }

    /// Passes on Saturdays and Sundays.
    ///
    /// # Errors
    ///
    /// Fails with code `is_weekend`.
    pub fn is_weekend(self) -> ValidationResult<Self> {
        self.state.check(
            "is_weekend",
            |v| is_weekend(v.weekday()),
            |name| format!("Parameter '{name}' must be a weekend (Saturday or Sunday)."),
        )?;
        Ok(self)
    }

    /// Passes Monday through Friday.
    ///
    /// # Errors
    ///
    /// Fails with code `is_weekday`.
    pub fn is_weekday(self) -> ValidationResult<Self> {
        self.state.check(
            "is_weekday",
            |v| !is_weekend(v.weekday()),
            |name| format!("Parameter '{name}' must be a weekday (Monday to Friday)."),
        )?;
        Ok(self)
    }
}

impl<C> Guard for DateTimeGuard<C> {
    type Value = DateTime<Utc>;

    fn state(&self) -> &GuardState<DateTime<Utc>> {
        &self.state
    }

    fn into_state(self) -> GuardState<DateTime<Utc>> {
        self.state
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

// ============================================================================
// TESTS
// ============================================================================
