//! The base contract every typed guard implements.

use std::borrow::Cow;

use crate::foundation::{GuardState, Severity, ValidationError, ValidationResult};

// ============================================================================
// GUARD TRAIT
// ============================================================================

/// The contract shared by every typed guard.
///
/// Implementors only expose their [`GuardState`]; value access, the
/// parameter label, and the `not_null` check come for free.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// # fn main() -> Result<(), ValidationError> {
/// let port = for_numeric(8080_u16, "port")?.min(1024)?.into_value();
/// assert_eq!(port, Some(8080));
/// # Ok(())
/// # }
/// ```
pub trait Guard: Sized {
    /// The type of the captured value.
    type Value;

    /// Borrows the engine state.
    fn state(&self) -> &GuardState<Self::Value>;

    /// Consumes the guard and returns the engine state.
    fn into_state(self) -> GuardState<Self::Value>;

    /// The captured value, `None` only under an allow-null policy.
    fn value(&self) -> Option<&Self::Value> {
        self.state().value()
    }

    /// Ends the chain and returns the validated value.
    fn into_value(self) -> Option<Self::Value> {
        self.into_state().into_value()
    }

    /// The parameter label given at construction.
    fn parameter_name(&self) -> &str {
        self.state().name()
    }

    /// Whether the guard was built under an allow-null policy.
    fn allows_null(&self) -> bool {
        self.state().allows_null()
    }

    /// Fails when the value is absent.
    ///
    /// Only meaningful for allow-null guards; the other ones cannot hold an
    /// absent value.
    ///
    /// # Errors
    ///
    /// Returns a `not_null` error when no value was captured.
    fn not_null(self) -> ValidationResult<Self> {
        if self.value().is_none() {
            let name = self.parameter_name().to_owned();
            return Err(self
                .state()
                .raise("not_null", format!("Parameter '{name}' cannot be null.")));
        }
        Ok(self)
    }
}

// ============================================================================
// CHECK RESULT EXTENSION
// ============================================================================

/// Call-site customization of a check's failure.
///
/// The default message is replaced only when the check fails, so
/// `guard.min(1).with_message("...")` behaves like a check that was given a
/// custom message up front.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// let error = for_numeric(0, "retries")
///     .and_then(|g| g.positive().with_message("Retries must be configured."))
///     .unwrap_err();
///
/// assert_eq!(error.message, "Retries must be configured.");
/// assert_eq!(error.code, "positive");
/// ```
pub trait CheckResultExt<G> {
    /// Replaces the failure message, keeping the code and field.
    ///
    /// # Errors
    ///
    /// Passes the original failure through with the new message.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> ValidationResult<G>;

    /// Replaces the failure code.
    ///
    /// # Errors
    ///
    /// Passes the original failure through with the new code.
    fn with_code(self, code: impl Into<Cow<'static, str>>) -> ValidationResult<G>;

    /// Changes the failure severity.
    ///
    /// # Errors
    ///
    /// Passes the original failure through with the new severity.
    fn with_severity(self, severity: Severity) -> ValidationResult<G>;
}

impl<G> CheckResultExt<G> for Result<G, ValidationError> {
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> ValidationResult<G> {
        self.map_err(|error| error.with_message(message))
    }

    fn with_code(self, code: impl Into<Cow<'static, str>>) -> ValidationResult<G> {
        self.map_err(|error| error.with_code(code))
    }

    fn with_severity(self, severity: Severity) -> ValidationResult<G> {
        self.map_err(|error| error.with_severity(severity))
    }
}

// ============================================================================
// TESTS
// ============================================================================
