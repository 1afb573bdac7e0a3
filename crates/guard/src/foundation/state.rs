//! Captured guard state: the value, its parameter label, and the null policy.
//!
//! Every typed guard owns exactly one [`GuardState`]. It is built once by
//! [`GuardState::new`] and never mutated afterwards.

use std::borrow::Cow;

use crate::foundation::{ValidationError, ValidationResult};

// ============================================================================
// PARAM
// ============================================================================

/// Parameter label and null policy supplied at guard construction.
///
/// Converts from `&'static str` and `String`, so most call sites pass the
/// label directly.
///
/// # Examples
///
/// ```
/// use fluent_guard::foundation::Param;
///
/// let param = Param::new("retries").allow_null();
/// assert_eq!(param.name(), "retries");
/// assert!(param.allows_null());
///
/// let param: Param = "retries".into();
/// assert!(!param.allows_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    name: Cow<'static, str>,
    allow_null: bool,
}

impl Param {
    /// Creates a label that rejects absent values.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            allow_null: false,
        }
    }

    /// Creates an empty label.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            name: Cow::Borrowed(""),
            allow_null: false,
        }
    }

    /// Accepts an absent value at construction.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// The parameter label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an absent value is accepted.
    #[must_use]
    pub fn allows_null(&self) -> bool {
        self.allow_null
    }
}

impl From<&'static str> for Param {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Cow<'static, str>> for Param {
    fn from(name: Cow<'static, str>) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// GUARD STATE
// ============================================================================

/// The state shared by every typed guard.
///
/// Under a disallow-null policy the value is always `Some`: construction
/// fails before a state can exist otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardState<T> {
    value: Option<T>,
    name: Cow<'static, str>,
    allow_null: bool,
}

impl<T> GuardState<T> {
    /// Captures `input` under the given label and policy.
    ///
    /// # Errors
    ///
    /// Returns a `not_null` error when `input` is `None` and the policy
    /// rejects absent values.
    pub fn new(input: Option<T>, param: impl Into<Param>) -> ValidationResult<Self> {
        let Param { name, allow_null } = param.into();

        if input.is_none() && !allow_null {
            let error = ValidationError::null_parameter(name);
            log_failure(&error);
            return Err(error);
        }

        tracing::trace!(
            parameter = %name,
            present = input.is_some(),
            allow_null,
            "guard constructed"
        );

        Ok(Self {
            value: input,
            name,
            allow_null,
        })
    }

    /// The captured value, `None` only under an allow-null policy.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the state and returns the captured value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// The parameter label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the state was built under an allow-null policy.
    #[must_use]
    pub fn allows_null(&self) -> bool {
        self.allow_null
    }

    /// Builds the failure for a check on this parameter.
    ///
    /// Always `Error` severity; callers downgrade through
    /// [`CheckResultExt::with_severity`](crate::foundation::CheckResultExt::with_severity).
    pub fn raise(
        &self,
        code: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> ValidationError {
        let error = ValidationError::new(code, message).with_field(self.name.clone());
        log_failure(&error);
        error
    }

    /// Runs `passes` against the captured value.
    ///
    /// An absent value passes: checks only run against present values.
    /// The message closure receives the parameter label and is only called
    /// on failure.
    ///
    /// # Errors
    ///
    /// Returns the raised error when `passes` returns `false`.
    pub fn check<P, M>(&self, code: &'static str, passes: P, message: M) -> ValidationResult<()>
    where
        P: FnOnce(&T) -> bool,
        M: FnOnce(&str) -> String,
    {
        match &self.value {
            Some(value) if !passes(value) => Err(self.raise(code, message(&self.name))),
            _ => Ok(()),
        }
    }
}

fn log_failure(error: &ValidationError) {
    tracing::debug!(
        parameter = error.field.as_deref().unwrap_or_default(),
        code = %error.code,
        severity = %error.severity,
        "precondition failed"
    );
}

// ============================================================================
// TESTS
// ============================================================================
