//! The failure signal raised by every guard check.
//!
//! A chain stops at the first failing check, so there is exactly one error
//! per failed chain. String fields use `Cow<'static, str>` so static codes
//! never allocate.

use std::borrow::Cow;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity level of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// The precondition does not hold (default).
    #[default]
    Error,
    /// Soft failure for callers that want to report rather than reject.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A failed precondition.
///
/// # Examples
///
/// ```
/// use fluent_guard::foundation::{Severity, ValidationError};
///
/// let error = ValidationError::new("positive", "Parameter 'age' must be positive.")
///     .with_field("age");
///
/// assert_eq!(error.to_string(), "Parameter 'age' must be positive.");
/// assert_eq!(error.severity, Severity::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ValidationError {
    /// Machine-readable name of the failed check.
    ///
    /// Examples: "not_null", "min", "divisible_by"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Parameter name captured by the guard, if any.
    pub field: Option<Cow<'static, str>>,

    /// Severity level, `Error` unless the caller downgraded it.
    pub severity: Severity,
}

impl ValidationError {
    /// Creates a new error with a code and message and `Error` severity.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            severity: Severity::Error,
        }
    }

    /// Sets the parameter name this error refers to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the severity level.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns true for `Severity::Warning` failures.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Converts the error to a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "severity": self.severity.to_string(),
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The error raised when a disallow-null guard receives no value.
    pub fn null_parameter(field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        Self::new("not_null", format!("Parameter '{field}' cannot be null.")).with_field(field)
    }
}

/// A result whose error is a [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new("min", "Parameter 'x' must be at least 5.");
        assert_eq!(error.to_string(), "Parameter 'x' must be at least 5.");
    }

    #[test]
    fn test_null_parameter() {
        let error = ValidationError::null_parameter("name");
        assert_eq!(error.code, "not_null");
        assert_eq!(error.message, "Parameter 'name' cannot be null.");
        assert_eq!(error.field.as_deref(), Some("name"));
        assert_eq!(error.severity, Severity::Error);
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        let error = ValidationError::new("odd", "must be odd")
            .with_field("n")
            .with_message("custom")
            .with_severity(Severity::Warning);

        assert_eq!(error.code, "odd");
        assert_eq!(error.message, "custom");
        assert_eq!(error.field.as_deref(), Some("n"));
        assert!(error.is_warning());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("not_empty", "empty");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let value = ValidationError::null_parameter("id").to_json_value();
        assert_eq!(value["code"], "not_null");
        assert_eq!(value["field"], "id");
        assert_eq!(value["severity"], "error");
    }
}
