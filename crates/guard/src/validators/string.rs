//! String guard
//!
//! Character-class, casing, containment, length and format checks over a
//! captured `String`. Lengths count Unicode scalar values, not bytes.

use std::net::IpAddr;
use std::sync::LazyLock;

use base64::Engine as _;
use regex::Regex;

use crate::foundation::{Guard, GuardState, Param, ValidationResult};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

// General categories `Nd` and `L`; `No` and `Nl` (fractions, superscripts,
// roman numerals) are excluded.
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Nd}*$").unwrap());
static LETTERS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}*$").unwrap());
static LETTERS_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd}]*$").unwrap());

/// Guard over a string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringGuard {
    state: GuardState<String>,
}

impl StringGuard {
    /// Captures `input` under the given label and null policy.
    ///
    /// # Errors
    ///
    /// Returns `not_null` for an absent input under a disallow-null policy.
    pub fn new(input: Option<String>, param: impl Into<Param>) -> ValidationResult<Self> {
        Ok(Self {
            state: GuardState::new(input, param)?,
        })
    }

    fn check<P>(
        self,
        code: &'static str,
        passes: P,
        message: impl FnOnce(&str) -> String,
    ) -> ValidationResult<Self>
    where
        P: FnOnce(&str) -> bool,
    {
        self.state.check(code, |v| passes(v.as_str()), message)?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Emptiness and length
    // ------------------------------------------------------------------------

    /// Passes for a non-empty string.
    ///
    /// # Errors
    ///
    /// Fails with code `not_empty`.
    pub fn not_empty(self) -> ValidationResult<Self> {
        self.check(
            "not_empty",
            |s| !s.is_empty(),
            |name| format!("Parameter '{name}' cannot be empty."),
        )
    }

    /// Passes when the string holds at least one non-whitespace character.
    ///
    /// Also fails for an absent value, unlike the other checks.
    ///
    /// # Errors
    ///
    /// Fails with code `not_null_or_whitespace`.
    pub fn not_null_or_whitespace(self) -> ValidationResult<Self> {
        let blank = self.state.value().is_none_or(|s| s.trim().is_empty());
        if blank {
            let message = format!(
                "Parameter '{}' cannot be null or whitespace.",
                self.state.name()
            );
            return Err(self.state.raise("not_null_or_whitespace", message));
        }
        Ok(self)
    }

    /// Passes when the string has at least `min` characters.
    ///
    /// # Errors
    ///
    /// Fails with code `min_length`.
    pub fn min_length(self, min: usize) -> ValidationResult<Self> {
        self.check(
            "min_length",
            |s| s.chars().count() >= min,
            |name| format!("Parameter '{name}' must be at least {min} characters long."),
        )
    }

    /// Passes when the string has at most `max` characters.
    ///
    /// # Errors
    ///
    /// Fails with code `max_length`.
    pub fn max_length(self, max: usize) -> ValidationResult<Self> {
        self.check(
            "max_length",
            |s| s.chars().count() <= max,
            |name| format!("Parameter '{name}' must be at most {max} characters long."),
        )
    }

    /// Passes when the character count lies in `min..=max`.
    ///
    /// # Errors
    ///
    /// Fails with code `length_between`.
    pub fn length_between(self, min: usize, max: usize) -> ValidationResult<Self> {
        self.check(
            "length_between",
            |s| (min..=max).contains(&s.chars().count()),
            |name| {
                format!("Parameter '{name}' must be between {min} and {max} characters long.")
            },
        )
    }

    // ------------------------------------------------------------------------
    // Affixes and containment
    // ------------------------------------------------------------------------

    /// Passes when the string starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Fails with code `starts_with`.
    pub fn starts_with(self, prefix: &str) -> ValidationResult<Self> {
        self.check(
            "starts_with",
            |s| s.starts_with(prefix),
            |name| format!("Parameter '{name}' must start with \"{prefix}\"."),
        )
    }

    /// Passes when the string ends with `suffix`.
    ///
    /// # Errors
    ///
    /// Fails with code `ends_with`.
    pub fn ends_with(self, suffix: &str) -> ValidationResult<Self> {
        self.check(
            "ends_with",
            |s| s.ends_with(suffix),
            |name| format!("Parameter '{name}' must end with \"{suffix}\"."),
        )
    }

    /// Passes when the string contains `needle`.
    ///
    /// # Errors
    ///
    /// Fails with code `contains`.
    pub fn contains(self, needle: &str) -> ValidationResult<Self> {
        self.check(
            "contains",
            |s| s.contains(needle),
            |name| format!("Parameter '{name}' must contain \"{needle}\"."),
        )
    }

    /// Passes when the string contains the character `needle`.
    ///
    /// # Errors
    ///
    /// Fails with code `contains`.
    pub fn contains_char(self, needle: char) -> ValidationResult<Self> {
        self.check(
            "contains",
            |s| s.contains(needle),
            |name| format!("Parameter '{name}' must contain '{needle}'."),
        )
    }

    /// Passes when the string contains at least one of `needles`.
    ///
    /// # Errors
    ///
    /// Fails with code `contains_any`.
    pub fn contains_any(self, needles: &[&str]) -> ValidationResult<Self> {
        self.check(
            "contains_any",
            |s| needles.iter().any(|n| s.contains(n)),
            |name| {
                format!("Parameter '{name}' must contain at least one of the specified strings.")
            },
        )
    }

    /// Passes when the string contains at least one of `needles`.
    ///
    /// # Errors
    ///
    /// Fails with code `contains_any`.
    pub fn contains_any_char(self, needles: &[char]) -> ValidationResult<Self> {
        self.check(
            "contains_any",
            |s| s.contains(needles),
            |name| {
                format!(
                    "Parameter '{name}' must contain at least one of the specified characters."
                )
            },
        )
    }

    /// Passes when the string does not contain `needle`.
    ///
    /// # Errors
    ///
    /// Fails with code `does_not_contain`.
    pub fn does_not_contain(self, needle: &str) -> ValidationResult<Self> {
        self.check(
            "does_not_contain",
            |s| !s.contains(needle),
            |name| format!("Parameter '{name}' must not contain \"{needle}\"."),
        )
    }

    /// Passes when the string does not contain the character `needle`.
    ///
    /// # Errors
    ///
    /// Fails with code `does_not_contain`.
    pub fn does_not_contain_char(self, needle: char) -> ValidationResult<Self> {
        self.check(
            "does_not_contain",
            |s| !s.contains(needle),
            |name| format!("Parameter '{name}' must not contain '{needle}'."),
        )
    }

    /// Passes when the string contains none of `needles`.
    ///
    /// # Errors
    ///
    /// Fails with code `does_not_contain_any`.
    pub fn does_not_contain_any(self, needles: &[&str]) -> ValidationResult<Self> {
        self.check(
            "does_not_contain_any",
            |s| !needles.iter().any(|n| s.contains(n)),
            |name| format!("Parameter '{name}' must not contain any of the specified strings."),
        )
    }

    /// Passes when the string contains none of `needles`.
    ///
    /// # Errors
    ///
    /// Fails with code `does_not_contain_any`.
    pub fn does_not_contain_any_char(self, needles: &[char]) -> ValidationResult<Self> {
        self.check(
            "does_not_contain_any",
            |s| !s.contains(needles),
            |name| {
                format!("Parameter '{name}' must not contain any of the specified characters.")
            },
        )
    }

    // ------------------------------------------------------------------------
    // Character classes and casing
    // ------------------------------------------------------------------------

    /// Passes when every character is a Unicode decimal digit (`Nd`).
    ///
    /// # Errors
    ///
    /// Fails with code `is_numeric`.
    pub fn is_numeric(self) -> ValidationResult<Self> {
        self.check(
            "is_numeric",
            |s| DIGITS_REGEX.is_match(s),
            |name| format!("Parameter '{name}' must contain only numeric characters."),
        )
    }

    /// Passes when every character is a Unicode letter (`L`).
    ///
    /// # Errors
    ///
    /// Fails with code `is_alpha`.
    pub fn is_alpha(self) -> ValidationResult<Self> {
        self.check(
            "is_alpha",
            |s| LETTERS_REGEX.is_match(s),
            |name| format!("Parameter '{name}' must contain only letters."),
        )
    }

    /// Passes when every character is a Unicode letter or decimal digit.
    ///
    /// # Errors
    ///
    /// Fails with code `is_alphanumeric`.
    pub fn is_alphanumeric(self) -> ValidationResult<Self> {
        self.check(
            "is_alphanumeric",
            |s| LETTERS_DIGITS_REGEX.is_match(s),
            |name| format!("Parameter '{name}' must contain only letters and numbers."),
        )
    }

    /// Passes when every character is an ASCII digit.
    ///
    /// # Errors
    ///
    /// Fails with code `has_only_digits`.
    pub fn has_only_digits(self) -> ValidationResult<Self> {
        self.check(
            "has_only_digits",
            |s| s.chars().all(|c| c.is_ascii_digit()),
            |name| format!("Parameter '{name}' must contain only digits (0-9)."),
        )
    }

    /// Passes when every character is an ASCII letter.
    ///
    /// # Errors
    ///
    /// Fails with code `has_only_letters`.
    pub fn has_only_letters(self) -> ValidationResult<Self> {
        self.check(
            "has_only_letters",
            |s| s.chars().all(|c| c.is_ascii_alphabetic()),
            |name| format!("Parameter '{name}' must contain only letters (A-Z, a-z)."),
        )
    }

    /// Passes when no character is lowercase.
    ///
    /// # Errors
    ///
    /// Fails with code `upper_case`.
    pub fn upper_case(self) -> ValidationResult<Self> {
        self.check(
            "upper_case",
            |s| !s.chars().any(char::is_lowercase),
            |name| format!("Parameter '{name}' must be entirely uppercase."),
        )
    }

    /// Passes when no character is uppercase.
    ///
    /// # Errors
    ///
    /// Fails with code `lower_case`.
    pub fn lower_case(self) -> ValidationResult<Self> {
        self.check(
            "lower_case",
            |s| !s.chars().any(char::is_uppercase),
            |name| format!("Parameter '{name}' must be entirely lowercase."),
        )
    }

    // ------------------------------------------------------------------------
    // Formats
    // ------------------------------------------------------------------------

    /// Passes for a GUID in any format the `uuid` parser accepts.
    ///
    /// # Errors
    ///
    /// Fails with code `is_guid`.
    pub fn is_guid(self) -> ValidationResult<Self> {
        self.check(
            "is_guid",
            |s| uuid::Uuid::try_parse(s).is_ok(),
            |name| format!("Parameter '{name}' must be a valid GUID."),
        )
    }

    /// Passes for padded standard-alphabet Base64.
    ///
    /// # Errors
    ///
    /// Fails with code `is_base64`; decoder errors are not exposed.
    pub fn is_base64(self) -> ValidationResult<Self> {
        self.check(
            "is_base64",
            |s| base64::engine::general_purpose::STANDARD.decode(s).is_ok(),
            |name| format!("Parameter '{name}' must be a valid Base64 string."),
        )
    }

    /// Passes for an IPv4 or IPv6 address literal.
    ///
    /// # Errors
    ///
    /// Fails with code `ip_address`.
    pub fn ip_address(self) -> ValidationResult<Self> {
        self.check(
            "ip_address",
            |s| s.parse::<IpAddr>().is_ok(),
            |_| "Invalid IP address format.".to_owned(),
        )
    }

    /// Passes for a `local@domain.tld` shaped address.
    ///
    /// # Errors
    ///
    /// Fails with code `email_address`.
    pub fn email_address(self) -> ValidationResult<Self> {
        self.check(
            "email_address",
            |s| EMAIL_REGEX.is_match(s),
            |_| "Invalid email address format.".to_owned(),
        )
    }

    /// Passes when `pattern` matches somewhere in the string.
    ///
    /// # Errors
    ///
    /// Fails with code `invalid_pattern` when `pattern` does not compile,
    /// or `matches_pattern` when it does not match.
    pub fn matches_pattern(self, pattern: &str) -> ValidationResult<Self> {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(_) => {
                let message = format!("Pattern '{pattern}' is not a valid regular expression.");
                return Err(self.state.raise("invalid_pattern", message));
            }
        };
        self.matches_regex(&regex)
    }

    /// Passes when `regex` matches somewhere in the string.
    ///
    /// # Errors
    ///
    /// Fails with code `matches_pattern`.
    pub fn matches_regex(self, regex: &Regex) -> ValidationResult<Self> {
        self.check(
            "matches_pattern",
            |s| regex.is_match(s),
            |_| "Invalid format.".to_owned(),
        )
    }
}

impl Guard for StringGuard {
    type Value = String;

    fn state(&self) -> &GuardState<String> {
        &self.state
    }

    fn into_state(self) -> GuardState<String> {
        self.state
    }
}

// ============================================================================
// TESTS
// ============================================================================
