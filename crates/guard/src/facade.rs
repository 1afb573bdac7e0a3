//! Entry points that build a typed guard from a value and a parameter label.
//!
//! Each function accepts either a plain value or an `Option`, plus anything
//! that converts into a [`Param`]. An absent value is rejected with `not_null`
//! unless the param was built with [`Param::allow_null`].

use crate::foundation::{Param, ValidationResult};
use crate::validators::{
    CollectionGuard, EnumGuard, EnumValue, IntegralEnum, Numeric, NumericGuard, StringGuard,
};

/// Starts a string chain.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// let error = for_string("abc-123", "handle")
///     .and_then(|g| g.matches_pattern("^[a-z0-9]+$"))
///     .unwrap_err();
/// assert_eq!(error.code, "matches_pattern");
///
/// let skipped = for_string::<&str>(None, Param::new("nickname").allow_null());
/// assert!(skipped.and_then(StringGuard::not_empty).is_ok());
/// ```
pub fn for_string<S: Into<String>>(
    input: impl Into<Option<S>>,
    param: impl Into<Param>,
) -> ValidationResult<StringGuard> {
    StringGuard::new(input.into().map(Into::into), param)
}

/// Starts a numeric chain.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy, or
/// `numeric_type` when `T` is outside the numeric whitelist.
pub fn for_numeric<T: Numeric>(
    input: impl Into<Option<T>>,
    param: impl Into<Param>,
) -> ValidationResult<NumericGuard<T>> {
    NumericGuard::new(input.into(), param)
}

/// Starts a collection chain. The input is enumerated exactly once.
///
/// An absent collection needs the iterable type spelled out, as in
/// `for_collection::<Vec<u8>>(None, param)`.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// let tags = for_collection(["a", "b"], "tags").and_then(|g| g.max_count(2));
/// assert!(tags.is_ok());
///
/// let missing = for_collection::<Vec<u8>>(None, "payload").unwrap_err();
/// assert_eq!(missing.code, "not_null");
/// ```
pub fn for_collection<I: IntoIterator>(
    input: impl Into<Option<I>>,
    param: impl Into<Param>,
) -> ValidationResult<CollectionGuard<I::Item>> {
    CollectionGuard::new(input.into(), param)
}

/// Starts an enum chain from a variant.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy.
pub fn for_enum<E: IntegralEnum>(
    input: impl Into<Option<E>>,
    param: impl Into<Param>,
) -> ValidationResult<EnumGuard<E>> {
    EnumGuard::new(input.into().map(EnumValue::Defined), param)
}

/// Starts an enum chain from a raw discriminant, which may name no variant.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// integral_enum! {
///     enum Status { Active = 1, Closed = 2 }
/// }
///
/// assert!(for_enum_raw::<Status>(100, "status").and_then(EnumGuard::not_defined).is_ok());
/// assert!(for_enum_raw::<Status>(2, "status").and_then(EnumGuard::defined).is_ok());
/// ```
pub fn for_enum_raw<E: IntegralEnum>(
    input: impl Into<Option<i64>>,
    param: impl Into<Param>,
) -> ValidationResult<EnumGuard<E>> {
    EnumGuard::new(input.into().map(EnumValue::from_raw), param)
}

/// Starts a date/time chain against the system clock.
///
/// # Errors
///
/// Returns `not_null` for an absent input under a disallow-null policy.
#[cfg(feature = "temporal")]
pub fn for_date(
    input: impl Into<Option<chrono::DateTime<chrono::Utc>>>,
    param: impl Into<Param>,
) -> ValidationResult<crate::validators::DateTimeGuard> {
    crate::validators::DateTimeGuard::new(input.into(), param)
}
