//! Collection guard
//!
//! The input sequence is collected into a `Vec` once at construction, so a
//! one-shot iterator yields the same elements to every check in the chain.

use std::collections::HashSet;
use std::hash::Hash;

use crate::foundation::{Guard, GuardState, Param, ValidationResult};

/// Guard over a materialized sequence.
///
/// # Examples
///
/// ```
/// use fluent_guard::prelude::*;
///
/// # fn main() -> Result<(), ValidationError> {
/// let ids = for_collection(vec![1, 2, 3], "ids")?.unique()?.into_value();
/// assert_eq!(ids, Some(vec![1, 2, 3]));
///
/// assert!(for_collection([1, 2, 2], "ids")?.unique().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionGuard<T> {
    state: GuardState<Vec<T>>,
}

impl<T> CollectionGuard<T> {
    /// Materializes `input` and captures it.
    ///
    /// # Errors
    ///
    /// Returns `not_null` for an absent input under a disallow-null policy.
    pub fn new<I>(input: Option<I>, param: impl Into<Param>) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items = input.map(|items| items.into_iter().collect::<Vec<_>>());
        Ok(Self {
            state: GuardState::new(items, param)?,
        })
    }

    /// Number of captured elements, `None` for an absent collection.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.state.value().map(Vec::len)
    }

    fn check<P>(
        self,
        code: &'static str,
        passes: P,
        message: impl FnOnce(&str) -> String,
    ) -> ValidationResult<Self>
    where
        P: FnOnce(&[T]) -> bool,
    {
        self.state.check(code, |v| passes(v), message)?;
        Ok(self)
    }

    /// Passes when the collection has at least one element.
    ///
    /// # Errors
    ///
    /// Fails with code `not_empty`.
    pub fn not_empty(self) -> ValidationResult<Self> {
        self.check(
            "not_empty",
            |items| !items.is_empty(),
            |name| format!("Collection '{name}' must not be empty."),
        )
    }

    /// Passes when the collection has at least `min` elements.
    ///
    /// # Errors
    ///
    /// Fails with code `min_count`.
    pub fn min_count(self, min: usize) -> ValidationResult<Self> {
        self.check(
            "min_count",
            |items| items.len() >= min,
            |name| format!("Collection '{name}' must contain at least {min} elements."),
        )
    }

    /// Passes when the collection has at most `max` elements.
    ///
    /// # Errors
    ///
    /// Fails with code `max_count`.
    pub fn max_count(self, max: usize) -> ValidationResult<Self> {
        self.check(
            "max_count",
            |items| items.len() <= max,
            |name| format!("Collection '{name}' must contain at most {max} elements."),
        )
    }

    /// Passes when the element count lies in `min..=max`.
    ///
    /// # Errors
    ///
    /// Fails with code `count_between`.
    pub fn count_between(self, min: usize, max: usize) -> ValidationResult<Self> {
        self.check(
            "count_between",
            |items| (min..=max).contains(&items.len()),
            |name| format!("Collection '{name}' must contain between {min} and {max} elements."),
        )
    }
}

impl<T: PartialEq> CollectionGuard<T> {
    /// Passes when some element equals `value`.
    ///
    /// # Errors
    ///
    /// Fails with code `contains`.
    pub fn contains(self, value: &T) -> ValidationResult<Self> {
        self.check(
            "contains",
            |items| items.contains(value),
            |name| format!("Collection '{name}' must contain the specified value."),
        )
    }

    /// Passes when no element equals `value`.
    ///
    /// # Errors
    ///
    /// Fails with code `does_not_contain`.
    pub fn does_not_contain(self, value: &T) -> ValidationResult<Self> {
        self.check(
            "does_not_contain",
            |items| !items.contains(value),
            |name| format!("Collection '{name}' must not contain the specified value."),
        )
    }
}

impl<T: Eq + Hash> CollectionGuard<T> {
    /// Passes when no two elements are equal.
    ///
    /// # Errors
    ///
    /// Fails with code `unique`.
    pub fn unique(self) -> ValidationResult<Self> {
        self.check(
            "unique",
            |items| {
                let mut seen = HashSet::with_capacity(items.len());
                items.iter().all(|item| seen.insert(item))
            },
            |name| format!("Collection '{name}' must contain only unique elements."),
        )
    }
}

impl<T> Guard for CollectionGuard<T> {
    type Value = Vec<T>;

    fn state(&self) -> &GuardState<Vec<T>> {
        &self.state
    }

    fn into_state(self) -> GuardState<Vec<T>> {
        self.state
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn guard(items: &[i32]) -> CollectionGuard<i32> {
        CollectionGuard::new(Some(items.iter().copied()), "items").unwrap()
    }

    #[test]
    fn test_count_bounds() {
        assert!(guard(&[1, 2]).min_count(2).is_ok());
        assert!(guard(&[1, 2]).max_count(1).is_err());
        assert!(guard(&[1, 2]).count_between(1, 3).is_ok());
        assert!(guard(&[]).count_between(1, 3).is_err());
    }

    #[test]
    fn test_membership() {
        assert!(guard(&[1, 2]).contains(&2).is_ok());
        assert!(guard(&[1, 2]).contains(&3).is_err());
        assert!(guard(&[1, 2]).does_not_contain(&1).is_err());
    }

    #[test]
    fn test_one_shot_iterator_enumerated_once() {
        let pulls = Cell::new(0);
        let source = (0..4).inspect(|_| pulls.set(pulls.get() + 1));

        let guard = CollectionGuard::new(Some(source), "items")
            .and_then(CollectionGuard::not_empty)
            .and_then(CollectionGuard::unique)
            .and_then(|g| g.count_between(4, 4))
            .and_then(CollectionGuard::not_empty)
            .unwrap();

        assert_eq!(guard.count(), Some(4));
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_unique_message() {
        let error = guard(&[1, 1]).unique().unwrap_err();
        assert_eq!(
            error.message,
            "Collection 'items' must contain only unique elements."
        );
    }
}
