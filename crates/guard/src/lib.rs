//! # fluent-guard
//!
//! Fluent precondition checks for function arguments.
//!
//! ## Quick Start
//!
//! ```
//! use fluent_guard::prelude::*;
//!
//! fn schedule(retries: i32, queue: &str) -> Result<(), ValidationError> {
//!     for_numeric(retries, "retries")?.min_max(0, 10)?;
//!     for_string(queue, "queue")?.not_null_or_whitespace()?.max_length(64)?;
//!     Ok(())
//! }
//!
//! assert!(schedule(3, "default").is_ok());
//!
//! let error = schedule(11, "default").unwrap_err();
//! assert_eq!(error.field.as_deref(), Some("retries"));
//! assert_eq!(error.message, "Parameter 'retries' must be between 0 and 10.");
//! ```
//!
//! Every check consumes the guard and returns it on success, so the first
//! failure stops the chain and no later predicate runs.
//!
//! ## Guard families
//!
//! - **Numeric**: [`for_numeric`] → [`NumericGuard`](validators::NumericGuard)
//! - **String**: [`for_string`] → [`StringGuard`](validators::StringGuard)
//! - **Collection**: [`for_collection`] → [`CollectionGuard`](validators::CollectionGuard)
//! - **Enum**: [`for_enum`], [`for_enum_raw`] → [`EnumGuard`](validators::EnumGuard)
//! - **Temporal**: `for_date` → `DateTimeGuard` (feature `temporal`)
//!
//! ## Custom messages
//!
//! [`CheckResultExt`](foundation::CheckResultExt) rewrites the message, code,
//! or severity of a failed check without touching a passing one.

// ValidationError is returned by every check; boxing it would add an
// allocation to each link of a chain.
#![allow(clippy::result_large_err)]

mod facade;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use facade::*;
