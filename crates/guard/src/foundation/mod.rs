//! Engine types shared by every guard family
//!
//! - **State**: [`GuardState`] and [`Param`]
//! - **Contract**: [`Guard`] and [`CheckResultExt`]
//! - **Errors**: [`ValidationError`] and [`Severity`]
//!
//! A typed guard is a thin wrapper around a [`GuardState`]. Checks consume the
//! guard and hand it back on success, so chains read as a sequence of `?`:
//!
//! ```
//! use fluent_guard::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let name = for_string("alice", "name")?
//!     .min_length(3)?
//!     .max_length(20)?
//!     .into_value();
//! assert_eq!(name.as_deref(), Some("alice"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod state;
pub mod traits;

pub use error::{Severity, ValidationError, ValidationResult};
pub use state::{GuardState, Param};
pub use traits::{CheckResultExt, Guard};
