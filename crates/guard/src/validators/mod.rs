//! Built-in guard families
//!
//! - **Numeric**: [`NumericGuard`] over any whitelisted [`Numeric`] type
//! - **String**: [`StringGuard`]
//! - **Collection**: [`CollectionGuard`]
//! - **Enum**: [`EnumGuard`] over [`IntegralEnum`] types
//! - **Temporal**: [`DateTimeGuard`] (feature `temporal`)

pub mod collection;
pub mod enumeration;
pub mod numeric;
pub mod string;
#[cfg(feature = "temporal")]
pub mod temporal;

pub use collection::CollectionGuard;
pub use enumeration::{EnumGuard, EnumValue, IntegralEnum};
pub use numeric::{Numeric, NumericGuard, NumericKind, numeric_kind};
pub use string::StringGuard;
#[cfg(feature = "temporal")]
pub use temporal::{Clock, DateTimeGuard, FixedClock, SystemClock};
