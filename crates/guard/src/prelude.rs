//! Prelude module for convenient imports.
//!
//! `use fluent_guard::prelude::*;` brings in the entry points, the guard
//! types, and the traits their methods live on.

// ============================================================================
// FOUNDATION: Contract, state, errors
// ============================================================================

pub use crate::foundation::{
    CheckResultExt, Guard, GuardState, Param, Severity, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: Guard families
// ============================================================================

pub use crate::validators::{
    CollectionGuard, EnumGuard, EnumValue, IntegralEnum, Numeric, NumericGuard, StringGuard,
};

#[cfg(feature = "temporal")]
pub use crate::validators::{Clock, DateTimeGuard};

// ============================================================================
// ENTRY POINTS
// ============================================================================

#[cfg(feature = "temporal")]
pub use crate::for_date;
pub use crate::integral_enum;
pub use crate::{for_collection, for_enum, for_enum_raw, for_numeric, for_string};
