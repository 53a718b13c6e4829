//! Shared primitive types used across the analytics core.

/// A 4-digit fiscal year, e.g. `2025`.
pub type FiscalYear = i32;

/// Primary key of any stored HR entity.
pub type EntityId = i64;

/// Catalog code of a dismissal reason.
pub type ReasonCode = i64;
