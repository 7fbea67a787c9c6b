//! Shared primitive types used across the crate.

/// Numeric employee identifier as carried by upstream roster records.
pub type EmployeeId = u64;

/// String identifier exposed on assembled members (decimal form of `EmployeeId`).
pub type MemberId = String;

/// Percentage in [0.0, ceiling] used for progress bars.
pub type Percent = f64;
