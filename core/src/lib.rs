//! perfboard-core: department-scoped performance metrics for the
//! administration dashboard.
//!
//! Employee roster records go in; members carrying exactly three
//! department-specific metrics (value, target, progress, status, unit)
//! come out. Derivation is pure and never fails.

pub mod config;
pub mod department;
pub mod derivation;
pub mod employee;
pub mod error;
pub mod format;
pub mod generator;
pub mod member;
pub mod metric;
pub mod rng;
pub mod roster;
pub mod summary;
pub mod types;

pub use department::Department;
pub use derivation::derive_metrics;
pub use employee::{EmployeeRecord, MetricField};
pub use error::{MetricsError, MetricsResult};
pub use member::{generate_performance_metrics, PerformanceMember};
pub use metric::{MetricStatus, PerformanceMetric};
