//! Member assembly: roster records to dashboard-ready members.

use crate::{
    derivation::derive_metrics,
    employee::EmployeeRecord,
    metric::PerformanceMetric,
    types::MemberId,
};
use serde::{Deserialize, Serialize};

/// Placeholder initial for an empty first or last name.
pub const MISSING_INITIAL: char = '?';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMember {
    pub id: MemberId,
    pub name: String,
    pub avatar: String,
    pub department: String,
    pub role: String,
    pub metrics: [PerformanceMetric; 3],
}

impl PerformanceMember {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.full_name(),
            avatar: initials(&record.first_name, &record.last_name),
            department: record.department.clone(),
            role: record.role.clone(),
            metrics: derive_metrics(record),
        }
    }
}

/// Build one member per record, preserving input order.
pub fn generate_performance_metrics(records: &[EmployeeRecord]) -> Vec<PerformanceMember> {
    let members: Vec<PerformanceMember> =
        records.iter().map(PerformanceMember::from_record).collect();
    log::info!("assembled {} performance members", members.len());
    members
}

/// Two-letter avatar initials: first character of each trimmed name, as written.
pub fn initials(first_name: &str, last_name: &str) -> String {
    let mut out = String::with_capacity(2);
    push_initial(&mut out, first_name);
    push_initial(&mut out, last_name);
    out
}

fn push_initial(out: &mut String, name: &str) {
    match name.trim().chars().next() {
        Some(c) => out.push(c),
        None => out.push(MISSING_INITIAL),
    }
}
