//! Roster files: JSON in, members JSON out.
//!
//! A roster is either a bare array of employee records or an object with
//! an `employees` array. Keys are camelCase, as the front end emits them.

use crate::{
    employee::EmployeeRecord,
    error::{MetricsError, MetricsResult},
    member::PerformanceMember,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Bare(Vec<EmployeeRecord>),
    Wrapped { employees: Vec<EmployeeRecord> },
}

impl RosterFile {
    fn into_records(self) -> Vec<EmployeeRecord> {
        match self {
            Self::Bare(records) => records,
            Self::Wrapped { employees } => employees,
        }
    }
}

/// Read and parse a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> MetricsResult<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| MetricsError::Io {
        path: display.clone(),
        source,
    })?;
    let records = parse_roster(&content)?;
    if records.is_empty() {
        return Err(MetricsError::EmptyRoster { path: display });
    }
    log::info!("loaded {} employees from {display}", records.len());
    Ok(records)
}

/// Parse roster JSON already in memory. An empty roster is not an error here.
pub fn parse_roster(json: &str) -> MetricsResult<Vec<EmployeeRecord>> {
    let records = serde_json::from_str::<RosterFile>(json)?.into_records();
    warn_on_duplicate_ids(&records);
    Ok(records)
}

/// Pretty JSON for a list of members.
pub fn members_to_json(members: &[PerformanceMember]) -> MetricsResult<String> {
    Ok(serde_json::to_string_pretty(members)?)
}

fn warn_on_duplicate_ids(records: &[EmployeeRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            log::warn!("duplicate employee id {} in roster", record.id);
        }
    }
}
