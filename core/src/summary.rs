//! Per-department status counts for the dashboard's summary cards.

use crate::{
    member::PerformanceMember,
    metric::MetricStatus,
    types::Percent,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub exceeded: usize,
    pub on_track: usize,
    pub below_target: usize,
    /// Mean progress over every metric of every member in the department.
    pub average_progress: Percent,
}

impl DepartmentSummary {
    fn record(&mut self, member: &PerformanceMember) {
        self.headcount += 1;
        for metric in &member.metrics {
            match metric.status {
                MetricStatus::Exceeded => self.exceeded += 1,
                MetricStatus::OnTrack => self.on_track += 1,
                MetricStatus::BelowTarget => self.below_target += 1,
            }
        }
    }

    pub fn metric_count(&self) -> usize {
        self.exceeded + self.on_track + self.below_target
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub departments: BTreeMap<String, DepartmentSummary>,
    pub total: DepartmentSummary,
}

impl TeamSummary {
    pub fn from_members(members: &[PerformanceMember]) -> Self {
        let mut departments: BTreeMap<String, DepartmentSummary> = BTreeMap::new();
        let mut progress_sums: BTreeMap<String, f64> = BTreeMap::new();
        let mut total = DepartmentSummary {
            department: "All".into(),
            ..Default::default()
        };
        let mut total_progress = 0.0f64;

        for member in members {
            let entry = departments
                .entry(member.department.clone())
                .or_insert_with(|| DepartmentSummary {
                    department: member.department.clone(),
                    ..Default::default()
                });
            entry.record(member);
            total.record(member);

            let sum: f64 = member.metrics.iter().map(|m| m.progress).sum();
            *progress_sums.entry(member.department.clone()).or_default() += sum;
            total_progress += sum;
        }

        for (name, summary) in departments.iter_mut() {
            let sum = progress_sums.get(name).copied().unwrap_or(0.0);
            summary.average_progress = mean(sum, summary.metric_count());
        }
        total.average_progress = mean(total_progress, total.metric_count());

        Self { departments, total }
    }
}

fn mean(sum: f64, count: usize) -> Percent {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
