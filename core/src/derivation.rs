//! Metric derivation: one employee record in, three metrics out.
//!
//! Never fails. Missing figures read as zero and an unrecognised
//! department yields the placeholder triple.

use crate::{
    department::{Department, MetricDefinition, PlaceholderMetric, ProgressScale, PLACEHOLDER_METRICS},
    employee::EmployeeRecord,
    metric::{MetricStatus, PerformanceMetric},
    types::Percent,
};

/// Derive the three department-specific metrics for `record`.
pub fn derive_metrics(record: &EmployeeRecord) -> [PerformanceMetric; 3] {
    match Department::from_name(&record.department) {
        Some(dept) => dept
            .metric_definitions()
            .each_ref()
            .map(|def| evaluate(def, record)),
        None => {
            log::debug!(
                "employee {}: unrecognised department {:?}, using placeholder metrics",
                record.id,
                record.department
            );
            PLACEHOLDER_METRICS.each_ref().map(placeholder)
        }
    }
}

/// Apply one definition to one record.
pub fn evaluate(def: &MetricDefinition, record: &EmployeeRecord) -> PerformanceMetric {
    let value = def.field.value_or_zero(record);
    PerformanceMetric {
        label: def.label.to_string(),
        current_value: value,
        target_value: def.target,
        progress: progress(value, def.target, def.scale),
        status: MetricStatus::classify(value, def.exceeded_at, def.on_track_at),
        unit: def.unit.to_string(),
    }
}

/// Progress percentage for `value` under `scale`, floored at zero.
pub fn progress(value: f64, target: f64, scale: ProgressScale) -> Percent {
    let raw = match scale {
        ProgressScale::Ratio { ceiling } => (value / target * 100.0).min(ceiling),
        ProgressScale::RawPercent => value.min(100.0),
    };
    raw.max(0.0)
}

fn placeholder(p: &PlaceholderMetric) -> PerformanceMetric {
    PerformanceMetric {
        label: p.label.to_string(),
        current_value: 0.0,
        target_value: p.target,
        progress: 0.0,
        status: MetricStatus::BelowTarget,
        unit: p.unit.to_string(),
    }
}
