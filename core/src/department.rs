//! Department metric tables.
//!
//! Every known department owns exactly three metric definitions. The
//! table below is authoritative: targets, thresholds, ceilings and units
//! are literal constants and are not configurable.
//!
//! Any department name outside the table (or an empty one) gets the
//! placeholder triple in `PLACEHOLDER_METRICS`.

use crate::employee::MetricField;
use serde::{Deserialize, Serialize};

/// Ceiling for plain count/amount metrics.
pub const RATIO_CEILING: f64 = 150.0;
/// Ceiling for metrics scored out of five.
pub const SCORE_CEILING: f64 = 125.0;
/// Ceiling for metrics already expressed as a percentage.
pub const PERCENT_CEILING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Marketing,
    Production,
    #[serde(rename = "HR")]
    Hr,
    Accounting,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Self::Sales,
        Self::Marketing,
        Self::Production,
        Self::Hr,
        Self::Accounting,
    ];

    /// Exact, case-sensitive match on the roster's department name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Sales" => Some(Self::Sales),
            "Marketing" => Some(Self::Marketing),
            "Production" => Some(Self::Production),
            "HR" => Some(Self::Hr),
            "Accounting" => Some(Self::Accounting),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Production => "Production",
            Self::Hr => "HR",
            Self::Accounting => "Accounting",
        }
    }

    pub fn metric_definitions(&self) -> &'static [MetricDefinition; 3] {
        match self {
            Self::Sales => &SALES_METRICS,
            Self::Marketing => &MARKETING_METRICS,
            Self::Production => &PRODUCTION_METRICS,
            Self::Hr => &HR_METRICS,
            Self::Accounting => &ACCOUNTING_METRICS,
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a raw value turns into a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressScale {
    /// `value / target * 100`, capped at `ceiling`.
    Ratio { ceiling: f64 },
    /// Value is already a percentage; capped at 100 and never rescaled.
    RawPercent,
}

impl ProgressScale {
    pub fn ceiling(&self) -> f64 {
        match self {
            Self::Ratio { ceiling } => *ceiling,
            Self::RawPercent => PERCENT_CEILING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefinition {
    pub label: &'static str,
    pub field: MetricField,
    pub target: f64,
    pub exceeded_at: f64,
    pub on_track_at: f64,
    pub scale: ProgressScale,
    pub unit: &'static str,
}

/// Label, target and unit of a placeholder metric. Placeholders always
/// report zero progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderMetric {
    pub label: &'static str,
    pub target: f64,
    pub unit: &'static str,
}

const RATIO: ProgressScale = ProgressScale::Ratio { ceiling: RATIO_CEILING };
const SCORE: ProgressScale = ProgressScale::Ratio { ceiling: SCORE_CEILING };

// ── Sales ──────────────────────────────────────────────────────────

pub const SALES_METRICS: [MetricDefinition; 3] = [
    MetricDefinition {
        label: "Leads Closed",
        field: MetricField::LeadsClosed,
        target: 20.0,
        exceeded_at: 20.0,
        on_track_at: 15.0,
        scale: RATIO,
        unit: "leads",
    },
    MetricDefinition {
        label: "Sales Amount",
        field: MetricField::SalesAmount,
        target: 100_000.0,
        exceeded_at: 100_000.0,
        on_track_at: 75_000.0,
        scale: RATIO,
        unit: "$",
    },
    MetricDefinition {
        label: "Commission Earned",
        field: MetricField::CommissionEarned,
        target: 10_000.0,
        exceeded_at: 10_000.0,
        on_track_at: 7_500.0,
        scale: RATIO,
        unit: "$",
    },
];

// ── Marketing ──────────────────────────────────────────────────────

pub const MARKETING_METRICS: [MetricDefinition; 3] = [
    MetricDefinition {
        label: "Campaigns Run",
        field: MetricField::CampaignsRun,
        target: 6.0,
        exceeded_at: 6.0,
        on_track_at: 4.0,
        scale: RATIO,
        unit: "campaigns",
    },
    MetricDefinition {
        label: "Lead Quality Score",
        field: MetricField::LeadQualityScore,
        target: 4.0,
        exceeded_at: 4.0,
        on_track_at: 3.5,
        scale: SCORE,
        unit: "/5",
    },
    MetricDefinition {
        label: "Lead Generation",
        field: MetricField::LeadGeneration,
        target: 120.0,
        exceeded_at: 120.0,
        on_track_at: 90.0,
        scale: RATIO,
        unit: "leads",
    },
];

// ── Production ─────────────────────────────────────────────────────

pub const PRODUCTION_METRICS: [MetricDefinition; 3] = [
    MetricDefinition {
        label: "Projects Completed",
        field: MetricField::ProjectsCompleted,
        target: 10.0,
        exceeded_at: 10.0,
        on_track_at: 7.0,
        scale: RATIO,
        unit: "projects",
    },
    MetricDefinition {
        label: "Code Quality Score",
        field: MetricField::CodeQualityScore,
        target: 4.0,
        exceeded_at: 4.0,
        on_track_at: 3.5,
        scale: SCORE,
        unit: "/5",
    },
    MetricDefinition {
        label: "Task Completion",
        field: MetricField::TaskCompletion,
        target: 90.0,
        exceeded_at: 90.0,
        on_track_at: 75.0,
        scale: ProgressScale::RawPercent,
        unit: "%",
    },
];

// ── HR ─────────────────────────────────────────────────────────────

pub const HR_METRICS: [MetricDefinition; 3] = [
    MetricDefinition {
        label: "Recruitments",
        field: MetricField::Recruitments,
        target: 6.0,
        exceeded_at: 6.0,
        on_track_at: 4.0,
        scale: RATIO,
        unit: "hires",
    },
    MetricDefinition {
        label: "Employee Satisfaction",
        field: MetricField::EmployeeSatisfaction,
        target: 4.0,
        exceeded_at: 4.0,
        on_track_at: 3.5,
        scale: SCORE,
        unit: "/5",
    },
    MetricDefinition {
        label: "Request Processing",
        field: MetricField::RequestProcessing,
        target: 40.0,
        exceeded_at: 40.0,
        on_track_at: 30.0,
        scale: RATIO,
        unit: "requests",
    },
];

// ── Accounting ─────────────────────────────────────────────────────

pub const ACCOUNTING_METRICS: [MetricDefinition; 3] = [
    MetricDefinition {
        label: "Invoices Processed",
        field: MetricField::InvoicesProcessed,
        target: 200.0,
        exceeded_at: 200.0,
        on_track_at: 150.0,
        scale: RATIO,
        unit: "invoices",
    },
    MetricDefinition {
        label: "Accuracy Rate",
        field: MetricField::AccuracyRate,
        target: 95.0,
        exceeded_at: 95.0,
        on_track_at: 90.0,
        scale: ProgressScale::RawPercent,
        unit: "%",
    },
    MetricDefinition {
        label: "Reports Generated",
        field: MetricField::ReportsGenerated,
        target: 12.0,
        exceeded_at: 12.0,
        on_track_at: 9.0,
        scale: RATIO,
        unit: "reports",
    },
];

// ── Unrecognised department ────────────────────────────────────────

pub const PLACEHOLDER_METRICS: [PlaceholderMetric; 3] = [
    PlaceholderMetric { label: "Tasks Completed",   target: 10.0, unit: "tasks" },
    PlaceholderMetric { label: "Performance Score", target: 4.0,  unit: "/5" },
    PlaceholderMetric { label: "Attendance Rate",   target: 95.0, unit: "%" },
];
