//! Employee records as they arrive from the roster.
//!
//! Identity fields are always present. Department-specific figures are
//! sparse: only the ones relevant to the employee's department are filled
//! upstream, everything else is `None`.

use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: String,

    // Sales
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leads_closed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_earned: Option<f64>,

    // Marketing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_run: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_generation: Option<f64>,

    // Production
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_completed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_completion: Option<f64>,

    // HR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitments: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_satisfaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_processing: Option<f64>,

    // Accounting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices_processed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_generated: Option<f64>,
}

impl EmployeeRecord {
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Set one optional figure, builder style.
    pub fn with_field(mut self, field: MetricField, value: f64) -> Self {
        *field.slot_mut(&mut self) = Some(value);
        self
    }

    /// Display name: trimmed first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Names one of the sparse numeric fields of an `EmployeeRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    LeadsClosed,
    SalesAmount,
    CommissionEarned,
    CampaignsRun,
    LeadQualityScore,
    LeadGeneration,
    ProjectsCompleted,
    CodeQualityScore,
    TaskCompletion,
    Recruitments,
    EmployeeSatisfaction,
    RequestProcessing,
    InvoicesProcessed,
    AccuracyRate,
    ReportsGenerated,
}

impl MetricField {
    pub fn read(&self, record: &EmployeeRecord) -> Option<f64> {
        match self {
            Self::LeadsClosed => record.leads_closed,
            Self::SalesAmount => record.sales_amount,
            Self::CommissionEarned => record.commission_earned,
            Self::CampaignsRun => record.campaigns_run,
            Self::LeadQualityScore => record.lead_quality_score,
            Self::LeadGeneration => record.lead_generation,
            Self::ProjectsCompleted => record.projects_completed,
            Self::CodeQualityScore => record.code_quality_score,
            Self::TaskCompletion => record.task_completion,
            Self::Recruitments => record.recruitments,
            Self::EmployeeSatisfaction => record.employee_satisfaction,
            Self::RequestProcessing => record.request_processing,
            Self::InvoicesProcessed => record.invoices_processed,
            Self::AccuracyRate => record.accuracy_rate,
            Self::ReportsGenerated => record.reports_generated,
        }
    }

    /// Absent and non-finite figures count as zero. "No data yet" and
    /// "confirmed zero" are indistinguishable past this point.
    pub fn value_or_zero(&self, record: &EmployeeRecord) -> f64 {
        self.read(record).filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    fn slot_mut<'a>(&self, record: &'a mut EmployeeRecord) -> &'a mut Option<f64> {
        match self {
            Self::LeadsClosed => &mut record.leads_closed,
            Self::SalesAmount => &mut record.sales_amount,
            Self::CommissionEarned => &mut record.commission_earned,
            Self::CampaignsRun => &mut record.campaigns_run,
            Self::LeadQualityScore => &mut record.lead_quality_score,
            Self::LeadGeneration => &mut record.lead_generation,
            Self::ProjectsCompleted => &mut record.projects_completed,
            Self::CodeQualityScore => &mut record.code_quality_score,
            Self::TaskCompletion => &mut record.task_completion,
            Self::Recruitments => &mut record.recruitments,
            Self::EmployeeSatisfaction => &mut record.employee_satisfaction,
            Self::RequestProcessing => &mut record.request_processing,
            Self::InvoicesProcessed => &mut record.invoices_processed,
            Self::AccuracyRate => &mut record.accuracy_rate,
            Self::ReportsGenerated => &mut record.reports_generated,
        }
    }
}
