//! Dashboard configuration.
//!
//! The metric table itself is fixed (see `department.rs`); this only
//! controls which departments are shown, how output is rendered, and how
//! the mock roster is generated when no roster file is supplied.

use crate::error::{MetricsError, MetricsResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_SAMPLE_SIZE: usize = 25;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl OutputFormat {
    /// Lenient parse: unknown names fall back to `Table`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: String| {
            log::warn!("{e}, falling back to table");
            Self::Table
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Departments to show. Empty means all.
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            departments: Vec::new(),
            format: OutputFormat::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: &str) -> MetricsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MetricsError::Io {
            path: path.to_string(),
            source,
        })?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runner cannot act on.
    pub fn validate(&self) -> MetricsResult<()> {
        if self.sample_size == 0 {
            return Err(anyhow::anyhow!("sample_size must be at least 1").into());
        }
        Ok(())
    }

    /// Small deterministic config for tests.
    pub fn default_test() -> Self {
        Self {
            departments: Vec::new(),
            format: OutputFormat::Json,
            sample_size: 10,
            seed: 0xC0FF_EE00,
        }
    }

    /// Whether members of `department` pass the filter.
    pub fn includes(&self, department: &str) -> bool {
        self.departments.is_empty() || self.departments.iter().any(|d| d == department)
    }
}
