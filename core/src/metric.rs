//! Derived metric values and their status.

use crate::types::Percent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub label: String,
    pub current_value: f64,
    pub target_value: f64,
    pub progress: Percent,
    pub status: MetricStatus,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    Exceeded,
    OnTrack,
    BelowTarget,
}

impl MetricStatus {
    /// Classify `value` against two thresholds (`exceeded_at >= on_track_at`).
    pub fn classify(value: f64, exceeded_at: f64, on_track_at: f64) -> Self {
        if value >= exceeded_at {
            Self::Exceeded
        } else if value >= on_track_at {
            Self::OnTrack
        } else {
            Self::BelowTarget
        }
    }

    /// Wire form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exceeded => "exceeded",
            Self::OnTrack => "on-track",
            Self::BelowTarget => "below-target",
        }
    }

    /// Human label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exceeded => "Exceeded",
            Self::OnTrack => "On Track",
            Self::BelowTarget => "Below Target",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Exceeded => BadgeTone::Green,
            Self::OnTrack => BadgeTone::Blue,
            Self::BelowTarget => BadgeTone::Red,
        }
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour family a status badge is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Green,
    Blue,
    Red,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }
}
