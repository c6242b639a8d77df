//! Categorical classification of a reading

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body temperature classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureStatus {
    Low,
    Normal,
    Fever,
}

/// Heart rate classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRateStatus {
    #[serde(rename = "Below Normal")]
    BelowNormal,
    Normal,
    #[serde(rename = "Above Normal")]
    AboveNormal,
}

/// Ordinal bucket of the symptom count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymptomSeverity {
    #[serde(rename = "No Significant Symptoms")]
    NoSignificantSymptoms,
    Mild,
    Moderate,
    Severe,
}

impl TemperatureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureStatus::Low => "Low",
            TemperatureStatus::Normal => "Normal",
            TemperatureStatus::Fever => "Fever",
        }
    }
}

impl HeartRateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeartRateStatus::BelowNormal => "Below Normal",
            HeartRateStatus::Normal => "Normal",
            HeartRateStatus::AboveNormal => "Above Normal",
        }
    }
}

impl SymptomSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSeverity::NoSignificantSymptoms => "No Significant Symptoms",
            SymptomSeverity::Mild => "Mild",
            SymptomSeverity::Moderate => "Moderate",
            SymptomSeverity::Severe => "Severe",
        }
    }
}

impl fmt::Display for TemperatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeartRateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating a reading
///
/// A status is `None` when the matching field was treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_status: Option<TemperatureStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_status: Option<HeartRateStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_symptom_severity: Option<SymptomSeverity>,
}

impl Analysis {
    /// Present classifications as (label, value) pairs in report order
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries = Vec::with_capacity(3);
        if let Some(status) = self.temperature_status {
            entries.push(("Temperature Status", status.as_str()));
        }
        if let Some(status) = self.heart_rate_status {
            entries.push(("Heart Rate Status", status.as_str()));
        }
        if let Some(severity) = self.overall_symptom_severity {
            entries.push(("Overall Symptom Severity", severity.as_str()));
        }
        entries
    }
}
