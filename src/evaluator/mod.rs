//! Rule evaluator
//!
//! Pure mapping from a `Reading` to an `Analysis`. A zero temperature or
//! heart rate is treated as "not entered" and its status is left out.

pub mod thresholds;

pub use thresholds::{HeartRateThresholds, SeverityThresholds, TemperatureThresholds, Thresholds};

use crate::types::{Analysis, HeartRateStatus, Reading, SymptomSeverity, TemperatureStatus};

/// Classifies readings against fixed thresholds
#[derive(Debug, Clone, Default)]
pub struct RuleEvaluator {
    thresholds: Thresholds,
}

impl RuleEvaluator {
    /// Create an evaluator with the given bounds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate a reading
    pub fn evaluate(&self, reading: &Reading) -> Analysis {
        let temperature_status = match reading.temperature_reading() {
            Some(temp) => Some(self.classify_temperature(temp)),
            None => {
                tracing::warn!("temperature reads as 0, skipping temperature analysis");
                None
            }
        };

        let heart_rate_status = match reading.heart_rate_reading() {
            Some(rate) => Some(self.classify_heart_rate(rate)),
            None => {
                tracing::warn!("heart rate reads as 0, skipping heart rate analysis");
                None
            }
        };

        let symptom_count = reading.symptoms.count();
        let severity = self.classify_severity(symptom_count);

        tracing::debug!(
            temperature = ?temperature_status,
            heart_rate = ?heart_rate_status,
            symptom_count,
            severity = %severity,
            "reading evaluated"
        );

        Analysis {
            temperature_status,
            heart_rate_status,
            overall_symptom_severity: Some(severity),
        }
    }

    /// Classify a body temperature in °C
    pub fn classify_temperature(&self, temp: f64) -> TemperatureStatus {
        let t = &self.thresholds.temperature;
        if temp < t.low_below {
            TemperatureStatus::Low
        } else if temp > t.fever_above {
            TemperatureStatus::Fever
        } else {
            TemperatureStatus::Normal
        }
    }

    /// Classify a heart rate in bpm
    pub fn classify_heart_rate(&self, rate: i64) -> HeartRateStatus {
        let t = &self.thresholds.heart_rate;
        if rate < t.below_normal {
            HeartRateStatus::BelowNormal
        } else if rate > t.above_normal {
            HeartRateStatus::AboveNormal
        } else {
            HeartRateStatus::Normal
        }
    }

    /// Bucket a count of present symptoms
    pub fn classify_severity(&self, count: usize) -> SymptomSeverity {
        let t = &self.thresholds.severity;
        if count == 0 {
            SymptomSeverity::NoSignificantSymptoms
        } else if count <= t.mild_max {
            SymptomSeverity::Mild
        } else if count <= t.moderate_max {
            SymptomSeverity::Moderate
        } else {
            SymptomSeverity::Severe
        }
    }
}
