//! Numeric bounds the rule evaluator classifies against

use serde::{Deserialize, Serialize};

/// Temperature bounds in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureThresholds {
    /// Strictly below this is Low
    pub low_below: f64,
    /// Strictly above this is Fever
    pub fever_above: f64,
}

/// Heart rate bounds in bpm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRateThresholds {
    /// Strictly below this is Below Normal
    pub below_normal: i64,
    /// Strictly above this is Above Normal
    pub above_normal: i64,
}

/// Symptom count cut-offs (inclusive upper bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    pub mild_max: usize,
    pub moderate_max: usize,
}

/// All evaluator bounds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thresholds {
    pub temperature: TemperatureThresholds,
    pub heart_rate: HeartRateThresholds,
    pub severity: SeverityThresholds,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        // Normal range tops out at 37.5, but only readings above 38.0 count as fever.
        Self {
            low_below: 36.5,
            fever_above: 38.0,
        }
    }
}

impl Default for HeartRateThresholds {
    fn default() -> Self {
        Self {
            below_normal: 60,
            above_normal: 100,
        }
    }
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            mild_max: 2,
            moderate_max: 4,
        }
    }
}

impl Thresholds {
    /// Check that every pair of bounds is ordered
    pub fn validate(&self) -> Result<(), String> {
        // NaN bounds fail this comparison too
        let temperature_ordered = self.temperature.low_below < self.temperature.fever_above;
        if !temperature_ordered {
            return Err(format!(
                "temperature.low_below ({}) must be less than temperature.fever_above ({})",
                self.temperature.low_below, self.temperature.fever_above
            ));
        }

        if self.heart_rate.below_normal > self.heart_rate.above_normal {
            return Err(format!(
                "heart_rate.below_normal ({}) must not exceed heart_rate.above_normal ({})",
                self.heart_rate.below_normal, self.heart_rate.above_normal
            ));
        }

        if self.severity.mild_max == 0 {
            return Err("severity.mild_max must be at least 1".to_string());
        }

        if self.severity.mild_max >= self.severity.moderate_max {
            return Err("severity.mild_max must be less than severity.moderate_max".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.temperature.low_below, 36.5);
        assert_eq!(t.temperature.fever_above, 38.0);
        assert_eq!(t.heart_rate.below_normal, 60);
        assert_eq!(t.heart_rate.above_normal, 100);
        assert_eq!(t.severity.mild_max, 2);
        assert_eq!(t.severity.moderate_max, 4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_temperature() {
        let mut t = Thresholds::default();
        t.temperature.low_below = 39.0;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_nan_temperature() {
        let mut t = Thresholds::default();
        t.temperature.fever_above = f64::NAN;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_heart_rate() {
        let mut t = Thresholds::default();
        t.heart_rate.below_normal = 120;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_severity() {
        let mut t = Thresholds::default();
        t.severity.mild_max = 0;
        assert!(t.validate().is_err());

        let mut t = Thresholds::default();
        t.severity.moderate_max = 2;
        assert!(t.validate().is_err());
    }
}
