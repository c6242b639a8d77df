//! Recommendation generator
//!
//! Maps an `Analysis` to advice lines. Rules fire independently and append
//! in a fixed order: temperature, heart rate, then symptom severity. When
//! nothing fires the healthy set is returned.

use crate::types::{Analysis, HeartRateStatus, SymptomSeverity, TemperatureStatus};

pub const FEVER_ADVICE: [&str; 3] = [
    "Rest and stay hydrated",
    "Take fever-reducing medication if needed",
    "Monitor temperature regularly",
];

pub const HEART_RATE_ADVICE: &str = "Consult a healthcare professional about your heart rate";

pub const MODERATE_ADVICE: [&str; 3] = [
    "Consider seeing a healthcare provider",
    "Get plenty of rest",
    "Stay hydrated",
];

pub const SEVERE_ADVICE: [&str; 3] = [
    "Seek immediate medical attention",
    "Avoid physical exertion",
    "Rest completely",
];

pub const HEALTHY_ADVICE: [&str; 3] = [
    "You appear to be in good health",
    "Maintain your current health routine",
    "Continue regular exercise and balanced diet",
];

/// Generates advice from an analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the ordered recommendation list
    pub fn generate(&self, analysis: &Analysis) -> Vec<String> {
        let mut recommendations: Vec<&str> = Vec::new();

        if analysis.temperature_status == Some(TemperatureStatus::Fever) {
            recommendations.extend(FEVER_ADVICE);
        }

        // An absent heart rate status is not Normal either
        if analysis.heart_rate_status != Some(HeartRateStatus::Normal) {
            recommendations.push(HEART_RATE_ADVICE);
        }

        match analysis.overall_symptom_severity {
            Some(SymptomSeverity::Moderate) => recommendations.extend(MODERATE_ADVICE),
            Some(SymptomSeverity::Severe) => recommendations.extend(SEVERE_ADVICE),
            _ => {}
        }

        if recommendations.is_empty() {
            recommendations.extend(HEALTHY_ADVICE);
        }

        tracing::info!(count = recommendations.len(), "recommendations generated");

        recommendations.into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(
        temperature: Option<TemperatureStatus>,
        heart_rate: Option<HeartRateStatus>,
        severity: Option<SymptomSeverity>,
    ) -> Analysis {
        Analysis {
            temperature_status: temperature,
            heart_rate_status: heart_rate,
            overall_symptom_severity: severity,
        }
    }

    #[test]
    fn test_healthy_default() {
        let recs = RecommendationEngine::new().generate(&analysis(
            Some(TemperatureStatus::Normal),
            Some(HeartRateStatus::Normal),
            Some(SymptomSeverity::NoSignificantSymptoms),
        ));
        assert_eq!(recs, HEALTHY_ADVICE.to_vec());
    }

    #[test]
    fn test_mild_is_still_healthy() {
        let recs = RecommendationEngine::new().generate(&analysis(
            Some(TemperatureStatus::Low),
            Some(HeartRateStatus::Normal),
            Some(SymptomSeverity::Mild),
        ));
        assert_eq!(recs, HEALTHY_ADVICE.to_vec());
    }

    #[test]
    fn test_fever() {
        let recs = RecommendationEngine::new().generate(&analysis(
            Some(TemperatureStatus::Fever),
            Some(HeartRateStatus::Normal),
            Some(SymptomSeverity::NoSignificantSymptoms),
        ));
        assert_eq!(recs, FEVER_ADVICE.to_vec());
        assert!(recs.contains(&"Rest and stay hydrated".to_string()));
    }

    #[test]
    fn test_heart_rate_above_and_below() {
        for status in [HeartRateStatus::AboveNormal, HeartRateStatus::BelowNormal] {
            let recs = RecommendationEngine::new().generate(&analysis(
                Some(TemperatureStatus::Normal),
                Some(status),
                Some(SymptomSeverity::NoSignificantSymptoms),
            ));
            assert_eq!(recs, vec![HEART_RATE_ADVICE.to_string()]);
        }
    }

    #[test]
    fn test_absent_heart_rate_fires_rule() {
        let recs = RecommendationEngine::new().generate(&analysis(
            Some(TemperatureStatus::Normal),
            None,
            Some(SymptomSeverity::NoSignificantSymptoms),
        ));
        assert_eq!(recs, vec![HEART_RATE_ADVICE.to_string()]);
    }

    #[test]
    fn test_moderate_and_severe() {
        let engine = RecommendationEngine::new();
        let moderate = engine.generate(&analysis(
            Some(TemperatureStatus::Normal),
            Some(HeartRateStatus::Normal),
            Some(SymptomSeverity::Moderate),
        ));
        assert_eq!(moderate, MODERATE_ADVICE.to_vec());

        let severe = engine.generate(&analysis(
            Some(TemperatureStatus::Normal),
            Some(HeartRateStatus::Normal),
            Some(SymptomSeverity::Severe),
        ));
        assert_eq!(severe, SEVERE_ADVICE.to_vec());
        assert_eq!(severe[0], "Seek immediate medical attention");
    }

    #[test]
    fn test_ordering_when_all_fire() {
        let recs = RecommendationEngine::new().generate(&analysis(
            Some(TemperatureStatus::Fever),
            Some(HeartRateStatus::AboveNormal),
            Some(SymptomSeverity::Severe),
        ));
        let mut expected: Vec<&str> = FEVER_ADVICE.to_vec();
        expected.push(HEART_RATE_ADVICE);
        expected.extend(SEVERE_ADVICE);
        assert_eq!(recs, expected);
    }
}
