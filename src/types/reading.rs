//! Raw health reading collected from the user

use std::fmt;

/// Symptoms on the self-assessment checklist, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symptom {
    Fever,
    Headache,
    Fatigue,
    Cough,
    SoreThroat,
    BodyAches,
    ShortnessOfBreath,
}

impl Symptom {
    /// Every checklist symptom, in the order it is asked
    pub const ALL: [Symptom; 7] = [
        Symptom::Fever,
        Symptom::Headache,
        Symptom::Fatigue,
        Symptom::Cough,
        Symptom::SoreThroat,
        Symptom::BodyAches,
        Symptom::ShortnessOfBreath,
    ];

    /// Field key (snake_case)
    pub fn key(&self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Headache => "headache",
            Symptom::Fatigue => "fatigue",
            Symptom::Cough => "cough",
            Symptom::SoreThroat => "sore_throat",
            Symptom::BodyAches => "body_aches",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
        }
    }

    /// Prompt label, title-cased from the key
    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Headache => "Headache",
            Symptom::Fatigue => "Fatigue",
            Symptom::Cough => "Cough",
            Symptom::SoreThroat => "Sore Throat",
            Symptom::BodyAches => "Body Aches",
            Symptom::ShortnessOfBreath => "Shortness Of Breath",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Yes/no answers for the symptom checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymptomSet {
    present: [bool; 7],
}

impl SymptomSet {
    /// Empty set (every answer "no")
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the symptoms answered "yes"
    pub fn from_present(symptoms: &[Symptom]) -> Self {
        let mut set = Self::new();
        for symptom in symptoms {
            set.set(*symptom, true);
        }
        set
    }

    /// Record an answer
    pub fn set(&mut self, symptom: Symptom, present: bool) {
        self.present[symptom.index()] = present;
    }

    /// Whether the symptom was answered "yes"
    pub fn has(&self, symptom: Symptom) -> bool {
        self.present[symptom.index()]
    }

    /// Number of symptoms answered "yes"
    pub fn count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }
}

/// One run's worth of user-supplied health data
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Body temperature in °C
    pub temperature: f64,

    /// Heart rate in beats per minute
    pub heart_rate: i64,

    /// Free text, expected as "systolic/diastolic" but never checked
    pub blood_pressure: String,

    /// Symptom checklist answers
    pub symptoms: SymptomSet,
}

impl Reading {
    pub fn new(
        temperature: f64,
        heart_rate: i64,
        blood_pressure: impl Into<String>,
        symptoms: SymptomSet,
    ) -> Self {
        Self {
            temperature,
            heart_rate,
            blood_pressure: blood_pressure.into(),
            symptoms,
        }
    }

    /// Temperature, or `None` when it reads as zero (treated as not entered)
    pub fn temperature_reading(&self) -> Option<f64> {
        if self.temperature == 0.0 {
            None
        } else {
            Some(self.temperature)
        }
    }

    /// Heart rate, or `None` when it reads as zero (treated as not entered)
    pub fn heart_rate_reading(&self) -> Option<i64> {
        if self.heart_rate == 0 {
            None
        } else {
            Some(self.heart_rate)
        }
    }
}

/// Interpret a checklist answer: only "yes" (any case) counts
pub fn parse_answer(input: &str) -> bool {
    input.to_lowercase() == "yes"
}
