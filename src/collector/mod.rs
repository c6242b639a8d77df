//! Input collector
//!
//! Asks for each field in turn and builds a `Reading`. Only numeric parsing
//! is checked; a bad number ends the run immediately.

pub mod input;

pub use input::{PromptSource, ScriptedPrompt, TerminalPrompt};

use crate::errors::{AdvisorError, Result};
use crate::types::{parse_answer, Reading, Symptom, SymptomSet};

pub const PARAMETERS_HEADER: &str = "\nPlease input your health parameters:";
pub const SYMPTOMS_HEADER: &str = "\nSelect your current symptoms (yes/no):";

pub const TEMPERATURE_PROMPT: &str = "Body Temperature (°C): ";
pub const HEART_RATE_PROMPT: &str = "Heart Rate (bpm): ";
pub const BLOOD_PRESSURE_PROMPT: &str = "Blood Pressure (e.g., 120/80): ";

/// Collects one reading through a prompt source
pub struct InputCollector<'a, P: PromptSource> {
    prompt: &'a mut P,
}

impl<'a, P: PromptSource> InputCollector<'a, P> {
    pub fn new(prompt: &'a mut P) -> Self {
        Self { prompt }
    }

    /// Run through every prompt and return the reading
    pub fn collect(&mut self) -> Result<Reading> {
        self.prompt.announce(PARAMETERS_HEADER)?;

        let temperature = self.ask_number("temperature", TEMPERATURE_PROMPT, |s| s.parse::<f64>().ok())?;
        let heart_rate = self.ask_number("heart rate", HEART_RATE_PROMPT, parse_whole_number)?;
        let blood_pressure = self.ask("blood pressure", BLOOD_PRESSURE_PROMPT)?;

        self.prompt.announce(SYMPTOMS_HEADER)?;

        let mut symptoms = SymptomSet::new();
        for symptom in Symptom::ALL {
            let answer = self.ask(symptom.key(), &format!("{}: ", symptom.label()))?;
            symptoms.set(symptom, parse_answer(&answer));
        }

        tracing::debug!(
            temperature,
            heart_rate,
            symptom_count = symptoms.count(),
            "reading collected"
        );

        Ok(Reading::new(temperature, heart_rate, blood_pressure, symptoms))
    }

    fn ask(&mut self, field: &str, prompt: &str) -> Result<String> {
        self.prompt
            .read_line(prompt)?
            .ok_or_else(|| AdvisorError::InputClosed {
                field: field.to_string(),
            })
    }

    fn ask_number<T>(
        &mut self,
        field: &str,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let raw = self.ask(field, prompt)?;
        match parse(raw.trim()) {
            Some(value) => Ok(value),
            None => Err(AdvisorError::InvalidNumber {
                field: field.to_string(),
                input: raw,
            }),
        }
    }
}

/// Parse an integer of any length
///
/// Values beyond the i64 range saturate to `i64::MAX` / `i64::MIN`, which
/// classify the same way the exact value would.
pub fn parse_whole_number(text: &str) -> Option<i64> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    tracing::debug!(input = text, "integer outside i64 range, saturating");
    Some(if negative { i64::MIN } else { i64::MAX })
}
