//! Type definitions module
//!
//! Readings as collected, and the analysis derived from them.

pub mod reading;
pub mod analysis;

// Re-export commonly used types
pub use reading::{parse_answer, Reading, Symptom, SymptomSet};
pub use analysis::{Analysis, HeartRateStatus, SymptomSeverity, TemperatureStatus};
