//! Smart Health Advisor - terminal self-assessment
//!
//! Collects vital signs and a symptom checklist, classifies them against
//! fixed thresholds, and prints canned recommendations.
//!
//! # Architecture
//!
//! - **collector**: prompts and parses one `Reading`
//! - **evaluator**: pure `Reading -> Analysis`
//! - **recommendations**: pure `Analysis -> Vec<String>`
//! - **report**: text/JSON rendering
//! - **advisor**: runs the steps in order

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{AdvisorError, Result};

pub mod collector;
pub mod evaluator;
pub mod recommendations;
pub mod report;
pub mod advisor;

pub mod cli;
pub mod logging;

pub use advisor::HealthAdvisor;
