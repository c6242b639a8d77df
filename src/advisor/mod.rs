//! Health advisor session
//!
//! Runs one assessment end to end: collect, evaluate, recommend, print.

use crate::cli::Config;
use crate::collector::{InputCollector, PromptSource};
use crate::errors::Result;
use crate::evaluator::RuleEvaluator;
use crate::recommendations::RecommendationEngine;
use crate::report::{Report, ReportFormat, ReportRenderer, WELCOME};
use crate::types::Reading;
use std::io::Write;

/// Wires the collector, evaluator, generator and renderer together
pub struct HealthAdvisor {
    evaluator: RuleEvaluator,
    engine: RecommendationEngine,
    renderer: ReportRenderer,
    show_disclaimer: bool,
}

impl HealthAdvisor {
    /// Create an advisor with default thresholds and a plain-text report
    pub fn new() -> Self {
        Self {
            evaluator: RuleEvaluator::default(),
            engine: RecommendationEngine::new(),
            renderer: ReportRenderer::new(ReportFormat::Text, false),
            show_disclaimer: true,
        }
    }

    /// Create an advisor from configuration
    pub fn from_config(config: &Config, format: ReportFormat, color: bool) -> Self {
        Self {
            evaluator: RuleEvaluator::new(config.thresholds()),
            engine: RecommendationEngine::new(),
            renderer: ReportRenderer::new(format, color),
            show_disclaimer: config.display.show_disclaimer,
        }
    }

    /// Evaluate a reading and build its report, without any I/O
    pub fn assess(&self, reading: &Reading) -> Report {
        let analysis = self.evaluator.evaluate(reading);
        let recommendations = self.engine.generate(&analysis);
        Report::new(analysis, recommendations, self.show_disclaimer)
    }

    /// Run an interactive assessment
    ///
    /// Questions go through `prompt`; the report is written to `out`.
    pub fn run<P: PromptSource, W: Write>(&self, prompt: &mut P, out: &mut W) -> Result<Report> {
        prompt.announce(WELCOME)?;

        let reading = InputCollector::new(prompt).collect()?;
        let report = self.assess(&reading);

        self.renderer.render(&report, out)?;
        out.flush()?;

        Ok(report)
    }
}

impl Default for HealthAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
