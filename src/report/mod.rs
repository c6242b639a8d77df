//! Report rendering
//!
//! Formats the analysis and recommendations as the plain-text results block
//! or as JSON.

use crate::errors::Result;
use crate::types::Analysis;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const WELCOME: &str = "Welcome to Smart Health Advisor";
pub const DISCLAIMER: &str =
    "Disclaimer: This is preliminary advice. Please consult a healthcare professional.";

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything shown at the end of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub analysis: Analysis,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(analysis: Analysis, recommendations: Vec<String>, show_disclaimer: bool) -> Self {
        Self {
            analysis,
            recommendations,
            disclaimer: show_disclaimer.then(|| DISCLAIMER.to_string()),
            generated_at: Utc::now(),
        }
    }
}

/// Writes reports in the chosen format
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    format: ReportFormat,
    color: bool,
}

impl ReportRenderer {
    pub fn new(format: ReportFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render in the configured format
    pub fn render<W: Write>(&self, report: &Report, out: &mut W) -> Result<()> {
        match self.format {
            ReportFormat::Text => self.render_text(report, out),
            ReportFormat::Json => self.render_json(report, out),
        }
    }

    /// Plain-text results block
    pub fn render_text<W: Write>(&self, report: &Report, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.heading("--- Health Analysis Results ---"))?;
        writeln!(out, "{}", self.heading("Symptom Analysis:"))?;
        for (label, value) in report.analysis.entries() {
            writeln!(out, "{}: {}", label, self.value(value))?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.heading("Recommendations:"))?;
        for rec in &report.recommendations {
            writeln!(out, "- {}", rec)?;
        }

        if let Some(disclaimer) = &report.disclaimer {
            writeln!(out)?;
            writeln!(out, "{}", self.dim(disclaimer))?;
        }

        Ok(())
    }

    /// Pretty JSON
    pub fn render_json<W: Write>(&self, report: &Report, out: &mut W) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match text {
            "Normal" | "No Significant Symptoms" => text.green().to_string(),
            "Mild" | "Low" | "Below Normal" => text.yellow().to_string(),
            _ => text.red().bold().to_string(),
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
