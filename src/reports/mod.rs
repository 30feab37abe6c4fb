//! Report generation for score results.
//!
//! This module renders a [`ScoreReport`] in several formats:
//! - Summary: compact terminal output, optionally coloured
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation and pull request comments
//! - HTML: self-contained page for stakeholders
//! - SARIF: CI/CD code scanning dashboards
//!
//! # Security
//!
//! Text taken from the scored document (titles, descriptions, paths) is
//! untrusted and goes through [`escape`] before being embedded in HTML or
//! Markdown.

pub mod escape;
mod html;
mod json;
mod markdown;
mod sarif;
mod summary;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use sarif::SarifReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::quality::ScoreReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a score report
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError>;

    /// Render a score report into a writer
    fn write_report(
        &self,
        report: &ScoreReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Sarif => Box::new(SarifReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::Document;
    use crate::quality::{ApiScorer, ScoreReport};

    /// A small document with a handful of issues across criteria.
    pub fn sample_report() -> ScoreReport {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "openapi": "3.0.3",
            "info": {"title": "Pets <API>", "version": "1.0.0"},
            "paths": {
                "/pets": {"get": {"summary": "List pets", "responses": {"200": {"description": "ok"}}}},
                "/pet_tags/": {"post": {"responses": {"202": {}}}}
            }
        }))
        .expect("valid document");
        ApiScorer::new().score(&doc)
    }
}
