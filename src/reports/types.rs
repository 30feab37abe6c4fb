//! Report type definitions.

use crate::quality::{Issue, ScoreReport, Severity};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Markdown for pull requests and wikis
    #[value(alias = "md")]
    Markdown,
    /// Self-contained HTML page
    Html,
    /// SARIF 2.1.0 for CI/CD code scanning
    Sarif,
}

impl ReportFormat {
    /// Conventional file extension
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Summary => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Sarif => "sarif",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
            Self::Sarif => write!(f, "sarif"),
        }
    }
}

/// Rendering options.
///
/// Filtering here only changes what is shown; the score is never affected.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Report title; reporters fall back to the API title
    pub title: Option<String>,
    /// Where the document came from (path or URL)
    pub source: Option<String>,
    /// Maximum number of issues listed
    pub max_issues: Option<usize>,
    /// Hide issues below this severity
    pub min_severity: Option<Severity>,
}

impl ReportConfig {
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    #[must_use]
    pub const fn with_max_issues(mut self, max: usize) -> Self {
        self.max_issues = Some(max);
        self
    }

    /// Whether an issue passes the severity filter
    #[must_use]
    pub fn includes(&self, issue: &Issue) -> bool {
        self.min_severity.map_or(true, |min| issue.severity >= min)
    }

    /// Issues to render, in evaluation order, after filtering and truncation
    #[must_use]
    pub fn visible_issues<'a>(&self, report: &'a ScoreReport) -> Vec<&'a Issue> {
        let filtered = report.issues().filter(|i| self.includes(i));
        match self.max_issues {
            Some(max) => filtered.take(max).collect(),
            None => filtered.collect(),
        }
    }

    /// Title to display
    #[must_use]
    pub fn display_title(&self, report: &ScoreReport) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None if report.spec_info.title.is_empty() => "API Quality Report".to_string(),
            None => format!("{} Quality Report", report.spec_info.title),
        }
    }
}
