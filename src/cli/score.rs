//! Score command handler.
//!
//! Implements the `score` subcommand: load, validate, score, render and
//! apply the quality gates.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{
    check_thresholds, exit_codes, load_document_with_context, output_report, score_document,
    validate_loaded,
};
use crate::quality::{Grade, Severity};
use crate::reports::ReportConfig;
use anyhow::{bail, Result};
use std::time::Duration;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Path or URL of the document
    pub source: String,
    /// Merged file and CLI configuration
    pub app: AppConfig,
    /// Hide issues below this severity in the rendered report
    pub min_severity: Option<Severity>,
    /// Maximum number of issues listed
    pub max_issues: Option<usize>,
    /// Report title override
    pub title: Option<String>,
    /// Timeout for remote documents
    pub timeout: Duration,
}

impl ScoreConfig {
    #[must_use]
    pub fn new(source: impl Into<String>, app: AppConfig) -> Self {
        Self {
            source: source.into(),
            app,
            min_severity: None,
            max_issues: None,
            title: None,
            timeout: crate::parsers::DEFAULT_FETCH_TIMEOUT,
        }
    }

    fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::default().with_source(self.source.clone());
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(max) = self.max_issues {
            config = config.with_max_issues(max);
        }
        if let Some(severity) = self.min_severity {
            config = config.with_min_severity(severity);
        }
        config
    }

    fn min_grade(&self) -> Result<Option<Grade>> {
        match &self.app.behavior.min_grade {
            None => Ok(None),
            Some(letter) => match Grade::parse(letter) {
                Some(grade) => Ok(Some(grade)),
                None => bail!("Invalid minimum grade '{letter}'. Valid options: A, B, C, D, F"),
            },
        }
    }
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let quiet = config.app.behavior.quiet;

    for problem in config.app.validate() {
        tracing::warn!("Configuration: {problem}");
    }
    let min_grade = config.min_grade()?;

    let loaded = load_document_with_context(&config.source, config.timeout, quiet)?;

    if config.app.behavior.skip_validation {
        tracing::debug!("Skipping structural validation");
    } else {
        let validation = validate_loaded(&loaded, false)?;
        if !validation.is_valid() {
            tracing::error!(
                "{} has {} structural error(s); use --skip-validation to score anyway",
                loaded.source,
                validation.error_count
            );
            return Ok(exit_codes::VALIDATION_FAILED);
        }
    }

    let report = score_document(&loaded.document, config.app.criterion_weights(), quiet);

    output_report(
        &report,
        config.app.output.format,
        &config.report_config(),
        config.app.output.file.clone(),
        config.app.output.no_color,
        quiet,
    )?;

    let outcome = check_thresholds(&report, config.app.behavior.min_score, min_grade);
    Ok(if outcome.passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::BELOW_THRESHOLD
    })
}
