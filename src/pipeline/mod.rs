//! Pipeline orchestration for scoring runs.
//!
//! This module provides the shared load → validate → score → report stages
//! used by the CLI command handlers.

mod output;
mod parse;
mod report_stage;
mod score_stage;

pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{load_document_with_context, validate_loaded, LoadedDocument};
pub use report_stage::{output_report, render_report};
pub use score_stage::{check_thresholds, score_document, ThresholdOutcome};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read, fetch or parse a document
    #[error("Load failed for {source_name}: {source}")]
    LoadFailed {
        source_name: String,
        source: anyhow::Error,
    },

    /// Structural validation found errors
    #[error("Validation failed for {source_name}: {errors} error(s)")]
    ValidationFailed { source_name: String, errors: usize },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// Exit code for this failure
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => exit_codes::VALIDATION_FAILED,
            Self::LoadFailed { .. } | Self::ReportFailed { .. } => exit_codes::ERROR,
        }
    }
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - all quality gates passed
    pub const SUCCESS: i32 = 0;
    /// Score or grade below the configured minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Structural validation failed
    pub const VALIDATION_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
