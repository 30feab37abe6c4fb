//! Document loading and validation stages.

use super::PipelineError;
use crate::model::Document;
use crate::validation::{validate_document, ValidationResult, ValidationSeverity};
use anyhow::Result;
use std::time::Duration;

/// A loaded document together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// The parsed document
    pub document: Document,
    /// Path or URL it was loaded from
    pub source: String,
}

impl LoadedDocument {
    #[must_use]
    pub fn new(document: Document, source: impl Into<String>) -> Self {
        Self {
            document,
            source: source.into(),
        }
    }

    /// Get a reference to the document
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Consume and return the inner document
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Load a document from a path or URL with context for error messages
pub fn load_document_with_context(
    source: &str,
    timeout: Duration,
    quiet: bool,
) -> Result<LoadedDocument> {
    if !quiet {
        tracing::info!("Loading API description: {source}");
    }

    let document =
        crate::parsers::load_source(source, timeout).map_err(|e| PipelineError::LoadFailed {
            source_name: source.to_string(),
            source: e.into(),
        })?;

    if !quiet {
        tracing::info!(
            path_count = document.path_count(),
            operation_count = document.operation_count(),
            "Loaded '{}' {}",
            document.info.title,
            document.info.version
        );
    }

    Ok(LoadedDocument::new(document, source))
}

/// Run structural validation, logging every finding.
///
/// Returns the validation result; when `fail_on_errors` is set and errors
/// were found, a [`PipelineError::ValidationFailed`] is returned instead.
pub fn validate_loaded(loaded: &LoadedDocument, fail_on_errors: bool) -> Result<ValidationResult> {
    let result = validate_document(&loaded.document);

    for issue in &result.issues {
        match issue.severity {
            ValidationSeverity::Error => {
                tracing::error!("{}: {}", issue.location, issue.message);
            }
            ValidationSeverity::Warning => {
                tracing::warn!("{}: {}", issue.location, issue.message);
            }
        }
    }

    if fail_on_errors && !result.is_valid() {
        return Err(PipelineError::ValidationFailed {
            source_name: loaded.source.clone(),
            errors: result.error_count,
        }
        .into());
    }

    Ok(result)
}
