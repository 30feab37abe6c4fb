//! Validate command handler.
//!
//! Implements the `validate` subcommand for checking the structure of an API
//! description without scoring it.

use crate::pipeline::{exit_codes, load_document_with_context, write_output, OutputTarget};
use crate::reports::ReportFormat;
use crate::validation::{validate_document, ValidationResult};
use anyhow::Result;
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

/// Run the validate command, returning the desired exit code.
pub fn run_validate(
    source: &str,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    timeout: Duration,
    quiet: bool,
) -> Result<i32> {
    let loaded = load_document_with_context(source, timeout, quiet)?;
    let result = validate_document(&loaded.document);

    let rendered = match output {
        ReportFormat::Json => format_validation_json(source, &result)?,
        _ => format_validation_text(source, &result),
    };
    write_output(&rendered, &OutputTarget::from_option(output_file), quiet)?;

    if result.is_valid() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VALIDATION_FAILED)
    }
}

fn format_validation_json(source: &str, result: &ValidationResult) -> Result<String> {
    let output = json!({
        "tool": "api-scorer",
        "version": env!("CARGO_PKG_VERSION"),
        "source": source,
        "valid": result.is_valid(),
        "result": result,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn format_validation_text(source: &str, result: &ValidationResult) -> String {
    let mut out = String::new();
    let status = if result.is_valid() { "valid" } else { "invalid" };
    let _ = writeln!(
        out,
        "{source}: {status} ({} error(s), {} warning(s))",
        result.error_count, result.warning_count
    );
    for issue in &result.issues {
        let _ = writeln!(
            out,
            "  {:<8} {}: {}",
            issue.severity.to_string(),
            issue.location,
            issue.message
        );
    }
    out
}
