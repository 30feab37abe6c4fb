//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::error::ErrorContext;
use crate::quality::ScoreReport;
use crate::reports::{create_reporter, ReportConfig, ReportFormat, ReportGenerator};
use anyhow::Result;
use std::path::PathBuf;

/// Render a report in the requested format.
pub fn render_report(
    report: &ScoreReport,
    format: ReportFormat,
    config: &ReportConfig,
    use_color: bool,
) -> crate::error::Result<String> {
    render_with(create_reporter(format, use_color).as_ref(), report, config)
}

fn render_with(
    reporter: &dyn ReportGenerator,
    report: &ScoreReport,
    config: &ReportConfig,
) -> crate::error::Result<String> {
    reporter
        .generate(report, config)
        .with_context(|| format!("rendering {} report", reporter.format()))
}

/// Render a report and write it to stdout or `file`.
pub fn output_report(
    report: &ScoreReport,
    format: ReportFormat,
    config: &ReportConfig,
    file: Option<PathBuf>,
    no_color: bool,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(file);
    let use_color = should_use_color(no_color, &target);

    tracing::debug!(%format, use_color, "Rendering report");
    let rendered = render_report(report, format, config, use_color)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&rendered, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReportErrorKind, ScorerError};
    use crate::model::Document;
    use crate::reports::ReportError;
    use crate::quality::ApiScorer;

    fn report() -> ScoreReport {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "openapi": "3.1.0",
            "info": {"title": "Orders", "version": "2.1.0"},
            "paths": {"/orders": {"get": {"responses": {"200": {"description": "ok"}}}}}
        }))
        .unwrap();
        ApiScorer::new().score(&doc)
    }

    #[test]
    fn test_render_each_format() {
        let report = report();
        let config = ReportConfig::default().with_source("orders.yaml");
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Html,
            ReportFormat::Sarif,
        ] {
            let rendered = render_report(&report, format, &config, false).unwrap();
            assert!(!rendered.is_empty(), "{format} rendered nothing");
        }
    }

    struct BrokenReporter;

    impl ReportGenerator for BrokenReporter {
        fn generate(
            &self,
            _report: &ScoreReport,
            _config: &ReportConfig,
        ) -> std::result::Result<String, ReportError> {
            Err(ReportError::SerializationError("bad float".to_string()))
        }

        fn format(&self) -> ReportFormat {
            ReportFormat::Json
        }
    }

    #[test]
    fn test_render_failure_is_report_error() {
        let err = render_with(&BrokenReporter, &report(), &ReportConfig::default()).unwrap_err();
        match err {
            ScorerError::Report {
                context,
                source: ReportErrorKind::JsonSerializationError(msg),
            } => {
                assert_eq!(context, "rendering json report");
                assert_eq!(msg, "bad float");
            }
            other => panic!("Expected Report error, got {other:?}"),
        }
    }

    #[test]
    fn test_output_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        output_report(
            &report(),
            ReportFormat::Json,
            &ReportConfig::default(),
            Some(path.clone()),
            true,
            true,
        )
        .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["report"]["specInfo"]["title"], "Orders");
    }
}
