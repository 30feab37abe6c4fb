//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::ScoreReport;
use serde_json::json;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty-print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (pretty-printed)
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError> {
        let output = json!({
            "tool": {
                "name": "api-scorer",
                "version": env!("CARGO_PKG_VERSION"),
            },
            "source": config.source,
            "report": report,
        });

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_json_contains_full_report() {
        let report = sample_report();
        let config = ReportConfig::default().with_source("pets.yaml");
        let output = JsonReporter::new().generate(&report, &config).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["tool"]["name"], "api-scorer");
        assert_eq!(value["source"], "pets.yaml");
        assert_eq!(value["report"]["totalIssues"], report.total_issues);
        assert_eq!(value["report"]["results"].as_array().map(Vec::len), Some(7));
    }

    #[test]
    fn test_compact_is_single_line() {
        let output = JsonReporter::new()
            .compact()
            .generate(&sample_report(), &ReportConfig::default())
            .expect("renders");
        assert!(!output.contains('\n'));
    }
}
