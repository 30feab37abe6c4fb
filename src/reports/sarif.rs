//! SARIF 2.1.0 report generator for CI/CD integration.
//!
//! Each criterion becomes one rule; each visible issue becomes one result
//! pointing at the scored document, with a logical location naming the
//! offending element.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::quality::{Criterion, Issue, ScoreReport, Severity};
use serde::Serialize;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF report generator
pub struct SarifReporter {
    /// Emit rules for criteria that produced no results
    include_all_rules: bool,
}

impl SarifReporter {
    /// Create a new SARIF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_all_rules: true,
        }
    }

    /// Only describe rules that produced at least one result
    #[must_use]
    pub const fn only_triggered_rules(mut self) -> Self {
        self.include_all_rules = false;
        self
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SarifReporter {
    fn generate(&self, report: &ScoreReport, config: &ReportConfig) -> Result<String, ReportError> {
        let visible = config.visible_issues(report);
        let uri = config.source.as_deref();

        let results = visible
            .iter()
            .map(|issue| sarif_result(issue, uri))
            .collect();

        let rules = Criterion::ALL
            .iter()
            .filter(|c| self.include_all_rules || visible.iter().any(|i| i.criterion == **c))
            .map(|c| sarif_rule(*c))
            .collect();

        let sarif = SarifReport {
            schema: SARIF_SCHEMA.to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "api-scorer".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: option_env!("CARGO_PKG_REPOSITORY")
                            .filter(|uri| !uri.is_empty())
                            .map(str::to_string),
                        rules,
                    },
                },
                results,
                properties: RunProperties {
                    overall_score: report.overall_score,
                    grade: report.grade.letter().to_string(),
                    engine_version: report.engine_version.clone(),
                },
            }],
        };

        serde_json::to_string_pretty(&sarif)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Sarif
    }
}

const fn severity_to_level(severity: Severity) -> SarifLevel {
    match severity {
        Severity::Critical | Severity::High => SarifLevel::Error,
        Severity::Medium => SarifLevel::Warning,
        Severity::Low => SarifLevel::Note,
    }
}

fn sarif_rule(criterion: Criterion) -> SarifRule {
    SarifRule {
        id: criterion.rule_id().to_string(),
        name: criterion.key().to_string(),
        short_description: SarifMessage {
            text: format!("{} quality check", criterion.name()),
        },
        default_configuration: SarifConfiguration {
            level: SarifLevel::Warning,
        },
    }
}

/// Dotted path to the element an issue is about.
fn qualified_name(issue: &Issue) -> String {
    match (&issue.path, issue.method) {
        (Some(path), Some(method)) => {
            format!("paths.{path}.{}.{}", method.as_str(), issue.location)
        }
        (Some(path), None) if issue.location != "paths" => format!("paths.{path}"),
        _ => issue.location.clone(),
    }
}

fn sarif_result(issue: &Issue, uri: Option<&str>) -> SarifResult {
    let locations = uri
        .map(|uri| SarifLocation {
            physical_location: Some(SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: uri.to_string(),
                },
            }),
            logical_locations: vec![SarifLogicalLocation {
                fully_qualified_name: qualified_name(issue),
            }],
        })
        .into_iter()
        .collect();

    SarifResult {
        rule_id: issue.criterion.rule_id().to_string(),
        level: severity_to_level(issue.severity),
        message: SarifMessage {
            text: format!("{}: {}", issue.target(), issue.description),
        },
        locations,
        properties: ResultProperties {
            severity: issue.severity,
            remediation: issue.remediation.clone(),
        },
    }
}

// SARIF structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
    properties: RunProperties,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunProperties {
    overall_score: f64,
    grade: String,
    engine_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    information_uri: Option<String>,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifConfiguration {
    level: SarifLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    properties: ResultProperties,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultProperties {
    severity: Severity,
    remediation: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: Option<SarifPhysicalLocation>,
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLogicalLocation {
    fully_qualified_name: String,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Note,
    Warning,
    Error,
}
