//! Issues, severities and per-criterion results.

use crate::model::HttpMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Points deducted from the owning criterion's budget
    #[must_use]
    pub const fn penalty(self) -> u32 {
        match self {
            Self::Critical => 5,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parse a severity name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality criteria in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    SchemaTypes,
    Documentation,
    PathsOperations,
    ResponseCodes,
    Examples,
    Security,
    BestPractices,
}

impl Criterion {
    /// All criteria in the fixed evaluation order
    pub const ALL: [Self; 7] = [
        Self::SchemaTypes,
        Self::Documentation,
        Self::PathsOperations,
        Self::ResponseCodes,
        Self::Examples,
        Self::Security,
        Self::BestPractices,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SchemaTypes => "Schema & Types",
            Self::Documentation => "Documentation",
            Self::PathsOperations => "Paths & Operations",
            Self::ResponseCodes => "Response Codes",
            Self::Examples => "Examples",
            Self::Security => "Security",
            Self::BestPractices => "Best Practices",
        }
    }

    /// Configuration key (matches the `weights` section of the config file)
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::SchemaTypes => "schemaTypes",
            Self::Documentation => "documentation",
            Self::PathsOperations => "pathsOperations",
            Self::ResponseCodes => "responseCodes",
            Self::Examples => "examples",
            Self::Security => "security",
            Self::BestPractices => "bestPractices",
        }
    }

    /// Stable rule identifier used by SARIF output
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        match self {
            Self::SchemaTypes => "API-SCHEMA-001",
            Self::Documentation => "API-DOCS-001",
            Self::PathsOperations => "API-PATHS-001",
            Self::ResponseCodes => "API-RESP-001",
            Self::Examples => "API-EXAMPLES-001",
            Self::Security => "API-SEC-001",
            Self::BestPractices => "API-PRACTICE-001",
        }
    }

    /// Default point budget; the defaults sum to 100
    #[must_use]
    pub const fn default_weight(&self) -> f64 {
        match self {
            Self::SchemaTypes | Self::Documentation => 20.0,
            Self::PathsOperations | Self::ResponseCodes => 15.0,
            Self::Examples | Self::Security | Self::BestPractices => 10.0,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single detected defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Resource path, `None` for document-level issues
    pub path: Option<String>,
    /// Operation method, when the issue belongs to one operation
    pub method: Option<HttpMethod>,
    /// Location within the document or operation (e.g. `info.description`)
    pub location: String,
    pub description: String,
    pub severity: Severity,
    /// Suggested fix
    pub remediation: String,
    pub criterion: Criterion,
}

impl Issue {
    /// Create a document-level issue.
    pub fn new(
        criterion: Criterion,
        severity: Severity,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: None,
            method: None,
            location: location.into(),
            description: description.into(),
            severity,
            remediation: String::new(),
            criterion,
        }
    }

    /// Attach the resource path.
    #[must_use]
    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the resource path and operation method.
    #[must_use]
    pub fn at_operation(mut self, path: impl Into<String>, method: HttpMethod) -> Self {
        self.path = Some(path.into());
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = remediation.into();
        self
    }

    /// Short `METHOD /path` or `/path` label, falling back to the location.
    #[must_use]
    pub fn target(&self) -> String {
        match (&self.path, self.method) {
            (Some(path), Some(method)) => format!("{method} {path}"),
            (Some(path), None) => path.clone(),
            (None, _) => self.location.clone(),
        }
    }
}

/// Result of evaluating one criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    pub criterion: Criterion,
    /// Points left after deductions
    pub score: f64,
    /// Point budget; equals the configured weight
    pub max_score: f64,
    pub weight: f64,
    /// Contribution to the overall score
    pub weighted_score: f64,
    pub issues: Vec<Issue>,
}

impl CriterionResult {
    /// Deduct each issue's penalty from the weight, flooring at zero.
    #[must_use]
    pub fn from_issues(criterion: Criterion, weight: f64, issues: Vec<Issue>) -> Self {
        let deduction: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
        let score = (weight - f64::from(deduction)).max(0.0);
        Self {
            criterion,
            score,
            max_score: weight,
            weight,
            weighted_score: score,
            issues,
        }
    }

    /// A result whose score is zero regardless of the issue list.
    #[must_use]
    pub fn zeroed(criterion: Criterion, weight: f64, issues: Vec<Issue>) -> Self {
        Self {
            criterion,
            score: 0.0,
            max_score: weight,
            weight,
            weighted_score: 0.0,
            issues,
        }
    }

    /// Points lost to deductions
    #[must_use]
    pub fn deduction(&self) -> f64 {
        (self.max_score - self.score).max(0.0)
    }

    /// Score as a percentage of the budget (0 for non-positive budgets)
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score * 100.0
        } else {
            0.0
        }
    }
}

/// Issue counts bucketed by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub critical_issues: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
}

impl IssueSummary {
    /// Tally a set of issues.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => summary.critical_issues += 1,
                Severity::High => summary.high_issues += 1,
                Severity::Medium => summary.medium_issues += 1,
                Severity::Low => summary.low_issues += 1,
            }
        }
        summary
    }

    #[must_use]
    pub const fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_issues,
            Severity::High => self.high_issues,
            Severity::Medium => self.medium_issues,
            Severity::Low => self.low_issues,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical_issues + self.high_issues + self.medium_issues + self.low_issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> Issue {
        Issue::new(Criterion::Security, severity, "security", "test")
    }

    #[test]
    fn test_penalties() {
        assert_eq!(Severity::Critical.penalty(), 5);
        assert_eq!(Severity::High.penalty(), 3);
        assert_eq!(Severity::Medium.penalty(), 2);
        assert_eq!(Severity::Low.penalty(), 1);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!(Severity::parse("HIGH"), Some(Severity::High));
        assert_eq!(Severity::parse("urgent"), None);
    }

    #[test]
    fn test_severity_parse_accepts_only_the_four_names() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::parse(" Medium "), Some(Severity::Medium));
        assert_eq!(Severity::parse("moderate"), None);
        assert_eq!(Severity::parse("info"), None);
    }

    #[test]
    fn test_default_weights_sum_to_100() {
        let total: f64 = Criterion::ALL.iter().map(Criterion::default_weight).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_issues_deducts() {
        let result = CriterionResult::from_issues(
            Criterion::Security,
            10.0,
            vec![issue(Severity::High), issue(Severity::Medium), issue(Severity::Medium)],
        );
        assert!((result.score - 3.0).abs() < f64::EPSILON);
        assert!((result.weighted_score - 3.0).abs() < f64::EPSILON);
        assert!((result.max_score - 10.0).abs() < f64::EPSILON);
        assert!((result.deduction() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_issues_floors_at_zero() {
        let issues = vec![issue(Severity::Critical); 5];
        let result = CriterionResult::from_issues(Criterion::Security, 10.0, issues);
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.issues.len(), 5);
    }

    #[test]
    fn test_negative_weight_floors_at_zero() {
        let result = CriterionResult::from_issues(Criterion::Security, -5.0, Vec::new());
        assert!(result.score.abs() < f64::EPSILON);
        assert!(result.percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_counts() {
        let issues = [
            issue(Severity::Critical),
            issue(Severity::Low),
            issue(Severity::Low),
        ];
        let summary = IssueSummary::from_issues(&issues);
        assert_eq!(summary.critical_issues, 1);
        assert_eq!(summary.low_issues, 2);
        assert_eq!(summary.count(Severity::High), 0);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_issue_target() {
        let i = issue(Severity::Low).at_operation("/users", HttpMethod::Get);
        assert_eq!(i.target(), "GET /users");
        let i = issue(Severity::Low).at_path("/users");
        assert_eq!(i.target(), "/users");
        assert_eq!(issue(Severity::Low).target(), "security");
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_value(issue(Severity::Medium)).expect("serializable");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["criterion"], "security");
        let json = serde_json::to_value(IssueSummary::default()).expect("serializable");
        assert!(json.get("criticalIssues").is_some());
    }
}
