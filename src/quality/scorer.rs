//! Weighted aggregation of the criterion rules into a graded report.

use super::rules::RULES;
use super::{Criterion, CriterionResult, Issue, IssueSummary, Severity};
use crate::model::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scoring engine version, included in every report.
///
/// Bump when a rule or deduction changes so scores from different releases
/// are not compared blindly.
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Point budget per criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionWeights {
    pub schema_types: f64,
    pub documentation: f64,
    pub paths_operations: f64,
    pub response_codes: f64,
    pub examples: f64,
    pub security: f64,
    pub best_practices: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            schema_types: Criterion::SchemaTypes.default_weight(),
            documentation: Criterion::Documentation.default_weight(),
            paths_operations: Criterion::PathsOperations.default_weight(),
            response_codes: Criterion::ResponseCodes.default_weight(),
            examples: Criterion::Examples.default_weight(),
            security: Criterion::Security.default_weight(),
            best_practices: Criterion::BestPractices.default_weight(),
        }
    }
}

impl CriterionWeights {
    /// Weight for one criterion
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::SchemaTypes => self.schema_types,
            Criterion::Documentation => self.documentation,
            Criterion::PathsOperations => self.paths_operations,
            Criterion::ResponseCodes => self.response_codes,
            Criterion::Examples => self.examples,
            Criterion::Security => self.security,
            Criterion::BestPractices => self.best_practices,
        }
    }

    /// Override one weight
    #[must_use]
    pub const fn with(mut self, criterion: Criterion, weight: f64) -> Self {
        match criterion {
            Criterion::SchemaTypes => self.schema_types = weight,
            Criterion::Documentation => self.documentation = weight,
            Criterion::PathsOperations => self.paths_operations = weight,
            Criterion::ResponseCodes => self.response_codes = weight,
            Criterion::Examples => self.examples = weight,
            Criterion::Security => self.security = weight,
            Criterion::BestPractices => self.best_practices = weight,
        }
        self
    }

    /// Theoretical maximum score; 100 for the defaults
    #[must_use]
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Letter grade derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellent: 90 and above
    A,
    /// Good: 80 to below 90
    B,
    /// Fair: 70 to below 80
    C,
    /// Poor: 60 to below 70
    D,
    /// Failing: below 60
    F,
}

impl Grade {
    /// Create grade from score; lower bounds are inclusive
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get grade description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }

    /// Parse a grade letter (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    /// Whether this grade is at least as good as `other`
    #[must_use]
    pub fn at_least(self, other: Self) -> bool {
        self <= other
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

/// Facts about the scored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecInfo {
    pub title: String,
    pub version: String,
    pub path_count: usize,
    pub operation_count: usize,
}

impl SpecInfo {
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        Self {
            title: doc.info.title.clone(),
            version: doc.info.version.clone(),
            path_count: doc.path_count(),
            operation_count: doc.operation_count(),
        }
    }
}

/// Complete score report for an API description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct ScoreReport {
    /// Sum of the weighted criterion scores, rounded to two decimals
    pub overall_score: f64,
    pub grade: Grade,
    /// One entry per criterion, in evaluation order
    pub results: Vec<CriterionResult>,
    pub total_issues: usize,
    pub summary: IssueSummary,
    pub generated_at: DateTime<Utc>,
    pub spec_info: SpecInfo,
    pub engine_version: String,
    /// Weights the report was computed with
    pub weights: CriterionWeights,
}

impl ScoreReport {
    /// Result for one criterion
    #[must_use]
    pub fn result(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.criterion == criterion)
    }

    /// All issues in evaluation order
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.results.iter().flat_map(|r| r.issues.iter())
    }

    /// Issues with exactly the given severity
    #[must_use]
    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues().filter(|i| i.severity == severity).collect()
    }

    /// Issues owned by one criterion
    #[must_use]
    pub fn issues_by_criterion(&self, criterion: Criterion) -> Vec<&Issue> {
        self.result(criterion)
            .map(|r| r.issues.iter().collect())
            .unwrap_or_default()
    }

    /// Whether the overall score reaches `min_score`
    #[must_use]
    pub fn passes(&self, min_score: f64) -> bool {
        self.overall_score >= min_score
    }

    /// Theoretical maximum under the weights used
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.weights.total()
    }
}

/// Scores API descriptions against the quality criteria
#[derive(Debug, Clone, Default)]
pub struct ApiScorer {
    weights: CriterionWeights,
}

impl ApiScorer {
    /// Create a scorer with the default weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights; no renormalization is applied
    #[must_use]
    pub const fn with_weights(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &CriterionWeights {
        &self.weights
    }

    /// Score a document
    pub fn score(&self, doc: &Document) -> ScoreReport {
        let results: Vec<CriterionResult> = RULES
            .iter()
            .map(|rule| {
                let criterion = rule.criterion();
                let result = rule.evaluate(doc, self.weights.get(criterion));
                tracing::debug!(
                    criterion = criterion.name(),
                    score = result.score,
                    max = result.max_score,
                    issues = result.issues.len(),
                    "Evaluated criterion"
                );
                result
            })
            .collect();

        let overall_score = round2(results.iter().map(|r| r.weighted_score).sum());
        let grade = Grade::from_score(overall_score);
        let summary = IssueSummary::from_issues(results.iter().flat_map(|r| r.issues.iter()));
        let total_issues = summary.total();
        let spec_info = SpecInfo::from_document(doc);

        tracing::info!(
            score = overall_score,
            grade = grade.letter(),
            issues = total_issues,
            path_count = spec_info.path_count,
            operation_count = spec_info.operation_count,
            "Scored API description"
        );

        ScoreReport {
            overall_score,
            grade,
            results,
            total_issues,
            summary,
            generated_at: Utc::now(),
            spec_info,
            engine_version: SCORING_ENGINE_VERSION.to_string(),
            weights: self.weights,
        }
    }
}

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::rules::doc_from;
    use serde_json::json;

    fn well_formed() -> Document {
        doc_from(json!({
            "openapi": "3.0.3",
            "info": {"title": "Users", "version": "2.0.0", "description": "Manage users"},
            "servers": [{"url": "https://api.example.com"}],
            "security": [{"bearer": []}],
            "tags": [{"name": "users"}],
            "components": {
                "schemas": {"User": {"type": "object", "properties": {"id": {"type": "string"}}}},
                "securitySchemes": {"bearer": {"type": "http", "scheme": "bearer"}}
            },
            "paths": {
                "/users": {
                    "get": {
                        "tags": ["users"],
                        "summary": "List users",
                        "responses": {
                            "200": {"content": {"application/json": {
                                "schema": {"type": "array", "items": {"$ref": "#/components/schemas/User"}},
                                "example": [{"id": "u1"}]
                            }}},
                            "500": {"description": "error"}
                        }
                    },
                    "post": {
                        "tags": ["users"],
                        "summary": "Create a user",
                        "responses": {
                            "201": {"content": {"application/json": {
                                "schema": {"$ref": "#/components/schemas/User"},
                                "example": {"id": "u2"}
                            }}},
                            "400": {"description": "invalid"}
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100.0), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.99), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(79.99), Grade::C);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.99), Grade::F);
        assert_eq!(Grade::from_score(-1.0), Grade::F);
        assert_eq!(Grade::from_score(140.0), Grade::A);
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::A.at_least(Grade::B));
        assert!(Grade::B.at_least(Grade::B));
        assert!(!Grade::C.at_least(Grade::B));
        assert_eq!(Grade::parse("d"), Some(Grade::D));
    }

    #[test]
    fn test_well_formed_document_scores_full_marks() {
        let report = ApiScorer::new().score(&well_formed());
        assert_eq!(report.total_issues, 0, "{:?}", report.issues().collect::<Vec<_>>());
        assert!((report.overall_score - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.grade, Grade::A);
        assert_eq!(report.spec_info.path_count, 1);
        assert_eq!(report.spec_info.operation_count, 2);
        assert_eq!(report.engine_version, SCORING_ENGINE_VERSION);
    }

    #[test]
    fn test_results_in_criterion_order() {
        let report = ApiScorer::new().score(&Document::default());
        let order: Vec<Criterion> = report.results.iter().map(|r| r.criterion).collect();
        assert_eq!(order, Criterion::ALL.to_vec());
    }

    #[test]
    fn test_overall_is_sum_of_weighted_scores() {
        let report = ApiScorer::new().score(&Document::default());
        let sum: f64 = report.results.iter().map(|r| r.weighted_score).sum();
        assert!((report.overall_score - round2(sum)).abs() < f64::EPSILON);
        assert_eq!(report.total_issues, report.issues().count());
        assert_eq!(report.total_issues, report.summary.total());
    }

    #[test]
    fn test_custom_weights_not_renormalized() {
        let weights = CriterionWeights::default()
            .with(Criterion::Examples, 0.0)
            .with(Criterion::Security, 30.0);
        let scorer = ApiScorer::with_weights(weights);
        let report = scorer.score(&well_formed());
        assert!((report.overall_score - 110.0).abs() < f64::EPSILON);
        assert!((report.max_score() - 110.0).abs() < f64::EPSILON);
        let examples = report.result(Criterion::Examples).expect("examples result");
        assert!(examples.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_helpers() {
        let report = ApiScorer::new().score(&Document::default());
        let critical = report.issues_by_severity(Severity::Critical);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].criterion, Criterion::PathsOperations);
        assert_eq!(
            report.issues_by_criterion(Criterion::Security).len(),
            report.result(Criterion::Security).map_or(0, |r| r.issues.len())
        );
        assert!(report.passes(0.0));
        assert!(!report.passes(100.0));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = ApiScorer::new();
        let doc = well_formed();
        let first = scorer.score(&doc);
        let second = scorer.score(&doc);
        assert!((first.overall_score - second.overall_score).abs() < f64::EPSILON);
        assert_eq!(first.grade, second.grade);
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn test_round2() {
        assert!((round2(81.234) - 81.23).abs() < 1e-9);
        assert!((round2(81.235_1) - 81.24).abs() < 1e-9);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ApiScorer::new().score(&Document::default());
        let value = serde_json::to_value(&report).expect("serializable");
        assert!(value.get("overallScore").is_some());
        assert!(value.get("totalIssues").is_some());
        assert!(value["summary"].get("criticalIssues").is_some());
        assert_eq!(value["results"].as_array().map(Vec::len), Some(7));
    }
}
