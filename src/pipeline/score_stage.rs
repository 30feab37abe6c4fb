//! Scoring and quality gate stage.

use crate::model::Document;
use crate::quality::{ApiScorer, CriterionWeights, Grade, ScoreReport};

/// Result of checking a report against the configured quality gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdOutcome {
    /// All gates passed (or none configured)
    Passed,
    /// Overall score below the minimum
    ScoreBelowMinimum,
    /// Grade worse than the minimum
    GradeBelowMinimum,
}

impl ThresholdOutcome {
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Score a document with the given weights
pub fn score_document(doc: &Document, weights: CriterionWeights, quiet: bool) -> ScoreReport {
    let report = ApiScorer::with_weights(weights).score(doc);

    if !quiet {
        tracing::info!(
            "Score {:.2}/{:.0}, grade {} ({} issues)",
            report.overall_score,
            report.max_score(),
            report.grade,
            report.total_issues
        );
    }

    report
}

/// Check a report against minimum score and grade gates.
///
/// The score gate is checked first; failures are logged.
pub fn check_thresholds(
    report: &ScoreReport,
    min_score: Option<f64>,
    min_grade: Option<Grade>,
) -> ThresholdOutcome {
    if let Some(min) = min_score {
        if !report.passes(min) {
            tracing::error!(
                "Score {:.2} is below the minimum of {:.2}",
                report.overall_score,
                min
            );
            return ThresholdOutcome::ScoreBelowMinimum;
        }
    }

    if let Some(min) = min_grade {
        if !report.grade.at_least(min) {
            tracing::error!("Grade {} is below the minimum of {}", report.grade, min);
            return ThresholdOutcome::GradeBelowMinimum;
        }
    }

    ThresholdOutcome::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreReport {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "2.0.0"},
            "paths": {}
        }))
        .unwrap();
        score_document(&doc, CriterionWeights::default(), true)
    }

    #[test]
    fn test_no_gates_pass() {
        assert!(check_thresholds(&sample(), None, None).passed());
    }

    #[test]
    fn test_score_gate() {
        let report = sample();
        let floor = report.overall_score;
        assert_eq!(
            check_thresholds(&report, Some(floor), None),
            ThresholdOutcome::Passed
        );
        assert_eq!(
            check_thresholds(&report, Some(floor + 0.01), None),
            ThresholdOutcome::ScoreBelowMinimum
        );
    }

    #[test]
    fn test_grade_gate() {
        let report = sample();
        assert_eq!(
            check_thresholds(&report, None, Some(Grade::F)),
            ThresholdOutcome::Passed
        );
        if report.grade != Grade::A {
            assert_eq!(
                check_thresholds(&report, None, Some(Grade::A)),
                ThresholdOutcome::GradeBelowMinimum
            );
        }
    }
}
