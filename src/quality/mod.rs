//! API description quality scoring.
//!
//! Seven criteria are evaluated independently, each with a point budget
//! (its weight). Every detected defect is an [`Issue`] whose severity
//! deducts a fixed penalty from the budget:
//!
//! | Severity | Penalty |
//! |----------|---------|
//! | critical | 5 |
//! | high     | 3 |
//! | medium   | 2 |
//! | low      | 1 |
//!
//! Criterion scores floor at zero. The overall score is the sum of the
//! criterion scores, so with the default weights it lies in 0-100.
//!
//! # Usage
//!
//! ```no_run
//! use api_scorer::quality::ApiScorer;
//! use api_scorer::parsers::load_document;
//! use std::path::Path;
//!
//! let doc = load_document(Path::new("openapi.yaml")).unwrap();
//! let report = ApiScorer::new().score(&doc);
//!
//! println!("Overall score: {}/100 ({})", report.overall_score, report.grade);
//! for issue in report.issues() {
//!     println!("- [{}] {}: {}", issue.severity, issue.target(), issue.description);
//! }
//! ```

mod issue;
pub mod rules;
mod scorer;

pub use issue::{Criterion, CriterionResult, Issue, IssueSummary, Severity};
pub use rules::Rule;
pub use scorer::{
    round2, ApiScorer, CriterionWeights, Grade, ScoreReport, SpecInfo, SCORING_ENGINE_VERSION,
};
