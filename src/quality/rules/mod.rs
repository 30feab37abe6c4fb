//! Per-criterion detection rules.
//!
//! Each rule walks the part of the document it cares about and pushes
//! [`Issue`]s; the default [`Rule::evaluate`] turns those into a
//! [`CriterionResult`] by deducting severity penalties from the weight.
//! Rules never fail: absent optional fields are reported as missing.

mod best_practices;
mod documentation;
mod examples;
mod paths;
mod responses;
mod schema_types;
mod security;

pub use best_practices::BestPracticesRule;
pub use documentation::DocumentationRule;
pub use examples::ExamplesRule;
pub use paths::{paths_overlap, resource_name, PathsOperationsRule};
pub use responses::ResponseCodesRule;
pub use schema_types::SchemaTypesRule;
pub use security::SecurityRule;

use super::{Criterion, CriterionResult, Issue};
use crate::model::Document;

/// A quality criterion evaluator
pub trait Rule: Send + Sync {
    /// The criterion this rule scores
    fn criterion(&self) -> Criterion;

    /// Collect issues for the document
    fn check(&self, doc: &Document, issues: &mut Vec<Issue>);

    /// Score the document out of `weight` points
    fn evaluate(&self, doc: &Document, weight: f64) -> CriterionResult {
        let mut issues = Vec::new();
        self.check(doc, &mut issues);
        CriterionResult::from_issues(self.criterion(), weight, issues)
    }
}

/// The built-in rules, in evaluation order
pub const RULES: [&dyn Rule; 7] = [
    &SchemaTypesRule,
    &DocumentationRule,
    &PathsOperationsRule,
    &ResponseCodesRule,
    &ExamplesRule,
    &SecurityRule,
    &BestPracticesRule,
];

#[cfg(test)]
pub(crate) fn doc_from(value: serde_json::Value) -> Document {
    serde_json::from_value(value).expect("valid document")
}

#[cfg(test)]
pub(crate) fn check_rule(rule: &dyn Rule, value: serde_json::Value) -> Vec<Issue> {
    let mut issues = Vec::new();
    rule.check(&doc_from(value), &mut issues);
    issues
}
