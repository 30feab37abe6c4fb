use super::Rule;
use crate::model::{Document, Resource};
use crate::quality::{Criterion, CriterionResult, Issue, Severity};
use indexmap::IndexMap;

/// Path naming, resource completeness and routing ambiguity.
pub struct PathsOperationsRule;

fn is_parameter(segment: &str) -> bool {
    segment.starts_with('{')
}

/// The last non-parameter segment of a path, e.g. `users` for `/users/{id}`.
#[must_use]
pub fn resource_name(path: &str) -> Option<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && !is_parameter(s))
        .last()
}

/// Whether two path templates can match the same request.
///
/// Templates overlap when they have the same number of segments and every
/// position either matches textually or holds a `{...}` placeholder on at
/// least one side.
#[must_use]
pub fn paths_overlap(a: &str, b: &str) -> bool {
    let left: Vec<&str> = a.split('/').collect();
    let right: Vec<&str> = b.split('/').collect();
    left.len() == right.len()
        && left
            .iter()
            .zip(&right)
            .all(|(l, r)| l == r || is_parameter(l) || is_parameter(r))
}

impl PathsOperationsRule {
    fn check_naming(path: &str, issues: &mut Vec<Issue>) {
        if path.contains('_') {
            issues.push(
                Issue::new(
                    Criterion::PathsOperations,
                    Severity::Low,
                    "path",
                    "Path uses underscores",
                )
                .at_path(path)
                .with_remediation("Use kebab-case for path segments"),
            );
        }
        if path.len() > 1 && path.ends_with('/') {
            issues.push(
                Issue::new(
                    Criterion::PathsOperations,
                    Severity::Low,
                    "path",
                    "Path has a trailing slash",
                )
                .at_path(path)
                .with_remediation("Remove the trailing slash"),
            );
        }
    }

    fn check_crud(doc: &Document, issues: &mut Vec<Issue>) {
        let mut groups: IndexMap<&str, Vec<(&str, &Resource)>> = IndexMap::new();
        for (path, resource) in doc.paths() {
            if let Some(name) = resource_name(path) {
                groups.entry(name).or_default().push((path, resource));
            }
        }

        for (name, members) in groups {
            let [(path, resource)] = members.as_slice() else {
                continue;
            };
            let mut ops = resource.operations();
            if let (Some((method, _)), None) = (ops.next(), ops.next()) {
                issues.push(
                    Issue::new(
                        Criterion::PathsOperations,
                        Severity::Low,
                        "path",
                        format!("Resource '{name}' only supports {method}"),
                    )
                    .at_path(*path)
                    .with_remediation("Consider the remaining CRUD operations for this resource"),
                );
            }
        }
    }

    fn check_overlaps(doc: &Document, issues: &mut Vec<Issue>) {
        let paths: Vec<&str> = doc.paths().map(|(path, _)| path).collect();
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                if paths_overlap(a, b) {
                    issues.push(
                        Issue::new(
                            Criterion::PathsOperations,
                            Severity::Low,
                            "path",
                            format!("Path overlaps with '{b}'"),
                        )
                        .at_path(*a)
                        .with_remediation("Make the templates distinguishable so routing is unambiguous"),
                    );
                }
            }
        }
    }
}

impl Rule for PathsOperationsRule {
    fn criterion(&self) -> Criterion {
        Criterion::PathsOperations
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        for (path, _) in doc.paths() {
            Self::check_naming(path, issues);
        }
        Self::check_crud(doc, issues);
        Self::check_overlaps(doc, issues);
    }

    fn evaluate(&self, doc: &Document, weight: f64) -> CriterionResult {
        if doc.path_count() == 0 {
            let issue = Issue::new(
                Criterion::PathsOperations,
                Severity::Critical,
                "paths",
                "No paths defined",
            )
            .with_remediation("Describe at least one resource under paths");
            return CriterionResult::zeroed(Criterion::PathsOperations, weight, vec![issue]);
        }

        let mut issues = Vec::new();
        self.check(doc, &mut issues);
        CriterionResult::from_issues(Criterion::PathsOperations, weight, issues)
    }
}
