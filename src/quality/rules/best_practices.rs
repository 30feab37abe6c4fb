use super::Rule;
use crate::model::Document;
use crate::quality::{Criterion, Issue, Severity};
use std::collections::HashSet;

/// Versioning, servers, tagging and component usage.
pub struct BestPracticesRule;

const PLACEHOLDER_VERSION: &str = "1.0.0";

impl BestPracticesRule {
    fn check_tags(doc: &Document, issues: &mut Vec<Issue>) {
        let mut reported: HashSet<&str> = HashSet::new();
        let mut untagged = 0usize;

        for (path, method, op) in doc.operations() {
            if op.tags.is_empty() {
                untagged += 1;
            }
            for tag in &op.tags {
                if !doc.declares_tag(tag) && reported.insert(tag.as_str()) {
                    issues.push(
                        Issue::new(
                            Criterion::BestPractices,
                            Severity::Low,
                            "tags",
                            format!("Tag '{tag}' is used but not declared"),
                        )
                        .at_operation(path, method)
                        .with_remediation("Declare the tag, with a description, in the top-level tags list"),
                    );
                }
            }
        }

        if untagged > 0 {
            let noun = if untagged == 1 { "operation has" } else { "operations have" };
            issues.push(
                Issue::new(
                    Criterion::BestPractices,
                    Severity::Low,
                    "tags",
                    format!("{untagged} {noun} no tags"),
                )
                .with_remediation("Group operations with tags"),
            );
        }
    }
}

impl Rule for BestPracticesRule {
    fn criterion(&self) -> Criterion {
        Criterion::BestPractices
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        let version = doc.info.version.trim();
        if version.is_empty() || version == PLACEHOLDER_VERSION {
            issues.push(
                Issue::new(
                    Criterion::BestPractices,
                    Severity::Low,
                    "info.version",
                    format!("API version is '{version}'"),
                )
                .with_remediation("Set a meaningful version that changes with the API"),
            );
        }

        if doc.servers.is_empty() {
            issues.push(
                Issue::new(
                    Criterion::BestPractices,
                    Severity::Medium,
                    "servers",
                    "No servers defined",
                )
                .with_remediation("List the base URLs the API is served from"),
            );
        }

        Self::check_tags(doc, issues);

        if doc.components.is_none() {
            issues.push(
                Issue::new(
                    Criterion::BestPractices,
                    Severity::Low,
                    "components",
                    "No components block",
                )
                .with_remediation("Use components to share schemas, parameters and responses"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::rules::check_rule;
    use serde_json::json;

    #[test]
    fn test_bare_document() {
        let issues = check_rule(&BestPracticesRule, json!({"info": {"version": "1.0.0"}}));
        let locations: Vec<&str> = issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["info.version", "servers", "components"]);
    }

    #[test]
    fn test_undefined_tags_reported_once() {
        let issues = check_rule(
            &BestPracticesRule,
            json!({
                "info": {"version": "2.3.0"},
                "servers": [{"url": "https://api.example.com"}],
                "components": {},
                "tags": [{"name": "users"}],
                "paths": {
                    "/users": {"get": {"tags": ["users", "admin"]}, "post": {"tags": ["admin"]}},
                    "/health": {"get": {}, "head": {}}
                }
            }),
        );
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].description, "Tag 'admin' is used but not declared");
        assert_eq!(issues[1].description, "2 operations have no tags");
        assert!(issues[1].path.is_none());
    }

    #[test]
    fn test_clean_document() {
        let issues = check_rule(
            &BestPracticesRule,
            json!({
                "info": {"version": "2024-01-15"},
                "servers": [{"url": "https://api.example.com"}],
                "components": {"schemas": {}},
                "tags": [{"name": "users"}],
                "paths": {"/users": {"get": {"tags": ["users"]}}}
            }),
        );
        assert!(issues.is_empty());
    }
}
