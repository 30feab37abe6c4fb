use super::Rule;
use crate::model::Document;
use crate::quality::{Criterion, Issue, Severity};

/// Security scheme definitions and their application.
pub struct SecurityRule;

impl Rule for SecurityRule {
    fn criterion(&self) -> Criterion {
        Criterion::Security
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        if !doc.has_security_schemes() {
            issues.push(
                Issue::new(
                    Criterion::Security,
                    Severity::High,
                    "components.securitySchemes",
                    "No security schemes defined",
                )
                .with_remediation("Define the authentication schemes in components.securitySchemes"),
            );
        }

        let global = doc.has_global_security();
        if !global {
            issues.push(
                Issue::new(
                    Criterion::Security,
                    Severity::Medium,
                    "security",
                    "No global security requirement",
                )
                .with_remediation("Apply a default security requirement at the top level"),
            );
        }

        // An explicit empty list on the operation is a deliberate opt-out.
        for (path, method, op) in doc.operations() {
            if !global && op.security.is_none() {
                issues.push(
                    Issue::new(
                        Criterion::Security,
                        Severity::Medium,
                        "security",
                        "Operation is not covered by any security requirement",
                    )
                    .at_operation(path, method)
                    .with_remediation("Add a security requirement to the operation or globally"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::rules::check_rule;
    use serde_json::json;

    #[test]
    fn test_unsecured_document() {
        let issues = check_rule(
            &SecurityRule,
            json!({"paths": {"/users": {"get": {}, "post": {}}}}),
        );
        let severities: Vec<Severity> = issues.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::High, Severity::Medium, Severity::Medium, Severity::Medium]
        );
    }

    #[test]
    fn test_global_security_covers_operations() {
        let issues = check_rule(
            &SecurityRule,
            json!({
                "security": [{"bearer": []}],
                "components": {"securitySchemes": {"bearer": {"type": "http", "scheme": "bearer"}}},
                "paths": {"/users": {"get": {}}}
            }),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_operation_level_security() {
        let issues = check_rule(
            &SecurityRule,
            json!({
                "components": {"securitySchemes": {"key": {"type": "apiKey"}}},
                "paths": {"/users": {
                    "get": {"security": [{"key": []}]},
                    "head": {"security": []},
                    "post": {}
                }}
            }),
        );
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].path.as_deref(), Some("/users"));
    }

    #[test]
    fn test_empty_global_security_is_missing() {
        let issues = check_rule(
            &SecurityRule,
            json!({
                "security": [],
                "components": {"securitySchemes": {"key": {"type": "apiKey"}}}
            }),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "security");
    }
}
