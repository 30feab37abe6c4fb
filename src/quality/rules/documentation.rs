use super::Rule;
use crate::model::Document;
use crate::quality::{Criterion, Issue, Severity};

/// Descriptions on the API, its operations and their parameters.
pub struct DocumentationRule;

impl Rule for DocumentationRule {
    fn criterion(&self) -> Criterion {
        Criterion::Documentation
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        let has_description = doc
            .info
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        if !has_description {
            issues.push(
                Issue::new(
                    Criterion::Documentation,
                    Severity::Medium,
                    "info.description",
                    "API has no description",
                )
                .with_remediation("Explain what the API does and who it is for in info.description"),
            );
        }

        for (path, method, op) in doc.operations() {
            if !op.is_described() {
                issues.push(
                    Issue::new(
                        Criterion::Documentation,
                        Severity::Medium,
                        "summary",
                        "Operation has neither a summary nor a description",
                    )
                    .at_operation(path, method)
                    .with_remediation("Add a one-line summary and, where useful, a description"),
                );
            }

            for param in &op.parameters {
                let resolved = doc.resolve_parameter(param);
                if !resolved.is_described() {
                    let name = resolved.display_name();
                    issues.push(
                        Issue::new(
                            Criterion::Documentation,
                            Severity::Low,
                            format!("parameters.{name}"),
                            format!("Parameter '{name}' has no description"),
                        )
                        .at_operation(path, method)
                        .with_remediation("Describe the parameter's meaning and accepted values"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HttpMethod;
    use crate::quality::rules::check_rule;
    use serde_json::json;

    #[test]
    fn test_missing_info_description() {
        let issues = check_rule(&DocumentationRule, json!({"info": {"title": "t", "version": "1"}}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "info.description");
        assert!(issues[0].path.is_none());
    }

    #[test]
    fn test_operation_and_parameter_descriptions() {
        let issues = check_rule(
            &DocumentationRule,
            json!({
                "info": {"description": "Users API"},
                "paths": {"/users": {
                    "get": {
                        "parameters": [
                            {"name": "limit", "in": "query"},
                            {"name": "offset", "in": "query", "description": "Start index"},
                            {"$ref": "#/components/parameters/Filter"}
                        ],
                        "responses": {}
                    },
                    "post": {"summary": "Create a user"}
                }},
                "components": {"parameters": {"Filter": {"name": "filter", "in": "query"}}}
            }),
        );
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].method, Some(HttpMethod::Get));
        assert_eq!(issues[1].location, "parameters.limit");
        assert_eq!(issues[1].severity, Severity::Low);
        assert_eq!(issues[2].location, "parameters.filter");
    }

    #[test]
    fn test_fully_documented() {
        let issues = check_rule(
            &DocumentationRule,
            json!({
                "info": {"description": "Users API"},
                "paths": {"/users": {"get": {"description": "List users"}}}
            }),
        );
        assert!(issues.is_empty());
    }
}
