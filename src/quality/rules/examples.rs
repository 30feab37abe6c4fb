use super::Rule;
use crate::model::{Document, Operation};
use crate::quality::{Criterion, Issue, Severity};

/// Every operation should show at least one example payload.
pub struct ExamplesRule;

fn has_examples(doc: &Document, op: &Operation) -> bool {
    let in_body = op
        .request_body
        .as_ref()
        .is_some_and(|body| doc.resolve_request_body(body).has_examples());
    in_body
        || op
            .responses()
            .any(|(_, response)| doc.resolve_response(response).has_examples())
}

impl Rule for ExamplesRule {
    fn criterion(&self) -> Criterion {
        Criterion::Examples
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        for (path, method, op) in doc.operations() {
            if !has_examples(doc, op) {
                issues.push(
                    Issue::new(
                        Criterion::Examples,
                        Severity::Low,
                        "examples",
                        "Operation has no request or response examples",
                    )
                    .at_operation(path, method)
                    .with_remediation("Add an example to the request body or a response media type"),
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
    fn test_examples_anywhere_count() {
        let issues = check_rule(
            &ExamplesRule,
            json!({"paths": {"/users": {
                "get": {"responses": {"200": {
                    "content": {"application/json": {"examples": {"one": {"value": []}}}}
                }}},
                "post": {
                    "requestBody": {"example": {"name": "Ada"}},
                    "responses": {"201": {}}
                },
                "put": {"responses": {"200": {"example": {"ok": true}}}}
            }}}),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_one_issue_per_operation() {
        let issues = check_rule(
            &ExamplesRule,
            json!({"paths": {
                "/users": {"get": {"responses": {"200": {"content": {"application/json": {}}}}}},
                "/orders": {"get": {}, "post": {}}
            }}),
        );
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity == Severity::Low));
    }
}
