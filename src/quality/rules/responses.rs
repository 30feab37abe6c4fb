use super::Rule;
use crate::model::{Document, HttpMethod};
use crate::quality::{Criterion, Issue, Severity};

/// Success and error response coverage per operation.
pub struct ResponseCodesRule;

impl Rule for ResponseCodesRule {
    fn criterion(&self) -> Criterion {
        Criterion::ResponseCodes
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        for (path, method, op) in doc.operations() {
            if !op.has_status(|code| code.starts_with('2') || code == "default") {
                issues.push(
                    Issue::new(
                        Criterion::ResponseCodes,
                        Severity::High,
                        "responses",
                        "No success response defined",
                    )
                    .at_operation(path, method)
                    .with_remediation("Document the 2xx response (or a default response)"),
                );
            }

            if !op.has_status(|code| code.starts_with('4') || code.starts_with('5')) {
                issues.push(
                    Issue::new(
                        Criterion::ResponseCodes,
                        Severity::Medium,
                        "responses",
                        "No error responses defined",
                    )
                    .at_operation(path, method)
                    .with_remediation("Document the 4xx and 5xx responses clients should handle"),
                );
            }

            let conventional: &[&str] = match method {
                HttpMethod::Post => &["201", "200"],
                HttpMethod::Delete => &["204", "200"],
                _ => &[],
            };
            if !conventional.is_empty() && !op.has_status(|code| conventional.contains(&code)) {
                issues.push(
                    Issue::new(
                        Criterion::ResponseCodes,
                        Severity::Low,
                        "responses",
                        format!("{method} should return {}", conventional.join(" or ")),
                    )
                    .at_operation(path, method)
                    .with_remediation(format!(
                        "Use {} as the success status for {method}",
                        conventional[0]
                    )),
                );
            }
        }
    }
}
