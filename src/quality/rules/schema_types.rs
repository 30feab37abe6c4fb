use super::Rule;
use crate::model::Document;
use crate::quality::{Criterion, Issue, Severity};

/// Reusable schema coverage and typing, plus schemas on every payload.
pub struct SchemaTypesRule;

impl SchemaTypesRule {
    fn check_components(doc: &Document, issues: &mut Vec<Issue>) {
        let mut any = false;
        for (name, schema) in doc.schemas() {
            any = true;
            let location = format!("components.schemas.{name}");
            if !schema.has_type_information() {
                issues.push(
                    Issue::new(
                        Criterion::SchemaTypes,
                        Severity::Medium,
                        location.clone(),
                        format!("Schema '{name}' has no type, $ref or composition keyword"),
                    )
                    .with_remediation("Declare a type or compose the schema with allOf/oneOf/anyOf"),
                );
            }
            if schema.is_open_object() {
                issues.push(
                    Issue::new(
                        Criterion::SchemaTypes,
                        Severity::Medium,
                        location,
                        format!("Object schema '{name}' defines no properties"),
                    )
                    .with_remediation("List the object's properties or set additionalProperties"),
                );
            }
        }

        if !any {
            issues.push(
                Issue::new(
                    Criterion::SchemaTypes,
                    Severity::Medium,
                    "components.schemas",
                    "No reusable schemas defined",
                )
                .with_remediation("Move shared models into components.schemas and reference them with $ref"),
            );
        }
    }

    fn check_payloads(doc: &Document, issues: &mut Vec<Issue>) {
        for (path, method, op) in doc.operations() {
            if let Some(body) = op.request_body.as_ref() {
                let body = doc.resolve_request_body(body);
                for (media_type, entry) in &body.content {
                    if entry.schema.is_none() {
                        issues.push(
                            Issue::new(
                                Criterion::SchemaTypes,
                                Severity::Medium,
                                format!("requestBody.content.{media_type}"),
                                format!("Request body for '{media_type}' has no schema"),
                            )
                            .at_operation(path, method)
                            .with_remediation("Describe the request payload with a schema"),
                        );
                    }
                }
            }

            for (status, response) in op.responses() {
                let response = doc.resolve_response(response);
                for (media_type, entry) in &response.content {
                    if entry.schema.is_none() {
                        issues.push(
                            Issue::new(
                                Criterion::SchemaTypes,
                                Severity::Medium,
                                format!("responses.{status}.content.{media_type}"),
                                format!("Response {status} for '{media_type}' has no schema"),
                            )
                            .at_operation(path, method)
                            .with_remediation("Describe the response payload with a schema"),
                        );
                    }
                }
            }
        }
    }
}

impl Rule for SchemaTypesRule {
    fn criterion(&self) -> Criterion {
        Criterion::SchemaTypes
    }

    fn check(&self, doc: &Document, issues: &mut Vec<Issue>) {
        Self::check_components(doc, issues);
        Self::check_payloads(doc, issues);
    }
}
