//! Structural validation of API descriptions.
//!
//! Checks the minimal shape a document needs before its score means
//! anything: a format version, a titled and versioned `info` block, a
//! `paths` map whose keys are absolute, and responses on every operation.
//! The full grammar of the format is not checked.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Validation issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A structural problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    /// Dotted location (e.g. `paths./users.get.responses`)
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Outcome of structural validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl ValidationResult {
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        let error_count = issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .count();
        let warning_count = issues.len() - error_count;
        Self {
            issues,
            error_count,
            warning_count,
        }
    }

    /// True when there are no errors; warnings are allowed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    /// Issues with the given severity
    #[must_use]
    pub fn issues_by_severity(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }
}

/// Check the minimal required structure of a document.
#[must_use]
pub fn validate_document(doc: &Document) -> ValidationResult {
    let mut issues = Vec::new();

    let version = doc.openapi.trim();
    if version.is_empty() {
        issues.push(ValidationIssue::error("openapi", "Missing openapi version"));
    } else if !version.starts_with("3.") {
        issues.push(ValidationIssue::warning(
            "openapi",
            format!("Unsupported openapi version '{version}', expected 3.x"),
        ));
    }

    if doc.info.title.trim().is_empty() {
        issues.push(ValidationIssue::error("info.title", "Missing API title"));
    }
    if doc.info.version.trim().is_empty() {
        issues.push(ValidationIssue::error("info.version", "Missing API version"));
    }

    if doc.paths.is_none() {
        issues.push(ValidationIssue::error("paths", "Missing paths object"));
    }

    for (path, resource) in doc.paths() {
        if !path.starts_with('/') {
            issues.push(ValidationIssue::error(
                format!("paths.{path}"),
                format!("Path '{path}' must begin with '/'"),
            ));
        }
        for (method, op) in resource.operations() {
            let location = format!("paths.{path}.{}.responses", method.as_str());
            match &op.responses {
                None => issues.push(ValidationIssue::error(
                    location,
                    format!("{method} {path} has no responses"),
                )),
                Some(responses) if responses.is_empty() => issues.push(ValidationIssue::error(
                    location,
                    format!("{method} {path} has an empty responses object"),
                )),
                Some(_) => {}
            }
        }
    }

    let result = ValidationResult::new(issues);
    tracing::debug!(
        errors = result.error_count,
        warnings = result.warning_count,
        "Validated document structure"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: serde_json::Value) -> ValidationResult {
        let doc: Document = serde_json::from_value(value).expect("valid document");
        validate_document(&doc)
    }

    #[test]
    fn test_valid_document() {
        let result = validate(json!({
            "openapi": "3.0.3",
            "info": {"title": "Users", "version": "1.2.0"},
            "paths": {"/users": {"get": {"responses": {"200": {"description": "ok"}}}}}
        }));
        assert!(result.is_valid());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let result = validate(json!({}));
        assert!(!result.is_valid());
        let locations: Vec<&str> = result.issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["openapi", "info.title", "info.version", "paths"]);
    }

    #[test]
    fn test_swagger_version_is_warning() {
        let result = validate(json!({
            "openapi": "2.0",
            "info": {"title": "Old", "version": "1"},
            "paths": {}
        }));
        assert!(result.is_valid());
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_path_and_response_errors() {
        let result = validate(json!({
            "openapi": "3.1.0",
            "info": {"title": "T", "version": "1"},
            "paths": {
                "users": {"get": {"responses": {"200": {}}}},
                "/orders": {"get": {}, "post": {"responses": {}}}
            }
        }));
        assert_eq!(result.error_count, 3);
        assert_eq!(result.issues[0].location, "paths.users");
        assert_eq!(result.issues[1].location, "paths./orders.get.responses");
        assert!(result.issues[2].message.contains("empty"));
        assert_eq!(result.issues_by_severity(ValidationSeverity::Error).len(), 3);
    }
}
