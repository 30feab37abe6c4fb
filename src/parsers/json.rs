//! JSON API descriptions.

use super::traits::{unquote, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::Document;

/// Parser for JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Find the string value of a top-level-looking `"key": "value"` pair.
fn find_string_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("\"{key}\"");
    let after_key = &content[content.find(&needle)? + needle.len()..];
    let after_colon = after_key.trim_start().strip_prefix(':')?.trim_start();
    let rest = after_colon.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(unquote(&rest[..end]))
}

impl DocumentParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<Document, ParseError> {
        Ok(serde_json::from_str(content)?)
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        if !content.trim_start().starts_with('{') {
            return FormatDetection::no_match();
        }

        if let Some(version) = find_string_value(content, "openapi") {
            return FormatDetection::with_confidence(FormatConfidence::CERTAIN).version(version);
        }
        if let Some(version) = find_string_value(content, "swagger") {
            return FormatDetection::with_confidence(FormatConfidence::HIGH)
                .version(version)
                .warning("Swagger 2.0 document: only the common structure is scored");
        }

        FormatDetection::with_confidence(FormatConfidence::MEDIUM)
            .warning("JSON object without an openapi version marker")
    }
}
