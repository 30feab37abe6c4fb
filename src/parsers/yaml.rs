//! YAML API descriptions.

use super::traits::{unquote, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::Document;

/// Parser for YAML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Lines that carry content: not blank, not comments, not document markers.
fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| {
        let t = line.trim();
        !t.is_empty() && !t.starts_with('#') && t != "---"
    })
}

/// Value of an unindented `key: value` line.
fn top_level_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content_lines(content).find_map(|line| {
        let rest = line.strip_prefix(key)?.strip_prefix(':')?;
        let value = unquote(rest.split(" #").next().unwrap_or(rest));
        (!value.is_empty()).then_some(value)
    })
}

impl DocumentParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<Document, ParseError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn format_name(&self) -> &str {
        "YAML"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let Some(first) = content_lines(content).next() else {
            return FormatDetection::no_match();
        };
        if first.trim_start().starts_with('{') {
            // Flow mappings are valid YAML, but JSON handles them better.
            return FormatDetection::with_confidence(FormatConfidence::LOW);
        }

        if let Some(version) = top_level_value(content, "openapi") {
            return FormatDetection::with_confidence(FormatConfidence::CERTAIN).version(version);
        }
        if let Some(version) = top_level_value(content, "swagger") {
            return FormatDetection::with_confidence(FormatConfidence::HIGH)
                .version(version)
                .warning("Swagger 2.0 document: only the common structure is scored");
        }

        let looks_like_mapping = !first.starts_with(' ') && first.contains(':');
        if looks_like_mapping {
            FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .warning("YAML mapping without an openapi version marker")
        } else {
            FormatDetection::no_match()
        }
    }
}
