//! Parser trait definitions and error types.
//!
//! This module defines the `DocumentParser` trait for the concrete text
//! formats and the confidence scoring used to choose between them.

use crate::model::Document;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or parsing a document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Unknown document format: {0}")]
    UnknownFormat(String),

    #[error("Document is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// Definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Might be this format
    pub const LOW: Self = Self(0.25);
    /// Likely this format
    pub const MEDIUM: Self = Self(0.5);
    /// Almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Definitely this format
    pub const CERTAIN: Self = Self(1.0);

    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be parsed
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= Self::LOW.0
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Detection result from a single parser
#[derive(Debug, Clone, Default)]
pub struct FormatDetection {
    pub confidence: FormatConfidence,
    /// Version marker found in the content (`openapi` or `swagger` value)
    pub version: Option<String>,
    pub warnings: Vec<String>,
}

impl FormatDetection {
    /// A detection result indicating no match
    #[must_use]
    pub fn no_match() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_confidence(confidence: FormatConfidence) -> Self {
        Self {
            confidence,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    #[must_use]
    pub fn warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

/// A text format that API descriptions can be written in
///
/// Implementors report how confident they are that they can handle some
/// content via `detect()`, so the caller can pick a parser without trial
/// parsing.
pub trait DocumentParser {
    /// Parse a document from a file path
    fn parse(&self, path: &Path) -> Result<Document, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse a document from string content
    fn parse_str(&self, content: &str) -> Result<Document, ParseError>;

    /// Format name for messages
    fn format_name(&self) -> &str;

    /// Lightweight structural sniffing without a full parse
    fn detect(&self, content: &str) -> FormatDetection;

    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }

    fn confidence(&self, content: &str) -> FormatConfidence {
        self.detect(content).confidence
    }
}

/// Strip matching single or double quotes from a scalar.
pub(crate) fn unquote(s: &str) -> &str {
    let s = s.trim();
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamped() {
        assert!((FormatConfidence::new(2.0).value() - 1.0).abs() < f32::EPSILON);
        assert!(FormatConfidence::new(-1.0).value().abs() < f32::EPSILON);
        assert!(FormatConfidence::LOW.can_parse());
        assert!(!FormatConfidence::NONE.can_parse());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"3.0.3\""), "3.0.3");
        assert_eq!(unquote("'3.1.0'"), "3.1.0");
        assert_eq!(unquote(" 3.0.0 "), "3.0.0");
        assert_eq!(unquote("\"unbalanced"), "\"unbalanced");
    }
}
