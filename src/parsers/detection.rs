//! Format detection across the document parsers.

use super::traits::{DocumentParser, FormatConfidence, FormatDetection, ParseError};
use super::{JsonParser, YamlParser};
use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Minimum confidence for accepting a format detection.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Text format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of format detection
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Detected format, if any parser was confident enough
    pub format: Option<DocumentFormat>,
    pub confidence: FormatConfidence,
    /// `openapi`/`swagger` version marker
    pub version: Option<String>,
    pub warnings: Vec<String>,
}

impl DetectionResult {
    /// A result indicating no format was detected.
    #[must_use]
    pub fn unknown(reason: &str) -> Self {
        Self {
            format: None,
            confidence: FormatConfidence::NONE,
            version: None,
            warnings: vec![reason.to_string()],
        }
    }

    fn detected(format: DocumentFormat, detection: FormatDetection) -> Self {
        Self {
            format: Some(format),
            confidence: detection.confidence,
            version: detection.version,
            warnings: detection.warnings,
        }
    }

    /// Check if the detection is confident enough to parse.
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.format.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Picks the best parser for some content by comparing confidences.
pub struct FormatDetector {
    json: JsonParser,
    yaml: YamlParser,
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            json: JsonParser::new(),
            yaml: YamlParser::new(),
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Create a detector with a custom confidence threshold.
    #[must_use]
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    /// Detect the format of full content.
    #[must_use]
    pub fn detect_from_content(&self, content: &str) -> DetectionResult {
        if content.trim().is_empty() {
            return DetectionResult::unknown("Empty content");
        }
        let json = self.json.detect(content);
        let yaml = self.yaml.detect(content);
        self.select_best_parser(json, yaml)
    }

    fn select_best_parser(&self, json: FormatDetection, yaml: FormatDetection) -> DetectionResult {
        let json_conf = json.confidence.value();
        let yaml_conf = yaml.confidence.value();

        tracing::debug!(
            "Format detection: JSON={:.2}, YAML={:.2}, threshold={:.2}",
            json_conf,
            yaml_conf,
            self.min_confidence
        );

        // JSON wins ties since every JSON document is also YAML.
        if json_conf >= self.min_confidence && json_conf >= yaml_conf {
            DetectionResult::detected(DocumentFormat::Json, json)
        } else if yaml_conf >= self.min_confidence {
            DetectionResult::detected(DocumentFormat::Yaml, yaml)
        } else {
            DetectionResult::unknown("Could not detect document format with sufficient confidence")
        }
    }

    /// Detect the format, then parse with the matching parser.
    pub fn parse_str(&self, content: &str) -> Result<Document, ParseError> {
        let detection = self.detect_from_content(content);

        for warning in &detection.warnings {
            tracing::warn!("{}", warning);
        }

        match detection.format {
            Some(DocumentFormat::Json) if detection.can_parse() => self.json.parse_str(content),
            Some(DocumentFormat::Yaml) if detection.can_parse() => self.yaml.parse_str(content),
            _ => Err(ParseError::UnknownFormat(
                "Could not detect document format. Expected JSON or YAML.".to_string(),
            )),
        }
    }
}
