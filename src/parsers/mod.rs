//! Document acquisition: reading, fetching and parsing API descriptions.
//!
//! ## Format Detection
//!
//! Content is sniffed before parsing:
//! - Each parser reports a confidence score (0.0-1.0) for handling content
//! - The parser with the highest confidence is selected (JSON wins ties)
//! - Detection also picks up the `openapi`/`swagger` version marker
//!
//! ## Usage
//!
//! ```no_run
//! use api_scorer::parsers::{detect_format, load_document};
//! use std::path::Path;
//!
//! let doc = load_document(Path::new("openapi.yaml")).unwrap();
//!
//! let content = std::fs::read_to_string("openapi.yaml").unwrap();
//! if let Some(detected) = detect_format(&content) {
//!     println!("Detected: {} ({})", detected.format, detected.confidence);
//! }
//! ```

mod detection;
mod json;
#[cfg(feature = "remote")]
mod remote;
mod traits;
mod yaml;

pub use detection::{DetectionResult, DocumentFormat, FormatDetector, MIN_CONFIDENCE_THRESHOLD};
pub use json::JsonParser;
pub use traits::{DocumentParser, FormatConfidence, FormatDetection, ParseError};
pub use yaml::YamlParser;

use crate::error::{ErrorContext, Result};
use crate::model::Document;
use std::path::Path;
use std::time::Duration;

/// Default timeout for remote documents
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum document size (64 MB)
pub const MAX_DOCUMENT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Result of format detection
#[derive(Debug, Clone)]
pub struct DetectedFormat {
    pub format: DocumentFormat,
    /// Confidence score (0.0-1.0)
    pub confidence: f32,
    /// `openapi`/`swagger` version marker, if found
    pub version: Option<String>,
    pub warnings: Vec<String>,
}

/// Detect the document format from content without parsing.
///
/// Returns None if no format could be detected with sufficient confidence.
#[must_use]
pub fn detect_format(content: &str) -> Option<DetectedFormat> {
    let result = FormatDetector::new().detect_from_content(content);
    if !result.can_parse() {
        return None;
    }
    result.format.map(|format| DetectedFormat {
        format,
        confidence: result.confidence.value(),
        version: result.version,
        warnings: result.warnings,
    })
}

/// Parse a document from JSON or YAML text.
pub fn parse_document_str(content: &str) -> std::result::Result<Document, ParseError> {
    FormatDetector::new().parse_str(content)
}

/// Read and parse a local document.
///
/// Files larger than [`MAX_DOCUMENT_FILE_SIZE`] are rejected before reading.
pub fn load_document(path: &Path) -> std::result::Result<Document, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(ParseError::TooLarge {
            size: metadata.len(),
            limit: MAX_DOCUMENT_FILE_SIZE,
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_document_str(&content)
}

/// Fetch and parse a remote document.
#[cfg(feature = "remote")]
pub fn fetch_document(url: &str, timeout: Duration) -> Result<Document> {
    let content = remote::fetch_text(url, timeout)?;
    parse_document_str(&content).with_context(|| format!("parsing {url}"))
}

/// Fetching is unavailable without the `remote` feature.
#[cfg(not(feature = "remote"))]
pub fn fetch_document(url: &str, _timeout: Duration) -> Result<Document> {
    Err(crate::error::ScorerError::fetch(
        url,
        crate::error::FetchErrorKind::Disabled,
    ))
}

/// Whether a source string names a remote document.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    let lower = source.get(..8).unwrap_or(source).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load a document from a local path or an `http(s)://` URL.
pub fn load_source(source: &str, timeout: Duration) -> Result<Document> {
    if is_remote(source) {
        fetch_document(source, timeout)
    } else {
        load_document(Path::new(source)).with_context(|| format!("loading {source}"))
    }
}
