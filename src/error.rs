//! Unified error types for api-scorer.
//!
//! Scoring itself never fails: defects in a document are reported as
//! [`Issue`](crate::quality::Issue)s. The errors here cover the stages around
//! it: reading or fetching a document, parsing it and rendering reports.

use crate::parsers::ParseError;
use crate::reports::ReportError;
use thiserror::Error;

/// Main error type for api-scorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScorerError {
    /// Errors while parsing a document
    #[error("Failed to parse API description: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while fetching a remote document
    #[error("Failed to fetch API description: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown document format - expected JSON or YAML with an openapi marker")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Document too large: {size_mb} MB (limit {limit_mb} MB)")]
    TooLarge { size_mb: u64, limit_mb: u64 },

    #[error("Could not read document: {0}")]
    Unreadable(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Remote fetching is not enabled in this build")]
    Disabled,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),

    #[error("Could not write report: {0}")]
    WriteError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for api-scorer operations
pub type Result<T> = std::result::Result<T, ScorerError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ScorerError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch error
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ScorerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for ScorerError {
    fn from(err: ParseError) -> Self {
        let kind = match err {
            ParseError::JsonError(msg) => ParseErrorKind::InvalidJson(msg),
            ParseError::YamlError(msg) => ParseErrorKind::InvalidYaml(msg),
            ParseError::UnknownFormat(_) => ParseErrorKind::UnknownFormat,
            ParseError::TooLarge { size, limit } => ParseErrorKind::TooLarge {
                size_mb: size / (1024 * 1024),
                limit_mb: limit / (1024 * 1024),
            },
            ParseError::IoError(msg) => ParseErrorKind::Unreadable(msg),
        };
        Self::parse(String::new(), kind)
    }
}

impl From<ReportError> for ScorerError {
    fn from(err: ReportError) -> Self {
        let kind = match err {
            ReportError::SerializationError(msg) => ReportErrorKind::JsonSerializationError(msg),
            ReportError::FormatError(e) => ReportErrorKind::FormatError(e.to_string()),
            ReportError::IoError(e) => ReportErrorKind::WriteError(e.to_string()),
        };
        Self::report(String::new(), kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so an error that passed
/// through two layers reads `"outer: inner: original"`.
///
/// # Example
///
/// ```
/// use api_scorer::error::{ErrorContext, Result};
/// use api_scorer::parsers::parse_document_str;
///
/// fn parse_fixture(text: &str) -> Result<usize> {
///     let doc = parse_document_str(text).context("parsing fixture")?;
///     Ok(doc.path_count())
/// }
///
/// let err = parse_fixture("").unwrap_err();
/// assert!(err.to_string().contains("parsing fixture"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ScorerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ScorerError, new_ctx: &str) -> ScorerError {
    match err {
        ScorerError::Parse {
            context: existing,
            source,
        } => ScorerError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ScorerError::Fetch {
            context: existing,
            source,
        } => ScorerError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ScorerError::Report {
            context: existing,
            source,
        } => ScorerError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ScorerError::Io { message, source } => ScorerError::Io {
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ScorerError::parse("at openapi.txt", ParseErrorKind::UnknownFormat);
        let display = err.to_string();
        assert!(display.contains("openapi.txt"), "{display}");
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("Unknown document format"), "{source}");
    }

    #[test]
    fn test_io_error_conversion_gets_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        match result.context("reading https://api.example.com/openapi.yaml") {
            Err(ScorerError::Io { message, .. }) => {
                assert_eq!(
                    message,
                    "reading https://api.example.com/openapi.yaml: connection reset"
                );
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_report_error_conversion_gets_context() {
        let result: std::result::Result<String, ReportError> =
            Err(ReportError::SerializationError("key must be a string".to_string()));
        match result.context("rendering json report") {
            Err(ScorerError::Report {
                context,
                source: ReportErrorKind::JsonSerializationError(msg),
            }) => {
                assert_eq!(context, "rendering json report");
                assert_eq!(msg, "key must be a string");
            }
            other => panic!("Expected Report error, got {other:?}"),
        }

        let err = ScorerError::from(ReportError::FormatError(std::fmt::Error));
        assert!(matches!(
            err,
            ScorerError::Report {
                source: ReportErrorKind::FormatError(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(ScorerError::parse(
            "initial context",
            ParseErrorKind::UnknownFormat,
        ));

        match initial.context("outer context") {
            Err(ScorerError::Parse { context, .. }) => {
                assert_eq!(context, "outer context: initial context");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(ScorerError::fetch(
                "base",
                FetchErrorKind::HttpStatus { status: 404 },
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(ScorerError::Fetch { context, source }) => {
                assert_eq!(context, "outer layer: middle layer: base");
                assert_eq!(source.to_string(), "HTTP status 404");
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_conversion_gets_context() {
        let result: std::result::Result<(), ParseError> =
            Err(ParseError::YamlError("bad indent".to_string()));
        match result.context("reading openapi.yaml") {
            Err(ScorerError::Parse {
                context,
                source: ParseErrorKind::InvalidYaml(msg),
            }) => {
                assert_eq!(context, "reading openapi.yaml");
                assert_eq!(msg, "bad indent");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(ScorerError::fetch("error", FetchErrorKind::Disabled));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
