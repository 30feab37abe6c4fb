//! **Rule-based quality scoring for OpenAPI-style API descriptions.**
//!
//! `api-scorer` inspects an API description and scores it from 0 to 100
//! against seven weighted criteria: Schema & Types, Documentation, Paths &
//! Operations, Response Codes, Examples, Security and Best Practices. Every
//! detected defect becomes an [`Issue`] with a severity, a location and a
//! suggested fix; severities deduct points from their criterion and the sum
//! of criterion scores maps to a letter grade.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the typed [`Document`] (info, servers, paths, operations,
//!   components, security) deserialized from JSON or YAML. Unknown keys are
//!   kept as extensions.
//! - **[`parsers`]**: format detection and loading from strings, files and
//!   (with the `remote` feature) `http(s)` URLs.
//! - **[`validation`]**: a structural pre-check that reports missing required
//!   fields before scoring.
//! - **[`quality`]**: the rule set and the [`ApiScorer`] aggregator that
//!   produces a [`ScoreReport`].
//! - **[`reports`]**: renderers for terminal summaries, JSON, Markdown, HTML
//!   and SARIF.
//! - **[`config`]**: YAML configuration files, weight overrides and quality
//!   gates.
//! - **[`pipeline`]** and **[`cli`]**: the load → validate → score → report
//!   stages used by the `api-scorer` binary.
//!
//! ## Getting Started
//!
//! ```
//! use api_scorer::{parse_document_str, ApiScorer, Criterion, Severity};
//!
//! let doc = parse_document_str(r#"
//! openapi: 3.0.3
//! info:
//!   title: Pets
//!   version: 2.1.0
//! paths: {}
//! "#)?;
//!
//! let report = ApiScorer::new().score(&doc);
//! let paths = report.result(Criterion::PathsOperations).unwrap();
//! assert_eq!(paths.score, 0.0);
//! assert_eq!(paths.issues[0].severity, Severity::Critical);
//! println!("{} ({})", report.overall_score, report.grade);
//! # Ok::<(), api_scorer::parsers::ParseError>(())
//! ```
//!
//! ### Custom weights
//!
//! ```
//! use api_scorer::{ApiScorer, Criterion, CriterionWeights};
//!
//! let weights = CriterionWeights::default().with(Criterion::Security, 30.0);
//! let scorer = ApiScorer::with_weights(weights);
//! assert_eq!(scorer.weights().total(), 120.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): fetch documents over HTTP(S) with a blocking
//!   `reqwest` client.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod quality;
pub mod reports;
pub mod validation;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, WeightsConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, Result, ScorerError};
pub use model::{Document, HttpMethod, Operation};
pub use parsers::{detect_format, load_document, load_source, parse_document_str};
pub use quality::{
    ApiScorer, Criterion, CriterionResult, CriterionWeights, Grade, Issue, IssueSummary,
    ScoreReport, Severity,
};
pub use reports::{create_reporter, ReportConfig, ReportFormat, ReportGenerator};
pub use validation::{validate_document, ValidationResult};
