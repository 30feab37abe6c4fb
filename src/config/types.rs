//! Configuration types for api-scorer.

use crate::quality::{Criterion, CriterionWeights};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Per-criterion point budgets
    pub weights: WeightsConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags and quality gates
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolved weights for the scorer.
    #[must_use]
    pub fn criterion_weights(&self) -> CriterionWeights {
        self.weights.to_weights()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Override one criterion's weight.
    pub fn weight(mut self, criterion: Criterion, weight: f64) -> Self {
        self.config.weights.set(criterion, Some(weight));
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the overall score is below this value.
    pub const fn min_score(mut self, score: f64) -> Self {
        self.config.behavior.min_score = Some(score);
        self
    }

    /// Fail when the grade is worse than this letter.
    pub fn min_grade(mut self, grade: impl Into<String>) -> Self {
        self.config.behavior.min_grade = Some(grade.into());
        self
    }

    /// Suppress non-essential output.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Skip structural validation before scoring.
    pub const fn skip_validation(mut self, skip: bool) -> Self {
        self.config.behavior.skip_validation = skip;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Weights
// ============================================================================

/// Optional per-criterion weights; absent values fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_types: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths_operations: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_codes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<f64>,
}

impl WeightsConfig {
    /// Configured override for a criterion, if any.
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::SchemaTypes => self.schema_types,
            Criterion::Documentation => self.documentation,
            Criterion::PathsOperations => self.paths_operations,
            Criterion::ResponseCodes => self.response_codes,
            Criterion::Examples => self.examples,
            Criterion::Security => self.security,
            Criterion::BestPractices => self.best_practices,
        }
    }

    pub fn set(&mut self, criterion: Criterion, weight: Option<f64>) {
        let slot = match criterion {
            Criterion::SchemaTypes => &mut self.schema_types,
            Criterion::Documentation => &mut self.documentation,
            Criterion::PathsOperations => &mut self.paths_operations,
            Criterion::ResponseCodes => &mut self.response_codes,
            Criterion::Examples => &mut self.examples,
            Criterion::Security => &mut self.security,
            Criterion::BestPractices => &mut self.best_practices,
        };
        *slot = weight;
    }

    /// Whether any weight is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// Merge overrides against the default weights.
    #[must_use]
    pub fn to_weights(&self) -> CriterionWeights {
        Criterion::ALL
            .iter()
            .fold(CriterionWeights::default(), |weights, criterion| {
                match self.get(*criterion) {
                    Some(weight) => weights.with(*criterion, weight),
                    None => weights,
                }
            })
    }
}

impl From<&WeightsConfig> for CriterionWeights {
    fn from(config: &WeightsConfig) -> Self {
        config.to_weights()
    }
}

impl From<&CriterionWeights> for WeightsConfig {
    fn from(weights: &CriterionWeights) -> Self {
        let mut config = Self::default();
        for criterion in Criterion::ALL {
            config.set(criterion, Some(weights.get(criterion)));
        }
        config
    }
}

// ============================================================================
// Output and Behavior
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags and quality gates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the overall score is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Exit with code 1 when the grade is worse than this letter (A-F)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<String>,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Score even when structural validation reports errors
    pub skip_validation: bool,
}
