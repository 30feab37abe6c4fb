//! Configuration validation for api-scorer.
//!
//! Problems found here are advisory: the CLI logs them and keeps going.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, WeightsConfig};
use crate::quality::{Criterion, Grade};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.weights.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for WeightsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Criterion::ALL
            .iter()
            .filter_map(|criterion| {
                let weight = self.get(*criterion)?;
                let message = if weight.is_nan() {
                    "Weight is not a number".to_string()
                } else if weight < 0.0 {
                    format!("Negative weight {weight}; the criterion will always score 0")
                } else {
                    return None;
                };
                Some(ConfigError {
                    field: format!("weights.{}", criterion.key()),
                    message,
                })
            })
            .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(score) = self.min_score {
            if !(0.0..=100.0).contains(&score) {
                errors.push(ConfigError {
                    field: "behavior.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {score}"),
                });
            }
        }

        if let Some(grade) = &self.min_grade {
            if Grade::parse(grade).is_none() {
                errors.push(ConfigError {
                    field: "behavior.min_grade".to_string(),
                    message: format!("Invalid grade '{grade}'. Valid options: A, B, C, D, F"),
                });
            }
        }

        errors
    }
}
