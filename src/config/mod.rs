//! Configuration module for api-scorer.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Advisory validation of configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use api_scorer::config::AppConfig;
//! use api_scorer::quality::Criterion;
//!
//! let config = AppConfig::builder()
//!     .weight(Criterion::Security, 25.0)
//!     .min_score(80.0)
//!     .build();
//! assert_eq!(config.criterion_weights().total(), 115.0);
//! ```
//!
//! # Configuration File
//!
//! Place a `.api-scorer.yaml` file in your project root or `~/.config/api-scorer/`:
//!
//! ```yaml
//! weights:
//!   security: 25
//!   examples: 5
//! behavior:
//!   min_grade: B
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, WeightsConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.api-scorer.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
