//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod score;
mod validate;

pub use score::{run_score, ScoreConfig};
pub use validate::run_validate;
