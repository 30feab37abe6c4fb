//! api-scorer: rule-based quality scoring for API descriptions
//!
//! Scores OpenAPI documents (JSON or YAML, local or remote) across seven
//! quality criteria and renders the result for terminals, CI and humans.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use api_scorer::{
    cli::{self, ScoreConfig},
    config::{AppConfig, BehaviorConfig, OutputConfig, WeightsConfig},
    pipeline::exit_codes,
    quality::{Criterion, Severity},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with criteria info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  OpenAPI 3.x (JSON, YAML), local files or http(s) URLs",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, html, sarif",
        "\n\nCriteria (default weight):",
        "\n  Schema & Types (20), Documentation (20), Paths & Operations (15),",
        "\n  Response Codes (15), Examples (10), Security (10), Best Practices (10)"
    )
}

#[derive(Parser)]
#[command(name = "api-scorer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Rule-based quality scoring for API descriptions", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (all quality gates passed)
    1  Score or grade below --min-score / --min-grade
    2  Structural validation failed
    3  Error occurred

EXAMPLES:
    # Score a local document
    api-scorer score openapi.yaml

    # CI/CD gate with SARIF output
    api-scorer score openapi.yaml -o sarif -O api.sarif --min-grade B

    # Emphasise security
    api-scorer score https://example.com/openapi.json --weight-security 25")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path or http(s) URL of the API description
    source: String,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// Exit with code 1 when the grade is worse than this letter (A-F)
    #[arg(long)]
    min_grade: Option<String>,

    /// Hide issues below this severity in the report (critical, high, medium, low)
    #[arg(long, value_parser = parse_severity)]
    min_severity: Option<Severity>,

    /// Maximum number of issues listed in the report
    #[arg(long)]
    max_issues: Option<usize>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Score even when structural validation reports errors
    #[arg(long)]
    skip_validation: bool,

    /// Timeout in seconds for remote documents
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(flatten)]
    weights: WeightArgs,
}

/// Per-criterion weight overrides
#[derive(clap::Args)]
struct WeightArgs {
    /// Points for Schema & Types
    #[arg(long, value_name = "N")]
    weight_schema_types: Option<f64>,

    /// Points for Documentation
    #[arg(long, value_name = "N")]
    weight_documentation: Option<f64>,

    /// Points for Paths & Operations
    #[arg(long, value_name = "N")]
    weight_paths_operations: Option<f64>,

    /// Points for Response Codes
    #[arg(long, value_name = "N")]
    weight_response_codes: Option<f64>,

    /// Points for Examples
    #[arg(long, value_name = "N")]
    weight_examples: Option<f64>,

    /// Points for Security
    #[arg(long, value_name = "N")]
    weight_security: Option<f64>,

    /// Points for Best Practices
    #[arg(long, value_name = "N")]
    weight_best_practices: Option<f64>,
}

impl From<&WeightArgs> for WeightsConfig {
    fn from(args: &WeightArgs) -> Self {
        let mut weights = Self::default();
        for (criterion, value) in [
            (Criterion::SchemaTypes, args.weight_schema_types),
            (Criterion::Documentation, args.weight_documentation),
            (Criterion::PathsOperations, args.weight_paths_operations),
            (Criterion::ResponseCodes, args.weight_response_codes),
            (Criterion::Examples, args.weight_examples),
            (Criterion::Security, args.weight_security),
            (Criterion::BestPractices, args.weight_best_practices),
        ] {
            weights.set(criterion, value);
        }
        weights
    }
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path or http(s) URL of the API description
    source: String,

    /// Output format (json for machine-readable output, anything else for text)
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Timeout in seconds for remote documents
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an API description
    Score(ScoreArgs),

    /// Check the structure of an API description without scoring
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .api-scorer.yaml in the current directory
    Init,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::parse(s).ok_or_else(|| {
        format!("invalid severity '{s}' (expected critical, high, medium or low)")
    })
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let overrides = AppConfig {
                weights: WeightsConfig::from(&args.weights),
                output: OutputConfig {
                    format: args.output.unwrap_or_default(),
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    min_score: args.min_score,
                    min_grade: args.min_grade,
                    quiet: cli.quiet,
                    skip_validation: args.skip_validation,
                },
            };
            let (app, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = ScoreConfig {
                min_severity: args.min_severity,
                max_issues: args.max_issues,
                title: args.title,
                timeout: Duration::from_secs(args.timeout),
                ..ScoreConfig::new(args.source, app)
            };
            cli::run_score(config)
        }

        Commands::Validate(args) => cli::run_validate(
            &args.source,
            args.output,
            args.output_file,
            Duration::from_secs(args.timeout),
            cli.quiet,
        ),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "api-scorer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = api_scorer::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    api_scorer::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let effective = AppConfig {
                    weights: (&config.criterion_weights()).into(),
                    ..config
                };
                let yaml =
                    serde_yaml::to_string(&effective).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    api_scorer::config::file::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in api_scorer::config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match api_scorer::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".api-scorer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = api_scorer::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
