//! End-to-end tests for loading, validating, reporting and the command
//! handlers, driven by the fixture documents.

use api_scorer::{
    cli::{run_score, run_validate, ScoreConfig},
    config::{load_config_file, AppConfig},
    create_reporter, detect_format, load_document, load_source,
    parsers::{DocumentFormat, ParseError},
    pipeline::{exit_codes, render_report, validate_loaded, LoadedDocument, PipelineError},
    validate_document, ApiScorer, Criterion, ReportConfig, ReportFormat, Severity,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_source(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

// ============================================================================
// Acquisition
// ============================================================================

mod acquisition {
    use super::*;

    #[test]
    fn test_detect_fixture_formats() {
        let yaml = std::fs::read_to_string(fixture_path("petstore.yaml")).unwrap();
        let detected = detect_format(&yaml).expect("yaml detected");
        assert_eq!(detected.format, DocumentFormat::Yaml);
        assert_eq!(detected.version.as_deref(), Some("3.0.3"));

        let json = std::fs::read_to_string(fixture_path("petstore.json")).unwrap();
        let detected = detect_format(&json).expect("json detected");
        assert_eq!(detected.format, DocumentFormat::Json);
    }

    #[test]
    fn test_prose_is_rejected() {
        let content = std::fs::read_to_string(fixture_path("not-a-document.txt")).unwrap();
        assert!(detect_format(&content).is_none());
        assert!(matches!(
            load_document(&fixture_path("not-a-document.txt")),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_document(&fixture_path("does-not-exist.yaml"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }

    #[test]
    fn test_load_source_names_the_file() {
        let err = load_source(&fixture_source("does-not-exist.yaml"), Duration::from_secs(1))
            .unwrap_err();
        assert!(err.to_string().contains("does-not-exist.yaml"), "{err}");
    }

    #[test]
    fn test_extensions_are_preserved() {
        let doc = api_scorer::parse_document_str(
            "openapi: 3.1.0\ninfo:\n  title: X\n  version: '1'\n  x-logo: logo.png\npaths: {}\nx-internal: true\n",
        )
        .unwrap();
        assert_eq!(doc.extensions["x-internal"], serde_json::json!(true));
        assert_eq!(doc.info.extensions["x-logo"], serde_json::json!("logo.png"));
    }
}

// ============================================================================
// Validation
// ============================================================================

mod validation {
    use super::*;

    #[test]
    fn test_fixtures_are_valid() {
        for name in ["petstore.yaml", "petstore.json", "users-minimal.yaml", "legacy_api.yaml"] {
            let doc = load_document(&fixture_path(name)).unwrap();
            let result = validate_document(&doc);
            assert!(result.is_valid(), "{name}: {:?}", result.issues);
        }
    }

    #[test]
    fn test_missing_paths_fixture() {
        let doc = load_document(&fixture_path("missing-paths.yaml")).unwrap();
        let result = validate_document(&doc);
        assert!(!result.is_valid());
        assert_eq!(result.error_count, 2);
        let locations: Vec<&str> = result.issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["info.title", "paths"]);
    }

    #[test]
    fn test_validate_loaded_can_fail_fast() {
        let doc = load_document(&fixture_path("missing-paths.yaml")).unwrap();
        let loaded = LoadedDocument::new(doc, "missing-paths.yaml");

        assert!(validate_loaded(&loaded, false).is_ok());
        let err = validate_loaded(&loaded, true).unwrap_err();
        let pipeline_err = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert_eq!(pipeline_err.exit_code(), exit_codes::VALIDATION_FAILED);
    }
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    fn legacy_report() -> api_scorer::ScoreReport {
        ApiScorer::new().score(&load_document(&fixture_path("legacy_api.yaml")).unwrap())
    }

    #[test]
    fn test_every_format_renders() {
        let report = legacy_report();
        let config = ReportConfig::default().with_source("legacy_api.yaml");
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Html,
            ReportFormat::Sarif,
        ] {
            let rendered = render_report(&report, format, &config, false).unwrap();
            assert!(!rendered.is_empty(), "{format}");
            if format != ReportFormat::Sarif {
                assert!(rendered.contains("Legacy Orders"), "{format} omits the title");
            }
        }
    }

    #[test]
    fn test_json_report_contains_full_report() {
        let report = legacy_report();
        let config = ReportConfig::default().with_min_severity(Severity::High);
        let rendered = create_reporter(ReportFormat::Json, false)
            .generate(&report, &config)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["tool"]["name"], "api-scorer");
        assert_eq!(value["report"]["overallScore"], 55.0);
        assert_eq!(value["report"]["grade"], "F");
        assert_eq!(
            value["report"]["totalIssues"].as_u64().unwrap() as usize,
            report.total_issues
        );
    }

    #[test]
    fn test_sarif_locations_point_at_source() {
        let report = legacy_report();
        let config = ReportConfig::default().with_source("specs/legacy_api.yaml");
        let rendered = create_reporter(ReportFormat::Sarif, false)
            .generate(&report, &config)
            .unwrap();
        let sarif: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let run = &sarif["runs"][0];
        assert_eq!(
            run["tool"]["driver"]["rules"].as_array().unwrap().len(),
            Criterion::ALL.len()
        );
        let results = run["results"].as_array().unwrap();
        assert_eq!(results.len(), report.total_issues);
        assert!(results.iter().all(|r| {
            r["locations"][0]["physicalLocation"]["artifactLocation"]["uri"]
                == "specs/legacy_api.yaml"
        }));
        assert!(results.iter().any(|r| r["level"] == "error"));
    }

    #[test]
    fn test_markdown_limits_issues() {
        let report = legacy_report();
        let config = ReportConfig::default().with_max_issues(3);
        let rendered = create_reporter(ReportFormat::Markdown, false)
            .generate(&report, &config)
            .unwrap();

        assert!(rendered.contains("## Criteria"));
        assert!(rendered.contains(&format!(
            "_{} issue(s) not shown._",
            report.total_issues - 3
        )));
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod configuration {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_file_weights_flow_into_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".api-scorer.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "weights:\n  security: 30\n  examples: 0").unwrap();

        let config = load_config_file(&path).unwrap();
        let doc = load_document(&fixture_path("users-minimal.yaml")).unwrap();
        let report = ApiScorer::with_weights(config.criterion_weights()).score(&doc);

        assert!((report.overall_score - 92.0).abs() < f64::EPSILON);
        assert!((report.max_score() - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api-scorer.yaml");
        std::fs::write(&path, "weights: [1, 2").unwrap();
        assert!(load_config_file(&path).is_err());
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

mod commands {
    use super::*;

    fn score_config(source: &str, format: ReportFormat, out: &Path) -> ScoreConfig {
        let app = AppConfig::builder()
            .output_format(format)
            .output_file(Some(out.to_path_buf()))
            .quiet(true)
            .build();
        ScoreConfig::new(source, app)
    }

    #[test]
    fn test_score_petstore_passes_gate() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.md");
        let mut config = score_config(&fixture_source("petstore.yaml"), ReportFormat::Markdown, &out);
        config.app.behavior.min_grade = Some("A".to_string());

        assert_eq!(run_score(config).unwrap(), exit_codes::SUCCESS);
        let markdown = std::fs::read_to_string(&out).unwrap();
        assert!(markdown.starts_with("# Petstore"));
        assert!(markdown.contains("No issues to report."));
    }

    #[test]
    fn test_score_legacy_fails_gate() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.sarif");
        let mut config = score_config(&fixture_source("legacy_api.yaml"), ReportFormat::Sarif, &out);
        config.app.behavior.min_score = Some(60.0);

        assert_eq!(run_score(config).unwrap(), exit_codes::BELOW_THRESHOLD);
        assert!(out.exists(), "report is written before the gate is applied");
    }

    #[test]
    fn test_score_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let config = score_config(&fixture_source("missing-paths.yaml"), ReportFormat::Json, &out);

        assert_eq!(run_score(config).unwrap(), exit_codes::VALIDATION_FAILED);
    }

    #[test]
    fn test_score_unreadable_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let config = score_config(&fixture_source("not-a-document.txt"), ReportFormat::Json, &out);

        let err = run_score(config).unwrap_err();
        let pipeline_err = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert_eq!(pipeline_err.exit_code(), exit_codes::ERROR);
    }

    #[test]
    fn test_validate_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("validation.txt");

        let code = run_validate(
            &fixture_source("petstore.yaml"),
            ReportFormat::Summary,
            Some(out.clone()),
            Duration::from_secs(1),
            true,
        )
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(std::fs::read_to_string(&out)
            .unwrap()
            .contains("valid (0 error(s), 0 warning(s))"));

        let code = run_validate(
            &fixture_source("missing-paths.yaml"),
            ReportFormat::Summary,
            Some(out.clone()),
            Duration::from_secs(1),
            true,
        )
        .unwrap();
        assert_eq!(code, exit_codes::VALIDATION_FAILED);
        assert!(std::fs::read_to_string(&out)
            .unwrap()
            .contains("invalid (2 error(s), 0 warning(s))"));
    }
}
