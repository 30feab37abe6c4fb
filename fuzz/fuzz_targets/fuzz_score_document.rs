#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz scoring and validation of any input that parses.
///
/// Scores must stay within the weight budget whatever the document shape.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = api_scorer::parsers::parse_document_str(s) else {
        return;
    };
    let _ = api_scorer::validate_document(&doc);
    let report = api_scorer::ApiScorer::new().score(&doc);
    assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
});
