#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main parsing entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_document_str`, which runs format
/// detection and then deserializes as JSON or YAML.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = api_scorer::parsers::parse_document_str(s);
    }
});
