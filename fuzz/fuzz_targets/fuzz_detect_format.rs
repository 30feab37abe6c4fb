#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the format detection logic.
///
/// Exercises the confidence heuristics and version marker extraction
/// without deserializing.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = api_scorer::parsers::detect_format(s);
    }
});
