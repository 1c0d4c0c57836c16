#![no_main]

//! Fuzz target for analyzer JSON output parsing.
//!
//! Arbitrary bytes must either load into a document or produce a load error.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(doc) = importfix_analysis::parse_analysis(s) {
        // Accepted documents re-serialize cleanly.
        let json = serde_json::to_string(&doc).expect("serialize accepted document");
        let _ = importfix_analysis::parse_analysis(&json);
    }

    let _ = serde_json::from_str::<importfix_types::Finding>(s);
    let _ = serde_json::from_str::<importfix_types::SourceRef>(s);
});
