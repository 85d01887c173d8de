#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let log = match gemara_conv::parse_evaluation_log(&s) {
        Ok(l) => l,
        Err(_) => return,
    };

    let bytes = match gemara_conv::to_sarif(&log, "https://example.com/base", None) {
        Ok(b) => b,
        Err(e) => panic!("conversion of a parsed log failed: {}", e),
    };

    // The emitted bytes must always be a well-formed SARIF JSON document.
    let doc: serde_json::Value =
        serde_json::from_slice(&bytes).expect("SARIF output must be valid JSON");
    assert_eq!(doc["version"], "2.1.0");
});
