#![no_main]

use libfuzzer_sys::fuzz_target;

use gemara_conv::GenerateOptions;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let catalog = match gemara_conv::parse_catalog(&s) {
        Ok(c) => c,
        Err(_) => return,
    };

    // Any catalog that parses must convert without panicking; mapping
    // failures (duplicate or empty identifiers) are ordinary errors.
    let oscal = match gemara_conv::catalog_to_oscal(&catalog, &GenerateOptions::default()) {
        Ok(o) => o,
        Err(_) => return,
    };

    // A successfully mapped document must always serialize.
    if let Err(e) = gemara_conv::to_json(&oscal) {
        panic!("mapped OSCAL catalog failed to serialize: {}", e);
    }
});
