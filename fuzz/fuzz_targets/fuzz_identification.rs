#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine; panics are bugs.
        let _ = factura_ec::validate_identification(s);
        let _ = factura_ec::validate_ruc(s);
    }
});
