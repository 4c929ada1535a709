#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = factura_ec::input::sanitize_price(s);
        let _ = factura_ec::input::check_quantity(s);
        let _ = factura_ec::input::check_discount(s);
    }
});
