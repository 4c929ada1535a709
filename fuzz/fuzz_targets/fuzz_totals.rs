#![no_main]

use factura_ec::{DiscountPercent, LineInput, compute_totals};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the discount; then one row per line as quantity|price[|taxed].
        let mut lines = s.lines();
        let discount = DiscountPercent::parse(lines.next().unwrap_or(""));
        let rows: Vec<LineInput> = lines
            .map(|line| {
                let mut fields = line.split('|');
                LineInput::new(
                    fields.next().unwrap_or(""),
                    "",
                    fields.next().unwrap_or(""),
                    fields.next().is_some(),
                )
            })
            .collect();
        let totals = compute_totals(discount, &rows);
        assert_eq!(totals.grand_total, totals.subtotal + totals.tax);
    }
});
