//! Build a draft invoice and print its totals.
//!
//! Runnable examples live in `demos/` and are registered as `[[example]]`
//! targets in `Cargo.toml`:
//!
//! ```sh
//! cargo run --example basic_invoice
//! ```

use chrono::NaiveDate;
use factura_ec::core::*;

fn main() {
    let mut codes = InvoiceCodeSequence::new();
    let code = codes.next_code().expect("fresh sequence has codes left");

    let mut draft = InvoiceDraft::new(InvoiceHeader::new(
        code,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    ))
    .client(
        ClientDataBuilder::new("Ana Torres", "1710034065")
            .address("Av. 10 de Agosto N24-12")
            .province("Pichincha")
            .city("Quito")
            .build(),
    )
    .seller("Luis Pérez");

    *draft.line_mut(0).unwrap() = LineInput::new("2", "Cuaderno universitario", "3.50", true);
    draft
        .add_line(LineInput::new("1", "Mochila escolar", "24.90", true))
        .unwrap();
    draft
        .add_line(LineInput::new("10", "Lápiz HB", "0.35", false))
        .unwrap();
    // Still being typed: left out of the totals.
    draft
        .add_line(LineInput::new("", "Borrador", "", false))
        .unwrap();
    draft.set_discount("5");

    let totals = draft.totals();
    println!("Invoice: {}", draft.header.code);
    println!("Date:    {}", draft.header.date);
    println!("Client:  {} ({})", draft.client.name, draft.client.identification);
    println!("---");
    for (i, line) in draft.lines().iter().enumerate() {
        let iva = if line.taxed { " (IVA)" } else { "" };
        println!(
            "  {:>3} x {:<24} @ {:>6} = {:>8}{}",
            line.quantity,
            line.description,
            line.unit_price,
            format_currency(totals.line_total(i)),
            iva
        );
    }
    for (i, reason) in totals.skipped() {
        println!("  row {} left out: {}", i + 1, reason);
    }
    println!("---");
    let rounded = totals.rounded();
    println!("Discount:  {}%", totals.discount.value());
    println!("Subtotal:  {}", format_currency(rounded.subtotal));
    println!("IVA (15%): {}", format_currency(rounded.tax));
    println!("Total:     {}", format_currency(rounded.grand_total));
}
