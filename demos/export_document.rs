//! Assemble the export document and print it as JSON.
//!
//! Runnable examples live in `demos/` and are registered as `[[example]]`
//! targets in `Cargo.toml`:
//!
//! ```sh
//! cargo run --example export_document --features export
//! ```

use chrono::NaiveDate;
use factura_ec::core::*;
use factura_ec::export::*;

fn main() {
    let business = BusinessProfileBuilder::new(
        "Papelería Central",
        "1790011674001",
        "Av. Amazonas N34-451",
        "Pichincha",
    )
    .build()
    .expect("business profile should be valid");

    let mut draft = InvoiceDraft::new(InvoiceHeader::new(
        "10000042",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    ))
    .client(ClientDataBuilder::new("Ana Torres", "1710034065").build())
    .seller("Luis");
    *draft.line_mut(0).unwrap() = LineInput::new("2", "Cuaderno", "10.00", false);
    draft
        .add_line(LineInput::new("1", "Mochila", "100.00", true))
        .unwrap();
    draft.set_discount("10");

    let doc = to_document(&draft, Some(&business));
    println!("File: {}", doc.file_name());
    match doc.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("export failed: {e}"),
    }
}
