//! Validate cédulas and RUCs and print why rejected ones fail.
//!
//! Runnable examples live in `demos/` and are registered as `[[example]]`
//! targets in `Cargo.toml`:
//!
//! ```sh
//! cargo run --example identification
//! ```

use factura_ec::core::*;

fn main() {
    let inputs = [
        "1710034065",
        "1710034066",
        "1710034065001",
        "1760001550001",
        "1790011674001",
        "1790011674002",
        "1780011674001",
        "2510034065",
        "17100340",
        "17-1003406",
    ];

    for raw in inputs {
        match validate_identification(raw) {
            Ok(id) => {
                let subtype = match id.subtype {
                    Some(RucType::Natural) => " (natural person)",
                    Some(RucType::PublicEntity) => " (public entity)",
                    Some(RucType::Juridical) => " (company)",
                    None => "",
                };
                println!(
                    "{raw:<15} valid {}{subtype}, issued in {}",
                    id.kind,
                    id.province_name()
                );
            }
            Err(e) => println!("{raw:<15} [{}] {}", e.tag(), e),
        }
    }

    println!("\n=== Business registration ===");
    match BusinessProfileBuilder::new("Papelería Central", "1710034065", "Av. Amazonas", "Pichincha")
        .build()
    {
        Ok(profile) => println!("  registered {}", profile.business_name),
        Err(e) => println!("  rejected: {e}"),
    }
}
