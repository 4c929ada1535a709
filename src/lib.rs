//! # factura-ec
//!
//! Invoicing core for a single Ecuadorian business: cédula and RUC
//! validation, discount and IVA totals over form rows, and the export
//! document handed to a PDF renderer.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use factura_ec::core::*;
//! use rust_decimal_macros::dec;
//!
//! let id = validate_identification("1790011674001").unwrap();
//! assert_eq!(id.subtype, Some(RucType::Juridical));
//!
//! let totals = compute_totals(
//!     DiscountPercent::parse("10"),
//!     &[
//!         LineInput::new("1", "Servicio", "100.00", true),
//!         LineInput::new("", "fila incompleta", "", false),
//!     ],
//! );
//! assert_eq!(totals.rounded().grand_total, dec!(103.50));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Identification validation, totals, drafts, provinces, invoice codes |
//! | `export` | Export document for PDF rendering, JSON serialisation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
