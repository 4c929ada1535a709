//! Export document for the PDF renderer.
//!
//! The renderer lays out a finished document on a page; it does no
//! arithmetic. This module gathers everything it needs from an
//! [`InvoiceDraft`](crate::core::InvoiceDraft) and the registered business:
//!
//! - `business`: the issuing business (placeholder when none is registered)
//! - `client` / `invoice`: the form's customer and header blocks
//! - `items`: every row as typed, with its computed total
//! - `totals`: subtotal, IVA, discount and total as 2-decimal strings
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use factura_ec::core::*;
//! use factura_ec::export::*;
//!
//! let mut draft = InvoiceDraft::new(InvoiceHeader::new(
//!     "10000000",
//!     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//! ))
//! .client(ClientDataBuilder::new("Ana Torres", "1710034065").build());
//! *draft.line_mut(0).unwrap() = LineInput::new("2", "Cuaderno", "1.50", true);
//!
//! let doc = to_document(&draft, None);
//! assert_eq!(doc.totals.total, "3.45");
//! assert_eq!(doc.file_name(), "Factura_1710034065_10000000.pdf");
//! ```

mod document;

pub use document::to_document;

use serde::{Deserialize, Serialize};

use crate::core::{BusinessProfile, ClientData, FacturaError, InvoiceHeader};

/// Prefix of exported file names.
pub const FILE_PREFIX: &str = "Factura";

/// Value shown for business fields when no business is registered.
pub const PLACEHOLDER: &str = "N/A";

/// Everything the PDF renderer prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub business: BusinessProfile,
    pub client: ClientData,
    pub invoice: InvoiceHeader,
    pub items: Vec<DocumentLine>,
    pub totals: DocumentTotals,
}

/// One printed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLine {
    /// Quantity as typed.
    pub quantity: String,
    pub description: String,
    /// Unit price as typed.
    pub unit_price: String,
    /// Printed with an IVA marker when set.
    pub taxed: bool,
    /// Discounted row total, `"0.00"` for incomplete rows.
    pub total: String,
}

/// Printed totals, without currency sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: String,
    pub tax: String,
    /// Discount percentage applied.
    pub discount: String,
    pub total: String,
}

impl InvoiceDocument {
    /// Output file name: `Factura_{identification}_{code}.pdf`.
    ///
    /// Path separators in either part are replaced with `_`.
    pub fn file_name(&self) -> String {
        format!(
            "{FILE_PREFIX}_{}_{}.pdf",
            file_name_part(&self.client.identification),
            file_name_part(&self.invoice.code)
        )
    }

    /// Pretty-printed JSON for handing the document to an external renderer.
    pub fn to_json(&self) -> Result<String, FacturaError> {
        serde_json::to_string_pretty(self).map_err(|e| FacturaError::Export(e.to_string()))
    }

    /// Parse a document previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, FacturaError> {
        serde_json::from_str(json).map_err(|e| FacturaError::Export(e.to_string()))
    }
}

/// Business shown when none has been registered yet.
pub fn placeholder_business() -> BusinessProfile {
    BusinessProfile {
        business_name: PLACEHOLDER.into(),
        ruc: PLACEHOLDER.into(),
        address: PLACEHOLDER.into(),
        province: PLACEHOLDER.into(),
    }
}

fn file_name_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}
