use crate::core::{BusinessProfile, InvoiceDraft, format_amount};

use super::{DocumentLine, DocumentTotals, InvoiceDocument, placeholder_business};

/// Assemble the export document from the current draft.
///
/// Totals are computed fresh from the draft's rows. Incomplete rows are
/// printed as typed with a `"0.00"` total.
pub fn to_document(draft: &InvoiceDraft, business: Option<&BusinessProfile>) -> InvoiceDocument {
    let totals = draft.totals();
    let rounded = totals.rounded();

    let items = draft
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| DocumentLine {
            quantity: line.quantity.clone(),
            description: line.description.clone(),
            unit_price: line.unit_price.clone(),
            taxed: line.taxed,
            total: format_amount(totals.line_total(index)),
        })
        .collect();

    if business.is_none() {
        tracing::debug!(code = %draft.header.code, "no business registered, using placeholder");
    }

    InvoiceDocument {
        business: business.cloned().unwrap_or_else(placeholder_business),
        client: draft.client.clone(),
        invoice: draft.header.clone(),
        items,
        totals: DocumentTotals {
            subtotal: format_amount(rounded.subtotal),
            tax: format_amount(rounded.tax),
            discount: totals.discount.value().normalize().to_string(),
            total: format_amount(rounded.grand_total),
        },
    }
}
