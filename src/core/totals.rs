//! Invoice totals: discount, then per-line IVA, then aggregation.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{DiscountPercent, LineError, LineInput, LineItem};

/// IVA rate in percent applied to taxed rows.
pub const IVA_RATE: Decimal = dec!(15);

/// Amounts computed for one row, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmount {
    /// quantity × unit price.
    pub net: Decimal,
    /// `net` after the discount; the row's displayed total.
    pub discounted: Decimal,
    /// IVA on `discounted`, zero for untaxed rows.
    pub tax: Decimal,
}

/// Per-row result: the amounts, or why the row was left out.
pub type LineOutcome = Result<LineAmount, LineError>;

/// Result of [`compute_totals`], unrounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTotals {
    /// Discount actually applied (after clamping).
    pub discount: DiscountPercent,
    /// Sum of discounted row totals.
    pub subtotal: Decimal,
    /// Sum of IVA over taxed rows.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub grand_total: Decimal,
    /// One outcome per input row, in input order.
    pub lines: Vec<LineOutcome>,
}

/// Totals rounded to cents for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedTotals {
    /// Sum of discounted line totals.
    pub subtotal: Decimal,
    /// IVA over taxed lines.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// Round each sum to 2 decimal places.
    pub fn rounded(&self) -> RoundedTotals {
        RoundedTotals {
            subtotal: round_half_up(self.subtotal),
            tax: round_half_up(self.tax),
            grand_total: round_half_up(self.grand_total),
        }
    }

    /// Rows that contributed to the sums.
    pub fn counted(&self) -> usize {
        self.lines.iter().filter(|l| l.is_ok()).count()
    }

    /// Rows left out, with their index and reason.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &LineError)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().err().map(|e| (i, e)))
    }

    /// Displayed total of row `index`: the discounted amount, or zero for a
    /// skipped or nonexistent row.
    pub fn line_total(&self, index: usize) -> Decimal {
        match self.lines.get(index) {
            Some(Ok(amount)) => amount.discounted,
            _ => Decimal::ZERO,
        }
    }
}

/// Compute subtotal, IVA and grand total over the form rows.
///
/// Every call starts from the raw rows; nothing is carried over between
/// calls. Rows whose quantity or unit price is missing, unparseable or
/// negative are left out of the sums and reported in
/// [`InvoiceTotals::lines`].
///
/// ```
/// use factura_ec::core::*;
/// use rust_decimal_macros::dec;
///
/// let totals = compute_totals(
///     DiscountPercent::new(dec!(10)),
///     &[LineInput::new("1", "Servicio", "100.00", true)],
/// );
/// let rounded = totals.rounded();
/// assert_eq!(rounded.subtotal, dec!(90.00));
/// assert_eq!(rounded.tax, dec!(13.50));
/// assert_eq!(rounded.grand_total, dec!(103.50));
/// ```
pub fn compute_totals(discount: DiscountPercent, items: &[LineInput]) -> InvoiceTotals {
    let mut subtotal = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for (index, input) in items.iter().enumerate() {
        let outcome = input
            .parse()
            .and_then(|item| line_amount(&item, discount))
            .and_then(|amount| {
                let next_subtotal = subtotal.checked_add(amount.discounted);
                let next_tax = tax.checked_add(amount.tax);
                match (next_subtotal, next_tax) {
                    (Some(s), Some(t)) if s.checked_add(t).is_some() => {
                        subtotal = s;
                        tax = t;
                        Ok(amount)
                    }
                    _ => Err(LineError::Overflow),
                }
            });

        if let Err(reason) = &outcome {
            tracing::debug!(row = index, %reason, "line left out of totals");
        }
        lines.push(outcome);
    }

    let grand_total = subtotal + tax;
    tracing::trace!(%subtotal, %tax, %grand_total, discount = %discount.value(), "totals computed");

    InvoiceTotals {
        discount,
        subtotal,
        tax,
        grand_total,
        lines,
    }
}

/// Amounts for a single parsed row.
pub fn line_amount(item: &LineItem, discount: DiscountPercent) -> Result<LineAmount, LineError> {
    let net = item
        .quantity
        .checked_mul(item.unit_price)
        .ok_or(LineError::Overflow)?;

    let discounted = if discount.is_zero() {
        net
    } else {
        let reduction = net
            .checked_mul(discount.value())
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(LineError::Overflow)?;
        net - reduction
    };

    let tax = if item.taxed {
        discounted
            .checked_mul(IVA_RATE)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(LineError::Overflow)?
    } else {
        Decimal::ZERO
    };

    Ok(LineAmount {
        net,
        discounted,
        tax,
    })
}

/// Round to cents using half-up (commercial rounding).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount with exactly two decimals, e.g. `"103.50"`.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Amount in US dollars, e.g. `"$103.50"`.
pub fn format_currency(value: Decimal) -> String {
    format!("${}", format_amount(value))
}
