use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One invoice row as typed into the form.
///
/// Quantity and unit price stay as raw text: a row is routinely incomplete
/// while the user is typing, and such rows are skipped by the totals engine
/// rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInput {
    /// Quantity field text.
    pub quantity: String,
    /// Free-text description.
    pub description: String,
    /// Unit price field text.
    pub unit_price: String,
    /// Whether IVA applies to this row.
    pub taxed: bool,
}

impl LineInput {
    /// Row with the given field texts, stored as typed.
    pub fn new(
        quantity: impl Into<String>,
        description: impl Into<String>,
        unit_price: impl Into<String>,
        taxed: bool,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            description: description.into(),
            unit_price: unit_price.into(),
            taxed,
        }
    }

    /// Parse the row into a [`LineItem`].
    ///
    /// Missing fields are reported before unparseable ones, and unparseable
    /// before negative ones.
    pub fn parse(&self) -> Result<LineItem, LineError> {
        let quantity = self.quantity.trim();
        let unit_price = self.unit_price.trim();

        if quantity.is_empty() {
            return Err(LineError::MissingQuantity);
        }
        if unit_price.is_empty() {
            return Err(LineError::MissingUnitPrice);
        }

        let quantity: Decimal = quantity
            .parse()
            .map_err(|_| LineError::UnparseableQuantity(quantity.to_string()))?;
        let unit_price: Decimal = unit_price
            .parse()
            .map_err(|_| LineError::UnparseableUnitPrice(unit_price.to_string()))?;

        if quantity < Decimal::ZERO {
            return Err(LineError::NegativeQuantity(quantity));
        }
        if unit_price < Decimal::ZERO {
            return Err(LineError::NegativeUnitPrice(unit_price));
        }

        Ok(LineItem {
            quantity,
            unit_price,
            description: self.description.clone(),
            taxed: self.taxed,
        })
    }
}

impl From<LineItem> for LineInput {
    fn from(item: LineItem) -> Self {
        Self {
            quantity: item.quantity.to_string(),
            description: item.description,
            unit_price: item.unit_price.to_string(),
            taxed: item.taxed,
        }
    }
}

/// A complete, parsed invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Invoiced quantity (non-negative).
    pub quantity: Decimal,
    /// Price per unit (non-negative).
    pub unit_price: Decimal,
    /// Free-text description.
    pub description: String,
    /// Whether IVA applies to this row.
    pub taxed: bool,
}

/// Why a row does not contribute to the invoice totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("quantity is empty")]
    MissingQuantity,

    #[error("unit price is empty")]
    MissingUnitPrice,

    #[error("quantity '{0}' is not a number")]
    UnparseableQuantity(String),

    #[error("unit price '{0}' is not a number")]
    UnparseableUnitPrice(String),

    #[error("quantity {0} is negative")]
    NegativeQuantity(Decimal),

    #[error("unit price {0} is negative")]
    NegativeUnitPrice(Decimal),

    #[error("amount is too large to compute")]
    Overflow,
}

/// Discount percentage applied uniformly to every row, clamped to 0–100.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Everything discounted.
    pub const FULL: Self = Self(Decimal::ONE_HUNDRED);

    /// Clamp `value` into 0–100.
    pub fn new(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Parse the discount field; empty or unparseable text means no discount.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<Decimal>()
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Percentage as a number between 0 and 100.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when no discount applies.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for DiscountPercent {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<DiscountPercent> for Decimal {
    fn from(discount: DiscountPercent) -> Self {
        discount.0
    }
}

/// Customer block of the invoice form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    /// Customer name.
    pub name: String,
    /// Cédula or RUC as entered.
    pub identification: String,
    /// Street address.
    pub address: String,
    /// Province name.
    pub province: String,
    /// City name (empty until a province is chosen).
    pub city: String,
}

/// Invoice block of the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// 8-digit invoice code.
    pub code: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Salesperson name.
    pub seller: String,
}

impl InvoiceHeader {
    pub fn new(code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            code: code.into(),
            date,
            seller: String::new(),
        }
    }
}

/// The single registered business issuing invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Trading name of the business.
    pub business_name: String,
    /// 13-digit RUC.
    pub ruc: String,
    /// Street address.
    pub address: String,
    /// Province name.
    pub province: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_complete_row() {
        let item = LineInput::new("2", "Cuaderno", "10.00", true).parse().unwrap();
        assert_eq!(item.quantity, dec!(2));
        assert_eq!(item.unit_price, dec!(10.00));
        assert_eq!(item.description, "Cuaderno");
        assert!(item.taxed);
    }

    #[test]
    fn parse_trims_whitespace() {
        let item = LineInput::new(" 3 ", "", " 1.50", false).parse().unwrap();
        assert_eq!(item.quantity, dec!(3));
        assert_eq!(item.unit_price, dec!(1.50));
    }

    #[test]
    fn missing_fields_reported_first() {
        assert_eq!(
            LineInput::new("", "x", "abc", false).parse(),
            Err(LineError::MissingQuantity)
        );
        assert_eq!(
            LineInput::new("abc", "x", "  ", false).parse(),
            Err(LineError::MissingUnitPrice)
        );
    }

    #[test]
    fn unparseable_fields() {
        assert_eq!(
            LineInput::new("dos", "x", "1", false).parse(),
            Err(LineError::UnparseableQuantity("dos".into()))
        );
        assert_eq!(
            LineInput::new("2", "x", "1,50", false).parse(),
            Err(LineError::UnparseableUnitPrice("1,50".into()))
        );
    }

    #[test]
    fn negative_fields() {
        assert_eq!(
            LineInput::new("-1", "x", "1", false).parse(),
            Err(LineError::NegativeQuantity(dec!(-1)))
        );
        assert_eq!(
            LineInput::new("1", "x", "-0.01", false).parse(),
            Err(LineError::NegativeUnitPrice(dec!(-0.01)))
        );
    }

    #[test]
    fn discount_clamps() {
        assert_eq!(DiscountPercent::new(dec!(150)), DiscountPercent::FULL);
        assert_eq!(DiscountPercent::new(dec!(-5)), DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::new(dec!(12.5)).value(), dec!(12.5));
    }

    #[test]
    fn discount_parse_is_forgiving() {
        assert_eq!(DiscountPercent::parse(""), DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::parse("diez"), DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::parse(" 10 ").value(), dec!(10));
        assert_eq!(DiscountPercent::parse("250"), DiscountPercent::FULL);
    }

    #[test]
    fn discount_deserialization_clamps() {
        let d: DiscountPercent = serde_json::from_str("\"120\"").unwrap();
        assert_eq!(d, DiscountPercent::FULL);
    }

    #[test]
    fn typed_item_round_trips_to_input() {
        let item = LineItem {
            quantity: dec!(4),
            unit_price: dec!(2.25),
            description: "Lápiz".into(),
            taxed: false,
        };
        let input = LineInput::from(item.clone());
        assert_eq!(input.parse().unwrap(), item);
    }
}
