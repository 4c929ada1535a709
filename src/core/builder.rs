use chrono::NaiveDate;

use super::error::{FacturaError, ValidationError};
use super::identification::{self, Identification, IdentificationError};
use super::provinces;
use super::totals::{self, InvoiceTotals};
use super::types::*;

/// Maximum number of rows on one invoice.
pub const MAX_LINE_ITEMS: usize = 8;

/// The invoice form's state: client, header, rows and discount, as typed.
///
/// A draft always holds at least one row; the first row cannot be removed.
///
/// ```
/// use factura_ec::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let mut draft = InvoiceDraft::new(InvoiceHeader::new(
///     "10000000",
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// ));
/// *draft.line_mut(0).unwrap() = LineInput::new("2", "Cuaderno", "10.00", false);
/// draft.add_line(LineInput::new("1", "Servicio", "100.00", true)).unwrap();
/// draft.set_discount("10");
///
/// let totals = draft.totals().rounded();
/// assert_eq!(totals.subtotal, dec!(108.00));
/// assert_eq!(totals.tax, dec!(13.50));
/// assert_eq!(totals.grand_total, dec!(121.50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Customer block.
    pub client: ClientData,
    /// Invoice code, date and salesperson.
    pub header: InvoiceHeader,
    lines: Vec<LineInput>,
    discount: String,
}

impl InvoiceDraft {
    /// New draft with one empty row and a discount of `"0"`.
    pub fn new(header: InvoiceHeader) -> Self {
        Self {
            client: ClientData::default(),
            header,
            lines: vec![LineInput::default()],
            discount: "0".to_string(),
        }
    }

    pub fn client(mut self, client: ClientData) -> Self {
        self.client = client;
        self
    }

    pub fn seller(mut self, seller: impl Into<String>) -> Self {
        self.header.seller = seller.into();
        self
    }

    pub fn lines(&self) -> &[LineInput] {
        &self.lines
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut LineInput> {
        self.lines.get_mut(index)
    }

    /// Append a row; fails once the draft holds [`MAX_LINE_ITEMS`] rows.
    pub fn add_line(&mut self, line: LineInput) -> Result<(), FacturaError> {
        if self.lines.len() >= MAX_LINE_ITEMS {
            tracing::debug!(rows = self.lines.len(), "row limit reached");
            return Err(FacturaError::Builder(format!(
                "an invoice cannot have more than {MAX_LINE_ITEMS} line items"
            )));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Remove and return row `index`. The first row is permanent.
    pub fn remove_line(&mut self, index: usize) -> Result<LineInput, FacturaError> {
        if index == 0 {
            return Err(FacturaError::Builder(
                "the first line item cannot be removed".into(),
            ));
        }
        if index >= self.lines.len() {
            return Err(FacturaError::Builder(format!(
                "no line item at position {index}"
            )));
        }
        Ok(self.lines.remove(index))
    }

    /// Store the discount field text as typed.
    pub fn set_discount(&mut self, raw: impl Into<String>) {
        self.discount = raw.into();
    }

    /// Discount field text as typed.
    pub fn discount_text(&self) -> &str {
        &self.discount
    }

    /// Discount as applied: unparseable text is 0, values are clamped to 0–100.
    pub fn discount(&self) -> DiscountPercent {
        DiscountPercent::parse(&self.discount)
    }

    /// Fresh totals over the current rows and discount.
    pub fn totals(&self) -> InvoiceTotals {
        totals::compute_totals(self.discount(), &self.lines)
    }

    /// Validate the client's cédula/RUC.
    ///
    /// `None` while the field is empty; the form only checks what was typed.
    pub fn validate_client_identification(
        &self,
    ) -> Option<Result<Identification, IdentificationError>> {
        if self.client.identification.is_empty() {
            return None;
        }
        Some(identification::validate_identification(
            &self.client.identification,
        ))
    }

    /// Start a new invoice: clear client, salesperson and rows, reset the
    /// discount, and take a new code and date.
    pub fn reset(&mut self, code: impl Into<String>, date: NaiveDate) {
        *self = Self::new(InvoiceHeader::new(code, date));
    }
}

/// Builder for the client block.
pub struct ClientDataBuilder {
    name: String,
    identification: String,
    address: String,
    province: String,
    city: String,
}

impl ClientDataBuilder {
    pub fn new(name: impl Into<String>, identification: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identification: identification.into(),
            address: String::new(),
            province: String::new(),
            city: String::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the province; clears the city, which depends on it.
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self.city.clear();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn build(self) -> ClientData {
        ClientData {
            name: self.name,
            identification: self.identification,
            address: self.address,
            province: self.province,
            city: self.city,
        }
    }
}

/// Builder for the one-time business registration.
pub struct BusinessProfileBuilder {
    business_name: String,
    ruc: String,
    address: String,
    province: String,
}

impl BusinessProfileBuilder {
    pub fn new(
        business_name: impl Into<String>,
        ruc: impl Into<String>,
        address: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            ruc: ruc.into(),
            address: address.into(),
            province: province.into(),
        }
    }

    /// Build the profile, running [`validate_business_profile`].
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<BusinessProfile, FacturaError> {
        let profile = BusinessProfile {
            business_name: self.business_name,
            ruc: self.ruc,
            address: self.address,
            province: self.province,
        };

        let errors = validate_business_profile(&profile);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FacturaError::Validation(msg));
        }

        Ok(profile)
    }
}

/// Validate a business profile: required fields, RUC and province.
///
/// The RUC is only checked when present, so an empty form reports one error
/// per empty field.
pub fn validate_business_profile(profile: &BusinessProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.business_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.business_name",
            "business name must not be empty",
        ));
    }

    if profile.ruc.is_empty() {
        errors.push(ValidationError::new("business.ruc", "RUC must not be empty"));
    } else if let Err(err) = identification::validate_ruc(&profile.ruc) {
        errors.push(ValidationError::identification("business.ruc", &err));
    }

    if profile.address.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.address",
            "address must not be empty",
        ));
    }

    if profile.province.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.province",
            "province must not be empty",
        ));
    } else if !provinces::is_known_province(&profile.province) {
        errors.push(ValidationError::new(
            "business.province",
            format!("'{}' is not an Ecuadorian province", profile.province),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn test_draft() -> InvoiceDraft {
        InvoiceDraft::new(InvoiceHeader::new("10000000", test_date()))
    }

    #[test]
    fn new_draft_has_one_empty_row() {
        let draft = test_draft();
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0], LineInput::default());
        assert_eq!(draft.discount_text(), "0");
        assert_eq!(draft.totals().grand_total, dec!(0));
    }

    #[test]
    fn row_limit() {
        let mut draft = test_draft();
        for _ in 1..MAX_LINE_ITEMS {
            draft.add_line(LineInput::default()).unwrap();
        }
        assert_eq!(draft.lines().len(), MAX_LINE_ITEMS);

        let err = draft.add_line(LineInput::default()).unwrap_err();
        assert!(err.to_string().contains("more than 8"));
        assert_eq!(draft.lines().len(), MAX_LINE_ITEMS);
    }

    #[test]
    fn first_row_is_permanent() {
        let mut draft = test_draft();
        draft
            .add_line(LineInput::new("1", "b", "2", false))
            .unwrap();
        assert!(draft.remove_line(0).is_err());
        assert!(draft.remove_line(5).is_err());

        let removed = draft.remove_line(1).unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(draft.lines().len(), 1);
    }

    #[test]
    fn totals_follow_edits() {
        let mut draft = test_draft();
        draft.line_mut(0).unwrap().quantity = "2".into();
        assert_eq!(draft.totals().subtotal, dec!(0));

        draft.line_mut(0).unwrap().unit_price = "10".into();
        assert_eq!(draft.totals().subtotal, dec!(20));

        draft.line_mut(0).unwrap().taxed = true;
        assert_eq!(draft.totals().tax, dec!(3));

        draft.set_discount("50");
        assert_eq!(draft.totals().subtotal, dec!(10));
        assert_eq!(draft.totals().tax, dec!(1.5));
    }

    #[test]
    fn unparseable_discount_counts_as_zero() {
        let mut draft = test_draft();
        draft.set_discount("abc");
        assert_eq!(draft.discount(), DiscountPercent::ZERO);
        assert_eq!(draft.discount_text(), "abc");
    }

    #[test]
    fn client_identification_only_checked_when_present() {
        let mut draft = test_draft();
        assert!(draft.validate_client_identification().is_none());

        draft.client.identification = "1710034065".into();
        assert!(matches!(draft.validate_client_identification(), Some(Ok(_))));

        draft.client.identification = "1710034066".into();
        assert!(matches!(draft.validate_client_identification(), Some(Err(_))));
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = test_draft()
            .client(ClientDataBuilder::new("Ana", "1710034065").build())
            .seller("Luis");
        draft.add_line(LineInput::new("1", "x", "1", true)).unwrap();
        draft.set_discount("20");

        let next_day = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        draft.reset("10000001", next_day);

        assert_eq!(draft.client, ClientData::default());
        assert_eq!(draft.header.code, "10000001");
        assert_eq!(draft.header.date, next_day);
        assert!(draft.header.seller.is_empty());
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.discount_text(), "0");
    }

    #[test]
    fn client_province_change_clears_city() {
        let client = ClientDataBuilder::new("Ana", "1710034065")
            .province("Pichincha")
            .city("Quito")
            .province("Guayas")
            .build();
        assert_eq!(client.province, "Guayas");
        assert!(client.city.is_empty());
    }

    #[test]
    fn valid_business_profile() {
        let profile =
            BusinessProfileBuilder::new("Papelería Central", "1790011674001", "Av. Amazonas", "Pichincha")
                .build()
                .unwrap();
        assert_eq!(profile.ruc, "1790011674001");
    }

    #[test]
    fn empty_business_profile_lists_every_field() {
        let errors = validate_business_profile(&BusinessProfile {
            business_name: String::new(),
            ruc: String::new(),
            address: String::new(),
            province: String::new(),
        });
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "business.business_name",
                "business.ruc",
                "business.address",
                "business.province"
            ]
        );
    }

    #[test]
    fn business_profile_rejects_cedula_and_bad_ruc() {
        let err = BusinessProfileBuilder::new("Tienda", "1710034065", "Calle 1", "Azuay")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("[BadLength]"));

        let err = BusinessProfileBuilder::new("Tienda", "1760001550", "Calle 1", "Azuay")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("[BadLength]"));
        assert!(!err.to_string().contains("third digit"));

        let errors = validate_business_profile(&BusinessProfile {
            business_name: "Tienda".into(),
            ruc: "1790011675001".into(),
            address: "Calle 1".into(),
            province: "Azuay".into(),
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, Some("BadCheckDigit"));
    }

    #[test]
    fn business_profile_unknown_province() {
        let errors = validate_business_profile(&BusinessProfile {
            business_name: "Tienda".into(),
            ruc: "1790011674001".into(),
            address: "Calle 1".into(),
            province: "Oriente".into(),
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "business.province");
    }
}
