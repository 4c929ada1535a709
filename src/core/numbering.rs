use super::error::FacturaError;

/// Smallest 8-digit invoice code.
pub const FIRST_INVOICE_CODE: u32 = 10_000_000;

/// Largest 8-digit invoice code.
pub const LAST_INVOICE_CODE: u32 = 99_999_999;

/// Invoice code generator.
///
/// Codes are 8-digit numbers issued in ascending order, starting at
/// `10000000`. The sequence never wraps: once `99999999` has been issued,
/// [`next_code`](Self::next_code) returns an error.
#[derive(Debug, Clone)]
pub struct InvoiceCodeSequence {
    next: u32,
}

impl Default for InvoiceCodeSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceCodeSequence {
    /// Create a new sequence starting at `10000000`.
    pub fn new() -> Self {
        Self {
            next: FIRST_INVOICE_CODE,
        }
    }

    /// Create a sequence continuing from a given code.
    pub fn starting_at(next: u32) -> Result<Self, FacturaError> {
        if !(FIRST_INVOICE_CODE..=LAST_INVOICE_CODE).contains(&next) {
            return Err(FacturaError::Numbering(format!(
                "invoice code {next} is outside {FIRST_INVOICE_CODE}..={LAST_INVOICE_CODE}"
            )));
        }
        Ok(Self { next })
    }

    /// Issue the next code.
    pub fn next_code(&mut self) -> Result<String, FacturaError> {
        let code = self.peek()?;
        self.next += 1;
        Ok(code)
    }

    /// Preview the next code without consuming it.
    pub fn peek(&self) -> Result<String, FacturaError> {
        if self.next > LAST_INVOICE_CODE {
            return Err(FacturaError::Numbering(
                "all 8-digit invoice codes have been issued".into(),
            ));
        }
        Ok(self.next.to_string())
    }

    /// Codes still available, including the next one.
    pub fn remaining(&self) -> u32 {
        (LAST_INVOICE_CODE + 1).saturating_sub(self.next)
    }
}
