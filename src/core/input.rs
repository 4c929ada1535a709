//! Field-level checks run while the user types.
//!
//! These decide what the form shows (a warning, a corrected value). The
//! totals engine does not depend on them: it re-parses raw text on every
//! call and skips whatever is still incomplete.

use rust_decimal::Decimal;
use thiserror::Error;

/// Maximum fractional digits kept in a unit price.
pub const PRICE_DECIMALS: usize = 2;

/// Problem with a single numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("field is empty")]
    Empty,

    #[error("please enter a valid number")]
    NotANumber,

    #[error("negative values are not allowed")]
    Negative,

    #[error("value cannot exceed 100%")]
    AboveMaximum,
}

impl InputError {
    /// Text the form writes back into a price field, whatever the error.
    pub const PRICE_REPLACEMENT: &'static str = "0.00";

    /// Text the form writes back into a quantity or discount field.
    pub fn replacement(&self) -> &'static str {
        match self {
            Self::AboveMaximum => "100",
            _ => "0",
        }
    }
}

/// Check a quantity field.
pub fn check_quantity(raw: &str) -> Result<Decimal, InputError> {
    let value = parse_field(raw)?;
    if value < Decimal::ZERO {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Normalise a unit price field.
///
/// Drops every character except digits and `.`; when several dots remain
/// only the last one is kept, and the fraction is cut to two digits.
/// `"$1.2.345"` becomes `"12.34"`.
pub fn sanitize_price(raw: &str) -> Result<String, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let value = match kept.rfind('.') {
        Some(last_dot) => {
            let integer: String = kept[..last_dot].chars().filter(|c| *c != '.').collect();
            let fraction: String = kept[last_dot + 1..].chars().take(PRICE_DECIMALS).collect();
            format!("{integer}.{fraction}")
        }
        None => kept,
    };

    // "", "." and similar leftovers have no number in them.
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    Ok(value)
}

/// Check the discount field (0–100).
pub fn check_discount(raw: &str) -> Result<Decimal, InputError> {
    let value = parse_field(raw)?;
    if value < Decimal::ZERO {
        return Err(InputError::Negative);
    }
    if value > Decimal::ONE_HUNDRED {
        return Err(InputError::AboveMaximum);
    }
    Ok(value)
}

fn parse_field(raw: &str) -> Result<Decimal, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    raw.parse().map_err(|_| InputError::NotANumber)
}
