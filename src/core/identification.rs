//! Cédula and RUC validation.
//!
//! A cédula is the 10-digit national identity number. A RUC is the 13-digit
//! taxpayer registration number; its third digit selects the taxpayer type and
//! with it the check-digit algorithm:
//!
//! | Third digit | Type | Check digit |
//! |---|---|---|
//! | 0–5 | natural person | embedded cédula (modulus 10), position 9 |
//! | 6 | public entity | modulus 11, position 8 |
//! | 9 | juridical person | modulus 11, position 9 |
//!
//! Every RUC ends in the establishment code `001`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::provinces;

/// Number of digits in a cédula.
pub const NATIONAL_ID_LEN: usize = 10;

/// Number of digits in a RUC.
pub const RUC_LEN: usize = 13;

/// Establishment code every RUC must end with.
pub const RUC_ESTABLISHMENT_SUFFIX: &str = "001";

const NATIONAL_ID_COEFFICIENTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];
const PUBLIC_ENTITY_COEFFICIENTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const JURIDICAL_COEFFICIENTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Kind of identification document, derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdKind {
    /// 10-digit cédula.
    NationalId,
    /// 13-digit RUC.
    Ruc,
}

impl IdKind {
    /// Number of digits for this kind.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::NationalId => NATIONAL_ID_LEN,
            Self::Ruc => RUC_LEN,
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NationalId => f.write_str("cédula"),
            Self::Ruc => f.write_str("RUC"),
        }
    }
}

/// Taxpayer type encoded in the third digit of a RUC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RucType {
    /// Third digit 0–5: natural person, the first ten digits are a cédula.
    Natural,
    /// Third digit 6: public sector entity.
    PublicEntity,
    /// Third digit 9: private company.
    Juridical,
}

/// A validated cédula or RUC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// The digits as entered.
    pub digits: String,
    /// Cédula or RUC.
    pub kind: IdKind,
    /// Taxpayer type, present for RUCs only.
    pub subtype: Option<RucType>,
    /// Province code from the first two digits (1–24).
    pub province: u8,
}

impl Identification {
    /// True for 13-digit RUCs.
    pub fn is_ruc(&self) -> bool {
        self.kind == IdKind::Ruc
    }

    /// Name of the issuing province.
    pub fn province_name(&self) -> &'static str {
        provinces::province_name(self.province).unwrap_or_default()
    }
}

/// Why an identification number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentificationError {
    #[error("identification must contain only digits")]
    NotNumeric,

    #[error("identification must have 10 digits (cédula) or 13 digits (RUC), got {0}")]
    BadLength(usize),

    #[error("first two digits must be a province code between 01 and 24, got {0:02}")]
    InvalidProvince(u8),

    #[error("third digit {digit} is not valid for a {kind}")]
    InvalidThirdDigit { kind: IdKind, digit: u8 },

    #[error("check digit mismatch: expected {expected}, found {found}")]
    BadCheckDigit { expected: u32, found: u32 },

    #[error("RUC of a natural person does not start with a valid cédula: {0}")]
    InvalidEmbeddedNationalId(#[source] Box<IdentificationError>),

    #[error("RUC must end with establishment code 001, got {0}")]
    BadEstablishmentSuffix(String),
}

impl IdentificationError {
    /// Stable tag naming the rule that failed.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NotNumeric => "NotNumeric",
            Self::BadLength(_) => "BadLength",
            Self::InvalidProvince(_) => "InvalidProvince",
            Self::InvalidThirdDigit { .. } => "InvalidThirdDigit",
            Self::BadCheckDigit { .. } => "BadCheckDigit",
            Self::InvalidEmbeddedNationalId(_) => "InvalidEmbeddedNationalId",
            Self::BadEstablishmentSuffix(_) => "BadEstablishmentSuffix",
        }
    }
}

/// Validate a cédula (10 digits) or RUC (13 digits).
///
/// Checks run in order and stop at the first failure: digits only, length,
/// province code, third digit, check digit, and for RUCs the `001` suffix.
///
/// ```
/// use factura_ec::core::*;
///
/// let id = validate_identification("1710034065").unwrap();
/// assert_eq!(id.kind, IdKind::NationalId);
///
/// let ruc = validate_identification("1790011674001").unwrap();
/// assert_eq!(ruc.subtype, Some(RucType::Juridical));
/// ```
pub fn validate_identification(raw: &str) -> Result<Identification, IdentificationError> {
    classify(raw).inspect_err(|err| {
        tracing::debug!(tag = err.tag(), reason = %err, "identification rejected");
    })
}

/// Validate a RUC for business registration.
///
/// Any digit string that is not 13 long is rejected with
/// [`IdentificationError::BadLength`] before the other rules run, so a
/// 10-digit entry never gets a cédula-specific error. The remaining checks
/// are those of [`validate_identification`].
pub fn validate_ruc(raw: &str) -> Result<Identification, IdentificationError> {
    let digits = parse_digits(raw).ok_or(IdentificationError::NotNumeric)?;
    if digits.len() != RUC_LEN {
        let err = IdentificationError::BadLength(digits.len());
        tracing::debug!(tag = err.tag(), reason = %err, "RUC rejected");
        return Err(err);
    }
    validate_identification(raw)
}

/// Modulus-10 check digit for the first nine digits of a cédula.
///
/// Returns `None` unless `body` is exactly nine ASCII digits.
pub fn national_id_check_digit(body: &str) -> Option<u32> {
    let digits = parse_digits(body)?;
    if digits.len() != NATIONAL_ID_COEFFICIENTS.len() {
        return None;
    }
    Some(modulus_10(&digits))
}

/// Check digit for the leading digits of a RUC of the given type.
///
/// `body` holds the digits before the check digit: nine for natural and
/// juridical RUCs, eight for public entities. A result of 10 means no digit
/// can satisfy the check, so no valid RUC exists with that body.
pub fn ruc_check_digit(subtype: RucType, body: &str) -> Option<u32> {
    let digits = parse_digits(body)?;
    match subtype {
        RucType::Natural if digits.len() == NATIONAL_ID_COEFFICIENTS.len() => {
            Some(modulus_10(&digits))
        }
        RucType::PublicEntity if digits.len() == PUBLIC_ENTITY_COEFFICIENTS.len() => {
            Some(modulus_11(&digits, &PUBLIC_ENTITY_COEFFICIENTS))
        }
        RucType::Juridical if digits.len() == JURIDICAL_COEFFICIENTS.len() => {
            Some(modulus_11(&digits, &JURIDICAL_COEFFICIENTS))
        }
        _ => None,
    }
}

fn classify(raw: &str) -> Result<Identification, IdentificationError> {
    let digits = parse_digits(raw).ok_or(IdentificationError::NotNumeric)?;

    let kind = match digits.len() {
        NATIONAL_ID_LEN => IdKind::NationalId,
        RUC_LEN => IdKind::Ruc,
        n => return Err(IdentificationError::BadLength(n)),
    };

    // Both digits are < 10, so the code fits in a u8.
    let province = (digits[0] * 10 + digits[1]) as u8;
    if provinces::province_name(province).is_none() {
        return Err(IdentificationError::InvalidProvince(province));
    }

    let third = digits[2] as u8;
    let subtype = match kind {
        IdKind::NationalId => {
            if third > 5 {
                return Err(IdentificationError::InvalidThirdDigit { kind, digit: third });
            }
            compare(modulus_10(&digits[..9]), digits[9])?;
            None
        }
        IdKind::Ruc => {
            let subtype = match third {
                6 => {
                    compare(
                        modulus_11(&digits[..8], &PUBLIC_ENTITY_COEFFICIENTS),
                        digits[8],
                    )?;
                    RucType::PublicEntity
                }
                9 => {
                    compare(
                        modulus_11(&digits[..9], &JURIDICAL_COEFFICIENTS),
                        digits[9],
                    )?;
                    RucType::Juridical
                }
                0..=5 => {
                    classify(&raw[..NATIONAL_ID_LEN]).map_err(|err| {
                        IdentificationError::InvalidEmbeddedNationalId(Box::new(err))
                    })?;
                    RucType::Natural
                }
                _ => {
                    return Err(IdentificationError::InvalidThirdDigit { kind, digit: third });
                }
            };

            let suffix = &raw[RUC_LEN - RUC_ESTABLISHMENT_SUFFIX.len()..];
            if suffix != RUC_ESTABLISHMENT_SUFFIX {
                return Err(IdentificationError::BadEstablishmentSuffix(suffix.to_string()));
            }
            Some(subtype)
        }
    };

    Ok(Identification {
        digits: raw.to_string(),
        kind,
        subtype,
        province,
    })
}

/// ASCII digits only; empty input is not numeric.
fn parse_digits(raw: &str) -> Option<Vec<u32>> {
    if raw.is_empty() {
        return None;
    }
    raw.chars().map(|c| c.to_digit(10)).collect()
}

fn modulus_10(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(NATIONAL_ID_COEFFICIENTS)
        .map(|(d, c)| {
            let product = d * c;
            if product >= 10 { product - 9 } else { product }
        })
        .sum();
    match sum % 10 {
        0 => 0,
        r => 10 - r,
    }
}

fn modulus_11(digits: &[u32], coefficients: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(coefficients).map(|(d, c)| d * c).sum();
    match sum % 11 {
        0 => 0,
        r => 11 - r,
    }
}

fn compare(expected: u32, found: u32) -> Result<(), IdentificationError> {
    if expected == found {
        Ok(())
    } else {
        Err(IdentificationError::BadCheckDigit { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cedula() {
        let id = validate_identification("1710034065").unwrap();
        assert_eq!(id.kind, IdKind::NationalId);
        assert_eq!(id.subtype, None);
        assert_eq!(id.province, 17);
        assert_eq!(id.province_name(), "Pichincha");
    }

    #[test]
    fn valid_cedula_with_leading_zero() {
        let id = validate_identification("0926687856").unwrap();
        assert_eq!(id.province, 9);
        assert_eq!(id.province_name(), "Guayas");
    }

    #[test]
    fn cedula_check_digit_mismatch() {
        assert_eq!(
            validate_identification("1710034066"),
            Err(IdentificationError::BadCheckDigit {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn products_of_ten_or_more_are_reduced() {
        // 6 * 2 = 12 -> 3, 7 * 2 = 14 -> 5, 5 * 2 = 10 -> 1
        assert_eq!(national_id_check_digit("092668785"), Some(6));
    }

    #[test]
    fn check_digit_zero_when_sum_is_multiple_of_ten() {
        // 2 + 7 + 2 + 1 + 2 + 1 + 2 + 1 + 2 = 20
        assert_eq!(national_id_check_digit("171111111"), Some(0));
        assert!(validate_identification("1711111110").is_ok());
    }

    #[test]
    fn cedula_third_digit_above_five() {
        assert_eq!(
            validate_identification("1760034065"),
            Err(IdentificationError::InvalidThirdDigit {
                kind: IdKind::NationalId,
                digit: 6
            })
        );
    }

    #[test]
    fn juridical_ruc() {
        let id = validate_identification("1790011674001").unwrap();
        assert_eq!(id.kind, IdKind::Ruc);
        assert_eq!(id.subtype, Some(RucType::Juridical));
    }

    #[test]
    fn public_entity_ruc() {
        let id = validate_identification("1760001550001").unwrap();
        assert_eq!(id.subtype, Some(RucType::PublicEntity));
    }

    #[test]
    fn natural_ruc() {
        let id = validate_identification("1710034065001").unwrap();
        assert_eq!(id.subtype, Some(RucType::Natural));
    }

    #[test]
    fn natural_ruc_with_bad_cedula() {
        let err = validate_identification("1710034066001").unwrap_err();
        assert_eq!(err.tag(), "InvalidEmbeddedNationalId");
        assert_eq!(
            err,
            IdentificationError::InvalidEmbeddedNationalId(Box::new(
                IdentificationError::BadCheckDigit {
                    expected: 5,
                    found: 6
                }
            ))
        );
    }

    #[test]
    fn ruc_third_digit_seven_or_eight() {
        for raw in ["1770011674001", "1780011674001"] {
            assert!(matches!(
                validate_identification(raw),
                Err(IdentificationError::InvalidThirdDigit {
                    kind: IdKind::Ruc,
                    ..
                })
            ));
        }
    }

    #[test]
    fn ruc_suffix_checked_after_check_digit() {
        assert_eq!(
            validate_identification("1790011674002"),
            Err(IdentificationError::BadEstablishmentSuffix("002".into()))
        );
        // A wrong check digit wins over a wrong suffix.
        assert_eq!(
            validate_identification("1790011675002").unwrap_err().tag(),
            "BadCheckDigit"
        );
    }

    #[test]
    fn public_entity_suffix() {
        assert_eq!(
            validate_identification("1760001550002").unwrap_err().tag(),
            "BadEstablishmentSuffix"
        );
    }

    #[test]
    fn non_digits_and_empty_input() {
        assert_eq!(validate_identification(""), Err(IdentificationError::NotNumeric));
        assert_eq!(
            validate_identification("17100340a5"),
            Err(IdentificationError::NotNumeric)
        );
        assert_eq!(
            validate_identification(" 1710034065"),
            Err(IdentificationError::NotNumeric)
        );
        assert_eq!(
            validate_identification("-710034065"),
            Err(IdentificationError::NotNumeric)
        );
    }

    #[test]
    fn non_digit_check_precedes_length() {
        assert_eq!(validate_identification("abc"), Err(IdentificationError::NotNumeric));
    }

    #[test]
    fn bad_lengths() {
        assert_eq!(
            validate_identification("171003406"),
            Err(IdentificationError::BadLength(9))
        );
        assert_eq!(
            validate_identification("17100340650"),
            Err(IdentificationError::BadLength(11))
        );
        assert_eq!(
            validate_identification("17900116740011"),
            Err(IdentificationError::BadLength(14))
        );
    }

    #[test]
    fn province_bounds() {
        assert_eq!(
            validate_identification("0010034065"),
            Err(IdentificationError::InvalidProvince(0))
        );
        assert_eq!(
            validate_identification("2510034065"),
            Err(IdentificationError::InvalidProvince(25))
        );
        assert_eq!(
            validate_identification("9990011674001"),
            Err(IdentificationError::InvalidProvince(99))
        );
    }

    #[test]
    fn validate_ruc_rejects_cedula() {
        assert_eq!(
            validate_ruc("1710034065"),
            Err(IdentificationError::BadLength(10))
        );
        assert!(validate_ruc("1790011674001").is_ok());
    }

    #[test]
    fn ruc_check_digit_helper() {
        assert_eq!(ruc_check_digit(RucType::Juridical, "179001167"), Some(4));
        assert_eq!(ruc_check_digit(RucType::PublicEntity, "17600015"), Some(5));
        assert_eq!(ruc_check_digit(RucType::Natural, "171003406"), Some(5));
        assert_eq!(ruc_check_digit(RucType::PublicEntity, "179001167"), None);
        assert_eq!(ruc_check_digit(RucType::Juridical, "17900x167"), None);
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            IdentificationError::InvalidProvince(3).to_string(),
            "first two digits must be a province code between 01 and 24, got 03"
        );
        assert_eq!(
            IdentificationError::InvalidThirdDigit {
                kind: IdKind::Ruc,
                digit: 7
            }
            .to_string(),
            "third digit 7 is not valid for a RUC"
        );
    }
}
