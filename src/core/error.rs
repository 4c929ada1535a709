use thiserror::Error;

use super::identification::IdentificationError;

/// Errors that can occur while building drafts, profiles or export documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder or draft encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice code sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Export document could not be produced.
    #[error("export error: {0}")]
    Export(String),
}

/// A problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "business.ruc").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// [`IdentificationError::tag`] when the field failed cédula/RUC validation.
    pub rule: Option<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rule {
            Some(tag) => write!(f, "[{tag}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ValidationError {
    /// Plain field error: empty or unknown value.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Field holding a cédula or RUC that was rejected; keeps the rule tag.
    pub fn identification(field: impl Into<String>, err: &IdentificationError) -> Self {
        Self {
            field: field.into(),
            message: err.to_string(),
            rule: Some(err.tag()),
        }
    }
}
