//! Material-law errors.

use pf_core::PfError;
use thiserror::Error;

/// Result type for material-law evaluations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors raised by capillary-pressure / relative-permeability laws.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// An argument or parameter is outside its admissible range.
    #[error("Precondition violated: {what} (got {value})")]
    Precondition { what: &'static str, value: f64 },

    /// Evaluation at a pole of the law (e.g. capillary pressure at zero saturation).
    #[error("Singular evaluation: {what}")]
    Singular { what: &'static str },
}

impl MaterialError {
    pub(crate) fn precondition(what: &'static str, value: f64) -> Self {
        MaterialError::Precondition { what, value }
    }
}

impl From<MaterialError> for PfError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::Precondition { what, value } => PfError::InvalidArg {
                what: format!("Material precondition violated: {what} (got {value})"),
            },
            MaterialError::Singular { what } => PfError::NonFinite {
                what,
                value: f64::INFINITY,
            },
        }
    }
}
