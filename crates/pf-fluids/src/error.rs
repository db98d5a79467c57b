//! Fluid-system errors.

use crate::indices::{Phase, Species};
use pf_core::PfError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Phase index is not one of the defined phases.
    #[error("Invalid phase index {index}")]
    UnknownPhase { index: usize },

    /// Component index is not one of the defined components.
    #[error("Invalid component index {index}")]
    UnknownComponent { index: usize },

    /// Binary coefficient requested for a pair the system does not define.
    #[error("Binary diffusion coefficient of components {i} and {j} in phase {phase} is undefined")]
    UndefinedBinaryPair {
        phase: Phase,
        i: Species,
        j: Species,
    },

    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported by a provider (e.g., liquid nitrogen routes).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },
}

impl FluidError {
    /// True for errors caused by nonsensical phase/component indices or pairs.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            FluidError::UnknownPhase { .. }
                | FluidError::UnknownComponent { .. }
                | FluidError::UndefinedBinaryPair { .. }
        )
    }
}

impl From<FluidError> for PfError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::UnknownPhase { index } => PfError::IndexOob {
                what: "phase",
                index,
                len: crate::indices::NUM_PHASES,
            },
            FluidError::UnknownComponent { index } => PfError::IndexOob {
                what: "component",
                index,
                len: crate::indices::NUM_COMPONENTS,
            },
            FluidError::UndefinedBinaryPair { .. } => PfError::InvalidArg {
                what: err.to_string(),
            },
            FluidError::NonPhysical { what } => PfError::Invariant {
                what: format!("Non-physical fluid value: {what}"),
            },
            FluidError::InvalidArg { what } => PfError::InvalidArg {
                what: format!("Invalid fluid argument: {what}"),
            },
            FluidError::NotSupported { what } => PfError::Invariant {
                what: format!("Fluid operation not supported: {what}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownPhase { index: 7 };
        assert!(err.to_string().contains('7'));

        let err = FluidError::UndefinedBinaryPair {
            phase: Phase::Liquid,
            i: Species::H2O,
            j: Species::H2O,
        };
        let msg = err.to_string();
        assert!(msg.contains("H2O"));
        assert!(msg.contains("liquid"));
    }

    #[test]
    fn domain_errors_are_classified() {
        assert!(FluidError::UnknownComponent { index: 2 }.is_domain_error());
        assert!(!FluidError::NonPhysical { what: "pressure" }.is_domain_error());
        assert!(!FluidError::NotSupported { what: "x" }.is_domain_error());
    }

    #[test]
    fn error_to_pf_error() {
        let pf: PfError = FluidError::UnknownPhase { index: 3 }.into();
        assert!(matches!(
            pf,
            PfError::IndexOob {
                index: 3,
                len: 2,
                ..
            }
        ));

        let pf: PfError = FluidError::NotSupported { what: "mixtures" }.into();
        assert!(matches!(pf, PfError::Invariant { .. }));
    }
}
