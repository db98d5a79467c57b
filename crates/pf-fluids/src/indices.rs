//! Phase and species indexing for the two-phase, two-component system.
//!
//! The integer values are part of the external contract: liquid = 0, gas = 1,
//! H₂O = 0, N₂ = 1. The wetting phase is the liquid, the non-wetting phase is
//! the gas.

use crate::error::{FluidError, FluidResult};
use std::fmt;

pub const NUM_PHASES: usize = 2;
pub const NUM_COMPONENTS: usize = 2;

/// Fluid phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Liquid phase (also the wetting phase).
    Liquid = 0,
    /// Gas phase (also the non-wetting phase).
    Gas = 1,
}

impl Phase {
    pub const ALL: [Phase; NUM_PHASES] = [Phase::Liquid, Phase::Gas];

    pub const WETTING: Phase = Phase::Liquid;
    pub const NON_WETTING: Phase = Phase::Gas;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> FluidResult<Self> {
        match index {
            0 => Ok(Phase::Liquid),
            1 => Ok(Phase::Gas),
            _ => Err(FluidError::UnknownPhase { index }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Liquid => "liquid",
            Phase::Gas => "gas",
        }
    }
}

impl TryFrom<usize> for Phase {
    type Error = FluidError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Phase::from_index(index)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chemical species tracked by the H₂O/N₂ system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    /// Water (H₂O), the solvent.
    H2O = 0,
    /// Nitrogen (N₂), the solute in the liquid.
    N2 = 1,
}

impl Species {
    pub const ALL: [Species; NUM_COMPONENTS] = [Species::H2O, Species::N2];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> FluidResult<Self> {
        match index {
            0 => Ok(Species::H2O),
            1 => Ok(Species::N2),
            _ => Err(FluidError::UnknownComponent { index }),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Species::H2O => "H2O",
            Species::N2 => "N2",
        }
    }
}

impl TryFrom<usize> for Species {
    type Error = FluidError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Species::from_index(index)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_contract() {
        assert_eq!(Phase::Liquid.index(), 0);
        assert_eq!(Phase::Gas.index(), 1);
        assert_eq!(Species::H2O.index(), 0);
        assert_eq!(Species::N2.index(), 1);
    }

    #[test]
    fn wetting_aliases() {
        assert_eq!(Phase::WETTING, Phase::Liquid);
        assert_eq!(Phase::NON_WETTING, Phase::Gas);
    }

    #[test]
    fn index_roundtrip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::try_from(phase.index()).unwrap(), phase);
        }
        for species in Species::ALL {
            assert_eq!(Species::try_from(species.index()).unwrap(), species);
        }
    }

    #[test]
    fn out_of_range_indices_are_domain_errors() {
        let err = Phase::from_index(2).unwrap_err();
        assert_eq!(err, FluidError::UnknownPhase { index: 2 });
        assert!(err.is_domain_error());

        let err = Species::try_from(usize::MAX).unwrap_err();
        assert!(matches!(err, FluidError::UnknownComponent { .. }));
    }
}
