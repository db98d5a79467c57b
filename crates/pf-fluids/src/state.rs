//! Fluid-state contract consumed by the fluid system, plus a concrete
//! two-phase, two-component state.

use crate::error::{FluidError, FluidResult};
use crate::indices::{NUM_COMPONENTS, NUM_PHASES};
use pf_core::numeric::Real;
use pf_core::units::{MolarMass, Pressure, pa};

/// Read/write access to the composition of a fluid state.
///
/// Indices follow the fluid system's contract (see [`crate::indices`]). The
/// fluid system only ever writes partial pressures; composition is owned by
/// the caller. Mole fractions within a phase are expected to sum to one.
pub trait FluidState {
    /// Mole fraction of component `comp_idx` in phase `phase_idx`, in [0, 1].
    fn mole_frac(&self, phase_idx: usize, comp_idx: usize) -> Real;

    /// Mass fraction of component `comp_idx` in phase `phase_idx`, in [0, 1].
    fn mass_frac(&self, phase_idx: usize, comp_idx: usize) -> Real;

    /// Partial pressure of component `comp_idx` in the gas phase.
    fn partial_pressure(&self, comp_idx: usize) -> Pressure;

    /// Store the partial pressure of component `comp_idx`.
    fn set_partial_pressure(&mut self, comp_idx: usize, p: Pressure);
}

/// Composition of two phases with two components each.
///
/// Mole fractions are always normalized per phase; mass fractions are derived
/// from them with the component molar masses. Partial pressures start at zero
/// and are filled in by `FluidSystem::compute_partial_pressures`.
///
/// Accessors panic on indices outside the 2 × 2 layout; the fluid system
/// validates indices before touching a state.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionalState {
    molar_masses: [MolarMass; NUM_COMPONENTS],
    mole_fracs: [[Real; NUM_COMPONENTS]; NUM_PHASES],
    mass_fracs: [[Real; NUM_COMPONENTS]; NUM_PHASES],
    partial_pressures: [Real; NUM_COMPONENTS],
}

impl CompositionalState {
    /// Create a state from per-phase mole fractions, indexed by component.
    ///
    /// Validates that all fractions are finite, non-negative, and have a
    /// positive sum per phase, then normalizes each phase to sum=1.
    pub fn new_mole_fractions(
        liquid: [Real; NUM_COMPONENTS],
        gas: [Real; NUM_COMPONENTS],
        molar_masses: [MolarMass; NUM_COMPONENTS],
    ) -> FluidResult<Self> {
        for m in molar_masses {
            crate::validation::validate_molar_mass(m)?;
        }
        let mut state = Self {
            molar_masses,
            mole_fracs: [[0.0; NUM_COMPONENTS]; NUM_PHASES],
            mass_fracs: [[0.0; NUM_COMPONENTS]; NUM_PHASES],
            partial_pressures: [0.0; NUM_COMPONENTS],
        };
        state.set_mole_fractions(0, liquid)?;
        state.set_mole_fractions(1, gas)?;
        Ok(state)
    }

    /// Replace the mole fractions of one phase (normalized, mass fractions updated).
    pub fn set_mole_fractions(
        &mut self,
        phase_idx: usize,
        fractions: [Real; NUM_COMPONENTS],
    ) -> FluidResult<()> {
        if phase_idx >= NUM_PHASES {
            return Err(FluidError::UnknownPhase { index: phase_idx });
        }

        let mut sum = 0.0;
        for frac in fractions {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }
        if sum <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "mole fractions sum to zero",
            });
        }

        self.mole_fracs[phase_idx] = fractions.map(|f| f / sum);
        let mean_molar_mass = self.mean_molar_mass(phase_idx)?;
        for comp_idx in 0..NUM_COMPONENTS {
            let x = self.mole_fracs[phase_idx][comp_idx];
            self.mass_fracs[phase_idx][comp_idx] =
                x * self.molar_masses[comp_idx] / mean_molar_mass;
        }
        Ok(())
    }

    /// Mean molar mass [kg/mol] of a phase.
    pub fn mean_molar_mass(&self, phase_idx: usize) -> FluidResult<MolarMass> {
        let fractions = self
            .mole_fracs
            .get(phase_idx)
            .ok_or(FluidError::UnknownPhase { index: phase_idx })?;
        Ok(fractions
            .iter()
            .zip(self.molar_masses.iter())
            .map(|(x, m)| x * m)
            .sum())
    }
}

impl FluidState for CompositionalState {
    fn mole_frac(&self, phase_idx: usize, comp_idx: usize) -> Real {
        self.mole_fracs[phase_idx][comp_idx]
    }

    fn mass_frac(&self, phase_idx: usize, comp_idx: usize) -> Real {
        self.mass_fracs[phase_idx][comp_idx]
    }

    fn partial_pressure(&self, comp_idx: usize) -> Pressure {
        pa(self.partial_pressures[comp_idx])
    }

    fn set_partial_pressure(&mut self, comp_idx: usize, p: Pressure) {
        self.partial_pressures[comp_idx] = p.value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};

    const M: [MolarMass; 2] = [0.018015284, 0.02801348];

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        }
    }

    #[test]
    fn normalizes_each_phase() {
        let state = CompositionalState::new_mole_fractions([2.0, 0.0], [1.0, 3.0], M).unwrap();
        assert_eq!(state.mole_frac(0, 0), 1.0);
        assert_eq!(state.mole_frac(0, 1), 0.0);
        assert!(nearly_equal(state.mole_frac(1, 0), 0.25, tol()));
        assert!(nearly_equal(state.mole_frac(1, 1), 0.75, tol()));
    }

    #[test]
    fn mass_fractions_follow_molar_masses() {
        let state = CompositionalState::new_mole_fractions([1.0, 0.0], [0.5, 0.5], M).unwrap();
        let expected_h2o = 0.5 * M[0] / (0.5 * M[0] + 0.5 * M[1]);
        assert!(nearly_equal(state.mass_frac(1, 0), expected_h2o, tol()));
        assert!(nearly_equal(
            state.mass_frac(1, 0) + state.mass_frac(1, 1),
            1.0,
            tol()
        ));
        assert!(state.mass_frac(1, 1) > state.mole_frac(1, 1));
    }

    #[test]
    fn partial_pressures_start_at_zero_and_can_be_set() {
        let mut state =
            CompositionalState::new_mole_fractions([1.0, 0.0], [0.0, 1.0], M).unwrap();
        assert_eq!(state.partial_pressure(1).value, 0.0);
        state.set_partial_pressure(1, pa(9.8e4));
        assert_eq!(state.partial_pressure(1).value, 9.8e4);
    }

    #[test]
    fn mean_molar_mass_of_pure_nitrogen() {
        let state = CompositionalState::new_mole_fractions([1.0, 0.0], [0.0, 1.0], M).unwrap();
        assert_eq!(state.mean_molar_mass(1).unwrap(), M[1]);
        assert_eq!(state.mean_molar_mass(0).unwrap(), M[0]);
    }

    #[test]
    fn mean_molar_mass_rejects_unknown_phase() {
        let state = CompositionalState::new_mole_fractions([1.0, 0.0], [0.0, 1.0], M).unwrap();
        assert!(state.mean_molar_mass(2).unwrap_err().is_domain_error());
    }

    #[test]
    fn rejects_invalid_fractions() {
        assert!(CompositionalState::new_mole_fractions([-0.1, 1.1], [0.0, 1.0], M).is_err());
        assert!(CompositionalState::new_mole_fractions([0.0, 0.0], [0.0, 1.0], M).is_err());
        assert!(CompositionalState::new_mole_fractions([f64::NAN, 1.0], [0.0, 1.0], M).is_err());
        let bad_masses = [0.0, 0.028];
        let result = CompositionalState::new_mole_fractions([1.0, 0.0], [0.0, 1.0], bad_masses);
        assert!(result.is_err());
    }

    #[test]
    fn set_mole_fractions_rejects_unknown_phase() {
        let mut state =
            CompositionalState::new_mole_fractions([1.0, 0.0], [0.0, 1.0], M).unwrap();
        let err = state.set_mole_fractions(2, [0.5, 0.5]).unwrap_err();
        assert!(err.is_domain_error());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fractions_sum_to_one(
            x0 in 0.0_f64..1.0,
            x1 in 0.0_f64..1.0,
            y0 in 0.0_f64..1.0,
            y1 in 0.0_f64..1.0,
        ) {
            let m = [0.018015284, 0.02801348];
            if let Ok(state) = CompositionalState::new_mole_fractions([x0, x1], [y0, y1], m) {
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                for phase in 0..2 {
                    let xs = state.mole_frac(phase, 0) + state.mole_frac(phase, 1);
                    let ws = state.mass_frac(phase, 0) + state.mass_frac(phase, 1);
                    prop_assert!(nearly_equal(xs, 1.0, tol));
                    prop_assert!(nearly_equal(ws, 1.0, tol));
                }
            }
        }
    }
}
