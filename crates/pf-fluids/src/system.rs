//! Fluid-system facade: phase and component property dispatch.

use crate::binary;
use crate::components::{Nitrogen, PureComponent, SimpleH2O};
use crate::error::{FluidError, FluidResult};
use crate::ideal_gas;
use crate::indices::{NUM_COMPONENTS, NUM_PHASES, Phase, Species};
use crate::state::{CompositionalState, FluidState};
use crate::validation;
use pf_core::numeric::Real;
use pf_core::units::{
    Density, DiffCoeff, DynVisc, MolarMass, Pressure, SpecEnthalpy, SpecInternalEnergy,
    Temperature, pa,
};
use tracing::debug;

/// Uniform interface through which a simulator queries fluid properties.
///
/// Phases and components are addressed by index so that generic model code can
/// loop over them; every method rejects indices outside the system's range
/// with a domain error ([`FluidError::is_domain_error`]).
///
/// Implementations must be thread-safe (Send + Sync) to support parallel
/// assembly. Apart from `init`, no method mutates the system.
pub trait FluidSystem: Send + Sync {
    /// One-shot initialization of tabulated providers. Idempotent.
    fn init(&self) -> FluidResult<()> {
        Ok(())
    }

    fn num_phases(&self) -> usize;

    fn num_components(&self) -> usize;

    /// Human-readable name of a phase.
    fn phase_name(&self, phase_idx: usize) -> FluidResult<&'static str>;

    /// True if the phase is a liquid.
    fn is_liquid(&self, phase_idx: usize) -> FluidResult<bool>;

    /// True if the phase wets the solid matrix.
    fn is_wetting(&self, phase_idx: usize) -> FluidResult<bool>;

    /// Human-readable name of a component.
    fn component_name(&self, comp_idx: usize) -> FluidResult<&'static str>;

    /// Molar mass of a component [kg/mol].
    fn molar_mass(&self, comp_idx: usize) -> FluidResult<MolarMass>;

    /// Write the gas-phase partial pressure of every component into `state`.
    ///
    /// This is the only write the fluid system performs on a state.
    fn compute_partial_pressures(
        &self,
        t: Temperature,
        pg: Pressure,
        state: &mut dyn FluidState,
    ) -> FluidResult<()>;

    /// Density of a phase [kg/m³].
    fn phase_density(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<Density>;

    /// Dynamic viscosity of a phase [Pa·s].
    fn phase_viscosity(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<DynVisc>;

    /// ∂p_g^κ / ∂x_l^κ at infinite dilution [Pa].
    fn degas_pressure(&self, comp_idx: usize, t: Temperature, p: Pressure)
    -> FluidResult<Pressure>;

    /// Pure-substance density of a component in a phase [kg/m³].
    fn component_density(
        &self,
        phase_idx: usize,
        comp_idx: usize,
        t: Temperature,
        p: Pressure,
    ) -> FluidResult<Density>;

    /// Pure-substance pressure of a component in a phase [Pa], inverse of
    /// `component_density`.
    fn component_pressure(
        &self,
        phase_idx: usize,
        comp_idx: usize,
        t: Temperature,
        rho: Density,
    ) -> FluidResult<Pressure>;

    /// Binary diffusion coefficient of components `comp_i` and `comp_j` in a
    /// phase [m²/s]. Symmetric in the component indices.
    fn diff_coeff(
        &self,
        phase_idx: usize,
        comp_i: usize,
        comp_j: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<DiffCoeff>;

    /// Specific enthalpy of a phase [J/kg].
    fn phase_enthalpy(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<SpecEnthalpy>;

    /// Specific internal energy of a phase [J/kg].
    fn phase_internal_energy(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<SpecInternalEnergy>;
}

/// Liquid and gas phases with water and molecular nitrogen in both.
///
/// Modelling choices:
/// - the liquid is treated as pure water for density, viscosity and enthalpy,
///   even though dissolved nitrogen is tracked in its composition;
/// - the gas is an ideal mixture; its viscosity is that of pure nitrogen;
/// - gas enthalpy is the mass-weighted sum of component enthalpies evaluated
///   at their partial pressures, so `compute_partial_pressures` must run first.
#[derive(Debug, Clone, Default)]
pub struct H2oN2System<W = SimpleH2O, N = Nitrogen> {
    h2o: W,
    n2: N,
}

impl H2oN2System {
    /// System backed by [`SimpleH2O`] and [`Nitrogen`].
    pub fn new() -> Self {
        Self {
            h2o: SimpleH2O,
            n2: Nitrogen,
        }
    }
}

impl<W: PureComponent, N: PureComponent> H2oN2System<W, N> {
    /// System backed by custom providers (e.g. tabulated ones).
    pub fn with_components(h2o: W, n2: N) -> Self {
        Self { h2o, n2 }
    }

    pub fn h2o(&self) -> &W {
        &self.h2o
    }

    pub fn n2(&self) -> &N {
        &self.n2
    }

    fn component(&self, species: Species) -> &dyn PureComponent {
        match species {
            Species::H2O => &self.h2o,
            Species::N2 => &self.n2,
        }
    }

    /// Build a [`CompositionalState`] using this system's molar masses.
    pub fn new_state(
        &self,
        liquid: [Real; NUM_COMPONENTS],
        gas: [Real; NUM_COMPONENTS],
    ) -> FluidResult<CompositionalState> {
        CompositionalState::new_mole_fractions(
            liquid,
            gas,
            [self.h2o.molar_mass(), self.n2.molar_mass()],
        )
    }

    /// Mean molar mass of the gas phase [kg/mol].
    fn gas_mean_molar_mass(&self, state: &dyn FluidState) -> MolarMass {
        Species::ALL
            .iter()
            .map(|&s| {
                state.mole_frac(Phase::Gas.index(), s.index()) * self.component(s).molar_mass()
            })
            .sum()
    }
}

impl<W: PureComponent, N: PureComponent> FluidSystem for H2oN2System<W, N> {
    fn init(&self) -> FluidResult<()> {
        debug!(
            h2o = self.h2o.name(),
            n2 = self.n2.name(),
            "initializing H2O/N2 fluid system"
        );
        self.h2o.init()?;
        self.n2.init()
    }

    fn num_phases(&self) -> usize {
        NUM_PHASES
    }

    fn num_components(&self) -> usize {
        NUM_COMPONENTS
    }

    fn phase_name(&self, phase_idx: usize) -> FluidResult<&'static str> {
        Ok(Phase::from_index(phase_idx)?.name())
    }

    fn is_liquid(&self, phase_idx: usize) -> FluidResult<bool> {
        Ok(Phase::from_index(phase_idx)? == Phase::Liquid)
    }

    fn is_wetting(&self, phase_idx: usize) -> FluidResult<bool> {
        Ok(Phase::from_index(phase_idx)? == Phase::WETTING)
    }

    fn component_name(&self, comp_idx: usize) -> FluidResult<&'static str> {
        let species = Species::from_index(comp_idx)?;
        Ok(self.component(species).name())
    }

    fn molar_mass(&self, comp_idx: usize) -> FluidResult<MolarMass> {
        let species = Species::from_index(comp_idx)?;
        Ok(self.component(species).molar_mass())
    }

    fn compute_partial_pressures(
        &self,
        t: Temperature,
        pg: Pressure,
        state: &mut dyn FluidState,
    ) -> FluidResult<()> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(pg)?;

        // Dalton's law: ideal gas in both components
        for species in Species::ALL {
            let x = state.mole_frac(Phase::Gas.index(), species.index());
            state.set_partial_pressure(species.index(), pa(pg.value * x));
        }
        Ok(())
    }

    fn phase_density(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<Density> {
        match Phase::from_index(phase_idx)? {
            Phase::Liquid => self.h2o.liquid_density(t, p),
            Phase::Gas => ideal_gas::density(self.gas_mean_molar_mass(state), t, p),
        }
    }

    fn phase_viscosity(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        _state: &dyn FluidState,
    ) -> FluidResult<DynVisc> {
        match Phase::from_index(phase_idx)? {
            Phase::Liquid => self.h2o.liquid_viscosity(t, p),
            Phase::Gas => self.n2.gas_viscosity(t, p),
        }
    }

    fn degas_pressure(
        &self,
        comp_idx: usize,
        t: Temperature,
        _p: Pressure,
    ) -> FluidResult<Pressure> {
        match Species::from_index(comp_idx)? {
            // solvent
            Species::H2O => self.h2o.vapor_pressure(t),
            // solute
            Species::N2 => binary::henry(t),
        }
    }

    fn component_density(
        &self,
        phase_idx: usize,
        comp_idx: usize,
        t: Temperature,
        p: Pressure,
    ) -> FluidResult<Density> {
        let phase = Phase::from_index(phase_idx)?;
        let component = self.component(Species::from_index(comp_idx)?);
        match phase {
            Phase::Liquid => component.liquid_density(t, p),
            Phase::Gas => component.gas_density(t, p),
        }
    }

    fn component_pressure(
        &self,
        phase_idx: usize,
        comp_idx: usize,
        t: Temperature,
        rho: Density,
    ) -> FluidResult<Pressure> {
        let phase = Phase::from_index(phase_idx)?;
        let component = self.component(Species::from_index(comp_idx)?);
        match phase {
            Phase::Liquid => component.liquid_pressure(t, rho),
            Phase::Gas => component.gas_pressure(t, rho),
        }
    }

    fn diff_coeff(
        &self,
        phase_idx: usize,
        comp_i: usize,
        comp_j: usize,
        t: Temperature,
        p: Pressure,
        _state: &dyn FluidState,
    ) -> FluidResult<DiffCoeff> {
        let phase = Phase::from_index(phase_idx)?;
        let a = Species::from_index(comp_i)?;
        let b = Species::from_index(comp_j)?;
        let (i, j) = if a <= b { (a, b) } else { (b, a) };

        match (phase, i, j) {
            (Phase::Liquid, Species::H2O, Species::N2) => binary::liquid_diff_coeff(t, p),
            (Phase::Gas, Species::H2O, Species::N2) => binary::gas_diff_coeff(t, p),
            _ => Err(FluidError::UndefinedBinaryPair { phase, i, j }),
        }
    }

    fn phase_enthalpy(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<SpecEnthalpy> {
        match Phase::from_index(phase_idx)? {
            // Dissolved nitrogen does not contribute.
            Phase::Liquid => self.h2o.liquid_enthalpy(t, p),
            Phase::Gas => {
                let mut h = 0.0;
                for species in Species::ALL {
                    let p_k = state.partial_pressure(species.index());
                    let h_k = self.component(species).gas_enthalpy(t, p_k)?;
                    h += state.mass_frac(Phase::Gas.index(), species.index()) * h_k;
                }
                Ok(h)
            }
        }
    }

    fn phase_internal_energy(
        &self,
        phase_idx: usize,
        t: Temperature,
        p: Pressure,
        state: &dyn FluidState,
    ) -> FluidResult<SpecInternalEnergy> {
        let h = self.phase_enthalpy(phase_idx, t, p, state)?;
        match Phase::from_index(phase_idx)? {
            Phase::Liquid => {
                let rho = self.phase_density(phase_idx, t, p, state)?;
                Ok(h - p.value / rho.value)
            }
            Phase::Gas => {
                // p v = R T / M for an ideal gas
                let mean_molar_mass = self.gas_mean_molar_mass(state);
                validation::validate_molar_mass(mean_molar_mass)?;
                Ok(h - ideal_gas::R * t.value / mean_molar_mass)
            }
        }
    }
}
