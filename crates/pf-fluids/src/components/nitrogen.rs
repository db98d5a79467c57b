//! Molecular nitrogen as an ideal gas.

use super::PureComponent;
use crate::error::{FluidError, FluidResult};
use crate::ideal_gas;
use crate::validation;
use pf_core::units::{Density, DynVisc, MolarMass, Pressure, SpecEnthalpy, Temperature, pa_s};

/// Nitrogen (N₂).
///
/// Only the gas is modelled. In the liquid phase nitrogen exists as a trace
/// solute, so the pure-liquid routes report [`FluidError::NotSupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Nitrogen;

impl Nitrogen {
    pub const MOLAR_MASS: MolarMass = 0.02801348;

    pub const CRITICAL_TEMPERATURE: f64 = 126.192;
    /// Critical molar volume [cm³/mol].
    const CRITICAL_VOLUME: f64 = 90.1;
    /// Acentric factor.
    const ACENTRIC_FACTOR: f64 = 0.037;

    /// Joback ideal-gas heat capacity coefficients, cp [J/(mol·K)] = A + B T + C T² + D T³.
    const CP_A: f64 = 31.15;
    const CP_B: f64 = -1.357e-2;
    const CP_C: f64 = 2.680e-5;
    const CP_D: f64 = -1.168e-8;
}

impl PureComponent for Nitrogen {
    fn name(&self) -> &'static str {
        "N2"
    }

    fn molar_mass(&self) -> MolarMass {
        Self::MOLAR_MASS
    }

    fn liquid_density(&self, _t: Temperature, _p: Pressure) -> FluidResult<Density> {
        Err(FluidError::NotSupported {
            what: "liquid nitrogen density",
        })
    }

    fn liquid_viscosity(&self, _t: Temperature, _p: Pressure) -> FluidResult<DynVisc> {
        Err(FluidError::NotSupported {
            what: "liquid nitrogen viscosity",
        })
    }

    fn liquid_enthalpy(&self, _t: Temperature, _p: Pressure) -> FluidResult<SpecEnthalpy> {
        Err(FluidError::NotSupported {
            what: "liquid nitrogen enthalpy",
        })
    }

    fn liquid_pressure(&self, _t: Temperature, _rho: Density) -> FluidResult<Pressure> {
        Err(FluidError::NotSupported {
            what: "liquid nitrogen pressure",
        })
    }

    fn gas_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        ideal_gas::density(Self::MOLAR_MASS, t, p)
    }

    /// Dilute-gas viscosity by the method of Chung et al.
    ///
    /// Reid, Prausnitz, Poling: "The Properties of Gases and Liquids", 4th
    /// edition, p. 396. Nitrogen is non-polar, so the dipole correction vanishes.
    fn gas_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc> {
        validation::validate_temperature(t)?;
        validation::validate_partial_pressure(p)?;

        let fc = 1.0 - 0.2756 * Self::ACENTRIC_FACTOR;
        let t_star = 1.2593 * t.value / Self::CRITICAL_TEMPERATURE;
        let omega_v = 1.16145 * t_star.powf(-0.14874)
            + 0.52487 * (-0.77320 * t_star).exp()
            + 2.16178 * (-2.43787 * t_star).exp();

        let m_g_per_mol = Self::MOLAR_MASS * 1.0e3;
        // micropoise
        let mu = 40.785 * fc * (m_g_per_mol * t.value).sqrt()
            / (Self::CRITICAL_VOLUME.powf(2.0 / 3.0) * omega_v);

        Ok(pa_s(mu * 1.0e-7))
    }

    /// Ideal-gas enthalpy, integrating the Joback heat capacity from 0 K.
    fn gas_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy> {
        validation::validate_temperature(t)?;
        validation::validate_partial_pressure(p)?;

        let t = t.value;
        let h_molar = t
            * (Self::CP_A
                + t * (Self::CP_B / 2.0 + t * (Self::CP_C / 3.0 + t * (Self::CP_D / 4.0))));
        let h = h_molar / Self::MOLAR_MASS;
        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn gas_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure> {
        ideal_gas::pressure(Self::MOLAR_MASS, t, rho)
    }
}
