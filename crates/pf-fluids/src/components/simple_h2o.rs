//! Simplified water: weakly compressible liquid, ideal-gas vapour.

use super::PureComponent;
use crate::error::{FluidError, FluidResult};
use crate::ideal_gas;
use crate::validation;
use pf_core::units::constants::T_ZERO_CELSIUS;
use pf_core::units::{
    Density, DynVisc, MolarMass, Pressure, SpecEnthalpy, Temperature, kg_per_m3, pa, pa_s,
};

/// Water with constant transport properties and a linear equation of state
/// for the liquid.
///
/// The vapour pressure follows the IAPWS-IF97 saturation line (region 4).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleH2O;

impl SimpleH2O {
    pub const MOLAR_MASS: MolarMass = 0.018015284;

    pub const TRIPLE_TEMPERATURE: f64 = 273.16;
    pub const CRITICAL_TEMPERATURE: f64 = 647.096;

    /// Liquid density at the reference pressure [kg/m³].
    pub const LIQUID_DENSITY_REF: f64 = 1000.0;
    /// Reference pressure of the liquid equation of state [Pa].
    pub const LIQUID_PRESSURE_REF: f64 = 1.0e5;
    /// Isothermal compressibility of the liquid [1/Pa].
    pub const LIQUID_COMPRESSIBILITY: f64 = 4.5e-10;

    pub const LIQUID_VISCOSITY: f64 = 1.0e-3;
    pub const GAS_VISCOSITY: f64 = 1.0e-5;

    /// Liquid isobaric heat capacity [J/(kg·K)].
    pub const LIQUID_CP: f64 = 4180.0;
    /// Vapour isobaric heat capacity [J/(kg·K)].
    pub const GAS_CP: f64 = 1976.0;
    /// Latent heat of vaporization at 0 °C [J/kg].
    pub const LATENT_HEAT_0C: f64 = 2.501e6;

    // IAPWS-IF97 region 4 coefficients n1..n10
    const N: [f64; 10] = [
        0.116_705_214_527_67e4,
        -0.724_213_167_032_06e6,
        -0.170_738_469_400_92e2,
        0.120_208_247_024_70e5,
        -0.323_255_503_223_33e7,
        0.149_151_086_135_30e2,
        -0.482_326_573_615_91e4,
        0.405_113_405_420_57e6,
        -0.238_555_575_678_49,
        0.650_175_348_447_98e3,
    ];

    /// Saturation pressure [Pa], temperature clamped to [triple, critical].
    fn saturation_pressure_pa(t_k: f64) -> f64 {
        let t = t_k.clamp(Self::TRIPLE_TEMPERATURE, Self::CRITICAL_TEMPERATURE);
        let n = &Self::N;

        let theta = t + n[8] / (t - n[9]);
        let a = theta * theta + n[0] * theta + n[1];
        let b = n[2] * theta * theta + n[3] * theta + n[4];
        let c = n[5] * theta * theta + n[6] * theta + n[7];

        let tmp = 2.0 * c / ((b * b - 4.0 * a * c).sqrt() - b);
        let tmp2 = tmp * tmp;
        tmp2 * tmp2 * 1.0e6
    }
}

impl PureComponent for SimpleH2O {
    fn name(&self) -> &'static str {
        "H2O"
    }

    fn molar_mass(&self) -> MolarMass {
        Self::MOLAR_MASS
    }

    fn vapor_pressure(&self, t: Temperature) -> FluidResult<Pressure> {
        validation::validate_temperature(t)?;
        Ok(pa(Self::saturation_pressure_pa(t.value)))
    }

    fn liquid_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        let rho = Self::LIQUID_DENSITY_REF
            * (1.0 + Self::LIQUID_COMPRESSIBILITY * (p.value - Self::LIQUID_PRESSURE_REF));
        let rho = kg_per_m3(rho);
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn liquid_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        Ok(pa_s(Self::LIQUID_VISCOSITY))
    }

    fn liquid_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        Ok(Self::LIQUID_CP * (t.value - T_ZERO_CELSIUS))
    }

    fn liquid_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure> {
        validation::validate_temperature(t)?;
        validation::validate_density(rho)?;
        let p = Self::LIQUID_PRESSURE_REF
            + (rho.value / Self::LIQUID_DENSITY_REF - 1.0) / Self::LIQUID_COMPRESSIBILITY;
        if p <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "liquid water density below the zero-pressure density",
            });
        }
        Ok(pa(p))
    }

    fn gas_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        ideal_gas::density(Self::MOLAR_MASS, t, p)
    }

    fn gas_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc> {
        validation::validate_temperature(t)?;
        validation::validate_partial_pressure(p)?;
        Ok(pa_s(Self::GAS_VISCOSITY))
    }

    fn gas_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy> {
        validation::validate_temperature(t)?;
        validation::validate_partial_pressure(p)?;
        Ok(Self::GAS_CP * (t.value - T_ZERO_CELSIUS) + Self::LATENT_HEAT_0C)
    }

    fn gas_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure> {
        ideal_gas::pressure(Self::MOLAR_MASS, t, rho)
    }
}
