//! Closed-form ideal-gas relations.
//!
//! All molar masses are in kg/mol so that `R` is the universal gas constant
//! in J/(mol·K).

use crate::error::FluidResult;
use crate::validation;
use pf_core::units::constants::R_UNIVERSAL;
use pf_core::units::{Density, Pressure, Temperature, kg_per_m3, pa};

/// Universal gas constant [J/(mol·K)].
pub const R: f64 = R_UNIVERSAL;

/// Density `ρ = M p / (R T)` of an ideal gas with (mean) molar mass `molar_mass` [kg/mol].
pub fn density(molar_mass: f64, t: Temperature, p: Pressure) -> FluidResult<Density> {
    validation::validate_molar_mass(molar_mass)?;
    validation::validate_temperature(t)?;
    validation::validate_partial_pressure(p)?;
    Ok(kg_per_m3(molar_mass * p.value / (R * t.value)))
}

/// Pressure `p = ρ R T / M`, the inverse of [`density`].
pub fn pressure(molar_mass: f64, t: Temperature, rho: Density) -> FluidResult<Pressure> {
    validation::validate_molar_mass(molar_mass)?;
    validation::validate_temperature(t)?;
    validation::validate_density(rho)?;
    Ok(pa(rho.value * R * t.value / molar_mass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::k;

    #[test]
    fn nitrogen_at_300k_1bar() {
        let rho = density(0.02801348, k(300.0), pa(1.0e5)).unwrap();
        assert!((rho.value - 1.1233).abs() < 1e-4, "rho = {}", rho.value);
    }

    #[test]
    fn pressure_inverts_density() {
        let m = 0.018015284;
        let t = k(350.0);
        let rho = density(m, t, pa(2.5e5)).unwrap();
        let p = pressure(m, t, rho).unwrap();
        assert!((p.value - 2.5e5).abs() < 1e-6);
    }

    #[test]
    fn zero_pressure_gives_zero_density() {
        let rho = density(0.028, k(300.0), pa(0.0)).unwrap();
        assert_eq!(rho.value, 0.0);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        assert!(density(0.0, k(300.0), pa(1e5)).is_err());
        assert!(density(0.028, k(0.0), pa(1e5)).is_err());
        assert!(pressure(0.028, k(300.0), kg_per_m3(-1.0)).is_err());
    }
}
