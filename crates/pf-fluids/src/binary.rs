//! Binary coefficients for the water / nitrogen pair.

use crate::components::{Nitrogen, PureComponent, SimpleH2O};
use crate::error::FluidResult;
use crate::validation;
use pf_core::units::{DiffCoeff, Pressure, Temperature, k, pa};

/// Henry constant [Pa] of nitrogen dissolved in liquid water.
///
/// IAPWS guideline correlation (Fernández-Prini, Alvarez, Harvey 2003):
///
/// ```text
/// ln(kH / p*) = A / Tr + B τ^0.355 / Tr + C Tr^-0.41 exp(τ)
/// ```
///
/// with `p*` the vapour pressure of water, `Tr = T / Tc(H2O)` and `τ = 1 - Tr`.
/// Like the vapour pressure, the correlation is held at its value at the
/// triple or critical point outside that range.
pub fn henry(t: Temperature) -> FluidResult<Pressure> {
    const A: f64 = -9.67578;
    const B: f64 = 4.72162;
    const C: f64 = 11.70585;

    let t = validation::validate_temperature(t)?
        .clamp(SimpleH2O::TRIPLE_TEMPERATURE, SimpleH2O::CRITICAL_TEMPERATURE);
    let p_sat = SimpleH2O.vapor_pressure(k(t))?;

    let tr = t / SimpleH2O::CRITICAL_TEMPERATURE;
    let tau = 1.0 - tr;
    let ln_ratio = A / tr + B * tau.powf(0.355) / tr + C * tr.powf(-0.41) * tau.exp();

    Ok(pa(p_sat.value * ln_ratio.exp()))
}

/// Diffusion coefficient [m²/s] of nitrogen in liquid water.
///
/// Scales the 25 °C measurement linearly with temperature.
pub fn liquid_diff_coeff(t: Temperature, p: Pressure) -> FluidResult<DiffCoeff> {
    const T_EXP: f64 = 298.15;
    const D_EXP: f64 = 2.01e-9;

    validation::validate_temperature(t)?;
    validation::validate_pressure(p)?;
    Ok(D_EXP * t.value / T_EXP)
}

/// Diffusion coefficient [m²/s] of water vapour in nitrogen.
///
/// Fuller, Schettler and Giddings method, with atomic diffusion volumes of
/// 13.1 (H₂O) and 18.5 (N₂).
pub fn gas_diff_coeff(t: Temperature, p: Pressure) -> FluidResult<DiffCoeff> {
    const SIGMA_NU_H2O: f64 = 13.1;
    const SIGMA_NU_N2: f64 = 18.5;

    validation::validate_temperature(t)?;
    validation::validate_pressure(p)?;

    // g/mol
    let m_h2o = SimpleH2O::MOLAR_MASS * 1.0e3;
    let m_n2 = Nitrogen::MOLAR_MASS * 1.0e3;
    let m_ab = 2.0 / (1.0 / m_h2o + 1.0 / m_n2);

    let p_bar = p.value / 1.0e5;
    let sigma = SIGMA_NU_H2O.cbrt() + SIGMA_NU_N2.cbrt();

    // cm²/s
    let d = 0.00143 * t.value.powf(1.75) / (p_bar * m_ab.sqrt() * sigma * sigma);
    Ok(d * 1.0e-4)
}
