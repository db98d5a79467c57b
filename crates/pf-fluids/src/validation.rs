//! Input checks shared by the component providers and the facade.
//!
//! Each check hands back the raw SI value so call sites can keep using it.

use crate::error::{FluidError, FluidResult};
use pf_core::numeric::Real;
use pf_core::units::{Density, Pressure, Temperature};

fn strictly_positive(v: Real, what: &'static str) -> FluidResult<Real> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(FluidError::NonPhysical { what })
    }
}

pub fn validate_pressure(p: Pressure) -> FluidResult<Real> {
    strictly_positive(p.value, "pressure must be positive and finite")
}

/// Zero is admissible: an absent species has no partial pressure.
pub fn validate_partial_pressure(p: Pressure) -> FluidResult<Real> {
    match p.value {
        v if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(FluidError::NonPhysical {
            what: "partial pressure must be non-negative and finite",
        }),
    }
}

pub fn validate_temperature(t: Temperature) -> FluidResult<Real> {
    strictly_positive(t.value, "temperature must be positive and finite")
}

pub fn validate_density(rho: Density) -> FluidResult<Real> {
    strictly_positive(rho.value, "density must be positive and finite")
}

/// Molar mass in kg/mol.
pub fn validate_molar_mass(m: Real) -> FluidResult<Real> {
    strictly_positive(m, "molar mass must be positive and finite")
}

/// Enthalpy has an arbitrary reference, so only finiteness is checked.
pub fn validate_enthalpy(h: Real) -> FluidResult<Real> {
    if h.is_finite() {
        Ok(h)
    } else {
        Err(FluidError::NonPhysical {
            what: "enthalpy must be finite",
        })
    }
}
