//! Pure-substance property providers.
//!
//! The fluid system never computes single-substance properties itself; it
//! dispatches to a [`PureComponent`] per species. Providers are stateless
//! apart from read-only tables built in [`PureComponent::init`].

pub mod nitrogen;
pub mod simple_h2o;
pub mod tabulated;

pub use nitrogen::Nitrogen;
pub use simple_h2o::SimpleH2O;
pub use tabulated::TabulatedComponent;

use crate::error::{FluidError, FluidResult};
use pf_core::units::{Density, DynVisc, MolarMass, Pressure, SpecEnthalpy, Temperature};

/// Trait for single-substance property providers.
///
/// Implementations must be thread-safe (Send + Sync) so solver threads can
/// query them without synchronization once `init` has completed.
pub trait PureComponent: Send + Sync {
    /// Human-readable name of the substance.
    fn name(&self) -> &'static str;

    /// Molar mass [kg/mol].
    fn molar_mass(&self) -> MolarMass;

    /// Build any lookup tables. Must be idempotent.
    fn init(&self) -> FluidResult<()> {
        Ok(())
    }

    /// Saturation vapour pressure [Pa] at temperature `t`.
    fn vapor_pressure(&self, _t: Temperature) -> FluidResult<Pressure> {
        Err(FluidError::NotSupported {
            what: "vapor pressure",
        })
    }

    /// Liquid density [kg/m³].
    fn liquid_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density>;

    /// Liquid dynamic viscosity [Pa·s].
    fn liquid_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc>;

    /// Liquid specific enthalpy [J/kg].
    fn liquid_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy>;

    /// Liquid pressure [Pa] at given temperature and density.
    fn liquid_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure>;

    /// Gas density [kg/m³].
    fn gas_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density>;

    /// Gas dynamic viscosity [Pa·s].
    fn gas_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc>;

    /// Gas specific enthalpy [J/kg].
    fn gas_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy>;

    /// Gas pressure [Pa] at given temperature and density.
    fn gas_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure>;
}
