//! Capillary-pressure / relative-permeability law trait.

use crate::error::MaterialResult;
use pf_core::numeric::Real;
use pf_core::units::Pressure;

/// A two-phase material law relating wetting saturation, capillary pressure
/// and relative permeabilities.
///
/// All functions are pure. Derivatives are analytic so that a Newton solver
/// never differentiates numerically.
pub trait CapillaryLaw: Send + Sync {
    /// Capillary pressure `pc = p_n - p_w` at wetting saturation `sw`.
    fn pc(&self, sw: Real) -> MaterialResult<Pressure>;

    /// Wetting saturation at capillary pressure `pc`; inverse of [`CapillaryLaw::pc`].
    fn sw(&self, pc: Pressure) -> MaterialResult<Real>;

    /// ∂pc/∂sw [Pa].
    fn dpc_dsw(&self, sw: Real) -> MaterialResult<Real>;

    /// ∂sw/∂pc [1/Pa].
    fn dsw_dpc(&self, pc: Pressure) -> MaterialResult<Real>;

    /// Relative permeability of the wetting phase.
    fn krw(&self, sw: Real) -> MaterialResult<Real>;

    /// Relative permeability of the non-wetting phase.
    fn krn(&self, sw: Real) -> MaterialResult<Real>;
}
