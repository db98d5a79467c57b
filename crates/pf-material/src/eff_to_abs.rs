//! Absolute-saturation adapter for laws written in effective saturations.

use crate::error::{MaterialError, MaterialResult};
use crate::law::CapillaryLaw;
use pf_core::numeric::{Real, clamp_unit};
use pf_core::units::Pressure;

/// Effective saturations within this distance of `[0, 1]` are snapped onto
/// it, so that `swr` and `1 - snr` survive the rescaling round off.
const SATURATION_SLACK: Real = 1e-12;

/// Wraps an effective-saturation law with residual saturations.
///
/// `Swe = (Sw - swr) / (1 - swr - snr)`. Absolute saturations outside
/// `[swr, 1 - snr]` map outside `[0, 1]` and are rejected by the inner law.
#[derive(Debug, Clone, PartialEq)]
pub struct EffToAbsLaw<L> {
    law: L,
    swr: Real,
    snr: Real,
}

impl<L: CapillaryLaw> EffToAbsLaw<L> {
    pub fn new(law: L, swr: Real, snr: Real) -> MaterialResult<Self> {
        if !(0.0..1.0).contains(&swr) {
            return Err(MaterialError::precondition("residual wetting saturation in [0, 1)", swr));
        }
        if !(0.0..1.0).contains(&snr) {
            return Err(MaterialError::precondition(
                "residual non-wetting saturation in [0, 1)",
                snr,
            ));
        }
        if swr + snr >= 1.0 {
            return Err(MaterialError::precondition("swr + snr < 1", swr + snr));
        }
        Ok(Self { law, swr, snr })
    }

    /// Zero residual saturations: absolute and effective saturations coincide.
    pub fn identity(law: L) -> Self {
        Self {
            law,
            swr: 0.0,
            snr: 0.0,
        }
    }

    pub fn inner(&self) -> &L {
        &self.law
    }

    pub fn swr(&self) -> Real {
        self.swr
    }

    pub fn snr(&self) -> Real {
        self.snr
    }

    fn mobile_range(&self) -> Real {
        1.0 - self.swr - self.snr
    }

    /// Effective saturation of `sw`. Values genuinely outside
    /// `[swr, 1 - snr]` are returned unclamped for the inner law to reject.
    pub fn sw_to_swe(&self, sw: Real) -> Real {
        let swe = (sw - self.swr) / self.mobile_range();
        if (-SATURATION_SLACK..=1.0 + SATURATION_SLACK).contains(&swe) {
            clamp_unit(swe)
        } else {
            swe
        }
    }

    pub fn swe_to_sw(&self, swe: Real) -> Real {
        self.swr + swe * self.mobile_range()
    }
}

impl<L: CapillaryLaw> CapillaryLaw for EffToAbsLaw<L> {
    fn pc(&self, sw: Real) -> MaterialResult<Pressure> {
        self.law.pc(self.sw_to_swe(sw))
    }

    fn sw(&self, pc: Pressure) -> MaterialResult<Real> {
        Ok(self.swe_to_sw(self.law.sw(pc)?))
    }

    fn dpc_dsw(&self, sw: Real) -> MaterialResult<Real> {
        let d = self.law.dpc_dsw(self.sw_to_swe(sw))? / self.mobile_range();
        if d.is_finite() {
            Ok(d)
        } else {
            Err(MaterialError::Singular {
                what: "dpc/dsw overflows after rescaling",
            })
        }
    }

    fn dsw_dpc(&self, pc: Pressure) -> MaterialResult<Real> {
        Ok(self.law.dsw_dpc(pc)? * self.mobile_range())
    }

    fn krw(&self, sw: Real) -> MaterialResult<Real> {
        self.law.krw(self.sw_to_swe(sw))
    }

    fn krn(&self, sw: Real) -> MaterialResult<Real> {
        self.law.krn(self.sw_to_swe(sw))
    }
}
