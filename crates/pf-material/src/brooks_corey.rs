//! Brooks–Corey capillary-pressure and relative-permeability law.
//!
//! Works in effective saturations only. Wrap it in
//! [`EffToAbsLaw`](crate::eff_to_abs::EffToAbsLaw) to evaluate at absolute
//! saturations.

use crate::error::{MaterialError, MaterialResult};
use crate::law::CapillaryLaw;
use pf_core::numeric::{Real, clamp_unit, ensure_in_range};
use pf_core::units::{Pressure, pa};

/// Parameters of the Brooks–Corey law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrooksCoreyParams {
    pe: Real,
    alpha: Real,
}

impl BrooksCoreyParams {
    /// Entry pressure `pe > 0` and pore-size distribution index `alpha > 0`.
    pub fn new(pe: Pressure, alpha: Real) -> MaterialResult<Self> {
        let pe = pe.value;
        if !(pe.is_finite() && pe > 0.0) {
            return Err(MaterialError::precondition("entry pressure > 0", pe));
        }
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(MaterialError::precondition("alpha > 0", alpha));
        }
        Ok(Self { pe, alpha })
    }

    pub fn pe(&self) -> Pressure {
        pa(self.pe)
    }

    pub fn alpha(&self) -> Real {
        self.alpha
    }
}

/// The Brooks–Corey law for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrooksCorey {
    params: BrooksCoreyParams,
}

impl BrooksCorey {
    pub fn new(params: BrooksCoreyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BrooksCoreyParams {
        &self.params
    }

    fn check_saturation(sw: Real) -> MaterialResult<Real> {
        ensure_in_range(sw, 0.0, 1.0, "saturation")
            .map_err(|_| MaterialError::precondition("effective saturation in [0, 1]", sw))
    }

    fn check_pc(pc: Pressure) -> MaterialResult<Real> {
        let pc = pc.value;
        // +inf is admissible and maps to zero saturation
        if pc >= 0.0 {
            Ok(pc)
        } else {
            Err(MaterialError::precondition("capillary pressure >= 0", pc))
        }
    }

    /// Arguments close enough to a pole overflow; report them like the pole.
    fn finite_or_singular(v: Real, what: &'static str) -> MaterialResult<Real> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(MaterialError::Singular { what })
        }
    }
}

impl CapillaryLaw for BrooksCorey {
    fn pc(&self, swe: Real) -> MaterialResult<Pressure> {
        let swe = Self::check_saturation(swe)?;
        let what = "capillary pressure at zero effective saturation";
        if swe == 0.0 {
            return Err(MaterialError::Singular { what });
        }
        let BrooksCoreyParams { pe, alpha } = self.params;
        Self::finite_or_singular(pe * swe.powf(-1.0 / alpha), what).map(pa)
    }

    fn sw(&self, pc: Pressure) -> MaterialResult<Real> {
        let pc = Self::check_pc(pc)?;
        let BrooksCoreyParams { pe, alpha } = self.params;
        Ok(clamp_unit((pc / pe).powf(-alpha)))
    }

    fn dpc_dsw(&self, swe: Real) -> MaterialResult<Real> {
        let swe = Self::check_saturation(swe)?;
        let what = "dpc/dsw at zero effective saturation";
        if swe == 0.0 {
            return Err(MaterialError::Singular { what });
        }
        let BrooksCoreyParams { pe, alpha } = self.params;
        Self::finite_or_singular(-(pe / alpha) * swe.powf(-1.0 / alpha - 1.0), what)
    }

    /// Derivative of the unclamped inverse, so it stays nonzero below `pe`.
    fn dsw_dpc(&self, pc: Pressure) -> MaterialResult<Real> {
        let pc = Self::check_pc(pc)?;
        let what = "dsw/dpc at zero capillary pressure";
        if pc == 0.0 {
            return Err(MaterialError::Singular { what });
        }
        let BrooksCoreyParams { pe, alpha } = self.params;
        Self::finite_or_singular(-(alpha / pe) * (pc / pe).powf(-alpha - 1.0), what)
    }

    fn krw(&self, swe: Real) -> MaterialResult<Real> {
        let swe = Self::check_saturation(swe)?;
        let alpha = self.params.alpha;
        Ok(swe.powf((2.0 + 3.0 * alpha) / alpha))
    }

    fn krn(&self, swe: Real) -> MaterialResult<Real> {
        let swe = Self::check_saturation(swe)?;
        let alpha = self.params.alpha;
        let sn = 1.0 - swe;
        Ok(sn * sn * (1.0 - swe.powf((2.0 + alpha) / alpha)))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn law(pe: f64, alpha: f64) -> BrooksCorey {
        BrooksCorey::new(BrooksCoreyParams::new(pa(pe), alpha).unwrap())
    }

    proptest! {
        #[test]
        fn pc_at_least_entry_pressure(
            pe in 1e2..1e6_f64,
            alpha in 0.2..5.0_f64,
            swe in 1e-3..0.999_f64,
        ) {
            let bc = law(pe, alpha);
            prop_assert!(bc.pc(swe).unwrap().value > pe);
        }

        #[test]
        fn pc_sw_round_trip(
            pe in 1e2..1e6_f64,
            alpha in 0.2..5.0_f64,
            swe in 1e-3..1.0_f64,
        ) {
            let bc = law(pe, alpha);
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            let pc = bc.pc(swe).unwrap();
            prop_assert!(nearly_equal(bc.sw(pc).unwrap(), swe, tol));
            prop_assert!(nearly_equal(bc.pc(bc.sw(pc).unwrap()).unwrap().value, pc.value, tol));
        }

        #[test]
        fn derivatives_are_reciprocal(
            pe in 1e2..1e6_f64,
            alpha in 0.2..5.0_f64,
            swe in 1e-3..0.999_f64,
        ) {
            let bc = law(pe, alpha);
            let pc = bc.pc(swe).unwrap();
            let prod = bc.dpc_dsw(swe).unwrap() * bc.dsw_dpc(pc).unwrap();
            prop_assert!((prod - 1.0).abs() < 1e-9);
            prop_assert!(bc.dpc_dsw(swe).unwrap() < 0.0);
        }

        #[test]
        fn sw_non_increasing_in_pc(
            pe in 1e2..1e6_f64,
            alpha in 0.2..5.0_f64,
            pc1 in 0.0..1e7_f64,
            pc2 in 0.0..1e7_f64,
        ) {
            let bc = law(pe, alpha);
            let (lo, hi) = if pc1 <= pc2 { (pc1, pc2) } else { (pc2, pc1) };
            prop_assert!(bc.sw(pa(lo)).unwrap() >= bc.sw(pa(hi)).unwrap());
        }

        #[test]
        fn relperms_bounded_and_monotone(
            alpha in 0.2..5.0_f64,
            s1 in 0.0..=1.0_f64,
            s2 in 0.0..=1.0_f64,
        ) {
            let bc = law(1e4, alpha);
            let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            for s in [lo, hi] {
                let krw = bc.krw(s).unwrap();
                let krn = bc.krn(s).unwrap();
                prop_assert!((0.0..=1.0).contains(&krw));
                prop_assert!((0.0..=1.0).contains(&krn));
            }
            prop_assert!(bc.krw(lo).unwrap() <= bc.krw(hi).unwrap());
            prop_assert!(bc.krn(lo).unwrap() >= bc.krn(hi).unwrap());
        }
    }
}
