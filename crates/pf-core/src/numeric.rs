use crate::{PfError, PfResult};

/// Floating point type used by every constitutive relation.
pub type Real = f64;

/// Absolute and relative tolerance pair used by the property tests.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Check that `v` lies in the closed interval `[min, max]`.
///
/// NaN never passes.
pub fn ensure_in_range(v: Real, min: Real, max: Real, what: &'static str) -> PfResult<Real> {
    if v >= min && v <= max {
        Ok(v)
    } else {
        Err(PfError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}

/// Clamp into `[0, 1]`.
#[inline]
pub fn clamp_unit(v: Real) -> Real {
    v.clamp(0.0, 1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_unit_stays_in_unit_interval(v in -1.0e6_f64..1.0e6_f64) {
            let c = clamp_unit(v);
            prop_assert!(ensure_in_range(c, 0.0, 1.0, "clamped").is_ok());
        }
    }
}
