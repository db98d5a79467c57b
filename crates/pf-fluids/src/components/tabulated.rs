//! Tabulated wrapper around a pure-component provider.

use super::PureComponent;
use crate::error::{FluidError, FluidResult};
use crate::validation;
use pf_core::units::{Density, DynVisc, MolarMass, Pressure, SpecEnthalpy, Temperature, k, pa};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Caches the vapour-pressure curve of a provider on a uniform temperature grid.
///
/// The table is built at most once, by [`PureComponent::init`], and is read-only
/// afterwards. Queries made before `init` or outside the tabulated range are
/// answered by the wrapped provider. Everything other than the vapour pressure
/// is forwarded unchanged.
#[derive(Debug)]
pub struct TabulatedComponent<C> {
    inner: C,
    t_min: f64,
    t_max: f64,
    n_temp: usize,
    /// `None` once init found the inner provider has no vapour pressure.
    vapor_pressure: OnceLock<Option<Vec<f64>>>,
}

impl<C: PureComponent> TabulatedComponent<C> {
    /// Wrap `inner`, tabulating over `[t_min, t_max]` with `n_temp` points.
    pub fn new(
        inner: C,
        t_min: Temperature,
        t_max: Temperature,
        n_temp: usize,
    ) -> FluidResult<Self> {
        validation::validate_temperature(t_min)?;
        validation::validate_temperature(t_max)?;
        if t_max.value <= t_min.value {
            return Err(FluidError::InvalidArg {
                what: "tabulation range must have t_max > t_min",
            });
        }
        if n_temp < 2 {
            return Err(FluidError::InvalidArg {
                what: "tabulation needs at least two temperature points",
            });
        }
        Ok(Self {
            inner,
            t_min: t_min.value,
            t_max: t_max.value,
            n_temp,
            vapor_pressure: OnceLock::new(),
        })
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// True once `init` has built (or deliberately skipped) the table.
    pub fn is_initialized(&self) -> bool {
        self.vapor_pressure.get().is_some()
    }

    fn temperature_at(&self, i: usize) -> f64 {
        let dt = (self.t_max - self.t_min) / (self.n_temp - 1) as f64;
        self.t_min + dt * i as f64
    }

    fn build_vapor_pressure_table(&self) -> FluidResult<Option<Vec<f64>>> {
        let mut table = Vec::with_capacity(self.n_temp);
        for i in 0..self.n_temp {
            let t = self.temperature_at(i);
            match self.inner.vapor_pressure(k(t)) {
                Ok(p) => table.push(p.value),
                Err(FluidError::NotSupported { .. }) => {
                    debug!(
                        component = self.inner.name(),
                        "no vapor pressure to tabulate"
                    );
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            component = self.inner.name(),
            t_min = self.t_min,
            t_max = self.t_max,
            points = self.n_temp,
            "built vapor pressure table"
        );
        Ok(Some(table))
    }

    /// Linear interpolation in the table; `None` outside the range.
    fn interpolate(table: &[f64], t_min: f64, t_max: f64, t: f64) -> Option<f64> {
        if !(t_min..=t_max).contains(&t) {
            return None;
        }
        let n = table.len();
        let pos = (t - t_min) / (t_max - t_min) * (n - 1) as f64;
        let i = (pos.floor() as usize).min(n - 2);
        let w = pos - i as f64;
        Some((1.0 - w) * table[i] + w * table[i + 1])
    }
}

impl<C: PureComponent> PureComponent for TabulatedComponent<C> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn molar_mass(&self) -> MolarMass {
        self.inner.molar_mass()
    }

    fn init(&self) -> FluidResult<()> {
        self.inner.init()?;
        if self.vapor_pressure.get().is_none() {
            let table = self.build_vapor_pressure_table()?;
            // A concurrent init may have won the race; both tables are identical.
            let _ = self.vapor_pressure.set(table);
        }
        Ok(())
    }

    fn vapor_pressure(&self, t: Temperature) -> FluidResult<Pressure> {
        validation::validate_temperature(t)?;
        if let Some(Some(table)) = self.vapor_pressure.get() {
            if let Some(p) = Self::interpolate(table, self.t_min, self.t_max, t.value) {
                return Ok(pa(p));
            }
            trace!(
                component = self.inner.name(),
                t = t.value,
                "vapor pressure outside table range"
            );
        }
        self.inner.vapor_pressure(t)
    }

    fn liquid_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        self.inner.liquid_density(t, p)
    }

    fn liquid_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc> {
        self.inner.liquid_viscosity(t, p)
    }

    fn liquid_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy> {
        self.inner.liquid_enthalpy(t, p)
    }

    fn liquid_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure> {
        self.inner.liquid_pressure(t, rho)
    }

    fn gas_density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        self.inner.gas_density(t, p)
    }

    fn gas_viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc> {
        self.inner.gas_viscosity(t, p)
    }

    fn gas_enthalpy(&self, t: Temperature, p: Pressure) -> FluidResult<SpecEnthalpy> {
        self.inner.gas_enthalpy(t, p)
    }

    fn gas_pressure(&self, t: Temperature, rho: Density) -> FluidResult<Pressure> {
        self.inner.gas_pressure(t, rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Nitrogen, SimpleH2O};

    fn water_table() -> TabulatedComponent<SimpleH2O> {
        TabulatedComponent::new(SimpleH2O, k(273.15), k(623.15), 3501).unwrap()
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(TabulatedComponent::new(SimpleH2O, k(400.0), k(300.0), 10).is_err());
        assert!(TabulatedComponent::new(SimpleH2O, k(300.0), k(400.0), 1).is_err());
        assert!(TabulatedComponent::new(SimpleH2O, k(0.0), k(400.0), 10).is_err());
    }

    #[test]
    fn queries_before_init_use_inner_provider() {
        let tab = water_table();
        assert!(!tab.is_initialized());
        let p = tab.vapor_pressure(k(350.0)).unwrap();
        let exact = SimpleH2O.vapor_pressure(k(350.0)).unwrap();
        assert_eq!(p.value, exact.value);
    }

    #[test]
    fn table_interpolates_close_to_exact_curve() {
        let tab = water_table();
        tab.init().unwrap();
        assert!(tab.is_initialized());
        for t in [280.03, 300.0, 351.37, 420.5, 600.01] {
            let p = tab.vapor_pressure(k(t)).unwrap().value;
            let exact = SimpleH2O.vapor_pressure(k(t)).unwrap().value;
            assert!((p - exact).abs() / exact < 1e-5, "t = {t}: {p} vs {exact}");
        }
    }

    #[test]
    fn table_nodes_are_exact() {
        let tab = water_table();
        tab.init().unwrap();
        let p = tab.vapor_pressure(k(273.15)).unwrap().value;
        let exact = SimpleH2O.vapor_pressure(k(273.15)).unwrap().value;
        assert_eq!(p, exact);
        let p = tab.vapor_pressure(k(623.15)).unwrap().value;
        let exact = SimpleH2O.vapor_pressure(k(623.15)).unwrap().value;
        assert!((p - exact).abs() / exact < 1e-12);
    }

    #[test]
    fn init_is_idempotent() {
        let tab = water_table();
        tab.init().unwrap();
        let before = tab.vapor_pressure(k(333.3)).unwrap();
        tab.init().unwrap();
        let after = tab.vapor_pressure(k(333.3)).unwrap();
        assert_eq!(before.value, after.value);
    }

    #[test]
    fn outside_range_falls_back() {
        let tab = water_table();
        tab.init().unwrap();
        let p = tab.vapor_pressure(k(640.0)).unwrap();
        let exact = SimpleH2O.vapor_pressure(k(640.0)).unwrap();
        assert_eq!(p.value, exact.value);
    }

    #[test]
    fn provider_without_vapor_pressure() {
        let tab = TabulatedComponent::new(Nitrogen, k(100.0), k(500.0), 11).unwrap();
        tab.init().unwrap();
        assert!(tab.is_initialized());
        assert!(matches!(
            tab.vapor_pressure(k(300.0)),
            Err(FluidError::NotSupported { .. })
        ));
        assert_eq!(tab.name(), "N2");
        let rho = tab.gas_density(k(300.0), pa(1e5)).unwrap();
        assert_eq!(rho.value, Nitrogen.gas_density(k(300.0), pa(1e5)).unwrap().value);
    }
}
