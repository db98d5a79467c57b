//! Print phase properties of the H2O/N2 system over a temperature sweep.
//!
//! A debug-level subscriber is installed so the table build in `init()` is logged.

use pf_core::units::{k, pa};
use pf_fluids::{
    FluidState, FluidSystem, H2oN2System, Nitrogen, Phase, SimpleH2O, TabulatedComponent,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let water = TabulatedComponent::new(SimpleH2O, k(273.15), k(623.15), 701)?;
    let fs = H2oN2System::with_components(water, Nitrogen);
    fs.init()?;

    let pg = pa(1.0e5);
    let liquid = Phase::Liquid.index();
    let gas = Phase::Gas.index();

    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "T [K]", "p_sat [Pa]", "rho_g", "mu_g [Pa s]", "h_g [J/kg]", "u_l [J/kg]"
    );
    for t_k in [280.0, 300.0, 320.0, 340.0, 360.0] {
        let t = k(t_k);
        let p_sat = fs.degas_pressure(0, t, pg)?;
        // saturated gas phase
        let x_h2o = (p_sat.value / pg.value).min(1.0);
        let mut state = fs.new_state([1.0, 0.0], [x_h2o, 1.0 - x_h2o])?;
        fs.compute_partial_pressures(t, pg, &mut state)?;

        let rho_g = fs.phase_density(gas, t, pg, &state)?;
        let mu_g = fs.phase_viscosity(gas, t, pg, &state)?;
        let h_g = fs.phase_enthalpy(gas, t, pg, &state)?;
        let u_l = fs.phase_internal_energy(liquid, t, pg, &state)?;

        println!(
            "{:>8.1} {:>12.1} {:>12.4} {:>12.3e} {:>12.1} {:>12.1}",
            t_k,
            state.partial_pressure(0).value,
            rho_g.value,
            mu_g.value,
            h_g,
            u_l
        );
    }

    Ok(())
}
