//! pf-fluids: fluid-system facade for a two-phase water / nitrogen mixture.
//!
//! Provides:
//! - Phase and species indexing (liquid = wetting = 0, gas = non-wetting = 1;
//!   H₂O = 0, N₂ = 1)
//! - Pure-component property providers (simplified water, nitrogen) and a
//!   tabulated wrapper
//! - H₂O/N₂ binary coefficients (Henry constant, diffusion coefficients)
//! - Ideal-gas helper
//! - `FluidState` contract and a concrete compositional state
//! - `FluidSystem` trait and the `H2oN2System` dispatcher
//!
//! # Example
//!
//! ```
//! use pf_core::units::{k, pa};
//! use pf_fluids::{FluidSystem, H2oN2System, Phase};
//!
//! let fs = H2oN2System::new();
//! fs.init().unwrap();
//!
//! let mut state = fs.new_state([1.0, 0.0], [0.02, 0.98]).unwrap();
//! fs.compute_partial_pressures(k(300.0), pa(1.0e5), &mut state).unwrap();
//!
//! let rho_gas = fs
//!     .phase_density(Phase::Gas.index(), k(300.0), pa(1.0e5), &state)
//!     .unwrap();
//! println!("Gas density: {} kg/m³", rho_gas.value);
//! ```

pub mod binary;
pub mod components;
pub mod error;
pub mod ideal_gas;
pub mod indices;
pub mod state;
pub mod system;
mod validation;

// Re-exports for ergonomics
pub use components::{Nitrogen, PureComponent, SimpleH2O, TabulatedComponent};
pub use error::{FluidError, FluidResult};
pub use indices::{NUM_COMPONENTS, NUM_PHASES, Phase, Species};
pub use state::{CompositionalState, FluidState};
pub use system::{FluidSystem, H2oN2System};
