//! pf-material: two-phase capillary-pressure and relative-permeability laws.
//!
//! ```
//! use pf_core::units::pa;
//! use pf_material::{BrooksCorey, BrooksCoreyParams, CapillaryLaw};
//!
//! let law = BrooksCorey::new(BrooksCoreyParams::new(pa(1e4), 2.0)?);
//! let pc = law.pc(0.5)?;
//! assert!((law.sw(pc)? - 0.5).abs() < 1e-12);
//! # Ok::<(), pf_material::MaterialError>(())
//! ```

pub mod brooks_corey;
pub mod config;
pub mod eff_to_abs;
pub mod error;
pub mod law;

pub use brooks_corey::{BrooksCorey, BrooksCoreyParams};
pub use config::{
    ConfigError, ConfigResult, LawDef, MaterialConfig, MaterialRegion, MaterialRegions, RegionDef,
    load_json, load_yaml, validate_config,
};
pub use eff_to_abs::EffToAbsLaw;
pub use error::{MaterialError, MaterialResult};
pub use law::CapillaryLaw;
