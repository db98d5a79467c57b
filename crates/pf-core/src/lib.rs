//! pf-core: shared foundation for the porous-flow constitutive crates.
//!
//! Contains:
//! - numeric (Real + tolerances + range checks)
//! - units (uom SI types, constructors, gas constant)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
