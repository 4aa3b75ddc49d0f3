//! hc-core: stable foundation for hydrocalc.
//!
//! Contains:
//! - units (uom SI types + conversions used by the hydraulic formulas)
//! - numeric (Real, finiteness checks, decimal-comma report formatting)
//! - ids (arena ids for path trees, typed catalog ids)
//! - timing (wall-clock deadline around a calculation)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::{HcError, HcResult};
pub use ids::*;
pub use numeric::*;
pub use timing::{Deadline, Timer};
pub use units::*;
