//! hc-components: physics of the pipe network elements.
//!
//! Provides closed-form models used by the solvers:
//! - Hazen-Williams friction for water piping and hoses
//! - Gas pressure drop, end pressure, velocity and demand concurrency
//! - Nozzle flow/pressure laws (orifice or K-factor) behind [`FlowPressureLaw`]
//! - Pump suction margin (NPSH available)
//!
//! Standpipe pressures are metres of water column, flows m³/s and
//! diameters millimetres. Gas pressures are kPa and gas flows m³/h.
//!
//! # Example
//!
//! ```
//! use hc_components::hazen_williams::unit_pressure_drop;
//!
//! let j = unit_pressure_drop(0.005, 120.0, 65.0);
//! assert!(j > 0.0);
//! assert_eq!(unit_pressure_drop(0.0, 120.0, 65.0), 0.0);
//! ```

pub mod common;
pub mod error;
pub mod gas;
pub mod hazen_williams;
pub mod nozzle;
pub mod pump;
pub mod traits;

pub use error::{ComponentError, ComponentResult};
pub use gas::GasRegime;
pub use hazen_williams::HazenWilliams;
pub use nozzle::{Hose, Nozzle, NozzleLaw};
pub use traits::FlowPressureLaw;
