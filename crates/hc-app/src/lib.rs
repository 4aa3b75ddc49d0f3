//! Shared application service layer for hydrocalc.
//!
//! Front ends load catalogs and calculation inputs through
//! [`project_service`] and run them through [`calc_service`], which bounds
//! each run with a wall-clock deadline and assembles the output record.

pub mod calc_service;
pub mod error;
pub mod project_service;

pub use calc_service::{CalcOptions, report_gas, report_standpipe, run_gas, run_standpipe};
pub use error::{AppError, AppResult};
pub use project_service::{
    CatalogSummary, InputKind, InputSummary, catalog_summary, load_catalog, load_gas_input,
    load_standpipe_input, validate_input,
};
