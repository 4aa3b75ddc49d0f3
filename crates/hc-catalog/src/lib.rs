//! hc-catalog: reference data for hydrocalc.
//!
//! Read-only catalog rows (materials, diameters, fittings, reductions,
//! material connections, gases, fixtures), the [`ReferenceData`] lookup
//! contract used by the solvers, an in-memory [`Catalog`] implementation
//! and the reduction chain search.

pub mod catalog;
pub mod error;
pub mod provider;
pub mod records;
pub mod reduction;

pub use catalog::{Catalog, CatalogData};
pub use error::{CatalogError, CatalogResult, RecordKind};
pub use provider::ReferenceData;
pub use records::*;
pub use reduction::best_reduction;
