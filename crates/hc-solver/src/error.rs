//! Error types for the calculation engines.

use hc_catalog::CatalogError;
use hc_components::ComponentError;
use hc_core::HcError;
use hc_graph::GraphError;
use thiserror::Error;

/// Everything a calculation can fail with. All variants are terminal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No data was passed")]
    NoInitialData,

    #[error("No reservoir found: no path starts at '{label}'")]
    NoReservoir { label: String },

    #[error("More than one reservoir found: {count} paths start at '{label}'")]
    MoreThanOneReservoir { label: String, count: usize },

    #[error("Path starting at '{start}' does not lead to the reservoir")]
    PathNotLeadingToReservoir { start: String },

    #[error("More than one pump found at node '{node}'")]
    MoreThanOnePump { node: String },

    #[error("Pump node '{node}' not found")]
    PumpNodeNotFound { node: String },

    #[error("Network branches at '{label}' between the reservoir and the pump")]
    BifurcationBeforePump { label: String },

    #[error("No fixture found with id {id}")]
    NoFixture { id: u32 },

    #[error("No active fixture found")]
    NoActiveFixture,

    #[error("No gas found with id {id}")]
    NoGas { id: u32 },

    #[error("Not implemented: calc type '{calc_type}' with pressure type '{pressure_type}'")]
    NotImplemented {
        calc_type: String,
        pressure_type: String,
    },

    #[error("Could not finish calculation: {what}")]
    CouldNotFinish { what: String },

    #[error("Invalid network: {0}")]
    Topology(GraphError),

    #[error("Reference data error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Numeric error: {0}")]
    Core(#[from] HcError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn could_not_finish(what: impl Into<String>) -> Self {
        SolverError::CouldNotFinish { what: what.into() }
    }

    /// Input problems, as opposed to numerical failures.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            SolverError::CouldNotFinish { .. }
                | SolverError::NotImplemented { .. }
                | SolverError::Core(HcError::DeadlineExceeded { .. })
        )
    }
}
