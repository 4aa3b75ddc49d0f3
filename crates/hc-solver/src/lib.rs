//! Calculation engines for gas piping and fire standpipe networks.
//!
//! Both engines work on an arena of per-segment state indexed by
//! [`hc_core::PathId`] and walk an explicit [`hc_graph::PathTree`]:
//! flows are summed leaves-to-source, pressures are carried
//! source-to-leaves. The gas engine is a single forward pass. The standpipe
//! engine wraps the passes in root-finding loops that solve for reservoir
//! height, residual flow or pump head.

pub mod bisection;
pub mod connections;
pub mod error;
pub mod gas;
pub mod standpipe;
pub mod tolerances;
pub mod topology;

pub use bisection::{Bisection, SolveOutcome};
pub use connections::{SegmentConnections, SegmentRef, fixture_connections, resolve_connections};
pub use error::{SolverError, SolverResult};
pub use gas::{GAS_SOURCE_LABEL, GasNetwork, GasPathState, solve_gas};
pub use standpipe::{
    FixtureModel, FixtureState, Mode, PumpState, STANDPIPE_SOURCE_LABEL, StandpipeNetwork,
    StandpipePathState, solve_standpipe,
};
pub use tolerances::SolverLimits;
