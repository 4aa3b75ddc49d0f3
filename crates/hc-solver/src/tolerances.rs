//! Tolerances and iteration caps of the standpipe solvers.

use std::time::Duration;

use hc_core::Deadline;

/// Source excess below which the reservoir height is accepted, m.c.a.
pub const HEIGHT_TOLERANCE: f64 = 1e-3;

/// Relative bracket width at which a flow bisection stops.
pub const FLOW_TOLERANCE: f64 = 1e-6;

/// Pressure match for the single-fixture flow solve, m.c.a.
pub const PRESSURE_TOLERANCE: f64 = 1e-6;

pub const MAX_HEIGHT_ITERATIONS: usize = 100;

pub const MAX_FLOW_ITERATIONS: usize = 50;

/// Doublings of the residual-flow upper bound before giving up.
pub const MAX_BRACKET_DOUBLINGS: usize = 50;

/// Fraction of the nominal flow used to probe whether any flow is possible.
pub const FEASIBILITY_FLOW_FRACTION: f64 = 1e-3;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounds of one calculation run. `Default` uses the constants above and a
/// [`DEFAULT_TIMEOUT`] wall-clock budget starting now.
#[derive(Clone, Copy, Debug)]
pub struct SolverLimits {
    pub height_tolerance: f64,
    pub flow_tolerance: f64,
    pub pressure_tolerance: f64,
    pub max_height_iterations: usize,
    pub max_flow_iterations: usize,
    pub max_bracket_doublings: usize,
    pub deadline: Deadline,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self::with_deadline(Deadline::after(DEFAULT_TIMEOUT))
    }
}

impl SolverLimits {
    pub fn with_deadline(deadline: Deadline) -> Self {
        Self {
            height_tolerance: HEIGHT_TOLERANCE,
            flow_tolerance: FLOW_TOLERANCE,
            pressure_tolerance: PRESSURE_TOLERANCE,
            max_height_iterations: MAX_HEIGHT_ITERATIONS,
            max_flow_iterations: MAX_FLOW_ITERATIONS,
            max_bracket_doublings: MAX_BRACKET_DOUBLINGS,
            deadline,
        }
    }

    /// No wall-clock bound.
    pub fn unbounded() -> Self {
        Self::with_deadline(Deadline::unbounded())
    }
}
