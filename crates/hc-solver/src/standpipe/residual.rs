//! Flow delivered at the governing fixture by a reservoir at a given level.

use tracing::debug;

use super::StandpipeNetwork;
use crate::bisection::{Bisection, SolveOutcome};
use crate::error::{SolverError, SolverResult};
use crate::tolerances::{FEASIBILITY_FLOW_FRACTION, SolverLimits};

impl StandpipeNetwork {
    /// Largest governing flow whose minimum reservoir height is not above
    /// `level`.
    ///
    /// The surplus `required_level(q) − level` falls as `q` grows. A probe
    /// at a tiny flow rules out reservoirs too low for any flow; the upper
    /// bound doubles from the nominal minimum flow until the surplus turns
    /// non-positive, then the bracket is bisected.
    pub fn solve_residual_flow(
        &mut self,
        level: f64,
        limits: &SolverLimits,
    ) -> SolverResult<SolveOutcome> {
        let nominal = self.fixture.minimum_flow();

        let probe = nominal * FEASIBILITY_FLOW_FRACTION;
        if self.level_surplus(probe, level, limits)? <= 0.0 {
            return Err(SolverError::could_not_finish(
                "reservoir too low to supply any fixture",
            ));
        }

        let mut lo = probe;
        let mut hi = nominal;
        let mut doublings = 0;
        while self.level_surplus(hi, level, limits)? > 0.0 {
            doublings += 1;
            if doublings > limits.max_bracket_doublings {
                return Err(SolverError::could_not_finish(
                    "residual flow upper bound not found",
                ));
            }
            lo = hi;
            hi *= 2.0;
        }
        debug!(lo, hi, doublings, "residual flow bracketed");

        let bisection = Bisection {
            max_iterations: limits.max_flow_iterations,
            abs_tol: limits.height_tolerance,
            rel_width: limits.flow_tolerance,
        };
        let outcome = bisection.solve(lo, hi, |q| self.level_surplus(q, level, limits))?;
        if !outcome.converged {
            return Err(SolverError::could_not_finish(format!(
                "residual flow did not converge in {} iterations",
                outcome.iterations
            )));
        }

        self.set_source_level(level);
        self.compute_drops();
        self.propagate_pressures(0.0);
        Ok(outcome)
    }

    fn level_surplus(
        &mut self,
        flow: f64,
        level: f64,
        limits: &SolverLimits,
    ) -> SolverResult<f64> {
        let required = self.solve_minimum_height(flow, limits)?.value;
        let surplus = required - level;
        debug!(flow, required, surplus, "residual flow probe");
        Ok(surplus)
    }
}
