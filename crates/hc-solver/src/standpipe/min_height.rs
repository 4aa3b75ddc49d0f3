//! Reservoir height that just delivers a given flow at the governing fixture.

use tracing::debug;

use super::StandpipeNetwork;
use crate::bisection::SolveOutcome;
use crate::error::{SolverError, SolverResult};
use crate::tolerances::SolverLimits;

impl StandpipeNetwork {
    /// Move the reservoir level until the governing fixture receives exactly
    /// the pressure `flow` needs with zero pressure at the reservoir outlet.
    ///
    /// The level starts at zero and is corrected by `excess / (1 − J)`,
    /// `J` being the reservoir path's unit drop. Returns the level found;
    /// pressures are left forward-propagated at that level.
    pub fn solve_minimum_height(
        &mut self,
        flow: f64,
        limits: &SolverLimits,
    ) -> SolverResult<SolveOutcome> {
        let source = self.source().slot();
        self.reset_state();
        self.set_source_level(0.0);
        self.set_fixture_flows(flow);

        let mut governing = self.fixture_paths[0];
        for iteration in 1..=limits.max_height_iterations {
            limits.deadline.check("minimum height")?;

            self.accumulate_flows();
            self.compute_drops();
            self.propagate_pressures(0.0);
            governing = self.lowest_fixture();
            self.balance_fixture_flows(governing, flow, limits)?;
            self.accumulate_flows();
            self.compute_drops();

            let excess = self.required_source_pressure(governing);
            let level = self.paths[source].level_difference;
            debug!(iteration, excess, level, governing = governing.slot(), "minimum height");

            if excess.abs() < limits.height_tolerance {
                self.governing = Some(governing);
                self.propagate_pressures(0.0);
                return Ok(SolveOutcome {
                    value: level,
                    iterations: iteration,
                    converged: true,
                });
            }

            let slope = 1.0 - self.paths[source].unit_pressure_drop;
            if slope <= f64::EPSILON {
                return Err(SolverError::could_not_finish(
                    "reservoir path friction exceeds its height gain",
                ));
            }
            self.set_source_level(level - excess / slope);
        }

        self.governing = Some(governing);
        Err(SolverError::could_not_finish(format!(
            "minimum height did not converge in {} iterations",
            limits.max_height_iterations
        )))
    }
}
