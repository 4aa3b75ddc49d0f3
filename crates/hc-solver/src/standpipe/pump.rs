//! Pump head sizing and pumped residual flow.

use hc_components::pump::npsh_available;
use tracing::info;

use super::StandpipeNetwork;
use crate::bisection::SolveOutcome;
use crate::error::{SolverError, SolverResult};
use crate::tolerances::SolverLimits;

impl StandpipeNetwork {
    /// Head the pump must add for the minimum flow: the gap between the
    /// entered reservoir level and the minimum height.
    pub fn size_pump(&mut self, limits: &SolverLimits) -> SolverResult<SolveOutcome> {
        let given = self.given_level;
        let outcome = self.solve_minimum_height(self.fixture.minimum_flow(), limits)?;
        let head = given - outcome.value;
        self.record_pump(head)?;
        self.set_source_level(given);
        info!(head, npsh = self.pump.npsh_available, "pump sized");
        Ok(outcome)
    }

    /// Residual flow with the pump head added to the reservoir level.
    pub fn pump_residual_flow(&mut self, limits: &SolverLimits) -> SolverResult<SolveOutcome> {
        let given = self.given_level;
        let head = self.pump.head_height;
        let outcome = self.solve_residual_flow(given - head, limits)?;
        self.record_pump(head)?;
        self.set_source_level(given);
        Ok(outcome)
    }

    /// Pump flow is the reservoir flow; NPSH uses the pressure at the pump
    /// node, which includes the head.
    fn record_pump(&mut self, head: f64) -> SolverResult<()> {
        let pump_path = self.pump_path.ok_or_else(|| SolverError::PumpNodeNotFound {
            node: self.pump.node.clone().unwrap_or_default(),
        })?;
        self.pump.head_height = head;
        self.pump.flow = self.reservoir_path().flow;
        let suction = self.paths[pump_path.slot()].end_pressure;
        self.pump.npsh_available = npsh_available(head, suction);
        Ok(())
    }
}
