//! Flow through a single fixture path for a known pressure at its start.

use hc_components::FlowPressureLaw;
use hc_core::PathId;

use super::StandpipeNetwork;
use crate::bisection::Bisection;
use crate::error::{SolverError, SolverResult};
use crate::tolerances::SolverLimits;

impl StandpipeNetwork {
    /// Pressure needed at the start of fixture path `id` to pass `flow`
    /// through the path, the fixture inlet, the hose and the nozzle.
    pub(crate) fn required_start_pressure(&self, id: PathId, flow: f64) -> f64 {
        let path = &self.paths[id.slot()];
        let model = &self.fixture;
        let fixture_losses = path.active_fixture().map_or(0.0, |f| {
            let inlet = model.inlet.map_or(0.0, |hw| hw.unit_drop(flow)) * f.total_length;
            let hose = model.hose.unit_drop(flow) * f.spec.hose_length;
            inlet + hose + model.nozzle.local_loss(flow) + f.spec.level_difference
        });
        model.nozzle.pressure_for_flow(flow)
            + fixture_losses
            + path.friction.unit_drop(flow) * path.total_length
            + path.level_difference
    }

    /// Flow through fixture path `id` when its start sits at
    /// `start_pressure`. Zero when the pressure cannot lift water to the
    /// nozzle.
    pub(crate) fn fixture_flow_for_pressure(
        &self,
        id: PathId,
        start_pressure: f64,
        limits: &SolverLimits,
    ) -> SolverResult<f64> {
        let static_head = self.required_start_pressure(id, 0.0);
        if start_pressure <= static_head {
            return Ok(0.0);
        }
        // Without friction the nozzle would see the whole surplus.
        let upper = self
            .fixture
            .nozzle
            .flow_for_pressure(start_pressure - static_head);
        let bisection = Bisection {
            max_iterations: limits.max_flow_iterations,
            abs_tol: limits.pressure_tolerance,
            rel_width: f64::EPSILON,
        };
        let outcome = bisection.solve(0.0, upper, |q| {
            Ok(start_pressure - self.required_start_pressure(id, q))
        })?;
        if !outcome.converged {
            let path = &self.paths[id.slot()];
            return Err(SolverError::could_not_finish(format!(
                "could not compute flow for segment {}-{}",
                path.spec.start,
                path.active_fixture()
                    .and_then(|f| f.spec.end.as_deref())
                    .unwrap_or("fixture")
            )));
        }
        Ok(outcome.value)
    }

    /// Governing fixture at `flow`; every other fixture at whatever its
    /// current start pressure pushes through it, never below `flow`.
    pub(crate) fn balance_fixture_flows(
        &mut self,
        governing: PathId,
        flow: f64,
        limits: &SolverLimits,
    ) -> SolverResult<()> {
        for i in 0..self.fixture_paths.len() {
            let id = self.fixture_paths[i];
            let q = if id == governing {
                flow
            } else {
                let start = self.paths[id.slot()].start_pressure;
                self.fixture_flow_for_pressure(id, start, limits)?.max(flow)
            };
            if let Some(f) = self.paths[id.slot()].active_fixture_mut() {
                f.flow = q;
            }
        }
        Ok(())
    }
}
