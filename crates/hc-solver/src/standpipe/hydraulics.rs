//! Tree passes shared by every standpipe procedure.

use hc_components::FlowPressureLaw;
use hc_core::PathId;
use hc_core::units::bore_area_m2;

use super::StandpipeNetwork;

impl StandpipeNetwork {
    /// Zero every flow, drop and pressure.
    pub(crate) fn reset_state(&mut self) {
        for path in &mut self.paths {
            path.flow = 0.0;
            path.speed = 0.0;
            path.start_pressure = 0.0;
            path.end_pressure = 0.0;
            path.unit_pressure_drop = 0.0;
            path.pressure_drop = 0.0;
            if let Some(f) = path.fixture.as_mut() {
                f.flow = 0.0;
                f.start_pressure = 0.0;
                f.middle_pressure = 0.0;
                f.end_pressure = 0.0;
                f.unit_pressure_drop = 0.0;
                f.pressure_drop = 0.0;
                f.unit_hose_pressure_drop = 0.0;
                f.hose_pressure_drop = 0.0;
                f.nozzle_pressure_drop = 0.0;
            }
        }
    }

    pub(crate) fn set_fixture_flows(&mut self, flow: f64) {
        for path in &mut self.paths {
            if let Some(f) = path.active_fixture_mut() {
                f.flow = flow;
            }
        }
    }

    /// Move the reservoir path's level; when sizing the reservoir height its
    /// length follows the drop in height.
    pub(crate) fn set_source_level(&mut self, level: f64) {
        let couple = self.couple_source_length;
        let source = &mut self.paths[self.tree.source().slot()];
        source.level_difference = level;
        source.total_length = if couple {
            source.base_length() + (-level).max(0.0)
        } else {
            source.base_length()
        };
    }

    /// Leaves to source: a fixture path carries its fixture's flow, any
    /// other path the sum of its children.
    pub(crate) fn accumulate_flows(&mut self) {
        let order: Vec<PathId> = self.tree.post_order().collect();
        for id in order {
            let flow = match self.paths[id.slot()].active_fixture() {
                Some(f) => f.flow,
                None => self
                    .tree
                    .children(id)
                    .iter()
                    .map(|c| self.paths[c.slot()].flow)
                    .sum(),
            };
            self.paths[id.slot()].flow = flow;
        }
    }

    /// Friction in every path and every active fixture at the current flows.
    pub(crate) fn compute_drops(&mut self) {
        let model = &self.fixture;
        for path in &mut self.paths {
            path.unit_pressure_drop = path.friction.unit_drop(path.flow);
            path.pressure_drop = path.unit_pressure_drop * path.total_length;
            if let Some(f) = path.fixture.as_mut().filter(|f| f.is_active()) {
                f.unit_pressure_drop = model.inlet.map_or(0.0, |hw| hw.unit_drop(f.flow));
                f.pressure_drop = f.unit_pressure_drop * f.total_length;
                f.unit_hose_pressure_drop = model.hose.unit_drop(f.flow);
                f.hose_pressure_drop = f.unit_hose_pressure_drop * f.spec.hose_length;
                f.nozzle_pressure_drop = model.nozzle.local_loss(f.flow);
            }
        }
    }

    /// Source to leaves from `source_pressure` at the reservoir outlet.
    pub(crate) fn propagate_pressures(&mut self, source_pressure: f64) {
        let order = self.tree.pre_order().to_vec();
        for id in order {
            let start = match self.tree.parent(id) {
                Some(parent) => self.paths[parent.slot()].end_pressure,
                None => source_pressure,
            };
            let path = &mut self.paths[id.slot()];
            path.start_pressure = start;
            path.end_pressure = start - path.pressure_drop - path.level_difference;
            let end = path.end_pressure;
            if let Some(f) = path.fixture.as_mut().filter(|f| f.is_active()) {
                f.start_pressure = end;
                f.middle_pressure = end - f.pressure_drop;
                f.end_pressure = f.middle_pressure
                    - f.hose_pressure_drop
                    - f.nozzle_pressure_drop
                    - f.spec.level_difference;
            }
        }
    }

    /// Walk back from the `governing` fixture, which receives exactly the
    /// pressure its flow needs, to the reservoir. Returns the pressure the
    /// reservoir outlet would need at the current level.
    ///
    /// Intermediate nodes are held at or above atmospheric pressure.
    pub(crate) fn required_source_pressure(&mut self, governing: PathId) -> f64 {
        for path in &mut self.paths {
            path.start_pressure = 0.0;
            path.end_pressure = 0.0;
        }
        let nozzle = self.fixture.nozzle;
        let path = &mut self.paths[governing.slot()];
        if let Some(f) = path.fixture.as_mut() {
            f.end_pressure = nozzle.pressure_for_flow(f.flow);
            f.middle_pressure = f.end_pressure
                + f.hose_pressure_drop
                + f.nozzle_pressure_drop
                + f.spec.level_difference;
            f.start_pressure = f.middle_pressure + f.pressure_drop;
            path.end_pressure = f.start_pressure;
        }
        path.start_pressure = path.end_pressure + path.pressure_drop + path.level_difference;

        let mut downstream = path.start_pressure;
        let upstream: Vec<PathId> = self.tree.ancestors(governing).skip(1).collect();
        for id in upstream {
            let path = &mut self.paths[id.slot()];
            path.end_pressure = downstream.max(0.0);
            path.start_pressure = path.end_pressure + path.pressure_drop + path.level_difference;
            downstream = path.start_pressure;
        }
        self.paths[self.tree.source().slot()].start_pressure
    }

    /// Active fixture with the lowest nozzle pressure; declaration order
    /// breaks ties.
    pub(crate) fn lowest_fixture(&self) -> PathId {
        let mut lowest = self.fixture_paths[0];
        let mut lowest_pressure = f64::INFINITY;
        for &id in &self.fixture_paths {
            let Some(f) = self.paths[id.slot()].active_fixture() else {
                continue;
            };
            if f.end_pressure < lowest_pressure {
                lowest = id;
                lowest_pressure = f.end_pressure;
            }
        }
        lowest
    }

    pub(crate) fn update_speeds(&mut self) {
        for path in &mut self.paths {
            let area = bore_area_m2(path.friction.internal_diameter);
            path.speed = if area > 0.0 { path.flow / area } else { 0.0 };
        }
    }
}
