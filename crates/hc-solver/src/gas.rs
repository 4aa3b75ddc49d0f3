//! Gas piping engine: one forward pass, no iteration.
//!
//! Duty sums leaves-to-source, is diversified by the concurrency factor and
//! converted to flow; pressure then walks source-to-leaves from the supply
//! pressure.

use hc_catalog::{Gas, ReferenceData};
use hc_components::GasRegime;
use hc_components::gas::{
    GasSegment, accumulated_drop, concurrency_factor, end_pressure, flow_from_power,
    pressure_drop, speed,
};
use hc_core::{HcError, PathId, ensure_finite};
use hc_graph::PathTree;
use hc_project::{GasCalcType, GasNetworkSpec, GasPathSpec};
use tracing::{debug, info, warn};

use crate::connections::{SegmentRef, resolve_connections};
use crate::error::{SolverError, SolverResult};
use crate::tolerances::SolverLimits;
use crate::topology::build_tree;

/// Label of the gas meter node every network starts from.
pub const GAS_SOURCE_LABEL: &str = "CG";

/// Computed state of one gas path.
#[derive(Clone, Debug, PartialEq)]
pub struct GasPathState {
    pub spec: GasPathSpec,
    /// mm
    pub internal_diameter: f64,
    pub equivalent_length: f64,
    pub total_length: f64,
    pub connection_names: Vec<String>,
    /// kcal/min
    pub power_rating_accumulated: f64,
    pub concurrency_factor: f64,
    /// kcal/min
    pub power_rating_adopted: f64,
    /// m³/h
    pub flow: f64,
    /// m/s
    pub speed: f64,
    /// kPa
    pub start_pressure: f64,
    /// kPa
    pub end_pressure: f64,
    /// kPa² for primary networks, kPa for secondary.
    pub pressure_drop: f64,
    /// Share of the supply pressure lost up to this path's end.
    pub pressure_drop_accumulated: f64,
    pub fail: bool,
    /// Failing paths in this path's subtree, itself included.
    pub fail_level: u32,
}

impl GasPathState {
    fn new(spec: &GasPathSpec, internal_diameter: f64) -> Self {
        Self {
            spec: spec.clone(),
            internal_diameter,
            equivalent_length: 0.0,
            total_length: 0.0,
            connection_names: Vec::new(),
            power_rating_accumulated: 0.0,
            concurrency_factor: 1.0,
            power_rating_adopted: 0.0,
            flow: 0.0,
            speed: 0.0,
            start_pressure: 0.0,
            end_pressure: 0.0,
            pressure_drop: 0.0,
            pressure_drop_accumulated: 0.0,
            fail: false,
            fail_level: 0,
        }
    }

    fn segment(&self) -> GasSegment {
        GasSegment {
            total_length: self.total_length,
            length_up: self.spec.length_up,
            length_down: self.spec.length_down,
            internal_diameter: self.internal_diameter,
        }
    }
}

/// A solved gas network. Paths are stored in declaration order.
#[derive(Clone, Debug)]
pub struct GasNetwork {
    pub regime: GasRegime,
    pub gas: Gas,
    /// Supply pressure at the meter, kPa.
    pub start_pressure: f64,
    pub tree: PathTree,
    pub paths: Vec<GasPathState>,
    pub max_fail_level: u32,
}

impl GasNetwork {
    pub fn path(&self, id: PathId) -> &GasPathState {
        &self.paths[id.slot()]
    }

    /// Lowest end pressure over all paths.
    pub fn min_end_pressure(&self) -> f64 {
        self.paths
            .iter()
            .map(|p| p.end_pressure)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max_speed(&self) -> f64 {
        self.paths.iter().map(|p| p.speed).fold(0.0, f64::max)
    }

    fn accumulate_power(&mut self) {
        let order: Vec<PathId> = self.tree.post_order().collect();
        for id in order {
            let below: f64 = self
                .tree
                .children(id)
                .iter()
                .map(|c| self.paths[c.slot()].power_rating_accumulated)
                .sum();
            let path = &mut self.paths[id.slot()];
            path.power_rating_accumulated = path.spec.power_rating_added + below;
        }
    }

    fn compute_flows(&mut self) {
        for path in &mut self.paths {
            path.concurrency_factor = match self.regime {
                GasRegime::Primary => concurrency_factor(path.power_rating_accumulated),
                GasRegime::Secondary => 1.0,
            };
            path.power_rating_adopted = path.power_rating_accumulated * path.concurrency_factor;
            path.flow = flow_from_power(path.power_rating_adopted, &self.gas);
            path.pressure_drop = pressure_drop(self.regime, &self.gas, &path.segment(), path.flow);
        }
    }

    fn propagate_pressures(&mut self) {
        let order = self.tree.pre_order().to_vec();
        for id in order {
            let start = match self.tree.parent(id) {
                Some(parent) => self.paths[parent.slot()].end_pressure,
                None => self.start_pressure,
            };
            let path = &mut self.paths[id.slot()];
            path.start_pressure = start;
            path.end_pressure = end_pressure(self.regime, start, path.pressure_drop);
            if path.end_pressure == 0.0 && start > 0.0 {
                warn!(
                    start = %path.spec.start,
                    drop = path.pressure_drop,
                    "pressure drop exceeds available pressure; end pressure clamped to zero"
                );
            }
            path.speed = speed(path.flow, start, path.internal_diameter);
        }
    }

    fn evaluate_failures(&mut self) {
        let limit = self.regime.pressure_drop_limit();
        for path in &mut self.paths {
            path.pressure_drop_accumulated =
                accumulated_drop(self.start_pressure, path.end_pressure);
            path.fail = path.pressure_drop_accumulated > limit;
        }
        let order: Vec<PathId> = self.tree.post_order().collect();
        for id in order {
            let below: u32 = self
                .tree
                .children(id)
                .iter()
                .map(|c| self.paths[c.slot()].fail_level)
                .sum();
            let path = &mut self.paths[id.slot()];
            path.fail_level = u32::from(path.fail) + below;
        }
        self.max_fail_level = self.paths.iter().map(|p| p.fail_level).max().unwrap_or(0);
    }
}

fn regime_of(calc_type: &GasCalcType) -> SolverResult<GasRegime> {
    match calc_type {
        GasCalcType::Primary => Ok(GasRegime::Primary),
        GasCalcType::Secondary => Ok(GasRegime::Secondary),
        GasCalcType::Other(code) => Err(SolverError::NotImplemented {
            calc_type: code.clone(),
            pressure_type: "-".into(),
        }),
    }
}

/// Size a gas network from its normalized input.
pub fn solve_gas<R>(
    spec: &GasNetworkSpec,
    data: &R,
    limits: &SolverLimits,
) -> SolverResult<GasNetwork>
where
    R: ReferenceData + ?Sized,
{
    let regime = regime_of(&spec.calc_type)?;
    let gas = data
        .gas(spec.gas_id)
        .ok_or(SolverError::NoGas { id: spec.gas_id.0 })?
        .clone();
    let start_pressure = ensure_finite(spec.start_pressure, "gas start pressure")?;
    if start_pressure <= 0.0 {
        return Err(HcError::InvalidArg {
            what: "gas start pressure must be positive",
        }
        .into());
    }

    let tree = build_tree(
        GAS_SOURCE_LABEL,
        spec.paths.iter().map(|p| (p.start.as_str(), p.end.as_deref())),
    )?;
    info!(paths = tree.len(), ?regime, gas = %gas.name, "gas calculation started");

    let mut paths = Vec::with_capacity(spec.paths.len());
    for (id, p) in tree.ids().zip(&spec.paths) {
        let diameter = data.require_diameter(p.diameter_id)?;
        let mut state = GasPathState::new(p, diameter.internal_diameter);
        let this = gas_segment_ref(p);
        let predecessor = tree
            .parent(id)
            .map(|parent| gas_segment_ref(&spec.paths[parent.slot()]));
        let conn = resolve_connections(data, &this, predecessor.as_ref(), tree.fan_out(id))?;
        state.equivalent_length = conn.equivalent_length;
        state.total_length = conn.equivalent_length + p.length + p.length_up + p.length_down;
        state.connection_names = conn.connection_names;
        paths.push(state);
    }
    limits.deadline.check("gas connections")?;

    let mut network = GasNetwork {
        regime,
        gas,
        start_pressure,
        tree,
        paths,
        max_fail_level: 0,
    };
    network.accumulate_power();
    network.compute_flows();
    network.propagate_pressures();
    network.evaluate_failures();
    limits.deadline.check("gas pressures")?;

    debug!(
        min_end_pressure = network.min_end_pressure(),
        max_speed = network.max_speed(),
        "gas pressures propagated"
    );
    info!(max_fail_level = network.max_fail_level, "gas calculation finished");
    Ok(network)
}

fn gas_segment_ref(p: &GasPathSpec) -> SegmentRef<'_> {
    SegmentRef {
        material_id: p.material_id,
        diameter_id: p.diameter_id,
        fittings_ids: &p.fittings_ids,
        extra_equivalent_length: p.extra_equivalent_length,
    }
}
