//! Fire standpipe engine.
//!
//! The network is held as an arena of [`StandpipePathState`] indexed by
//! [`PathId`]. Four procedures drive the forward and backward passes in
//! [`hydraulics`]:
//!
//! | calc type | pressure type | procedure |
//! |---|---|---|
//! | `VM` | `GR` | minimum reservoir height |
//! | `VR` | `GR` | residual flow at the given height |
//! | `VM` | `BO` | pump head for the minimum flow |
//! | `VR` | `BO` | residual flow with a given pump head |

mod fixture_flow;
mod hydraulics;
mod min_height;
mod pump;
mod residual;
mod state;

use hc_catalog::ReferenceData;
use hc_components::HazenWilliams;
use hc_core::{PathId, ensure_finite};
use hc_graph::{GraphError, PathTree};
use hc_project::{PressureType, StandpipeCalcType, StandpipeNetworkSpec, StandpipePathSpec};
use tracing::info;

pub use state::{FixtureModel, FixtureState, PumpState, StandpipePathState};

use crate::connections::{SegmentRef, resolve_connections};
use crate::error::{SolverError, SolverResult};
use crate::tolerances::SolverLimits;
use crate::topology::build_tree;
use state::hazen_williams_coefficient;

/// Label of the reservoir node every network starts from.
pub const STANDPIPE_SOURCE_LABEL: &str = "RES";

/// Which boundary condition a calculation solves for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    MinimumHeight,
    ResidualFlow,
    PumpSizing,
    PumpResidualFlow,
}

impl Mode {
    pub fn select(
        calc_type: &StandpipeCalcType,
        pressure_type: &PressureType,
    ) -> SolverResult<Self> {
        match (calc_type, pressure_type) {
            (StandpipeCalcType::MinimumFlow, PressureType::Gravity) => Ok(Mode::MinimumHeight),
            (StandpipeCalcType::ResidualFlow, PressureType::Gravity) => Ok(Mode::ResidualFlow),
            (StandpipeCalcType::MinimumFlow, PressureType::Pump) => Ok(Mode::PumpSizing),
            (StandpipeCalcType::ResidualFlow, PressureType::Pump) => Ok(Mode::PumpResidualFlow),
            _ => Err(SolverError::NotImplemented {
                calc_type: calc_type.code().to_string(),
                pressure_type: pressure_type.code().to_string(),
            }),
        }
    }

    pub fn uses_pump(self) -> bool {
        matches!(self, Mode::PumpSizing | Mode::PumpResidualFlow)
    }
}

/// A standpipe network and its computed state. Paths are in declaration
/// order.
#[derive(Clone, Debug)]
pub struct StandpipeNetwork {
    pub mode: Mode,
    pub tree: PathTree,
    pub paths: Vec<StandpipePathState>,
    pub fixture: FixtureModel,
    /// Paths carrying an active fixture, in declaration order.
    pub fixture_paths: Vec<PathId>,
    pub pump_path: Option<PathId>,
    pub pump: PumpState,
    /// Reservoir path level as entered.
    pub given_level: f64,
    /// Path whose fixture governed the last solve.
    pub governing: Option<PathId>,
    /// Outer iterations of the last solve.
    pub iterations: usize,
    /// Reservoir path length follows its level (minimum-height runs).
    couple_source_length: bool,
}

impl StandpipeNetwork {
    /// Resolve catalog data, build the tree and locate reservoir, fixtures
    /// and pump.
    pub fn prepare<R>(spec: &StandpipeNetworkSpec, data: &R) -> SolverResult<Self>
    where
        R: ReferenceData + ?Sized,
    {
        let mode = Mode::select(&spec.calc_type, &spec.pressure_type)?;
        let fixture = data
            .fixture(spec.fixture_id)
            .ok_or(SolverError::NoFixture {
                id: spec.fixture_id.0,
            })?;
        let fixture = FixtureModel::build(data, fixture)?;

        let pump_node = spec.pump.node.as_deref().filter(|_| mode.uses_pump());
        let tree = build_tree(
            STANDPIPE_SOURCE_LABEL,
            spec.paths.iter().map(|p| (p.start.as_str(), p.end.as_deref())),
        )
        .map_err(|err| match err {
            SolverError::Topology(GraphError::DuplicateEndLabel { label, .. })
                if pump_node == Some(label.as_str()) =>
            {
                SolverError::MoreThanOnePump { node: label }
            }
            other => other,
        })?;

        let mut paths = Vec::with_capacity(spec.paths.len());
        for (id, p) in tree.ids().zip(&spec.paths) {
            let diameter = data.require_diameter(p.diameter_id)?;
            let coefficient = hazen_williams_coefficient(data, p.material_id)?;
            let mut state = StandpipePathState::new(
                p,
                HazenWilliams::new(coefficient, diameter.internal_diameter),
            );
            let predecessor = tree
                .parent(id)
                .map(|parent| standpipe_segment_ref(&spec.paths[parent.slot()]));
            let conn = resolve_connections(
                data,
                &standpipe_segment_ref(p),
                predecessor.as_ref(),
                tree.fan_out(id),
            )?;
            state.equivalent_length = conn.equivalent_length;
            state.total_length = state.base_length();
            state.connection_names = conn.connection_names;
            state.fixture = p.fixture.as_ref().map(|f| FixtureState::new(f, &fixture));
            paths.push(state);
        }

        let fixture_paths: Vec<PathId> = tree
            .ids()
            .filter(|id| paths[id.slot()].active_fixture().is_some())
            .collect();
        if fixture_paths.is_empty() {
            return Err(SolverError::NoActiveFixture);
        }

        let pump_path = match pump_node {
            Some(node) => Some(locate_pump(&tree, node)?),
            None if mode.uses_pump() => {
                return Err(SolverError::PumpNodeNotFound {
                    node: String::new(),
                });
            }
            None => None,
        };

        let given_level = ensure_finite(
            paths[tree.source().slot()].level_difference,
            "reservoir level difference",
        )?;

        Ok(Self {
            mode,
            pump: PumpState {
                node: spec.pump.node.clone(),
                head_height: spec.pump.head_height,
                flow: 0.0,
                npsh_available: 0.0,
            },
            tree,
            paths,
            fixture,
            fixture_paths,
            pump_path,
            given_level,
            governing: None,
            iterations: 0,
            couple_source_length: mode == Mode::MinimumHeight,
        })
    }

    pub fn source(&self) -> PathId {
        self.tree.source()
    }

    pub fn path(&self, id: PathId) -> &StandpipePathState {
        &self.paths[id.slot()]
    }

    pub fn reservoir_path(&self) -> &StandpipePathState {
        self.path(self.source())
    }

    /// Declaration index of the path whose fixture governs the result.
    pub fn less_favorable_path_fixture_index(&self) -> Option<usize> {
        self.governing.map(PathId::slot)
    }

    /// Flow at the governing fixture, m³/s.
    pub fn governing_flow(&self) -> Option<f64> {
        self.governing
            .and_then(|id| self.path(id).active_fixture())
            .map(|f| f.flow)
    }

    pub fn max_speed(&self) -> f64 {
        self.paths.iter().map(|p| p.speed).fold(0.0, f64::max)
    }

    /// Run the procedure selected by [`Mode`].
    pub fn solve(&mut self, limits: &SolverLimits) -> SolverResult<()> {
        let outcome = match self.mode {
            Mode::MinimumHeight => {
                self.solve_minimum_height(self.fixture.minimum_flow(), limits)?
            }
            Mode::ResidualFlow => self.solve_residual_flow(self.given_level, limits)?,
            Mode::PumpSizing => self.size_pump(limits)?,
            Mode::PumpResidualFlow => self.pump_residual_flow(limits)?,
        };
        self.iterations = outcome.iterations;
        self.update_speeds();
        Ok(())
    }
}

/// The pump sits at the end of the single path ending at `node`, with no
/// branching between it and the reservoir.
fn locate_pump(tree: &PathTree, node: &str) -> SolverResult<PathId> {
    let pump_path = tree
        .segments()
        .iter()
        .find(|s| s.end.as_deref() == Some(node))
        .map(|s| s.id)
        .ok_or_else(|| SolverError::PumpNodeNotFound {
            node: node.to_string(),
        })?;
    for upstream in tree.ancestors(pump_path).skip(1) {
        if tree.fan_out(upstream) > 1 {
            let label = tree
                .segment(upstream)
                .and_then(|s| s.end.clone())
                .unwrap_or_default();
            return Err(SolverError::BifurcationBeforePump { label });
        }
    }
    Ok(pump_path)
}

fn standpipe_segment_ref(p: &StandpipePathSpec) -> SegmentRef<'_> {
    SegmentRef {
        material_id: p.material_id,
        diameter_id: p.diameter_id,
        fittings_ids: &p.fittings_ids,
        extra_equivalent_length: p.extra_equivalent_length,
    }
}

/// Prepare and solve a standpipe network from its normalized input.
pub fn solve_standpipe<R>(
    spec: &StandpipeNetworkSpec,
    data: &R,
    limits: &SolverLimits,
) -> SolverResult<StandpipeNetwork>
where
    R: ReferenceData + ?Sized,
{
    let mut network = StandpipeNetwork::prepare(spec, data)?;
    info!(
        mode = ?network.mode,
        paths = network.paths.len(),
        fixtures = network.fixture_paths.len(),
        "standpipe calculation started"
    );
    network.solve(limits)?;
    info!(
        iterations = network.iterations,
        reservoir_level = network.reservoir_path().level_difference,
        governing = ?network.less_favorable_path_fixture_index(),
        "standpipe calculation finished"
    );
    Ok(network)
}
