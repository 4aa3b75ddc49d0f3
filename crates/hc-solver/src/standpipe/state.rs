//! Per-path and per-fixture state of a standpipe calculation.

use hc_catalog::{Fixture, ReferenceData};
use hc_components::{HazenWilliams, Hose, Nozzle};
use hc_project::{FixtureSpec, StandpipePathSpec};

use crate::connections::fixture_connections;
use crate::error::{SolverError, SolverResult};

/// The catalogue fixture shared by every fixture in the network, with its
/// physics resolved.
#[derive(Clone, Debug)]
pub struct FixtureModel {
    pub fixture: Fixture,
    pub nozzle: Nozzle,
    pub hose: Hose,
    /// Inlet pipe friction; `None` without an inlet diameter.
    pub inlet: Option<HazenWilliams>,
    pub total_length: f64,
    pub connection_names: Vec<String>,
}

impl FixtureModel {
    pub fn build<R>(data: &R, fixture: &Fixture) -> SolverResult<Self>
    where
        R: ReferenceData + ?Sized,
    {
        let nozzle = Nozzle::from_fixture(fixture)?;
        let hose = Hose::from_fixture(fixture);
        let inlet = match fixture.inlet_diameter_id {
            Some(id) => {
                let diameter = data.require_diameter(id)?;
                let material_id = fixture.material_id.unwrap_or(diameter.material_id);
                let coefficient = hazen_williams_coefficient(data, material_id)?;
                Some(HazenWilliams::new(coefficient, diameter.internal_diameter))
            }
            None => None,
        };
        let conn = fixture_connections(data, fixture)?;
        Ok(Self {
            fixture: fixture.clone(),
            nozzle,
            hose,
            inlet,
            total_length: conn.equivalent_length,
            connection_names: conn.connection_names,
        })
    }

    pub fn minimum_flow(&self) -> f64 {
        self.nozzle.minimum_flow
    }
}

pub(crate) fn hazen_williams_coefficient<R>(
    data: &R,
    material_id: hc_core::MaterialId,
) -> SolverResult<f64>
where
    R: ReferenceData + ?Sized,
{
    let material = data.require_material(material_id)?;
    material.hazen_williams_coefficient.ok_or_else(|| {
        SolverError::Catalog(hc_catalog::CatalogError::InvalidRecord {
            kind: hc_catalog::RecordKind::Material,
            id: material_id.0,
            what: "no Hazen-Williams coefficient",
        })
    })
}

/// Hose and nozzle sub-segment hanging off a path's end.
///
/// `start` equals the path's end pressure, `middle` follows the inlet
/// friction and `end` is the pressure at the nozzle.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureState {
    pub spec: FixtureSpec,
    /// m³/s
    pub flow: f64,
    pub total_length: f64,
    pub connection_names: Vec<String>,
    pub start_pressure: f64,
    pub middle_pressure: f64,
    pub end_pressure: f64,
    pub unit_pressure_drop: f64,
    pub pressure_drop: f64,
    pub unit_hose_pressure_drop: f64,
    pub hose_pressure_drop: f64,
    pub nozzle_pressure_drop: f64,
}

impl FixtureState {
    pub(crate) fn new(spec: &FixtureSpec, model: &FixtureModel) -> Self {
        Self {
            spec: spec.clone(),
            flow: 0.0,
            total_length: model.total_length,
            connection_names: model.connection_names.clone(),
            start_pressure: 0.0,
            middle_pressure: 0.0,
            end_pressure: 0.0,
            unit_pressure_drop: 0.0,
            pressure_drop: 0.0,
            unit_hose_pressure_drop: 0.0,
            hose_pressure_drop: 0.0,
            nozzle_pressure_drop: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.spec.active
    }
}

/// Computed state of one standpipe path. Pressures in m.c.a., flows in m³/s.
#[derive(Clone, Debug, PartialEq)]
pub struct StandpipePathState {
    pub spec: StandpipePathSpec,
    pub friction: HazenWilliams,
    /// Working copy; the solvers move the reservoir path's level.
    pub level_difference: f64,
    pub equivalent_length: f64,
    pub total_length: f64,
    pub connection_names: Vec<String>,
    pub flow: f64,
    /// m/s
    pub speed: f64,
    pub start_pressure: f64,
    pub end_pressure: f64,
    pub unit_pressure_drop: f64,
    pub pressure_drop: f64,
    pub fixture: Option<FixtureState>,
}

impl StandpipePathState {
    pub(crate) fn new(spec: &StandpipePathSpec, friction: HazenWilliams) -> Self {
        Self {
            spec: spec.clone(),
            friction,
            level_difference: spec.level_difference,
            equivalent_length: 0.0,
            total_length: 0.0,
            connection_names: Vec::new(),
            flow: 0.0,
            speed: 0.0,
            start_pressure: 0.0,
            end_pressure: 0.0,
            unit_pressure_drop: 0.0,
            pressure_drop: 0.0,
            fixture: None,
        }
    }

    pub fn active_fixture(&self) -> Option<&FixtureState> {
        self.fixture.as_ref().filter(|f| f.is_active())
    }

    pub(crate) fn active_fixture_mut(&mut self) -> Option<&mut FixtureState> {
        self.fixture.as_mut().filter(|f| f.is_active())
    }

    /// Physical plus equivalent length, without any level coupling.
    pub fn base_length(&self) -> f64 {
        self.spec.length + self.equivalent_length
    }
}

/// Pump inputs and results. Head and NPSH in m.c.a., flow in m³/s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PumpState {
    pub node: Option<String>,
    pub head_height: f64,
    pub flow: f64,
    pub npsh_available: f64,
}
