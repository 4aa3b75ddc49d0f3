//! Topology normalizer: fills every default in one place.
//!
//! The output records carry no optional numeric fields. Paths keep their
//! declaration order.

use hc_core::{DiameterId, FittingId, FixtureId, GasId, MaterialId};

use crate::schema::{
    FileInfo, FixtureInput, GasCalcInput, GasCalcType, GasPathInput, PressureType,
    StandpipeCalcInput, StandpipeCalcType, StandpipePathInput,
};
use crate::validate::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct GasPathSpec {
    pub start: String,
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub power_rating_added: f64,
    pub length: f64,
    pub length_up: f64,
    pub length_down: f64,
    pub fittings_ids: Vec<FittingId>,
    pub extra_equivalent_length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GasNetworkSpec {
    pub fileinfo: FileInfo,
    pub name: Option<String>,
    pub observation: Option<String>,
    pub calc_type: GasCalcType,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub gas_id: GasId,
    pub start_pressure: f64,
    pub paths: Vec<GasPathSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSpec {
    pub active: bool,
    pub end: Option<String>,
    pub hose_length: f64,
    pub level_difference: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandpipePathSpec {
    pub start: String,
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub length: f64,
    pub level_difference: f64,
    pub fittings_ids: Vec<FittingId>,
    pub extra_equivalent_length: f64,
    /// Present only when the path was flagged as carrying a fixture.
    pub fixture: Option<FixtureSpec>,
}

impl StandpipePathSpec {
    pub fn has_active_fixture(&self) -> bool {
        self.fixture.as_ref().is_some_and(|f| f.active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PumpSpec {
    pub node: Option<String>,
    pub head_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandpipeNetworkSpec {
    pub fileinfo: FileInfo,
    pub name: Option<String>,
    pub observation: Option<String>,
    pub calc_type: StandpipeCalcType,
    pub pressure_type: PressureType,
    pub pump: PumpSpec,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub fixture_id: FixtureId,
    pub paths: Vec<StandpipePathSpec>,
}

fn or_zero(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0)
}

fn gas_path(p: &GasPathInput) -> GasPathSpec {
    GasPathSpec {
        start: p.start.clone(),
        end: p.end.clone(),
        material_id: p.material_id,
        diameter_id: p.diameter_id,
        power_rating_added: or_zero(p.power_rating_added),
        length: or_zero(p.length),
        length_up: or_zero(p.length_up),
        length_down: or_zero(p.length_down),
        fittings_ids: p.fittings_ids.clone().unwrap_or_default(),
        extra_equivalent_length: or_zero(p.extra_equivalent_length),
    }
}

fn fixture_spec(f: &FixtureInput) -> FixtureSpec {
    FixtureSpec {
        active: f.active.unwrap_or(false),
        end: f.end.clone(),
        hose_length: or_zero(f.hose_length),
        level_difference: or_zero(f.level_difference),
    }
}

fn standpipe_path(p: &StandpipePathInput) -> StandpipePathSpec {
    let fixture = if p.has_fixture.unwrap_or(false) {
        Some(p.fixture.as_ref().map(fixture_spec).unwrap_or(FixtureSpec {
            active: false,
            end: None,
            hose_length: 0.0,
            level_difference: 0.0,
        }))
    } else {
        None
    };
    // An active fixture terminates its path.
    let end = if fixture.as_ref().is_some_and(|f| f.active) {
        None
    } else {
        p.end.clone()
    };
    StandpipePathSpec {
        start: p.start.clone(),
        end,
        material_id: p.material_id,
        diameter_id: p.diameter_id,
        length: or_zero(p.length),
        level_difference: or_zero(p.level_difference),
        fittings_ids: p.fittings_ids.clone().unwrap_or_default(),
        extra_equivalent_length: or_zero(p.extra_equivalent_length),
        fixture,
    }
}

pub fn normalize_gas(input: Option<&GasCalcInput>) -> Result<GasNetworkSpec, ValidationError> {
    let input = input.ok_or(ValidationError::NoInitialData)?;
    if input.paths.is_empty() {
        return Err(ValidationError::NoInitialData);
    }
    Ok(GasNetworkSpec {
        fileinfo: input.fileinfo.clone(),
        name: input.name.clone(),
        observation: input.observation.clone(),
        calc_type: input.calc_type.clone(),
        material_id: input.material_id,
        diameter_id: input.diameter_id,
        gas_id: input.gas_id,
        start_pressure: or_zero(input.start_pressure),
        paths: input.paths.iter().map(gas_path).collect(),
    })
}

pub fn normalize_standpipe(
    input: Option<&StandpipeCalcInput>,
) -> Result<StandpipeNetworkSpec, ValidationError> {
    let input = input.ok_or(ValidationError::NoInitialData)?;
    if input.paths.is_empty() {
        return Err(ValidationError::NoInitialData);
    }
    Ok(StandpipeNetworkSpec {
        fileinfo: input.fileinfo.clone(),
        name: input.name.clone(),
        observation: input.observation.clone(),
        calc_type: input.calc_type.clone(),
        pressure_type: input.pressure_type.clone(),
        pump: PumpSpec {
            node: input.pump.node.clone(),
            head_height: or_zero(input.pump.head_height),
        },
        material_id: input.material_id,
        diameter_id: input.diameter_id,
        fixture_id: input.fixture_id,
        paths: input.paths.iter().map(standpipe_path).collect(),
    })
}
