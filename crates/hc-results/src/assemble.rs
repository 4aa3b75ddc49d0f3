//! Result Assembler: solved networks back into output records.

use chrono::{DateTime, Utc};
use hc_project::{GasCalcInput, GasNetworkSpec, StandpipeCalcInput, StandpipeNetworkSpec};
use hc_solver::{FixtureState, GasNetwork, GasPathState, StandpipeNetwork, StandpipePathState};

use crate::colors::{pressure_drop_accumulated_color, pressure_drop_color};
use crate::types::{
    FixtureOutput, GasCalcOutput, GasPathOutput, PumpOutput, StandpipeCalcOutput,
    StandpipePathOutput,
};
use crate::verdict::{gas_verdict, standpipe_summary};

fn gas_path(p: &GasPathState, max_fail_level: u32) -> GasPathOutput {
    GasPathOutput {
        start: p.spec.start.clone(),
        end: p.spec.end.clone(),
        material_id: p.spec.material_id,
        diameter_id: p.spec.diameter_id,
        power_rating_added: p.spec.power_rating_added,
        power_rating_accumulated: p.power_rating_accumulated,
        concurrency_factor: p.concurrency_factor,
        power_rating_adopted: p.power_rating_adopted,
        length: p.spec.length,
        length_up: p.spec.length_up,
        length_down: p.spec.length_down,
        fittings_ids: p.spec.fittings_ids.clone(),
        extra_equivalent_length: p.spec.extra_equivalent_length,
        equivalent_length: p.equivalent_length,
        total_length: p.total_length,
        connection_names: p.connection_names.clone(),
        flow: p.flow,
        speed: p.speed,
        start_pressure: p.start_pressure,
        end_pressure: p.end_pressure,
        pressure_drop: p.pressure_drop,
        pressure_drop_accumulated: p.pressure_drop_accumulated,
        fail: p.fail,
        fail_level: p.fail_level,
        pressure_drop_color: pressure_drop_color(p.fail_level, max_fail_level),
        pressure_drop_accumulated_color: pressure_drop_accumulated_color(p.fail).to_string(),
    }
}

pub fn assemble_gas(
    spec: &GasNetworkSpec,
    network: &GasNetwork,
    calculated_at: DateTime<Utc>,
) -> GasCalcOutput {
    GasCalcOutput {
        fileinfo: spec.fileinfo.clone(),
        name: spec.name.clone(),
        observation: spec.observation.clone(),
        calc_type: spec.calc_type.clone(),
        material_id: spec.material_id,
        diameter_id: spec.diameter_id,
        gas_id: spec.gas_id,
        start_pressure: network.start_pressure,
        max_fail_level: network.max_fail_level,
        calculated_at: Some(calculated_at),
        error: None,
        result: Some(gas_verdict(network)),
        paths: network
            .paths
            .iter()
            .map(|p| gas_path(p, network.max_fail_level))
            .collect(),
    }
}

/// Header of a gas input with the failure message and no computed paths.
pub fn failed_gas(input: &GasCalcInput, message: impl Into<String>) -> GasCalcOutput {
    GasCalcOutput {
        fileinfo: input.fileinfo.clone(),
        name: input.name.clone(),
        observation: input.observation.clone(),
        calc_type: input.calc_type.clone(),
        material_id: input.material_id,
        diameter_id: input.diameter_id,
        gas_id: input.gas_id,
        start_pressure: input.start_pressure.unwrap_or_default(),
        max_fail_level: 0,
        calculated_at: None,
        error: Some(message.into()),
        result: None,
        paths: Vec::new(),
    }
}

fn fixture(f: &FixtureState) -> FixtureOutput {
    FixtureOutput {
        active: f.spec.active,
        end: f.spec.end.clone(),
        hose_length: f.spec.hose_length,
        level_difference: f.spec.level_difference,
        flow: f.flow,
        total_length: f.total_length,
        connection_names: f.connection_names.clone(),
        start_pressure: f.start_pressure,
        middle_pressure: f.middle_pressure,
        end_pressure: f.end_pressure,
        unit_pressure_drop: f.unit_pressure_drop,
        pressure_drop: f.pressure_drop,
        unit_hose_pressure_drop: f.unit_hose_pressure_drop,
        hose_pressure_drop: f.hose_pressure_drop,
        nozzle_pressure_drop: f.nozzle_pressure_drop,
    }
}

fn standpipe_path(p: &StandpipePathState) -> StandpipePathOutput {
    StandpipePathOutput {
        start: p.spec.start.clone(),
        end: p.spec.end.clone(),
        material_id: p.spec.material_id,
        diameter_id: p.spec.diameter_id,
        length: p.spec.length,
        level_difference: p.level_difference,
        fittings_ids: p.spec.fittings_ids.clone(),
        extra_equivalent_length: p.spec.extra_equivalent_length,
        equivalent_length: p.equivalent_length,
        total_length: p.total_length,
        connection_names: p.connection_names.clone(),
        flow: p.flow,
        speed: p.speed,
        start_pressure: p.start_pressure,
        end_pressure: p.end_pressure,
        unit_pressure_drop: p.unit_pressure_drop,
        pressure_drop: p.pressure_drop,
        has_fixture: p.fixture.is_some(),
        fixture: p.fixture.as_ref().map(fixture),
    }
}

pub fn assemble_standpipe(
    spec: &StandpipeNetworkSpec,
    network: &StandpipeNetwork,
    calculated_at: DateTime<Utc>,
) -> StandpipeCalcOutput {
    let pump = if network.mode.uses_pump() {
        PumpOutput {
            node: network.pump.node.clone(),
            head_height: Some(network.pump.head_height),
            flow: Some(network.pump.flow),
            npsh_available: Some(network.pump.npsh_available),
        }
    } else {
        PumpOutput {
            node: spec.pump.node.clone(),
            ..PumpOutput::default()
        }
    };
    StandpipeCalcOutput {
        fileinfo: spec.fileinfo.clone(),
        name: spec.name.clone(),
        observation: spec.observation.clone(),
        calc_type: spec.calc_type.clone(),
        pressure_type: spec.pressure_type.clone(),
        pump,
        material_id: spec.material_id,
        diameter_id: spec.diameter_id,
        fixture_id: spec.fixture_id,
        less_favorable_path_fixture_index: network.less_favorable_path_fixture_index(),
        calculated_at: Some(calculated_at),
        error: None,
        summary: Some(standpipe_summary(network)),
        paths: network.paths.iter().map(standpipe_path).collect(),
    }
}

/// Header of a standpipe input with the failure message and no computed
/// paths.
pub fn failed_standpipe(
    input: &StandpipeCalcInput,
    message: impl Into<String>,
) -> StandpipeCalcOutput {
    StandpipeCalcOutput {
        fileinfo: input.fileinfo.clone(),
        name: input.name.clone(),
        observation: input.observation.clone(),
        calc_type: input.calc_type.clone(),
        pressure_type: input.pressure_type.clone(),
        pump: PumpOutput {
            node: input.pump.node.clone(),
            head_height: input.pump.head_height,
            ..PumpOutput::default()
        },
        material_id: input.material_id,
        diameter_id: input.diameter_id,
        fixture_id: input.fixture_id,
        less_favorable_path_fixture_index: None,
        calculated_at: None,
        error: Some(message.into()),
        summary: None,
        paths: Vec::new(),
    }
}
