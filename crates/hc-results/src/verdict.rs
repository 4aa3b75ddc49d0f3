//! Acceptance checks and headline figures.

use hc_components::gas::ALLOWED_SPEED;
use hc_core::format_decimal;
use hc_core::units::m3ps_to_lpm;
use hc_solver::{GasNetwork, StandpipeNetwork};

use crate::types::{GasVerdict, StandpipeSummary, VerdictMetric};

fn metric(allowed: f64, calculated: f64, accepted: bool) -> VerdictMetric {
    VerdictMetric {
        allowed,
        calculated,
        allowed_text: format_decimal(allowed),
        calculated_text: format_decimal(calculated),
        accepted,
    }
}

/// Lowest end pressure and highest speed over the network against the
/// regime's limits. All comparisons are strict.
pub fn gas_verdict(network: &GasNetwork) -> GasVerdict {
    let start = network.start_pressure;
    let allowed_percentage = network.regime.allowed_drop_percentage();
    let calculated_end = network.min_end_pressure();
    let calculated_speed = network.max_speed();

    let allowed_drop = start * allowed_percentage / 100.0;
    let calculated_drop = start - calculated_end;
    let allowed_end = start - allowed_drop;

    let pressure_drop = metric(allowed_drop, calculated_drop, allowed_drop > calculated_drop);
    let end_pressure = metric(allowed_end, calculated_end, allowed_end < calculated_end);
    let speed = metric(ALLOWED_SPEED, calculated_speed, ALLOWED_SPEED > calculated_speed);
    let accepted = pressure_drop.accepted && end_pressure.accepted && speed.accepted;

    GasVerdict {
        allowed_percentage,
        pressure_drop,
        end_pressure,
        speed,
        accepted,
    }
}

pub fn standpipe_summary(network: &StandpipeNetwork) -> StandpipeSummary {
    let reservoir_level = network.reservoir_path().level_difference;
    let total_flow = network
        .fixture_paths
        .iter()
        .filter_map(|&id| network.path(id).active_fixture())
        .map(|f| m3ps_to_lpm(f.flow))
        .sum();
    StandpipeSummary {
        reservoir_level,
        reservoir_level_text: format_decimal(reservoir_level),
        governing_path_index: network.less_favorable_path_fixture_index(),
        governing_flow: network.governing_flow().map(m3ps_to_lpm),
        total_flow,
        pump_head_text: network
            .mode
            .uses_pump()
            .then(|| format_decimal(network.pump.head_height)),
        max_speed: network.max_speed(),
        iterations: network.iterations,
    }
}
