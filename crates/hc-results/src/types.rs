//! Output records. Inputs are echoed back next to the computed fields.

use chrono::{DateTime, Utc};
use hc_core::{DiameterId, FittingId, FixtureId, GasId, MaterialId};
use hc_project::{FileInfo, GasCalcType, PressureType, StandpipeCalcType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPathOutput {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub power_rating_added: f64,
    pub power_rating_accumulated: f64,
    pub concurrency_factor: f64,
    pub power_rating_adopted: f64,
    pub length: f64,
    pub length_up: f64,
    pub length_down: f64,
    pub fittings_ids: Vec<FittingId>,
    pub extra_equivalent_length: f64,
    pub equivalent_length: f64,
    pub total_length: f64,
    pub connection_names: Vec<String>,
    /// m³/h
    pub flow: f64,
    /// m/s
    pub speed: f64,
    /// kPa
    pub start_pressure: f64,
    /// kPa
    pub end_pressure: f64,
    pub pressure_drop: f64,
    pub pressure_drop_accumulated: f64,
    pub fail: bool,
    pub fail_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_drop_color: Option<String>,
    pub pressure_drop_accumulated_color: String,
}

/// One acceptance check: computed value against its allowed bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictMetric {
    pub allowed: f64,
    pub calculated: f64,
    /// Decimal-comma renderings for reports.
    pub allowed_text: String,
    pub calculated_text: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasVerdict {
    pub allowed_percentage: f64,
    pub pressure_drop: VerdictMetric,
    pub end_pressure: VerdictMetric,
    pub speed: VerdictMetric,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasCalcOutput {
    pub fileinfo: FileInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub calc_type: GasCalcType,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub gas_id: GasId,
    pub start_pressure: f64,
    pub max_fail_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GasVerdict>,
    pub paths: Vec<GasPathOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureOutput {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub hose_length: f64,
    pub level_difference: f64,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandpipePathOutput {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub length: f64,
    pub level_difference: f64,
    pub fittings_ids: Vec<FittingId>,
    pub extra_equivalent_length: f64,
    pub equivalent_length: f64,
    pub total_length: f64,
    pub connection_names: Vec<String>,
    /// m³/s
    pub flow: f64,
    /// m/s
    pub speed: f64,
    /// m.c.a.
    pub start_pressure: f64,
    pub end_pressure: f64,
    pub unit_pressure_drop: f64,
    pub pressure_drop: f64,
    pub has_fixture: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<FixtureOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PumpOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_height: Option<f64>,
    /// m³/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npsh_available: Option<f64>,
}

/// Headline figures of a standpipe run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandpipeSummary {
    /// Reservoir path level after solving, m. Negative: reservoir above.
    pub reservoir_level: f64,
    pub reservoir_level_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_path_index: Option<usize>,
    /// L/min
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_flow: Option<f64>,
    /// L/min, summed over active fixtures.
    pub total_flow: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_head_text: Option<String>,
    /// m/s
    pub max_speed: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandpipeCalcOutput {
    pub fileinfo: FileInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub calc_type: StandpipeCalcType,
    pub pressure_type: PressureType,
    pub pump: PumpOutput,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub fixture_id: FixtureId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_favorable_path_fixture_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<StandpipeSummary>,
    pub paths: Vec<StandpipePathOutput>,
}
