//! Catalog row types.
//!
//! Lengths are metres, internal/outlet diameters millimetres, gas calorific
//! value kcal/m³ and fixture minimum flow L/min.

use hc_core::{
    DiameterId, FittingDiameterId, FittingId, FixtureId, GasId, MaterialConnectionId, MaterialId,
    ReductionId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    /// Hazen-Williams C; only water materials carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazen_williams_coefficient: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_outlet_connection: Option<FittingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_outlet_connection: Option<FittingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_outlet_connection: Option<FittingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_diameter: Option<DiameterId>,
}

impl Material {
    /// Fitting placed where a segment feeds `fan_out` downstream segments.
    pub fn outlet_connection(&self, fan_out: usize) -> Option<FittingId> {
        match fan_out {
            1 => self.one_outlet_connection,
            2 => self.two_outlet_connection,
            3 => self.three_outlet_connection,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diameter {
    pub id: DiameterId,
    pub material_id: MaterialId,
    pub name: String,
    pub internal_diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fitting {
    pub id: FittingId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingDiameter {
    pub id: FittingDiameterId,
    pub fitting_id: FittingId,
    pub diameter_id: DiameterId,
    pub equivalent_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    pub id: ReductionId,
    pub inlet_diameter_id: DiameterId,
    pub outlet_diameter_id: DiameterId,
    pub name: String,
    pub equivalent_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConnection {
    pub id: MaterialConnectionId,
    pub inlet_material_id: MaterialId,
    pub outlet_material_id: MaterialId,
    pub inlet_diameter_id: DiameterId,
    pub outlet_diameter_id: DiameterId,
    pub name: String,
    pub equivalent_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gas {
    pub id: GasId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lower calorific value, kcal/m³.
    pub pci: f64,
    /// Calorific value per mass, kcal/kg. Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pck: Option<f64>,
    pub relative_density: f64,
}

impl Gas {
    /// Natural gas grades are tagged `GN` in their name.
    pub fn is_natural_gas(&self) -> bool {
        self.name.contains("GN")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NozzleType {
    #[serde(rename = "TC")]
    TruncatedCone,
    #[serde(rename = "RE")]
    Adjustable,
    #[serde(rename = "MA")]
    HoseReel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub name: String,
    #[serde(alias = "type")]
    pub nozzle_type: NozzleType,
    /// Material of the inlet piping inside the cabinet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<MaterialId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet_diameter_id: Option<DiameterId>,
    #[serde(default)]
    pub reductions_ids: Vec<ReductionId>,
    #[serde(default)]
    pub fittings_ids: Vec<FittingId>,
    #[serde(default)]
    pub extra_equivalent_length: f64,
    pub hose_hazen_williams_coefficient: f64,
    /// mm
    pub hose_internal_diameter: f64,
    /// L/min per √(kgf/cm²); absent or zero selects the orifice law.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_factor: Option<f64>,
    #[serde(default)]
    pub k_factor_includes_hose: bool,
    /// Local loss coefficient of the nozzle body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_nozzle: Option<f64>,
    /// mm
    pub outlet_diameter: f64,
    /// L/min
    pub minimum_flow_rate: f64,
}
