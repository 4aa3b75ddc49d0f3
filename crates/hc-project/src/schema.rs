//! Calculation input records as exchanged with the presentation layer.
//!
//! Numeric fields are optional here; [`crate::normalize`] fills defaults.
//! Computed fields sent back by clients are ignored on input.

use hc_core::{DiameterId, FittingId, FixtureId, GasId, MaterialId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileInfo {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Declares a short-code enum that keeps unknown codes instead of failing
/// to parse, so dispatch can report them as unsupported.
macro_rules! coded_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn code(&self) -> &str {
                match self {
                    $($name::$variant => $code,)+
                    $name::Other(code) => code.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                match code.as_str() {
                    $($code => $name::$variant,)+
                    _ => $name::Other(code),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.code().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

coded_enum!(
    /// Gas network regime.
    GasCalcType {
        Primary => "PR",
        Secondary => "SC",
    }
);

coded_enum!(
    /// What a standpipe calculation solves for.
    StandpipeCalcType {
        MinimumFlow => "VM",
        ResidualFlow => "VR",
    }
);

coded_enum!(
    /// How a standpipe network is pressurised.
    PressureType {
        Gravity => "GR",
        Pump => "BO",
    }
);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasCalcInput {
    #[serde(default)]
    pub fileinfo: FileInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub calc_type: GasCalcType,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub gas_id: GasId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatory_id: Option<u32>,
    /// kPa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_pressure: Option<f64>,
    #[serde(default)]
    pub paths: Vec<GasPathInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasPathInput {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    /// kcal/min
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_rating_added: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_up: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_down: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fittings_ids: Option<Vec<FittingId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_equivalent_length: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PumpInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// m.c.a.; required when computing residual flow with a pump.
    #[serde(default, alias = "head_lift", skip_serializing_if = "Option::is_none")]
    pub head_height: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandpipeCalcInput {
    #[serde(default)]
    pub fileinfo: FileInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub calc_type: StandpipeCalcType,
    pub pressure_type: PressureType,
    #[serde(default)]
    pub pump: PumpInput,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    pub fixture_id: FixtureId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatory_id: Option<u32>,
    #[serde(default)]
    pub paths: Vec<StandpipePathInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandpipePathInput {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    pub material_id: MaterialId,
    pub diameter_id: DiameterId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Elevation gained along the segment, m. Negative when descending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_difference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fittings_ids: Option<Vec<FittingId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_equivalent_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_fixture: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<FixtureInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixtureInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hose_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_difference: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_strings() {
        let t: StandpipeCalcType = serde_json::from_str("\"VR\"").unwrap();
        assert_eq!(t, StandpipeCalcType::ResidualFlow);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"VR\"");
    }

    #[test]
    fn unknown_code_is_kept() {
        let p: PressureType = serde_json::from_str("\"XX\"").unwrap();
        assert_eq!(p, PressureType::Other("XX".into()));
        assert_eq!(p.to_string(), "XX");
    }

    #[test]
    fn pump_accepts_head_lift_alias() {
        let pump: PumpInput = serde_json::from_str(r#"{"node": "B", "head_lift": 12.5}"#).unwrap();
        assert_eq!(pump.head_height, Some(12.5));
    }
}
