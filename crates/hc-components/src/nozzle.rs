//! Fixture nozzle and hose models.

use hc_catalog::Fixture;
use hc_core::units::{bore_area_m2, constants::G0_MPS2, lpm_to_m3ps};

use crate::common::{EPSILON_FLOW, check_finite, check_positive};
use crate::error::ComponentResult;
use crate::hazen_williams::HazenWilliams;
use crate::traits::FlowPressureLaw;

/// Discharge coefficient of a smooth-bore nozzle tip.
pub const DISCHARGE_COEFFICIENT: f64 = 0.97;

/// Convert a catalogue K-factor, L/min per √(kgf/cm²), into m³/s per √(m.c.a.).
pub fn corrected_k_factor(k_factor: f64) -> f64 {
    k_factor / 60_000.0 / 10.0_f64.sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NozzleLaw {
    /// `p = (Q/A)² / (2 g Cd²)`
    Orifice { area: f64, discharge_coefficient: f64 },
    /// `p = (Q/Kc)²`
    KFactor { k_corrected: f64 },
}

impl FlowPressureLaw for NozzleLaw {
    fn pressure_for_flow(&self, flow: f64) -> f64 {
        if flow <= EPSILON_FLOW {
            return 0.0;
        }
        match *self {
            NozzleLaw::Orifice {
                area,
                discharge_coefficient,
            } => {
                let v = flow / area;
                v * v / (2.0 * G0_MPS2 * discharge_coefficient * discharge_coefficient)
            }
            NozzleLaw::KFactor { k_corrected } => (flow / k_corrected).powi(2),
        }
    }

    fn flow_for_pressure(&self, pressure: f64) -> f64 {
        if pressure <= 0.0 {
            return 0.0;
        }
        match *self {
            NozzleLaw::Orifice {
                area,
                discharge_coefficient,
            } => area * discharge_coefficient * (2.0 * G0_MPS2 * pressure).sqrt(),
            NozzleLaw::KFactor { k_corrected } => k_corrected * pressure.sqrt(),
        }
    }
}

/// Terminal nozzle of a fixture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nozzle {
    pub law: NozzleLaw,
    /// m²
    pub outlet_area: f64,
    /// Local loss coefficient; zero when the catalogue has none.
    pub k_nozzle: f64,
    /// m³/s
    pub minimum_flow: f64,
}

impl Nozzle {
    pub fn from_fixture(fixture: &Fixture) -> ComponentResult<Self> {
        let outlet = check_positive(fixture.outlet_diameter, "fixture outlet diameter")?;
        let minimum = check_positive(fixture.minimum_flow_rate, "fixture minimum flow rate")?;
        let outlet_area = bore_area_m2(outlet);
        let law = match fixture.k_factor {
            Some(k) if k > 0.0 => NozzleLaw::KFactor {
                k_corrected: corrected_k_factor(check_finite(k, "fixture k factor")?),
            },
            _ => NozzleLaw::Orifice {
                area: outlet_area,
                discharge_coefficient: DISCHARGE_COEFFICIENT,
            },
        };
        let k_nozzle = match fixture.k_nozzle {
            Some(k) => check_finite(k, "fixture nozzle loss coefficient")?.max(0.0),
            None => 0.0,
        };
        Ok(Self {
            law,
            outlet_area,
            k_nozzle,
            minimum_flow: lpm_to_m3ps(minimum),
        })
    }

    /// Loss across the nozzle body, `k · v² / 2g` at the outlet velocity.
    pub fn local_loss(&self, flow: f64) -> f64 {
        if self.k_nozzle == 0.0 || flow <= EPSILON_FLOW {
            return 0.0;
        }
        let v = flow / self.outlet_area;
        self.k_nozzle * v * v / (2.0 * G0_MPS2)
    }
}

impl FlowPressureLaw for Nozzle {
    fn pressure_for_flow(&self, flow: f64) -> f64 {
        self.law.pressure_for_flow(flow)
    }

    fn flow_for_pressure(&self, pressure: f64) -> f64 {
        self.law.flow_for_pressure(pressure)
    }
}

/// Fire hose between the fixture valve and the nozzle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hose {
    pub friction: HazenWilliams,
    /// The nozzle K-factor was measured with the hose attached.
    pub included_in_nozzle: bool,
}

impl Hose {
    pub fn from_fixture(fixture: &Fixture) -> Self {
        Self {
            friction: HazenWilliams::new(
                fixture.hose_hazen_williams_coefficient,
                fixture.hose_internal_diameter,
            ),
            included_in_nozzle: fixture.k_factor_includes_hose,
        }
    }

    pub fn unit_drop(&self, flow: f64) -> f64 {
        if self.included_in_nozzle {
            0.0
        } else {
            self.friction.unit_drop(flow)
        }
    }
}
