//! Gas piping physics.
//!
//! Pressures in kPa, flows in m³/h, duties in kcal/min, lengths in metres
//! and internal diameters in millimetres.

use hc_catalog::Gas;
use hc_core::units::{constants::ATM_KGF_PER_CM2, kcal_per_min_to_per_hour, kpa_to_kgf_per_cm2};

/// Elevation correction per metre of riser and unit of (ρ_rel − 1).
const ELEVATION_FACTOR: f64 = 0.01318;

/// Maximum velocity accepted in gas piping, m/s.
pub const ALLOWED_SPEED: f64 = 20.0;

/// Pressure regime of a gas network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GasRegime {
    /// Medium pressure upstream of the regulators; squared-pressure drop.
    Primary,
    /// Low pressure downstream of the regulators; linear drop.
    Secondary,
}

impl GasRegime {
    /// Accumulated drop, as a fraction of the supply pressure, above which a
    /// segment is marked failing.
    pub fn pressure_drop_limit(self) -> f64 {
        match self {
            GasRegime::Primary => 0.3,
            GasRegime::Secondary => 0.1,
        }
    }

    /// Same limit in percent, as reported in verdicts.
    pub fn allowed_drop_percentage(self) -> f64 {
        match self {
            GasRegime::Primary => 30.0,
            GasRegime::Secondary => 10.0,
        }
    }
}

/// Demand diversity factor for an accumulated duty in kcal/min.
///
/// The curve is defined on kcal/h; secondary networks bypass it.
pub fn concurrency_factor(power_kcal_per_min: f64) -> f64 {
    let p = kcal_per_min_to_per_hour(power_kcal_per_min);
    if p <= 0.0 || p < 21_000.0 {
        1.0
    } else if p < 576_720.0 {
        1.0 / (1.0 + 0.001 * (p / 60.0 - 349.0).powf(0.8712))
    } else if p < 1_200_000.0 {
        1.0 / (1.0 + 0.4705 * (p / 60.0 - 1055.0).powf(0.19931))
    } else {
        0.23
    }
}

/// Adopted duty (kcal/min) converted to volumetric flow (m³/h).
pub fn flow_from_power(power_kcal_per_min: f64, gas: &Gas) -> f64 {
    if gas.pci <= 0.0 {
        return 0.0;
    }
    kcal_per_min_to_per_hour(power_kcal_per_min) / gas.pci
}

/// Inputs of one segment's drop calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasSegment {
    pub total_length: f64,
    pub length_up: f64,
    pub length_down: f64,
    /// mm
    pub internal_diameter: f64,
}

/// Friction drop with riser correction.
///
/// Primary networks return a drop in kPa² (applied to squared pressures);
/// secondary networks return kPa.
pub fn pressure_drop(regime: GasRegime, gas: &Gas, segment: &GasSegment, flow: f64) -> f64 {
    let rho = gas.relative_density;
    let d = segment.internal_diameter;
    let l = segment.total_length;
    let friction = if d <= 0.0 {
        0.0
    } else {
        match regime {
            GasRegime::Secondary if gas.is_natural_gas() => {
                flow.powf(1.8) * rho.powf(0.8) * l / (0.000_492_84 * d.powf(4.8))
            }
            GasRegime::Secondary => 2273.0 * rho * l * flow.powf(1.82) / d.powf(4.82),
            GasRegime::Primary => 467_000.0 * rho * l * flow.powf(1.82) / d.powf(4.82),
        }
    };
    let drop_up = ELEVATION_FACTOR * segment.length_up * (rho - 1.0);
    let drop_down = ELEVATION_FACTOR * segment.length_down * (rho - 1.0);
    friction - drop_up + drop_down
}

/// Pressure left after `drop`; never negative.
pub fn end_pressure(regime: GasRegime, start: f64, drop: f64) -> f64 {
    match regime {
        GasRegime::Secondary => {
            if start < drop {
                0.0
            } else {
                start - drop
            }
        }
        GasRegime::Primary => {
            let squared = start * start;
            if squared < drop {
                0.0
            } else {
                (squared - drop).sqrt()
            }
        }
    }
}

/// Mean velocity (m/s) at the segment inlet.
pub fn speed(flow: f64, start_pressure: f64, internal_diameter: f64) -> f64 {
    if internal_diameter <= 0.0 {
        return 0.0;
    }
    354.0 * flow / (kpa_to_kgf_per_cm2(start_pressure) + ATM_KGF_PER_CM2)
        / (internal_diameter * internal_diameter)
}

/// Share of the supply pressure lost between the supply and `end`.
pub fn accumulated_drop(supply_pressure: f64, end: f64) -> f64 {
    if supply_pressure <= 0.0 {
        return 0.0;
    }
    (supply_pressure - end) / supply_pressure
}
