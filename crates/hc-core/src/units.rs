//! Unit conversions used by the hydraulic formulas.
//!
//! Catalog and input values arrive in engineering units (mm, L/min, kPa,
//! kcal/min); the `uom` quantities keep the SI conversions in one place.

use uom::si::f64::{Area, Length, VolumeRate};

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_minute;
    VolumeRate::new::<liter_per_minute>(v)
}

/// L/min to m³/s.
pub fn lpm_to_m3ps(v: f64) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    lpm(v).get::<cubic_meter_per_second>()
}

/// m³/s to L/min.
pub fn m3ps_to_lpm(v: f64) -> f64 {
    use uom::si::volume_rate::liter_per_minute;
    m3ps(v).get::<liter_per_minute>()
}

/// Cross-section of a circular bore given in millimetres, in m².
pub fn bore_area_m2(diameter_mm: f64) -> f64 {
    use uom::si::area::square_meter;
    let d = mm(diameter_mm);
    let area: Area = d * d * (core::f64::consts::PI / 4.0);
    area.get::<square_meter>()
}

/// kPa to technical atmospheres (kgf/cm²).
pub fn kpa_to_kgf_per_cm2(v: f64) -> f64 {
    v * constants::KPA_TO_KGF_PER_CM2
}

/// Energy duty from kcal/min to kcal/h.
pub fn kcal_per_min_to_per_hour(v: f64) -> f64 {
    v * 60.0
}

pub mod constants {
    pub const G0_MPS2: f64 = 9.806_65;

    pub const KPA_TO_KGF_PER_CM2: f64 = 0.010_197_162;

    /// One standard atmosphere in kgf/cm².
    pub const ATM_KGF_PER_CM2: f64 = 1.033;

    /// One standard atmosphere in metres of water column.
    pub const ATM_WATER_COLUMN_M: f64 = 10.33;
}
