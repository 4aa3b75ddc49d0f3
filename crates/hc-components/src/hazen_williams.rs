//! Hazen-Williams friction loss for water.

/// Unit pressure drop in m/m (metres of water column per metre of pipe).
///
/// `flow` in m³/s, `coefficient` the Hazen-Williams C, `diameter` the
/// internal diameter in mm. Any zero input gives zero.
pub fn unit_pressure_drop(flow: f64, coefficient: f64, diameter: f64) -> f64 {
    if flow <= 0.0 || coefficient <= 0.0 || diameter <= 0.0 {
        return 0.0;
    }
    10.641 * flow.powf(1.85) / (coefficient.powf(1.85) * (diameter / 1000.0).powf(4.87))
}

/// A bore with a fixed roughness coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazenWilliams {
    pub coefficient: f64,
    /// mm
    pub internal_diameter: f64,
}

impl HazenWilliams {
    pub fn new(coefficient: f64, internal_diameter: f64) -> Self {
        Self {
            coefficient,
            internal_diameter,
        }
    }

    pub fn unit_drop(&self, flow: f64) -> f64 {
        unit_pressure_drop(flow, self.coefficient, self.internal_diameter)
    }

    pub fn drop(&self, flow: f64, length: f64) -> f64 {
        self.unit_drop(flow) * length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_hand_calculation() {
        // Q = 0.01 m³/s, C = 100, D = 100 mm
        let expected = 10.641 * 0.01_f64.powf(1.85) / (100.0_f64.powf(1.85) * 0.1_f64.powf(4.87));
        let j = unit_pressure_drop(0.01, 100.0, 100.0);
        assert!((j - expected).abs() < 1e-15);
        assert!((j - 0.031404).abs() < 1e-6);
    }

    #[test]
    fn zero_inputs_give_zero() {
        assert_eq!(unit_pressure_drop(0.0, 120.0, 50.0), 0.0);
        assert_eq!(unit_pressure_drop(0.01, 0.0, 50.0), 0.0);
        assert_eq!(unit_pressure_drop(0.01, 120.0, 0.0), 0.0);
    }

    #[test]
    fn drop_scales_with_length() {
        let hw = HazenWilliams::new(120.0, 65.0);
        let j = hw.unit_drop(0.004);
        assert!((hw.drop(0.004, 10.0) - 10.0 * j).abs() < 1e-12);
    }
}
