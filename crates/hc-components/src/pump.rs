//! Pump suction check.

use hc_core::units::constants::ATM_WATER_COLUMN_M;

/// Vapour pressure of water at ambient temperature, m.c.a.
pub const VAPOUR_PRESSURE_M: f64 = 0.238;

/// Net positive suction head available, m.c.a.
///
/// `head` is the pump head; `pump_node_pressure` the pressure at the end of
/// the segment feeding the pump.
pub fn npsh_available(head: f64, pump_node_pressure: f64) -> f64 {
    let suction_loss = head - pump_node_pressure;
    ATM_WATER_COLUMN_M - VAPOUR_PRESSURE_M - suction_loss
}
