//! Seams between solvers and terminal devices.

/// Relation between the flow through a terminal device and the pressure
/// required at its outlet.
///
/// Pressures are metres of water column and flows m³/s. Both directions
/// are monotone; non-positive inputs map to zero.
pub trait FlowPressureLaw {
    fn pressure_for_flow(&self, flow: f64) -> f64;

    fn flow_for_pressure(&self, pressure: f64) -> f64;
}
