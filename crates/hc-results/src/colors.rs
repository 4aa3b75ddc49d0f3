//! Report colours for gas paths.

pub const FAIL_COLOR: &str = "#f44336";
pub const OK_COLOR: &str = "#4caf50";

/// Red-to-yellow ramp by how much of the worst subtree a path carries.
///
/// `None` for paths with no failing segment below them.
pub fn pressure_drop_color(fail_level: u32, max_fail_level: u32) -> Option<String> {
    if fail_level == 0 || max_fail_level == 0 {
        return None;
    }
    let headroom = max_fail_level - fail_level.min(max_fail_level);
    let share = f64::from(headroom) / f64::from(max_fail_level);
    let green = (200.0 * share).clamp(0.0, 200.0) as u8;
    Some(format!("#ff{green:02x}00"))
}

pub fn pressure_drop_accumulated_color(fail: bool) -> &'static str {
    if fail { FAIL_COLOR } else { OK_COLOR }
}
