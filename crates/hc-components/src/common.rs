//! Common helpers for component calculations.

use crate::error::{ComponentError, ComponentResult};
use hc_core::numeric::ensure_finite;

/// Flows below this are treated as no flow (m³/s).
pub const EPSILON_FLOW: f64 = 1e-12;

pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })
}

/// Finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    let v = check_finite(value, what)?;
    if v <= 0.0 {
        return Err(ComponentError::NonPhysical { what });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive(2.0, "d"), Ok(2.0));
        assert!(check_positive(0.0, "d").is_err());
        assert!(check_positive(-1.0, "d").is_err());
    }
}
