use crate::HcError;

pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HcError::NonFinite { what, value: v })
    }
}

/// Report formatting used in connection traces and verdicts: two decimals,
/// decimal comma, zero rendered as `0,00`.
pub fn format_decimal(v: Real) -> String {
    format_decimal_places(v, 2)
}

pub fn format_decimal_places(v: Real, places: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{:.*}", places, 0.0).replace('.', ",");
    }
    format!("{:.*}", places, v).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }

    #[test]
    fn decimal_comma_formatting() {
        assert_eq!(format_decimal(1.5), "1,50");
        assert_eq!(format_decimal(0.0), "0,00");
        assert_eq!(format_decimal(12.345), "12,35");
        assert_eq!(format_decimal_places(0.25, 3), "0,250");
    }
}
