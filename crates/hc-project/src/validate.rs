//! Input validation ahead of normalization.
//!
//! Only checks that need no reference data or topology: value ranges and
//! fields required by the selected mode.

use crate::schema::{GasCalcInput, StandpipeCalcInput, StandpipeCalcType, PressureType};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("No data was passed")]
    NoInitialData,

    #[error("Missing field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn non_negative(v: Option<f64>, field: &str, context: &str) -> Result<(), ValidationError> {
    match v {
        Some(x) if !x.is_finite() || x < 0.0 => Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: x.to_string(),
            reason: format!("must be a non-negative number ({context})"),
        }),
        _ => Ok(()),
    }
}

fn finite(v: Option<f64>, field: &str, context: &str) -> Result<(), ValidationError> {
    match v {
        Some(x) if !x.is_finite() => Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: x.to_string(),
            reason: format!("must be finite ({context})"),
        }),
        _ => Ok(()),
    }
}

fn segment_context(i: usize, start: &str) -> String {
    format!("path {i} starting at '{start}'")
}

pub fn validate_gas(input: &GasCalcInput) -> Result<(), ValidationError> {
    if input.paths.is_empty() {
        return Err(ValidationError::NoInitialData);
    }
    match input.start_pressure {
        Some(p) if p.is_finite() && p > 0.0 => {}
        Some(p) => {
            return Err(ValidationError::InvalidValue {
                field: "start_pressure".into(),
                value: p.to_string(),
                reason: "must be positive".into(),
            });
        }
        None => {
            return Err(ValidationError::MissingField {
                field: "start_pressure".into(),
                context: "gas calculation".into(),
            });
        }
    }
    for (i, p) in input.paths.iter().enumerate() {
        let ctx = segment_context(i, &p.start);
        non_negative(p.power_rating_added, "power_rating_added", &ctx)?;
        non_negative(p.length, "length", &ctx)?;
        non_negative(p.length_up, "length_up", &ctx)?;
        non_negative(p.length_down, "length_down", &ctx)?;
        non_negative(p.extra_equivalent_length, "extra_equivalent_length", &ctx)?;
    }
    Ok(())
}

pub fn validate_standpipe(input: &StandpipeCalcInput) -> Result<(), ValidationError> {
    if input.paths.is_empty() {
        return Err(ValidationError::NoInitialData);
    }
    let pumped_residual = input.calc_type == StandpipeCalcType::ResidualFlow
        && input.pressure_type == PressureType::Pump;
    if pumped_residual {
        match input.pump.head_height {
            Some(h) if h.is_finite() && h > 0.0 => {}
            _ => {
                return Err(ValidationError::MissingField {
                    field: "pump.head_height".into(),
                    context: "residual flow with pump".into(),
                });
            }
        }
    }
    for (i, p) in input.paths.iter().enumerate() {
        let ctx = segment_context(i, &p.start);
        non_negative(p.length, "length", &ctx)?;
        non_negative(p.extra_equivalent_length, "extra_equivalent_length", &ctx)?;
        finite(p.level_difference, "level_difference", &ctx)?;
        if p.has_fixture == Some(true) {
            if let Some(f) = &p.fixture {
                non_negative(f.hose_length, "fixture.hose_length", &ctx)?;
                finite(f.level_difference, "fixture.level_difference", &ctx)?;
            }
        }
    }
    Ok(())
}
