//! Calculation runs: validate, normalize, solve under a deadline, assemble.

use std::time::Duration;

use chrono::Utc;
use hc_catalog::ReferenceData;
use hc_core::{Deadline, Timer};
use hc_project::{
    GasCalcInput, StandpipeCalcInput, normalize_gas, normalize_standpipe, validate_gas,
    validate_standpipe,
};
use hc_results::{
    GasCalcOutput, StandpipeCalcOutput, assemble_gas, assemble_standpipe, failed_gas,
    failed_standpipe,
};
use hc_solver::tolerances::DEFAULT_TIMEOUT;
use hc_solver::{SolverLimits, solve_gas, solve_standpipe};
use tracing::{info, warn};

use crate::error::AppResult;

/// Options for one calculation run.
#[derive(Debug, Clone, Copy)]
pub struct CalcOptions {
    /// Wall-clock budget; `None` runs until the iteration caps stop it.
    pub timeout: Option<Duration>,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CalcOptions {
    /// Solver limits with the deadline starting now.
    pub fn limits(&self) -> SolverLimits {
        match self.timeout {
            Some(budget) => SolverLimits::with_deadline(Deadline::after(budget)),
            None => SolverLimits::unbounded(),
        }
    }
}

pub fn run_gas<R: ReferenceData + ?Sized>(
    input: &GasCalcInput,
    data: &R,
    options: &CalcOptions,
) -> AppResult<GasCalcOutput> {
    let timer = Timer::start("gas run");
    validate_gas(input)?;
    let spec = normalize_gas(Some(input))?;
    let network = solve_gas(&spec, data, &options.limits())?;
    let output = assemble_gas(&spec, &network, Utc::now());
    info!(
        run = timer.label(),
        paths = output.paths.len(),
        accepted = output.result.as_ref().is_some_and(|r| r.accepted),
        elapsed_s = timer.stop(),
        "run complete"
    );
    Ok(output)
}

pub fn run_standpipe<R: ReferenceData + ?Sized>(
    input: &StandpipeCalcInput,
    data: &R,
    options: &CalcOptions,
) -> AppResult<StandpipeCalcOutput> {
    let timer = Timer::start("standpipe run");
    validate_standpipe(input)?;
    let spec = normalize_standpipe(Some(input))?;
    let network = solve_standpipe(&spec, data, &options.limits())?;
    let output = assemble_standpipe(&spec, &network, Utc::now());
    info!(
        run = timer.label(),
        paths = output.paths.len(),
        governing = ?output.less_favorable_path_fixture_index,
        elapsed_s = timer.stop(),
        "run complete"
    );
    Ok(output)
}

/// Like [`run_gas`], but a failure becomes an output record whose `error`
/// holds the message.
pub fn report_gas<R: ReferenceData + ?Sized>(
    input: &GasCalcInput,
    data: &R,
    options: &CalcOptions,
) -> GasCalcOutput {
    run_gas(input, data, options).unwrap_or_else(|e| {
        warn!(error = %e, input_error = e.is_input_error(), "gas run failed");
        failed_gas(input, e.to_string())
    })
}

/// Like [`run_standpipe`], but a failure becomes an output record whose
/// `error` holds the message.
pub fn report_standpipe<R: ReferenceData + ?Sized>(
    input: &StandpipeCalcInput,
    data: &R,
    options: &CalcOptions,
) -> StandpipeCalcOutput {
    run_standpipe(input, data, options).unwrap_or_else(|e| {
        warn!(error = %e, input_error = e.is_input_error(), "standpipe run failed");
        failed_standpipe(input, e.to_string())
    })
}
