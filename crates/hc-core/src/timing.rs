//! Wall-clock bounds around a calculation.
//!
//! Solver loops are capped by iteration counts; a [`Deadline`] adds an
//! outer time budget checked between phases and iterations.

use std::time::{Duration, Instant};

use crate::{HcError, HcResult};

#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// No time limit; `check` always succeeds.
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_bounded(&self) -> bool {
        self.budget.is_some()
    }

    /// Fail with `DeadlineExceeded` once the budget is spent.
    pub fn check(&self, phase: &'static str) -> HcResult<()> {
        match self.budget {
            Some(budget) if self.start.elapsed() > budget => Err(HcError::DeadlineExceeded {
                phase,
                elapsed_ms: self.start.elapsed().as_millis(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the timer and return elapsed time in seconds.
    pub fn stop(self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
