use thiserror::Error;

pub type HcResult<T> = Result<T, HcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },

    #[error("Deadline exceeded during {phase} after {elapsed_ms} ms")]
    DeadlineExceeded { phase: &'static str, elapsed_ms: u128 },
}
