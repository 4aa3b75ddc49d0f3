//! hc-results: output records, verdicts and report colours.

pub mod assemble;
pub mod colors;
pub mod store;
pub mod types;
pub mod verdict;

pub use assemble::{assemble_gas, assemble_standpipe, failed_gas, failed_standpipe};
pub use store::{load_output, save_output};
pub use types::*;
pub use verdict::{gas_verdict, standpipe_summary};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
