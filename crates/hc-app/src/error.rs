//! Error types for the hc-app service layer.

use std::path::PathBuf;

use hc_solver::SolverError;

/// Unified error for command-line and embedding front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to load {path}: {message}")]
    FileLoad { path: PathBuf, message: String },

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the input itself is at fault rather than the numerics or the
    /// environment.
    pub fn is_input_error(&self) -> bool {
        match self {
            AppError::Validation(_) | AppError::Catalog(_) => true,
            AppError::Solver(e) => e.is_input_error(),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<hc_project::ProjectError> for AppError {
    fn from(err: hc_project::ProjectError) -> Self {
        match err {
            hc_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<hc_project::ValidationError> for AppError {
    fn from(err: hc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hc_catalog::CatalogError> for AppError {
    fn from(err: hc_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<hc_results::ResultsError> for AppError {
    fn from(err: hc_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
