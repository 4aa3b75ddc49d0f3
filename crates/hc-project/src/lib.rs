//! hc-project: calculation input format, normalization and validation.
//!
//! Documents (gas inputs, standpipe inputs and reference catalogs) load from
//! JSON or YAML; inputs are validated on load and on save.

pub mod normalize;
pub mod schema;
pub mod validate;

use std::path::Path;

use hc_catalog::CatalogData;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use normalize::{
    FixtureSpec, GasNetworkSpec, GasPathSpec, PumpSpec, StandpipeNetworkSpec, StandpipePathSpec,
    normalize_gas, normalize_standpipe,
};
pub use schema::*;
pub use validate::{ValidationError, validate_gas, validate_standpipe};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A file this crate knows how to load and save.
pub trait Document: Serialize + DeserializeOwned {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Document for GasCalcInput {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_gas(self)
    }
}

impl Document for StandpipeCalcInput {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_standpipe(self)
    }
}

impl Document for CatalogData {}

pub fn from_yaml_str<T: Document>(content: &str) -> ProjectResult<T> {
    let doc: T = serde_yaml::from_str(content)?;
    doc.validate()?;
    Ok(doc)
}

pub fn from_json_str<T: Document>(content: &str) -> ProjectResult<T> {
    let doc: T = serde_json::from_str(content)?;
    doc.validate()?;
    Ok(doc)
}

pub fn load_yaml<T: Document>(path: &Path) -> ProjectResult<T> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml<T: Document>(path: &Path, doc: &T) -> ProjectResult<()> {
    doc.validate()?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json<T: Document>(path: &Path) -> ProjectResult<T> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json<T: Document>(path: &Path, doc: &T) -> ProjectResult<()> {
    doc.validate()?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json`, `.yaml` or `.yml`.
pub fn load_file<T: Document>(path: &Path) -> ProjectResult<T> {
    match extension(path).as_str() {
        "json" => load_json(path),
        "yaml" | "yml" => load_yaml(path),
        other => Err(ProjectError::UnsupportedFormat(other.to_string())),
    }
}

/// Save by extension: `.json`, `.yaml` or `.yml`.
pub fn save_file<T: Document>(path: &Path, doc: &T) -> ProjectResult<()> {
    match extension(path).as_str() {
        "json" => save_json(path, doc),
        "yaml" | "yml" => save_yaml(path, doc),
        other => Err(ProjectError::UnsupportedFormat(other.to_string())),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}
