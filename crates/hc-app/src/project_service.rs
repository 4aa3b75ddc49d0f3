//! Catalog and input loading, validation and introspection.

use std::path::Path;

use hc_catalog::{Catalog, CatalogData};
use hc_project::{
    Document, GasCalcInput, StandpipeCalcInput, load_file, normalize_gas, normalize_standpipe,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Which calculation an input file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Gas,
    Standpipe,
}

/// Row counts per catalog table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub materials: usize,
    pub diameters: usize,
    pub fittings: usize,
    pub fitting_diameters: usize,
    pub reductions: usize,
    pub material_connections: usize,
    pub gases: usize,
    pub fixtures: usize,
}

/// What a validated input contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub name: Option<String>,
    pub calc_type: String,
    pub paths: usize,
    /// Standpipe only: paths carrying an active fixture.
    pub active_fixtures: usize,
}

fn load<T: Document>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "loading document");
    load_file(path).map_err(|e| match e {
        hc_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
        other => AppError::FileLoad {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

/// Load and index a catalog from JSON or YAML.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let data: CatalogData = load(path)?;
    Ok(Catalog::new(data)?)
}

pub fn load_gas_input(path: &Path) -> AppResult<GasCalcInput> {
    load(path)
}

pub fn load_standpipe_input(path: &Path) -> AppResult<StandpipeCalcInput> {
    load(path)
}

pub fn catalog_summary(catalog: &Catalog) -> CatalogSummary {
    let data = catalog.data();
    CatalogSummary {
        materials: data.materials.len(),
        diameters: data.diameters.len(),
        fittings: data.fittings.len(),
        fitting_diameters: data.fitting_diameters.len(),
        reductions: data.reductions.len(),
        material_connections: data.material_connections.len(),
        gases: data.gases.len(),
        fixtures: data.fixtures.len(),
    }
}

/// Load, validate and normalize an input file without solving it.
pub fn validate_input(path: &Path, kind: InputKind) -> AppResult<InputSummary> {
    match kind {
        InputKind::Gas => {
            let input = load_gas_input(path)?;
            let spec = normalize_gas(Some(&input))?;
            Ok(InputSummary {
                name: spec.name,
                calc_type: spec.calc_type.code().to_string(),
                paths: spec.paths.len(),
                active_fixtures: 0,
            })
        }
        InputKind::Standpipe => {
            let input = load_standpipe_input(path)?;
            let spec = normalize_standpipe(Some(&input))?;
            Ok(InputSummary {
                name: spec.name,
                calc_type: spec.calc_type.code().to_string(),
                paths: spec.paths.len(),
                active_fixtures: spec.paths.iter().filter(|p| p.has_active_fixture()).count(),
            })
        }
    }
}
