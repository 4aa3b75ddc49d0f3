//! Lookup contract between the solvers and whatever stores reference rows.

use hc_core::{DiameterId, FittingId, FixtureId, GasId, MaterialId, ReductionId};

use crate::error::{CatalogError, CatalogResult, RecordKind};
use crate::records::{
    Diameter, Fitting, FittingDiameter, Fixture, Gas, Material, MaterialConnection, Reduction,
};

/// Read-only reference data keyed by id.
///
/// Multi-row lookups return rows in catalog order; single-row pair lookups
/// return the first matching row. Implementations never mutate and can be
/// shared across calculations.
pub trait ReferenceData {
    fn material(&self, id: MaterialId) -> Option<&Material>;
    fn diameter(&self, id: DiameterId) -> Option<&Diameter>;
    fn fitting(&self, id: FittingId) -> Option<&Fitting>;
    fn fitting_diameter(&self, fitting: FittingId, diameter: DiameterId)
    -> Option<&FittingDiameter>;
    fn reduction(&self, id: ReductionId) -> Option<&Reduction>;
    fn direct_reduction(&self, inlet: DiameterId, outlet: DiameterId) -> Option<&Reduction>;
    fn reductions_from(&self, inlet: DiameterId) -> Vec<&Reduction>;
    fn material_connections(&self, inlet: MaterialId, outlet: MaterialId)
    -> Vec<&MaterialConnection>;
    fn gas(&self, id: GasId) -> Option<&Gas>;
    fn fixture(&self, id: FixtureId) -> Option<&Fixture>;

    fn require_material(&self, id: MaterialId) -> CatalogResult<&Material> {
        self.material(id).ok_or(CatalogError::Missing {
            kind: RecordKind::Material,
            id: id.0,
        })
    }

    fn require_diameter(&self, id: DiameterId) -> CatalogResult<&Diameter> {
        self.diameter(id).ok_or(CatalogError::Missing {
            kind: RecordKind::Diameter,
            id: id.0,
        })
    }

    fn require_reduction(&self, id: ReductionId) -> CatalogResult<&Reduction> {
        self.reduction(id).ok_or(CatalogError::Missing {
            kind: RecordKind::Reduction,
            id: id.0,
        })
    }

    fn require_gas(&self, id: GasId) -> CatalogResult<&Gas> {
        self.gas(id).ok_or(CatalogError::Missing {
            kind: RecordKind::Gas,
            id: id.0,
        })
    }

    fn require_fixture(&self, id: FixtureId) -> CatalogResult<&Fixture> {
        self.fixture(id).ok_or(CatalogError::Missing {
            kind: RecordKind::Fixture,
            id: id.0,
        })
    }
}
