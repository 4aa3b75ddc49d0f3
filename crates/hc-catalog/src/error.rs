use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Material,
    Diameter,
    Fitting,
    FittingDiameter,
    Reduction,
    MaterialConnection,
    Gas,
    Fixture,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Material => "material",
            RecordKind::Diameter => "diameter",
            RecordKind::Fitting => "fitting",
            RecordKind::FittingDiameter => "fitting diameter",
            RecordKind::Reduction => "reduction",
            RecordKind::MaterialConnection => "material connection",
            RecordKind::Gas => "gas",
            RecordKind::Fixture => "fixture",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("No {kind} found with id {id}")]
    Missing { kind: RecordKind, id: u32 },

    #[error("Duplicate {kind} id {id} in catalog")]
    Duplicate { kind: RecordKind, id: u32 },

    #[error("Invalid {kind} {id}: {what}")]
    InvalidRecord {
        kind: RecordKind,
        id: u32,
        what: &'static str,
    },
}
