//! In-memory catalog.

use std::collections::HashMap;
use std::hash::Hash;

use hc_core::{DiameterId, FittingId, FixtureId, GasId, MaterialId, ReductionId};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult, RecordKind};
use crate::provider::ReferenceData;
use crate::records::{
    Diameter, Fitting, FittingDiameter, Fixture, Gas, Material, MaterialConnection, Reduction,
};

/// Serializable catalog tables, in the order rows were exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub materials: Vec<Material>,
    pub diameters: Vec<Diameter>,
    pub fittings: Vec<Fitting>,
    pub fitting_diameters: Vec<FittingDiameter>,
    pub reductions: Vec<Reduction>,
    pub material_connections: Vec<MaterialConnection>,
    pub gases: Vec<Gas>,
    pub fixtures: Vec<Fixture>,
}

/// Indexed view over [`CatalogData`].
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    materials: HashMap<MaterialId, usize>,
    diameters: HashMap<DiameterId, usize>,
    fittings: HashMap<FittingId, usize>,
    fitting_diameters: HashMap<(FittingId, DiameterId), usize>,
    reductions: HashMap<ReductionId, usize>,
    direct_reductions: HashMap<(DiameterId, DiameterId), usize>,
    reductions_by_inlet: HashMap<DiameterId, Vec<usize>>,
    connections_by_materials: HashMap<(MaterialId, MaterialId), Vec<usize>>,
    gases: HashMap<GasId, usize>,
    fixtures: HashMap<FixtureId, usize>,
}

fn unique_index<T, K: Hash + Eq + Copy>(
    rows: &[T],
    kind: RecordKind,
    key: impl Fn(&T) -> K,
    raw: impl Fn(K) -> u32,
) -> CatalogResult<HashMap<K, usize>> {
    let mut map = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let k = key(row);
        if map.insert(k, i).is_some() {
            return Err(CatalogError::Duplicate { kind, id: raw(k) });
        }
    }
    Ok(map)
}

fn check_positive(v: f64, kind: RecordKind, id: u32, what: &'static str) -> CatalogResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidRecord { kind, id, what })
    }
}

impl Catalog {
    /// Index the tables. Fails on duplicate ids or non-physical values.
    pub fn new(data: CatalogData) -> CatalogResult<Self> {
        for d in &data.diameters {
            check_positive(
                d.internal_diameter,
                RecordKind::Diameter,
                d.id.0,
                "internal diameter must be positive",
            )?;
        }
        for g in &data.gases {
            check_positive(g.pci, RecordKind::Gas, g.id.0, "pci must be positive")?;
            check_positive(
                g.relative_density,
                RecordKind::Gas,
                g.id.0,
                "relative density must be positive",
            )?;
        }
        for f in &data.fixtures {
            check_positive(
                f.outlet_diameter,
                RecordKind::Fixture,
                f.id.0,
                "outlet diameter must be positive",
            )?;
            check_positive(
                f.minimum_flow_rate,
                RecordKind::Fixture,
                f.id.0,
                "minimum flow rate must be positive",
            )?;
        }

        let materials = unique_index(&data.materials, RecordKind::Material, |r| r.id, |k| k.0)?;
        let diameters = unique_index(&data.diameters, RecordKind::Diameter, |r| r.id, |k| k.0)?;
        let fittings = unique_index(&data.fittings, RecordKind::Fitting, |r| r.id, |k| k.0)?;
        let reductions = unique_index(&data.reductions, RecordKind::Reduction, |r| r.id, |k| k.0)?;
        let gases = unique_index(&data.gases, RecordKind::Gas, |r| r.id, |k| k.0)?;
        let fixtures = unique_index(&data.fixtures, RecordKind::Fixture, |r| r.id, |k| k.0)?;

        let mut fitting_diameters = HashMap::new();
        for (i, row) in data.fitting_diameters.iter().enumerate() {
            fitting_diameters
                .entry((row.fitting_id, row.diameter_id))
                .or_insert(i);
        }

        let mut direct_reductions = HashMap::new();
        let mut reductions_by_inlet: HashMap<DiameterId, Vec<usize>> = HashMap::new();
        for (i, row) in data.reductions.iter().enumerate() {
            direct_reductions
                .entry((row.inlet_diameter_id, row.outlet_diameter_id))
                .or_insert(i);
            reductions_by_inlet
                .entry(row.inlet_diameter_id)
                .or_default()
                .push(i);
        }

        let mut connections_by_materials: HashMap<(MaterialId, MaterialId), Vec<usize>> =
            HashMap::new();
        for (i, row) in data.material_connections.iter().enumerate() {
            connections_by_materials
                .entry((row.inlet_material_id, row.outlet_material_id))
                .or_default()
                .push(i);
        }

        Ok(Self {
            data,
            materials,
            diameters,
            fittings,
            fitting_diameters,
            reductions,
            direct_reductions,
            reductions_by_inlet,
            connections_by_materials,
            gases,
            fixtures,
        })
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }
}

impl ReferenceData for Catalog {
    fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id).map(|&i| &self.data.materials[i])
    }

    fn diameter(&self, id: DiameterId) -> Option<&Diameter> {
        self.diameters.get(&id).map(|&i| &self.data.diameters[i])
    }

    fn fitting(&self, id: FittingId) -> Option<&Fitting> {
        self.fittings.get(&id).map(|&i| &self.data.fittings[i])
    }

    fn fitting_diameter(
        &self,
        fitting: FittingId,
        diameter: DiameterId,
    ) -> Option<&FittingDiameter> {
        self.fitting_diameters
            .get(&(fitting, diameter))
            .map(|&i| &self.data.fitting_diameters[i])
    }

    fn reduction(&self, id: ReductionId) -> Option<&Reduction> {
        self.reductions.get(&id).map(|&i| &self.data.reductions[i])
    }

    fn direct_reduction(&self, inlet: DiameterId, outlet: DiameterId) -> Option<&Reduction> {
        self.direct_reductions
            .get(&(inlet, outlet))
            .map(|&i| &self.data.reductions[i])
    }

    fn reductions_from(&self, inlet: DiameterId) -> Vec<&Reduction> {
        self.reductions_by_inlet
            .get(&inlet)
            .map(|rows| rows.iter().map(|&i| &self.data.reductions[i]).collect())
            .unwrap_or_default()
    }

    fn material_connections(
        &self,
        inlet: MaterialId,
        outlet: MaterialId,
    ) -> Vec<&MaterialConnection> {
        self.connections_by_materials
            .get(&(inlet, outlet))
            .map(|rows| {
                rows.iter()
                    .map(|&i| &self.data.material_connections[i])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn gas(&self, id: GasId) -> Option<&Gas> {
        self.gases.get(&id).map(|&i| &self.data.gases[i])
    }

    fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.get(&id).map(|&i| &self.data.fixtures[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diameter(id: u32, mm: f64) -> Diameter {
        Diameter {
            id: DiameterId(id),
            material_id: MaterialId(1),
            name: format!("{mm} mm"),
            internal_diameter: mm,
        }
    }

    #[test]
    fn duplicate_ids_rejected() {
        let data = CatalogData {
            diameters: vec![diameter(1, 50.0), diameter(1, 65.0)],
            ..Default::default()
        };
        assert_eq!(
            Catalog::new(data).unwrap_err(),
            CatalogError::Duplicate {
                kind: RecordKind::Diameter,
                id: 1
            }
        );
    }

    #[test]
    fn zero_diameter_rejected() {
        let data = CatalogData {
            diameters: vec![diameter(1, 0.0)],
            ..Default::default()
        };
        assert!(matches!(
            Catalog::new(data),
            Err(CatalogError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn pair_lookup_returns_first_row() {
        let row = |id: u32, len: f64| FittingDiameter {
            id: hc_core::FittingDiameterId(id),
            fitting_id: FittingId(7),
            diameter_id: DiameterId(1),
            equivalent_length: len,
        };
        let data = CatalogData {
            diameters: vec![diameter(1, 50.0)],
            fitting_diameters: vec![row(1, 1.5), row(2, 9.0)],
            ..Default::default()
        };
        let catalog = Catalog::new(data).unwrap();
        let fd = catalog
            .fitting_diameter(FittingId(7), DiameterId(1))
            .unwrap();
        assert_eq!(fd.equivalent_length, 1.5);
        assert!(catalog.fitting_diameter(FittingId(7), DiameterId(2)).is_none());
    }

    #[test]
    fn missing_records_become_errors() {
        let catalog = Catalog::new(CatalogData::default()).unwrap();
        assert_eq!(
            catalog.require_gas(GasId(4)).unwrap_err(),
            CatalogError::Missing {
                kind: RecordKind::Gas,
                id: 4
            }
        );
        assert_eq!(
            catalog.require_gas(GasId(4)).unwrap_err().to_string(),
            "No gas found with id 4"
        );
    }
}
