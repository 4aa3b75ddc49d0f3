//! Reduction chain search over small catalogs.

use hc_catalog::{Catalog, CatalogData, CatalogError, Diameter, Reduction, best_reduction};
use hc_core::{DiameterId, MaterialId, ReductionId};

fn diameter(id: u32, mm: f64) -> Diameter {
    Diameter {
        id: DiameterId(id),
        material_id: MaterialId(1),
        name: format!("DN{mm}"),
        internal_diameter: mm,
    }
}

fn reduction(id: u32, inlet: u32, outlet: u32, len: f64) -> Reduction {
    Reduction {
        id: ReductionId(id),
        inlet_diameter_id: DiameterId(inlet),
        outlet_diameter_id: DiameterId(outlet),
        name: format!("R{inlet}-{outlet}"),
        equivalent_length: len,
    }
}

fn catalog(reductions: Vec<Reduction>) -> Catalog {
    Catalog::new(CatalogData {
        diameters: vec![
            diameter(1, 100.0),
            diameter(2, 75.0),
            diameter(3, 65.0),
            diameter(4, 50.0),
        ],
        reductions,
        ..Default::default()
    })
    .unwrap()
}

fn ids(chain: &[&Reduction]) -> Vec<u32> {
    chain.iter().map(|r| r.id.0).collect()
}

#[test]
fn direct_row_is_returned_alone() {
    let cat = catalog(vec![
        reduction(1, 1, 2, 1.0),
        reduction(2, 2, 4, 1.0),
        reduction(3, 1, 4, 2.5),
    ]);
    let chain = best_reduction(&cat, DiameterId(1), DiameterId(4)).unwrap();
    assert_eq!(ids(&chain), vec![3]);
}

#[test]
fn two_hop_chain_in_inlet_to_outlet_order() {
    let cat = catalog(vec![reduction(1, 1, 2, 1.0), reduction(2, 2, 4, 0.8)]);
    let chain = best_reduction(&cat, DiameterId(1), DiameterId(4)).unwrap();
    assert_eq!(ids(&chain), vec![1, 2]);
    assert_eq!(chain[0].inlet_diameter_id, DiameterId(1));
    assert_eq!(chain[1].outlet_diameter_id, DiameterId(4));
}

#[test]
fn fewest_hops_wins() {
    // 100 -> 75 -> 65 -> 50 (three hops) versus 100 -> 65 -> 50 (two hops)
    let cat = catalog(vec![
        reduction(1, 1, 2, 1.0),
        reduction(2, 2, 3, 1.0),
        reduction(3, 3, 4, 1.0),
        reduction(4, 1, 3, 1.0),
    ]);
    let chain = best_reduction(&cat, DiameterId(1), DiameterId(4)).unwrap();
    assert_eq!(ids(&chain), vec![4, 3]);
}

#[test]
fn ties_go_to_catalog_order() {
    // 100 -> 75 -> 50 and 100 -> 65 -> 50 both take two hops
    let cat = catalog(vec![
        reduction(1, 1, 2, 1.0),
        reduction(2, 1, 3, 1.0),
        reduction(3, 2, 4, 1.0),
        reduction(4, 3, 4, 1.0),
    ]);
    let chain = best_reduction(&cat, DiameterId(1), DiameterId(4)).unwrap();
    assert_eq!(ids(&chain), vec![1, 3]);
}

#[test]
fn expansion_searches_upward() {
    let cat = catalog(vec![reduction(1, 4, 3, 1.0), reduction(2, 3, 1, 1.0)]);
    let chain = best_reduction(&cat, DiameterId(4), DiameterId(1)).unwrap();
    assert_eq!(ids(&chain), vec![1, 2]);
}

#[test]
fn chains_never_overshoot_the_target() {
    // 100 -> 50 -> 65 is not a valid way to reach 65
    let cat = catalog(vec![reduction(1, 1, 4, 1.0), reduction(2, 4, 3, 1.0)]);
    let chain = best_reduction(&cat, DiameterId(1), DiameterId(3)).unwrap();
    assert!(chain.is_empty());
}

#[test]
fn same_diameter_needs_nothing() {
    let cat = catalog(vec![]);
    assert!(best_reduction(&cat, DiameterId(2), DiameterId(2)).unwrap().is_empty());
}

#[test]
fn unknown_diameter_is_an_error() {
    let cat = catalog(vec![]);
    let err = best_reduction(&cat, DiameterId(1), DiameterId(99)).unwrap_err();
    assert!(matches!(err, CatalogError::Missing { id: 99, .. }));
}
