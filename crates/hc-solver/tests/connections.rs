//! Connection resolver against hand-built catalogs.

use hc_catalog::{
    Catalog, CatalogData, Diameter, Fitting, FittingDiameter, Fixture, Material,
    MaterialConnection, NozzleType, Reduction,
};
use hc_core::{
    DiameterId, FittingDiameterId, FittingId, FixtureId, MaterialConnectionId, MaterialId,
    ReductionId,
};
use hc_solver::{SegmentRef, fixture_connections, resolve_connections};

fn material(id: u32) -> Material {
    Material {
        id: MaterialId(id),
        name: format!("M{id}"),
        hazen_williams_coefficient: Some(120.0),
        one_outlet_connection: Some(FittingId(10)),
        two_outlet_connection: Some(FittingId(11)),
        three_outlet_connection: None,
        default_diameter: None,
    }
}

fn diameter(id: u32, mm: f64) -> Diameter {
    Diameter {
        id: DiameterId(id),
        material_id: MaterialId(1),
        name: format!("D{id}"),
        internal_diameter: mm,
    }
}

fn fitting_diameter(id: u32, fitting: u32, diameter: u32, len: f64) -> FittingDiameter {
    FittingDiameter {
        id: FittingDiameterId(id),
        fitting_id: FittingId(fitting),
        diameter_id: DiameterId(diameter),
        equivalent_length: len,
    }
}

fn connection(id: u32, inlet_d: u32, outlet_d: u32, len: f64) -> MaterialConnection {
    MaterialConnection {
        id: MaterialConnectionId(id),
        inlet_material_id: MaterialId(1),
        outlet_material_id: MaterialId(2),
        inlet_diameter_id: DiameterId(inlet_d),
        outlet_diameter_id: DiameterId(outlet_d),
        name: format!("Adapter {id}"),
        equivalent_length: len,
    }
}

fn catalog(connections: Vec<MaterialConnection>) -> Catalog {
    Catalog::new(CatalogData {
        materials: vec![material(1), material(2)],
        diameters: vec![diameter(1, 65.0), diameter(2, 50.0), diameter(3, 40.0)],
        fittings: vec![
            Fitting {
                id: FittingId(10),
                name: "Elbow".into(),
            },
            Fitting {
                id: FittingId(11),
                name: "Tee".into(),
            },
            Fitting {
                id: FittingId(12),
                name: "Gate valve".into(),
            },
        ],
        fitting_diameters: vec![
            fitting_diameter(1, 10, 1, 2.0),
            fitting_diameter(2, 11, 1, 4.0),
            fitting_diameter(3, 12, 1, 0.5),
            fitting_diameter(4, 12, 2, 0.4),
        ],
        reductions: vec![
            Reduction {
                id: ReductionId(1),
                inlet_diameter_id: DiameterId(1),
                outlet_diameter_id: DiameterId(2),
                name: "Reducer 65x50".into(),
                equivalent_length: 1.1,
            },
            Reduction {
                id: ReductionId(2),
                inlet_diameter_id: DiameterId(2),
                outlet_diameter_id: DiameterId(3),
                name: "Reducer 50x40".into(),
                equivalent_length: 0.9,
            },
        ],
        material_connections: connections,
        ..Default::default()
    })
    .unwrap()
}

fn seg(material: u32, diameter: u32, fittings: &[FittingId]) -> SegmentRef<'_> {
    SegmentRef {
        material_id: MaterialId(material),
        diameter_id: DiameterId(diameter),
        fittings_ids: fittings,
        extra_equivalent_length: 0.0,
    }
}

#[test]
fn inline_fittings_and_single_outlet() {
    let cat = catalog(Vec::new());
    let fittings = [FittingId(12), FittingId(12)];
    let this = seg(1, 1, &fittings);
    let out = resolve_connections(&cat, &this, None, 1).unwrap();
    // Two valves plus the one-outlet elbow.
    assert!((out.equivalent_length - 3.0).abs() < 1e-12);
    assert_eq!(
        out.connection_names,
        vec![
            "Extra length: 0,00 m",
            "Gate valve: 0,50 m",
            "Gate valve: 0,50 m",
            "Elbow: 2,00 m",
        ]
    );
}

#[test]
fn fan_out_above_three_adds_nothing() {
    let cat = catalog(Vec::new());
    let out = resolve_connections(&cat, &seg(1, 1, &[]), None, 4).unwrap();
    assert_eq!(out.equivalent_length, 0.0);
    let two = resolve_connections(&cat, &seg(1, 1, &[]), None, 2).unwrap();
    assert_eq!(two.equivalent_length, 4.0);
}

#[test]
fn diameter_change_uses_reduction_chain() {
    let cat = catalog(Vec::new());
    let prev = seg(1, 1, &[]);
    let out = resolve_connections(&cat, &seg(1, 3, &[]), Some(&prev), 0).unwrap();
    assert!((out.equivalent_length - 2.0).abs() < 1e-12);
    assert_eq!(&out.connection_names[1..], ["Reducer 65x50: 1,10 m", "Reducer 50x40: 0,90 m"]);
}

#[test]
fn material_change_prefers_exact_diameter_match() {
    let cat = catalog(vec![
        connection(1, 1, 3, 9.0),
        connection(2, 1, 1, 3.0),
        connection(3, 2, 1, 7.0),
    ]);
    let prev = seg(1, 1, &[]);
    let out = resolve_connections(&cat, &seg(2, 1, &[]), Some(&prev), 0).unwrap();
    assert_eq!(out.equivalent_length, 3.0);
    assert_eq!(out.connection_names[1], "Adapter 2: 3,00 m");
}

#[test]
fn material_change_bridges_outlet_diameter() {
    // Only an inlet match: the adapter leaves at 65 mm, the path is 50 mm.
    let cat = catalog(vec![connection(1, 2, 3, 9.0), connection(2, 1, 1, 3.0)]);
    let prev = seg(1, 1, &[]);
    let out = resolve_connections(&cat, &seg(2, 2, &[]), Some(&prev), 0).unwrap();
    assert!((out.equivalent_length - 4.1).abs() < 1e-12);
    assert_eq!(
        &out.connection_names[1..],
        ["Adapter 2: 3,00 m", "Reducer 65x50: 1,10 m"]
    );
}

#[test]
fn zero_length_material_connection_is_skipped() {
    // Exact match on 65 mm but the path is 40 mm; a listed row would bridge.
    let cat = catalog(vec![connection(1, 1, 1, 0.0)]);
    let prev = seg(1, 1, &[]);
    let out = resolve_connections(&cat, &seg(2, 3, &[]), Some(&prev), 0).unwrap();
    assert_eq!(out.equivalent_length, 0.0);
    assert_eq!(out.connection_names, vec!["Extra length: 0,00 m"]);
}

#[test]
fn material_change_without_rows_adds_only_extra() {
    let cat = catalog(Vec::new());
    let prev = seg(1, 1, &[]);
    let out = resolve_connections(&cat, &seg(2, 1, &[]), Some(&prev), 0).unwrap();
    assert_eq!(out.equivalent_length, 0.0);
    assert_eq!(out.connection_names.len(), 1);
}

#[test]
fn fixture_inlet_sums_fittings_and_reductions() {
    let cat = catalog(Vec::new());
    let fixture = Fixture {
        id: FixtureId(1),
        name: "Cabinet".into(),
        nozzle_type: NozzleType::Adjustable,
        material_id: None,
        inlet_diameter_id: Some(DiameterId(2)),
        reductions_ids: vec![ReductionId(2)],
        fittings_ids: vec![FittingId(12)],
        extra_equivalent_length: 1.5,
        hose_hazen_williams_coefficient: 140.0,
        hose_internal_diameter: 40.0,
        k_factor: None,
        k_factor_includes_hose: false,
        k_nozzle: None,
        outlet_diameter: 16.0,
        minimum_flow_rate: 130.0,
    };
    let out = fixture_connections(&cat, &fixture).unwrap();
    assert!((out.equivalent_length - 2.8).abs() < 1e-12);
    assert_eq!(
        out.connection_names,
        vec![
            "Extra length: 1,50 m",
            "Gate valve: 0,40 m",
            "Reducer 50x40: 0,90 m",
        ]
    );
}
