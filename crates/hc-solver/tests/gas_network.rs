//! Gas engine scenarios checked against hand-substituted formulas.

use hc_catalog::{Catalog, CatalogData, Diameter, Fitting, FittingDiameter, Gas, Material};
use hc_core::{DiameterId, FittingDiameterId, FittingId, GasId, MaterialId};
use hc_project::{FileInfo, GasCalcType, GasNetworkSpec, GasPathSpec};
use hc_solver::{GasNetwork, SolverError, SolverLimits, solve_gas};

fn material(two_outlet: Option<u32>) -> Material {
    Material {
        id: MaterialId(1),
        name: "Copper".into(),
        hazen_williams_coefficient: None,
        one_outlet_connection: None,
        two_outlet_connection: two_outlet.map(FittingId),
        three_outlet_connection: None,
        default_diameter: None,
    }
}

fn catalog(internal_diameter: f64, gas_name: &str, two_outlet: Option<u32>) -> Catalog {
    Catalog::new(CatalogData {
        materials: vec![material(two_outlet)],
        diameters: vec![Diameter {
            id: DiameterId(1),
            material_id: MaterialId(1),
            name: "22 mm".into(),
            internal_diameter,
        }],
        fittings: vec![Fitting {
            id: FittingId(5),
            name: "Tee".into(),
        }],
        fitting_diameters: vec![FittingDiameter {
            id: FittingDiameterId(1),
            fitting_id: FittingId(5),
            diameter_id: DiameterId(1),
            equivalent_length: 1.2,
        }],
        gases: vec![Gas {
            id: GasId(1),
            name: gas_name.into(),
            description: None,
            pci: 24_000.0,
            pck: None,
            relative_density: 1.5,
        }],
        ..Default::default()
    })
    .unwrap()
}

fn path(start: &str, end: &str, length: f64, power: f64) -> GasPathSpec {
    GasPathSpec {
        start: start.into(),
        end: Some(end.into()),
        material_id: MaterialId(1),
        diameter_id: DiameterId(1),
        power_rating_added: power,
        length,
        length_up: 0.0,
        length_down: 0.0,
        fittings_ids: Vec::new(),
        extra_equivalent_length: 0.0,
    }
}

fn network(calc_type: GasCalcType, paths: Vec<GasPathSpec>) -> GasNetworkSpec {
    GasNetworkSpec {
        fileinfo: FileInfo::default(),
        name: Some("test".into()),
        observation: None,
        calc_type,
        material_id: MaterialId(1),
        diameter_id: DiameterId(1),
        gas_id: GasId(1),
        start_pressure: 150.0,
        paths,
    }
}

fn run(spec: &GasNetworkSpec, catalog: &Catalog) -> Result<GasNetwork, SolverError> {
    solve_gas(spec, catalog, &SolverLimits::unbounded())
}

#[test]
fn primary_chain_matches_hand_values() {
    // CG -> A -> B -> C, 20 mm bore, LPG-like gas.
    // Duties (kcal/min) stay below the concurrency threshold, so f = 1.
    let spec = network(
        GasCalcType::Primary,
        vec![
            path("CG", "A", 10.0, 0.0),
            path("A", "B", 5.0, 100.0),
            path("B", "C", 8.0, 200.0),
        ],
    );
    let net = run(&spec, &catalog(20.0, "GLP", None)).unwrap();

    let flows: Vec<f64> = net.paths.iter().map(|p| p.flow).collect();
    assert_eq!(flows, vec![0.75, 0.75, 0.5]);

    // end = sqrt(start² − 467000·ρ·L·Q^1.82 / D^4.82)
    let expected_ends = [149.992_587_844, 149.988_881_629, 149.986_046_492];
    let expected_drops = [2.223_591_780, 1.111_795_890, 0.850_469_915];
    let mut previous = spec.start_pressure;
    for (i, p) in net.paths.iter().enumerate() {
        assert!((p.pressure_drop - expected_drops[i]).abs() < 1e-6, "drop {i}");
        assert!((p.end_pressure - expected_ends[i]).abs() < 1e-6, "end {i}");
        assert_eq!(p.start_pressure, previous);
        assert!(p.end_pressure < p.start_pressure);
        previous = p.end_pressure;
    }

    assert!((net.paths[0].speed - 0.259_016_880).abs() < 1e-6);
    assert!(net.paths.iter().all(|p| !p.fail));
    assert_eq!(net.max_fail_level, 0);
    assert_eq!(net.min_end_pressure(), net.paths[2].end_pressure);
}

#[test]
fn accumulated_power_is_conserved() {
    let spec = network(
        GasCalcType::Primary,
        vec![
            path("CG", "A", 4.0, 10.0),
            path("A", "B", 3.0, 250.0),
            path("A", "C", 6.0, 400.0),
            path("C", "D", 2.0, 150.0),
        ],
    );
    let net = run(&spec, &catalog(25.0, "GLP", None)).unwrap();
    for id in net.tree.ids() {
        let p = net.path(id);
        let below: f64 = net
            .tree
            .children(id)
            .iter()
            .map(|&c| net.path(c).power_rating_accumulated)
            .sum();
        assert_eq!(p.power_rating_accumulated, p.spec.power_rating_added + below);
        assert!(p.concurrency_factor <= 1.0);
        assert_eq!(p.power_rating_adopted, p.power_rating_accumulated * p.concurrency_factor);
    }
    // 810 kcal/min = 48 600 kcal/h, on the first diversity curve.
    assert!(net.paths[0].concurrency_factor < 1.0);
}

#[test]
fn secondary_network_flags_failures_up_the_tree() {
    let spec = network(
        GasCalcType::Secondary,
        vec![
            path("CG", "A", 30.0, 0.0),
            path("A", "B", 20.0, 300.0),
            path("A", "C", 1.0, 1.0),
        ],
    );
    let net = run(&spec, &catalog(4.0, "GLP", None)).unwrap();

    for p in &net.paths {
        assert_eq!(p.concurrency_factor, 1.0);
        assert!(p.end_pressure >= 0.0);
        assert_eq!(p.fail, p.pressure_drop_accumulated > 0.1);
    }
    let b = &net.paths[1];
    assert!(b.fail, "long narrow branch should exceed the 10 % limit");
    let expected_root = net.paths.iter().filter(|p| p.fail).count() as u32;
    assert_eq!(net.paths[0].fail_level, expected_root);
    assert_eq!(net.max_fail_level, expected_root);
}

#[test]
fn natural_gas_uses_its_own_secondary_formula() {
    let spec = network(GasCalcType::Secondary, vec![path("CG", "A", 10.0, 100.0)]);
    let ng = run(&spec, &catalog(20.0, "GN", None)).unwrap();
    let q: f64 = 100.0 * 60.0 / 24_000.0;
    let expected = q.powf(1.8) * 1.5_f64.powf(0.8) * 10.0 / (0.000_492_84 * 20.0_f64.powf(4.8));
    assert!((ng.paths[0].pressure_drop - expected).abs() < 1e-9);
    assert!((ng.paths[0].end_pressure - (150.0 - expected)).abs() < 1e-9);
}

#[test]
fn branch_fitting_and_trace_lines() {
    let mut first = path("CG", "A", 4.0, 0.0);
    first.extra_equivalent_length = 1.5;
    let spec = network(
        GasCalcType::Primary,
        vec![first, path("A", "B", 3.0, 50.0), path("A", "C", 3.0, 50.0)],
    );
    let net = run(&spec, &catalog(20.0, "GLP", Some(5))).unwrap();
    let source = &net.paths[0];
    assert!((source.equivalent_length - 2.7).abs() < 1e-12);
    assert!((source.total_length - 6.7).abs() < 1e-12);
    assert_eq!(
        source.connection_names,
        vec!["Extra length: 1,50 m".to_string(), "Tee: 1,20 m".to_string()]
    );
    // Leaves have no outlets, so only the extra-length line.
    assert_eq!(net.paths[1].connection_names.len(), 1);
}

#[test]
fn missing_gas_is_an_input_error() {
    let mut spec = network(GasCalcType::Primary, vec![path("CG", "A", 1.0, 1.0)]);
    spec.gas_id = GasId(99);
    let err = run(&spec, &catalog(20.0, "GLP", None)).unwrap_err();
    assert_eq!(err, SolverError::NoGas { id: 99 });
}

#[test]
fn network_without_meter_is_rejected() {
    let spec = network(GasCalcType::Primary, vec![path("A", "B", 1.0, 1.0)]);
    let err = run(&spec, &catalog(20.0, "GLP", None)).unwrap_err();
    assert_eq!(err, SolverError::NoReservoir { label: "CG".into() });
}

#[test]
fn unknown_calc_type_is_not_implemented() {
    let spec = network(GasCalcType::Other("ZZ".into()), vec![path("CG", "A", 1.0, 1.0)]);
    let err = run(&spec, &catalog(20.0, "GLP", None)).unwrap_err();
    assert!(matches!(err, SolverError::NotImplemented { .. }));
}
