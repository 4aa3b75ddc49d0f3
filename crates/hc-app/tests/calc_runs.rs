//! File-to-output runs through the service layer.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use hc_app::*;
use hc_catalog::{CatalogData, Diameter, Fixture, Gas, Material, NozzleType};
use hc_core::{DiameterId, FixtureId, GasId, MaterialId};
use hc_project::{
    FileInfo, FixtureInput, GasCalcInput, GasCalcType, GasPathInput, PressureType, PumpInput,
    StandpipeCalcInput, StandpipeCalcType, StandpipePathInput, save_file,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("hc_app_test").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn catalog_data() -> CatalogData {
    CatalogData {
        materials: vec![Material {
            id: MaterialId(1),
            name: "Steel".into(),
            hazen_williams_coefficient: Some(120.0),
            one_outlet_connection: None,
            two_outlet_connection: None,
            three_outlet_connection: None,
            default_diameter: None,
        }],
        diameters: vec![Diameter {
            id: DiameterId(1),
            material_id: MaterialId(1),
            name: "65 mm".into(),
            internal_diameter: 65.0,
        }],
        gases: vec![Gas {
            id: GasId(1),
            name: "GLP".into(),
            description: None,
            pci: 24_000.0,
            pck: None,
            relative_density: 1.5,
        }],
        fixtures: vec![Fixture {
            id: FixtureId(1),
            name: "Hose cabinet".into(),
            nozzle_type: NozzleType::TruncatedCone,
            material_id: None,
            inlet_diameter_id: None,
            reductions_ids: Vec::new(),
            fittings_ids: Vec::new(),
            extra_equivalent_length: 0.0,
            hose_hazen_williams_coefficient: 140.0,
            hose_internal_diameter: 40.0,
            k_factor: None,
            k_factor_includes_hose: false,
            k_nozzle: None,
            outlet_diameter: 13.0,
            minimum_flow_rate: 100.0,
        }],
        ..Default::default()
    }
}

fn gas_path(start: &str, end: &str, power: f64) -> GasPathInput {
    GasPathInput {
        start: start.into(),
        end: Some(end.into()),
        material_id: MaterialId(1),
        diameter_id: DiameterId(1),
        power_rating_added: Some(power),
        length: Some(6.0),
        length_up: None,
        length_down: None,
        fittings_ids: None,
        extra_equivalent_length: None,
    }
}

fn gas_input() -> GasCalcInput {
    GasCalcInput {
        fileinfo: FileInfo::default(),
        name: Some("House".into()),
        observation: None,
        calc_type: GasCalcType::Primary,
        material_id: MaterialId(1),
        diameter_id: DiameterId(1),
        gas_id: GasId(1),
        signatory_id: None,
        start_pressure: Some(150.0),
        paths: vec![gas_path("CG", "A", 0.0), gas_path("A", "B", 120.0)],
    }
}

fn standpipe_input(fixture_id: u32) -> StandpipeCalcInput {
    StandpipeCalcInput {
        fileinfo: FileInfo::default(),
        name: Some("Tower".into()),
        observation: None,
        calc_type: StandpipeCalcType::MinimumFlow,
        pressure_type: PressureType::Gravity,
        pump: PumpInput::default(),
        material_id: MaterialId(1),
        diameter_id: DiameterId(1),
        fixture_id: FixtureId(fixture_id),
        signatory_id: None,
        paths: vec![StandpipePathInput {
            start: "RES".into(),
            end: None,
            material_id: MaterialId(1),
            diameter_id: DiameterId(1),
            length: Some(12.0),
            level_difference: None,
            fittings_ids: None,
            extra_equivalent_length: None,
            has_fixture: Some(true),
            fixture: Some(FixtureInput {
                active: Some(true),
                end: Some("H1".into()),
                hose_length: Some(30.0),
                level_difference: Some(1.0),
            }),
        }],
    }
}

#[test]
fn gas_run_from_files() {
    let dir = scratch("gas");
    let catalog_path = dir.join("catalog.yaml");
    let input_path = dir.join("house.json");
    save_file(&catalog_path, &catalog_data()).unwrap();
    save_file(&input_path, &gas_input()).unwrap();

    let catalog = load_catalog(&catalog_path).unwrap();
    assert_eq!(catalog_summary(&catalog).gases, 1);

    let input = load_gas_input(&input_path).unwrap();
    let output = run_gas(&input, &catalog, &CalcOptions::default()).unwrap();
    assert_eq!(output.paths.len(), 2);
    assert!(output.result.unwrap().accepted);
    assert!(output.calculated_at.is_some());

    let summary = validate_input(&input_path, InputKind::Gas).unwrap();
    assert_eq!(summary.calc_type, "PR");
    assert_eq!(summary.paths, 2);
}

#[test]
fn standpipe_run_and_failure_report() {
    let dir = scratch("standpipe");
    let catalog_path = dir.join("catalog.json");
    save_file(&catalog_path, &catalog_data()).unwrap();
    let catalog = load_catalog(&catalog_path).unwrap();
    let options = CalcOptions::default();

    let output = run_standpipe(&standpipe_input(1), &catalog, &options).unwrap();
    assert_eq!(output.less_favorable_path_fixture_index, Some(0));
    assert!(output.error.is_none());

    let err = run_standpipe(&standpipe_input(9), &catalog, &options).unwrap_err();
    assert!(err.is_input_error());

    let report = report_standpipe(&standpipe_input(9), &catalog, &options);
    assert_eq!(report.error.as_deref(), Some("No fixture found with id 9"));
    assert!(report.paths.is_empty());
    assert!(report.summary.is_none());
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn completed_runs_log_their_label() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let catalog = hc_catalog::Catalog::new(catalog_data()).unwrap();
    let options = CalcOptions::default();
    tracing::subscriber::with_default(subscriber, || {
        run_gas(&gas_input(), &catalog, &options).unwrap();
        run_standpipe(&standpipe_input(1), &catalog, &options).unwrap();
    });

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("run=\"gas run\""), "{text}");
    assert!(text.contains("run=\"standpipe run\""), "{text}");
    assert_eq!(text.matches("run complete").count(), 2);
}

#[test]
fn invalid_input_is_rejected_on_load() {
    let dir = scratch("invalid");
    let path = dir.join("bad.json");
    // save_file validates, so the bad document is written by hand.
    let json = r#"{"calc_type": "PR", "material_id": 1, "diameter_id": 1, "gas_id": 1,
        "start_pressure": -1.0,
        "paths": [{"start": "CG", "end": "A", "material_id": 1, "diameter_id": 1}]}"#;
    std::fs::write(&path, json).unwrap();

    let err = load_gas_input(&path).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.is_input_error());
}

#[test]
fn unknown_extension_names_the_file() {
    let dir = scratch("extension");
    let path = dir.join("catalog.toml");
    std::fs::write(&path, "").unwrap();
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, AppError::FileLoad { .. }));
}
