//! CLI 명령 실행 테스트. 설정/입력 파일은 임시 디렉터리에 만든다.
use std::io::Cursor;

use vehicle_cost_projection::app::{
    error_language, execute, AppError, Command, CompareArgs, Context, InputArgs, ProjectArgs, RecordArgs,
    SettingsArgs,
};
use vehicle_cost_projection::config::{self, Config, OutputFormat};
use vehicle_cost_projection::i18n::Translator;
use vehicle_cost_projection::store::InputStore;
use vehicle_cost_projection::{InputError, InputRecord, VehicleRole};

fn reference_args() -> RecordArgs {
    RecordArgs {
        initial_price: Some(30_000.0),
        current_age: Some(5),
        kilometers_driven: Some(15_000.0),
        fuel_consumption: Some(8.0),
        current_market_value: Some(20_000.0),
        fuel_price: Some(1.5),
        discount_rate: Some(0.10),
    }
}

fn run_command(
    cfg: &mut Config,
    dir: &std::path::Path,
    command: Command,
    stdin: &str,
) -> Result<String, AppError> {
    let tr = Translator::new("en");
    let config_path = dir.join("config.toml");
    let mut ctx = Context {
        config: cfg,
        config_path: &config_path,
        translator: &tr,
    };
    let mut input = Cursor::new(stdin.to_string());
    let mut out = Vec::new();
    execute(command, &mut ctx, &mut input, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8"))
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        inputs_path: dir.join("last_inputs.json").display().to_string(),
        ..Config::default()
    }
}

#[test]
fn project_csv_has_header_and_eleven_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let out = run_command(
        &mut cfg,
        dir.path(),
        Command::Project(ProjectArgs {
            role: VehicleRole::Current,
            record: reference_args(),
            save: false,
            format: Some(OutputFormat::Csv),
            inputs: None,
        }),
        "",
    )
    .expect("project");
    let lines: Vec<&str> = out.trim_end().lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with("year,market_value,"));
    assert!(lines[1].starts_with("0,20000.0,"));
    // 저장하지 않았으므로 파일이 없어야 한다.
    assert!(!dir.path().join("last_inputs.json").exists());
}

#[test]
fn project_missing_field_is_invalid_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let mut record = reference_args();
    record.fuel_price = None;
    let err = run_command(
        &mut cfg,
        dir.path(),
        Command::Project(ProjectArgs {
            role: VehicleRole::Current,
            record,
            save: false,
            format: None,
            inputs: None,
        }),
        "",
    )
    .expect_err("missing field");
    assert!(matches!(
        err,
        AppError::Input(InputError::MissingField("fuel_price"))
    ));
}

#[test]
fn saved_project_inputs_feed_later_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    run_command(
        &mut cfg,
        dir.path(),
        Command::Project(ProjectArgs {
            role: VehicleRole::Planned,
            record: reference_args(),
            save: true,
            format: Some(OutputFormat::Json),
            inputs: None,
        }),
        "",
    )
    .expect("first run");

    let out = run_command(
        &mut cfg,
        dir.path(),
        Command::Project(ProjectArgs {
            role: VehicleRole::Planned,
            record: RecordArgs {
                discount_rate: Some(0.0),
                ..RecordArgs::default()
            },
            save: true,
            format: Some(OutputFormat::Json),
            inputs: None,
        }),
        "",
    )
    .expect("second run");
    let rows: Vec<serde_json::Value> = serde_json::from_str(out.trim()).expect("json");
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0]["opportunity_cost"], serde_json::json!(0.0));

    let store = InputStore::open(&cfg.inputs_path).expect("store");
    let saved = store.get(VehicleRole::Planned).expect("planned saved");
    assert_eq!(saved.discount_rate, 0.0);
    assert_eq!(saved.initial_price, 30_000.0);
    assert!(store.get(VehicleRole::Current).is_none());
}

#[test]
fn compare_requires_both_roles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let rec = InputRecord {
        initial_price: 30_000.0,
        current_age: 5,
        kilometers_driven: 15_000.0,
        fuel_consumption: 8.0,
        current_market_value: 20_000.0,
        fuel_price: 1.5,
        discount_rate: 0.10,
    };

    let err = run_command(
        &mut cfg,
        dir.path(),
        Command::Compare(CompareArgs {
            format: None,
            inputs: None,
        }),
        "",
    )
    .expect_err("nothing saved");
    assert!(matches!(
        err,
        AppError::Input(InputError::MissingRole(VehicleRole::Current))
    ));

    let mut store = InputStore::open(&cfg.inputs_path).expect("store");
    store.set(VehicleRole::Current, rec);
    store.save().expect("save");

    let err = run_command(
        &mut cfg,
        dir.path(),
        Command::Compare(CompareArgs {
            format: None,
            inputs: None,
        }),
        "",
    )
    .expect_err("planned missing");
    assert!(matches!(
        err,
        AppError::Input(InputError::MissingRole(VehicleRole::Planned))
    ));
    assert!(err.to_string().contains("planned"), "{err}");

    store.set(VehicleRole::Planned, rec);
    store.save().expect("save");
    let out = run_command(
        &mut cfg,
        dir.path(),
        Command::Compare(CompareArgs {
            format: Some(OutputFormat::Table),
            inputs: None,
        }),
        "",
    )
    .expect("compare");
    assert!(out.contains("Difference"));
    assert!(out.contains("10-year difference (planned - current): 0.00"));
}

#[test]
fn interactive_input_is_saved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let out = run_command(
        &mut cfg,
        dir.path(),
        Command::Input(InputArgs {
            role: VehicleRole::Current,
            inputs: None,
        }),
        "30000\n5\n15000\n8\n20000\n1.5\n0.1\n",
    )
    .expect("input");
    assert!(out.contains("Saved inputs to"));
    let store = InputStore::open(&cfg.inputs_path).expect("store");
    assert_eq!(store.get(VehicleRole::Current).map(|r| r.current_age), Some(5));
}

#[test]
fn interactive_input_rejects_out_of_range_rate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let err = run_command(
        &mut cfg,
        dir.path(),
        Command::Input(InputArgs {
            role: VehicleRole::Current,
            inputs: None,
        }),
        "30000\n5\n15000\n8\n20000\n1.5\n1.5\n",
    )
    .expect_err("rate >= 1");
    assert!(matches!(
        err,
        AppError::Input(InputError::OutOfRange {
            field: "discount_rate",
            ..
        })
    ));
    assert!(!dir.path().join("last_inputs.json").exists());
}

#[test]
fn settings_are_written_to_config_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    run_command(
        &mut cfg,
        dir.path(),
        Command::Settings(SettingsArgs {
            language: Some("ko".into()),
            output: Some(OutputFormat::Csv),
            ..SettingsArgs::default()
        }),
        "",
    )
    .expect("settings");
    let loaded = config::load_from(dir.path().join("config.toml")).expect("load");
    assert_eq!(loaded.language, "ko");
    assert_eq!(loaded.output, OutputFormat::Csv);
    assert_eq!(loaded, cfg);
}

#[test]
fn error_language_follows_loaded_config() {
    let ko = Config {
        language: "ko".into(),
        ..Config::default()
    };
    assert_eq!(error_language(None, Some(&ko)), "ko");
    assert_eq!(error_language(Some("en"), Some(&ko)), "en");
    assert_eq!(error_language(Some("auto"), Some(&ko)), "ko");
}

#[test]
fn project_json_is_an_array_of_eleven_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    let out = run_command(
        &mut cfg,
        dir.path(),
        Command::Project(ProjectArgs {
            role: VehicleRole::Current,
            record: reference_args(),
            save: false,
            format: Some(OutputFormat::Json),
            inputs: None,
        }),
        "",
    )
    .expect("project");
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[10]["year"], 10);
}
