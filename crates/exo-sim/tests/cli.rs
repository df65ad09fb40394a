use std::fs;
use std::process::{Command, Output};

fn exo_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exo-sim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn exo-sim")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("json stdout")
}

#[test]
fn version_prints_crate_version() {
    let output = exo_sim(&["version"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn catalog_lists_tess_stars() {
    let output = exo_sim(&["catalog", "--mission", "TESS", "--json"]);
    let rows = stdout_json(&output);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row["model"] == "tess"));
}

#[test]
fn classify_respects_model_flag() {
    let output = exo_sim(&["classify", "--star", "KIC-11111111", "--model", "tess-kepler"]);
    let result = stdout_json(&output);
    assert_eq!(result["modelUsed"], "LSTM");

    let output = exo_sim(&["classify", "--star", "KIC-11111111", "--model", "bogus"]);
    assert!(!output.status.success());
}

#[test]
fn unknown_star_fails() {
    let output = exo_sim(&["explain", "--star", "KIC-0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("KIC-0"));
}

#[test]
fn analyze_writes_report_and_series() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pipeline.yaml");
    fs::write(&config, "light_curve:\n  duration_days: 2\n").unwrap();
    let out = dir.path().join("out");

    let output = exo_sim(&[
        "analyze",
        "--star",
        "KIC-22222222",
        "--seed",
        "7",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_slice(&fs::read(out.join("report.json")).unwrap()).unwrap();
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(report["analysisHash"], hash.as_str());
    assert_eq!(report["provenance"]["seed"], 7);

    let curve = fs::read_to_string(out.join("light_curve.csv")).unwrap();
    let mut lines = curve.lines();
    assert_eq!(lines.next(), Some("t,flux"));
    assert_eq!(lines.count(), 60);
    assert!(out.join("periodogram.csv").exists());
    assert!(fs::read_to_string(out.join("phase_folded.csv"))
        .unwrap()
        .starts_with("phase,flux"));
}

#[test]
fn analyze_is_reproducible_from_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("star.json");
    fs::write(
        &input,
        r#"{"id": "CUSTOM-1", "name": "Custom b", "mission": "K2",
            "physical": {"period": 4.2, "duration": 2.0, "prad": 1.1, "teff": 5200,
                         "logg": 4.5, "srad": 0.8, "mag": 11.0}}"#,
    )
    .unwrap();
    let args = ["analyze", "--input", input.to_str().unwrap(), "--seed", "3"];
    let first = exo_sim(&args);
    let second = exo_sim(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let report = stdout_json(&first);
    assert_eq!(report["model"], "tess-kepler");
}

#[test]
fn validate_reports_partial_records() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join("record.json");
    fs::write(&record, r#"{"prad": 1.0, "srad": 1.0, "teff": 15000}"#).unwrap();
    let output = exo_sim(&["validate", "--record", record.to_str().unwrap()]);
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"][0], "Orbital period must be positive");

    let output = exo_sim(&["validate", "--star", "KIC-11111111"]);
    assert_eq!(stdout_json(&output)["valid"], true);
}

#[test]
fn long_version_reports_commit_and_models() {
    let info = stdout_json(&exo_sim(&["version", "--long"]));
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    assert!(!info["git_commit"].as_str().unwrap().is_empty());
    assert!(info["models"].as_array().unwrap().iter().any(|m| m == "tess"));
}

#[test]
fn detect_emits_series_and_rejects_oversized_configs() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pipeline.yaml");
    fs::write(&config, "light_curve:\n  duration_days: 2\n").unwrap();
    let config_arg = config.to_str().unwrap();

    let output = exo_sim(&["detect", "--star", "KIC-22222222", "--config", config_arg]);
    let detection = stdout_json(&output);
    assert_eq!(detection["rawLightCurve"].as_array().unwrap().len(), 60);
    assert_eq!(detection["periodogram"].as_array().unwrap().len(), 100);

    fs::write(&config, "light_curve:\n  duration_days: 1.0e300\n").unwrap();
    let output = exo_sim(&["detect", "--star", "KIC-22222222", "--config", config_arg]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too-many-points"));
}
