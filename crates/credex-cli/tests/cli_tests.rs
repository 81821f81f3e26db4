//! End-to-end tests for the `credex` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn credex() -> Command {
    let mut cmd = Command::cargo_bin("credex").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("CREDEX_CONFIG");
    cmd
}

fn fixture(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

// =============================================================================
// DIFF
// =============================================================================

#[test]
fn test_diff_json() {
    let dir = TempDir::new().unwrap();
    let base = fixture(&dir, "base.json", r#"{"PV": 100.0, "Accrued": 1.0}"#);
    let up = fixture(&dir, "up.json", r#"{"PV": 97.0, "Spread": 5.0}"#);
    let down = fixture(&dir, "down.json", r#"{"PV": 105.0}"#);

    let output = credex()
        .args(["--format", "json", "diff"])
        .arg("--base")
        .arg(&base)
        .arg("--up")
        .arg(&up)
        .arg("--down")
        .arg(&down)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["delta"]["PV"], -3.0);
    assert_eq!(json["delta"]["Spread"], 5.0);
    assert!(json["delta"].get("Accrued").is_none());
    assert_eq!(json["gamma"]["PV"], 2.0);
}

#[test]
fn test_diff_without_down_has_no_gamma() {
    let dir = TempDir::new().unwrap();
    let base = fixture(&dir, "base.json", r#"{"PV": 100.0}"#);
    let up = fixture(&dir, "up.json", r#"{"pv": 101.5}"#);

    let output = credex()
        .args(["-f", "json", "diff"])
        .arg("--base")
        .arg(&base)
        .arg("--up")
        .arg(&up)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["delta"]["pv"], 1.5);
    assert!(json["gamma"].is_null());
}

#[test]
fn test_diff_csv() {
    let dir = TempDir::new().unwrap();
    let base = fixture(&dir, "base.json", r#"{"PV": 100.0}"#);
    let up = fixture(&dir, "up.json", r#"{"PV": 99.0}"#);

    credex()
        .args(["--format", "csv", "diff"])
        .arg("--base")
        .arg(&base)
        .arg("--up")
        .arg(&up)
        .assert()
        .success()
        .stdout(predicate::str::contains("kind,measure,value"))
        .stdout(predicate::str::contains("Delta,PV,-1"));
}

#[test]
fn test_diff_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let up = fixture(&dir, "up.json", r#"{"PV": 99.0}"#);

    credex()
        .arg("diff")
        .arg("--base")
        .arg(dir.path().join("missing.json"))
        .arg("--up")
        .arg(&up)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

// =============================================================================
// ROLLUP
// =============================================================================

#[test]
fn test_rollup_with_policies() {
    let dir = TempDir::new().unwrap();
    let components = fixture(
        &dir,
        "components.json",
        r#"[
            {"name": "CompA", "notional": 40.0, "values": {"PV": 10.0, "Price": 99.0, "Notional": 40.0}},
            {"name": "CompB", "notional": 60.0, "values": {"PV": 10.0, "Price": 101.0, "Notional": 60.0}}
        ]"#,
    );
    let policies = fixture(
        &dir,
        "policies.json",
        r#"{
            "default": "CUMULATIVE",
            "overrides": {"price": "WEIGHTED_CUMULATIVE", "Notional": "UNIT_ACCUMULATE"}
        }"#,
    );

    let output = credex()
        .args(["--format", "json", "rollup"])
        .arg("--components")
        .arg(&components)
        .arg("--policies")
        .arg(&policies)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["PV"], 20.0);
    assert!((json["Price"].as_f64().unwrap() - 100.2).abs() < 1e-9);
    assert_eq!(json["CompA[Notional]"], 40.0);
    assert_eq!(json["CompB[Notional]"], 60.0);
    assert!(json.get("Notional").is_none());
    assert!(json["CalcTime"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_rollup_table() {
    let dir = TempDir::new().unwrap();
    let components = fixture(
        &dir,
        "components.json",
        r#"[{"name": "CompA", "notional": 1.0, "values": {"PV": 2.5}}]"#,
    );

    credex()
        .arg("rollup")
        .arg("--components")
        .arg(&components)
        .assert()
        .success()
        .stdout(predicate::str::contains("Measure"))
        .stdout(predicate::str::contains("CalcTime"));
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_lookup_found() {
    let dir = TempDir::new().unwrap();
    let values = fixture(&dir, "values.json", r#"{"PV": 1.25, "Spread": 120.0}"#);

    let output = credex()
        .args(["--format", "json", "lookup", "--measure", "spread"])
        .arg("--values")
        .arg(&values)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], 120.0);
}

#[test]
fn test_lookup_missing_measure_fails() {
    let dir = TempDir::new().unwrap();
    let values = fixture(&dir, "values.json", r#"{"PV": 1.25}"#);

    credex()
        .args(["lookup", "--measure", "Upfront"])
        .arg("--values")
        .arg(&values)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Measure 'Upfront' not found"));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_default() {
    let output = credex()
        .args(["--format", "json", "config", "default"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["calc_gamma"], true);
    assert_eq!(json["parallel_threshold"], 8);
}

#[test]
fn test_config_show_loads_file() {
    let dir = TempDir::new().unwrap();
    let config = fixture(&dir, "measures.json", r#"{"calc_gamma": false}"#);

    let output = credex()
        .args(["--format", "json", "config", "show", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["calc_gamma"], false);
    assert_eq!(json["calc_flat_credit"], true);
}

#[test]
fn test_config_show_table() {
    credex()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calc_component_tenor"));
}
