//! End-to-end runs of the `evapo` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_evapo");

const BRUSSELS_CONFIG: &str = r#"
[site]
elevation = 100.0
latitude = 50.8
wind_height = 10.0

[io]
input = "brussels.csv"
output = "eto.csv"
params_output = "params.csv"
"#;

const BRUSSELS_CSV: &str = "\
date,T_max,T_min,RH_max,RH_min,U_z,n_sun
2023-07-06,21.5,12.3,84,63,2.7777777777777777,9.25
";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("evapo.toml"), BRUSSELS_CONFIG).unwrap();
    fs::write(dir.path().join("brussels.csv"), BRUSSELS_CSV).unwrap();
    dir
}

#[test]
fn eto_writes_both_methods() {
    let dir = setup();
    let out = run(dir.path(), &["eto"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(dir.path().join("eto.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,ETo_FAO_mm,ETo_Har_mm");
    assert_eq!(lines[1], "2023-07-06,3.88,4.06");
}

#[test]
fn eto_single_method_with_output_override() {
    let dir = setup();
    let out = run(dir.path(), &["eto", "--method", "fao", "-o", "fao.csv"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(dir.path().join("fao.csv")).unwrap();
    assert!(text.starts_with("date,ETo_FAO_mm\n"));
    assert!(!dir.path().join("eto.csv").exists());
}

#[test]
fn estimate_writes_params_and_quality_summary() {
    let dir = setup();
    let out = run(dir.path(), &["-v", "estimate"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(dir.path().join("params.csv")).unwrap();
    assert!(text.lines().next().unwrap().ends_with(",est_val"));
    assert!(text.lines().nth(1).unwrap().ends_with(",1111110"));

    let json = fs::read_to_string(dir.path().join("params.quality.json")).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(summary["n_rows"], 1);
    assert_eq!(summary["n_measured"], 0);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("evapo.toml"), "[io]\noutput = \"eto.csv\"\n").unwrap();
    let out = run(dir.path(), &["eto"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no input path"), "{stderr}");
}

#[test]
fn unknown_config_key_is_an_error() {
    let dir = setup();
    fs::write(dir.path().join("bad.toml"), "[site]\nheight = 3.0\n").unwrap();
    let out = run(dir.path(), &["eto", "-c", "bad.toml"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to parse TOML config"));
}
