mod common;
use common::{rto, temp_path};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_default_sweep() {
    let out = temp_path("export_csv_default", "csv");

    rto()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "share_price,step,salary,n_shares,perc_shares");
    assert_eq!(lines.len(), 1 + 8 * 7);
    assert!(lines[1].starts_with("180.0,0,42000.0,3142,"));
    assert!(lines[56].starts_with("250.0,6,48000.0,"));
}

#[test]
fn test_export_json_custom_range() {
    let out = temp_path("export_json_range", "json");

    rto()
        .args([
            "export", "--format", "json", "--file", &out, "--from", "220", "--to", "220",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[1]["share_price"], 220.0);
    assert_eq!(rows[1]["salary"], 43000.0);
    assert_eq!(rows[1]["n_shares"], 2924);
}

#[test]
fn test_export_relative_path_is_rejected() {
    rto()
        .args(["export", "--file", "relative_out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_declined() {
    let out = temp_path("export_existing_declined", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rto()
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_export_existing_file_forced() {
    let out = temp_path("export_existing_forced", "csv");
    fs::write(&out, "old").expect("seed file");

    rto()
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success()
        .stderr(contains("CSV export completed"));

    assert!(fs::read_to_string(&out).unwrap().starts_with("share_price,"));
}
