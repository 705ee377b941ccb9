use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::rto;

fn stdout_of(args: &[&str]) -> String {
    let output = rto().args(args).output().expect("run rtradeoff");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn test_default_run_prints_eight_price_tables() {
    let out = stdout_of(&[]);

    let headers: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Share price:"))
        .collect();

    assert_eq!(
        headers,
        vec![
            "Share price: 180 SEK",
            "Share price: 190 SEK",
            "Share price: 200 SEK",
            "Share price: 210 SEK",
            "Share price: 220 SEK",
            "Share price: 230 SEK",
            "Share price: 240 SEK",
            "Share price: 250 SEK",
        ]
    );
}

#[test]
fn test_default_run_matches_explicit_sweep() {
    assert_eq!(stdout_of(&[]), stdout_of(&["sweep"]));
}

#[test]
fn test_first_block_layout() {
    let out = stdout_of(&[]);
    let lines: Vec<&str> = out.lines().take(12).collect();

    assert_eq!(lines[0], "Share price: 180 SEK");
    assert_eq!(lines[1], "Salary  N_qeso  perc_qeso");
    assert_eq!(lines[2], " 42000    3142   0.800000");
    assert_eq!(lines[3], " 43000    2875   0.732018");
    assert_eq!(lines[8], " 48000    1542   0.392616");
    assert_eq!(lines[9], "");
    assert_eq!(lines[10], "");
    assert_eq!(lines[11], "Share price: 190 SEK");
}

#[test]
fn test_table_at_default_price() {
    rto()
        .args(["table"])
        .assert()
        .success()
        .stdout(contains("Share price: 220 SEK"))
        .stdout(contains(" 43000    2924   0.744494"));
}

#[test]
fn test_table_with_overrides() {
    let out = stdout_of(&["table", "--price", "250", "--steps", "1"]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Share price: 250 SEK");
    assert_eq!(lines[2], " 42000    3142   0.800000");
}

#[test]
fn test_zero_increment_keeps_shares() {
    rto()
        .args(["table", "--increment", "0", "--steps", "3"])
        .assert()
        .success()
        .stdout(contains(" 42000    3142   0.800000"))
        .stdout(contains("43000").not());
}

#[test]
fn test_custom_sweep_range() {
    let out = stdout_of(&["sweep", "--from", "200", "--to", "220", "--step", "20"]);

    assert!(out.contains("Share price: 200 SEK"));
    assert!(out.contains("Share price: 220 SEK"));
    assert!(!out.contains("Share price: 210 SEK"));
}

#[test]
fn test_zero_price_fails() {
    rto()
        .args(["table", "--price", "0"])
        .assert()
        .failure()
        .stderr(contains("share_price must not be zero"));
}

#[test]
fn test_invalid_sweep_fails() {
    rto()
        .args(["sweep", "--step", "0"])
        .assert()
        .failure()
        .stderr(contains("step must be positive"));
}

#[test]
fn test_negative_share_counts_are_printed() {
    rto()
        .args(["table", "--increment", "20000", "--steps", "2"])
        .assert()
        .success()
        .stdout(contains(" 62000   -1222"));
}

#[test]
fn test_oversized_sweep_fails() {
    rto()
        .args(["sweep", "--from", "0", "--to", "250", "--step", "0.00001"])
        .assert()
        .failure()
        .stderr(contains("more than 10000 prices"));
}
