#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, pointed at a config path that does not exist so the
/// user's own configuration never leaks into the results.
pub fn rto() -> Command {
    let mut cmd = cargo_bin_cmd!("rtradeoff");
    cmd.args(["--config", &temp_path("no_such_config", "conf")]);
    cmd
}

/// Binary under test with an explicit configuration file.
pub fn rto_with_config(config: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtradeoff");
    cmd.args(["--config", config]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtradeoff_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
