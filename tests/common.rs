#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hydro() -> Command {
    cargo_bin_cmd!("hydrolog")
}

/// Create a unique test log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hydrolog.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a log and add a small dataset useful for many tests
pub fn init_log_with_data(log_path: &str) {
    // init log (creates the file with the current schema)
    hydro()
        .args(["--log", log_path, "--test", "init"])
        .assert()
        .success();

    // add a couple of intakes via the CLI, with injected instants
    hydro()
        .args([
            "--log",
            log_path,
            "--test",
            "add",
            "250",
            "--at",
            "2024-01-01T08:30:00",
        ])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            log_path,
            "--test",
            "add",
            "500",
            "--at",
            "2024-01-01T12:00:00",
        ])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            log_path,
            "--test",
            "add",
            "300",
            "--at",
            "2024-01-02T09:15:00",
        ])
        .assert()
        .success();
}
