#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rleaveledger::config::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rll() -> Command {
    cargo_bin_cmd!("rleaveledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rleaveledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config pointing at the given test DB, with the stock defaults
/// (offset +07:00, accrual 1.2).
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// Initialize DB schema and create a user via the CLI
pub fn init_db_with_user(db_path: &str, username: &str, balance: &str) {
    rll()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    rll()
        .args([
            "--db", db_path, "user", "--add", username, "--balance", balance,
        ])
        .assert()
        .success();
}
