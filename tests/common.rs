#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn punch() -> Command {
    cargo_bin_cmd!("punch")
}

/// Create a unique log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punch.clock", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Same as `setup_test_log`, pre-filled with `content`
pub fn setup_log_with(name: &str, content: &str) -> String {
    let log_path = setup_test_log(name);
    fs::write(&log_path, content).expect("write test log");
    log_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punch_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run one CLI command against `log_path` at a fixed instant, asserting success.
pub fn punch_at(log_path: &str, now: &str, args: &[&str]) -> String {
    let out = punch()
        .args(["--test", "--log", log_path, "--now", now])
        .args(args)
        .output()
        .expect("run punch");
    assert!(
        out.status.success(),
        "punch {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test datetime")
}

/// One complete day and one day still in progress.
pub const TWO_DAY_LOG: &str = "\
Jan 05, 2024
  P_IN::09:00
  B_IN::12:00
  B_OUT::12:30
  P_OUT::17:30
  TIME::8.00H

Jan 08, 2024
  P_IN::08:45
";
