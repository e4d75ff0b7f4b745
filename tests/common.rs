#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: (&str, &str) = ("admin@planningpro.com", "admin123");
pub const EMPLOYEE: (&str, &str) = ("employe@planningpro.com", "employe123");

pub fn pp() -> Command {
    cargo_bin_cmd!("planningpro")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_planningpro.sqlite", name));
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

/// Fresh database with the two demo accounts.
pub fn init_demo_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    pp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn login(db_path: &str, (email, password): (&str, &str)) {
    pp().args([
        "--db", db_path, "login", "--email", email, "--password", password,
    ])
    .assert()
    .success();
}

/// `clock <action>` at a fixed instant.
pub fn clock(db_path: &str, action: &str, at: &str) -> assert_cmd::assert::Assert {
    pp().args(["--db", db_path, "--at", at, "clock", action])
        .assert()
}

/// 08:00 start, 12:00-12:15 break, 16:00 end on `date`.
pub fn file_regular_day(db_path: &str, date: &str) {
    clock(db_path, "start", &format!("{date} 08:00")).success();
    clock(db_path, "break", &format!("{date} 12:00")).success();
    clock(db_path, "resume", &format!("{date} 12:15")).success();
    clock(db_path, "end", &format!("{date} 16:00")).success();
}
