#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_SECRET: &str = "admin-test-secret";
pub const EMPLOYEE_SECRET: &str = "employee-test-secret";

/// Binary with an isolated environment: no config file, known secrets,
/// no mail settings, no colours.
pub fn hl() -> Command {
    let mut cmd = cargo_bin_cmd!("hotellog");
    let mut conf: PathBuf = env::temp_dir();
    conf.push("hotellog_tests_absent.conf");

    cmd.env("HOTELLOG_CONFIG", conf)
        .env("HOTELLOG_ADMIN_SECRET", ADMIN_SECRET)
        .env("HOTELLOG_EMPLOYEE_SECRET", EMPLOYEE_SECRET)
        .env("NO_COLOR", "1")
        .env_remove("HOTELLOG_PASSWORD")
        .env_remove("HOTELLOG_MAIL_FROM")
        .env_remove("HOTELLOG_MAIL_TO")
        .env_remove("HOTELLOG_SMTP_HOST")
        .env_remove("HOTELLOG_SMTP_PORT")
        .env_remove("HOTELLOG_SMTP_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique log path inside the system temp dir and remove any leftovers
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hotel_log.csv", name));
    let log = path.to_string_lossy().to_string();
    fs::remove_file(&log).ok();
    fs::remove_file(format!("{log}.lock")).ok();
    fs::remove_file(format!("{log}.tmp")).ok();
    log
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn as_employee(log: &str) -> Command {
    let mut cmd = hl();
    cmd.args(["--log", log, "--user", "employee", "--password", EMPLOYEE_SECRET]);
    cmd
}

pub fn as_admin(log: &str) -> Command {
    let mut cmd = hl();
    cmd.args(["--log", log, "--user", "admin", "--password", ADMIN_SECRET]);
    cmd
}

/// One submission, hotel "Sunrise Inn", rooms 101 and 102.
pub fn submit_sunrise(log: &str) {
    as_employee(log)
        .args([
            "submit",
            "--hotel",
            "Sunrise Inn",
            "--address",
            "1 Main St, Tulsa",
            "--confirmation",
            "CONF-1",
            "--rate",
            "89",
            "--room",
            "101,Ana Ruiz,Bo Chen,2025-03-01,2025-03-04,250",
            "--room",
            "102,Cy Diaz,,2025-03-01,2025-03-03",
            "--prepared-by",
            "Pat",
            "--date-prepared",
            "2025-03-05",
            "--job",
            "J-1",
        ])
        .assert()
        .success();
}

/// One submission with a single room.
pub fn submit_single(log: &str, hotel: &str, room: &str, job: &str) {
    as_employee(log)
        .args([
            "submit",
            "--hotel",
            hotel,
            "--room",
            &format!("{room},Ana,Bo,2025-04-01,2025-04-02,100"),
            "--prepared-by",
            "Pat",
            "--job",
            job,
        ])
        .assert()
        .success();
}
