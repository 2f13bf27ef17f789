//! End-to-end tests that run the built binaries.

use crate::fixtures::*;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(program: &str, cli_args: &[&str], stdin: &str) -> Output {
    run_with_env(program, cli_args, &[], stdin)
}

fn run_with_env(program: &str, cli_args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut child = Command::new(program)
        .args(cli_args)
        .env_remove("TM_TOOLS_FORMAT")
        .env_remove("TM_TOOLS_LOG")
        .env("NO_COLOR", "1")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // A usage error exits before reading, closing the pipe early
    let written = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    if let Err(e) = written {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);
    }
    child.wait_with_output().unwrap()
}

const ROUTES: &str = env!("CARGO_BIN_EXE_routes-by-number");
const SIX_DIGITS: &str = env!("CARGO_BIN_EXE_six-digits");

#[test]
fn test_routes_by_number_example() {
    let output = run(ROUTES, &[], "US US-1\nUS US-101\n# comment ignored\nCA CA-1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "1=[US-1, CA-1]\n101=[US-101]\nNumbers up to 999 for which no entries are found:\n2 3 "
    ));
    assert!(stdout.ends_with("999 \n"));
    assert!(!stdout.contains(" 101 "));
}

#[test]
fn test_routes_by_number_malformed_exit_code() {
    let output = run(ROUTES, &[], "US US-1\nUS\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_routes_by_number_json() {
    let output = run(ROUTES, &["--format", "json", "--max", "3"], SAMPLE_LIST);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["missing"], serde_json::json!([2, 3]));
}

#[test]
fn test_usage_error_exit_code() {
    let output = run(ROUTES, &["--frobnicate"], "");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown option"));
}

#[test]
fn test_six_digits_sample() {
    let output = run(SIX_DIGITS, &[], SAMPLE_WPT);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_WPT_NORMALIZED);
}

#[test]
fn test_six_digits_streams_until_error() {
    let input = "A http://www.openstreetmap.org/?lat=1&lon=2\nB ?lat=x&lon=1\nC ?lat=1&lon=1\n";
    let output = run(SIX_DIGITS, &[], input);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "A http://www.openstreetmap.org/?lat=1.000000&lon=2.000000\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_version_output() {
    let output = run(SIX_DIGITS, &["--version"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("six-digits "));
}

#[test]
fn test_format_from_environment() {
    let output = run_with_env(ROUTES, &["--max", "3"], &[("TM_TOOLS_FORMAT", "json")], SAMPLE_LIST);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["upper_bound"], 3);
}

#[test]
fn test_format_flag_beats_environment() {
    let output = run_with_env(
        ROUTES,
        &["--format", "text", "--max", "3"],
        &[("TM_TOOLS_FORMAT", "json")],
        SAMPLE_LIST,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("0=[TransCan, GSPkwy]\n"));
    assert!(stdout.ends_with("Numbers up to 3 for which no entries are found:\n2 3 \n"));
}

#[test]
fn test_invalid_format_in_environment_is_usage_error() {
    let output = run_with_env(ROUTES, &[], &[("TM_TOOLS_FORMAT", "yaml")], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("TM_TOOLS_FORMAT"));
}

#[test]
fn test_huge_max_is_usage_error() {
    let output = run(ROUTES, &["--max", "4294967295"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

const ODD_SEPARATOR: &str = "A ?lat=10.5&lng=20.25\n";
const ODD_SEPARATOR_OUT: &str = "A http://www.openstreetmap.org/?lat=10.500000&lon=20.250000\n";

#[test]
fn test_separator_warning_goes_to_stderr() {
    let output = run(SIX_DIGITS, &["-v"], ODD_SEPARATOR);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), ODD_SEPARATOR_OUT);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unexpected separator after latitude"));
    assert!(stderr.contains("WARN"));
}

#[test]
fn test_log_filter_from_environment() {
    let output = run_with_env(SIX_DIGITS, &["-v"], &[("TM_TOOLS_LOG", "error")], ODD_SEPARATOR);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), ODD_SEPARATOR_OUT);
    assert!(output.stderr.is_empty());

    let output = run_with_env(SIX_DIGITS, &[], &[("TM_TOOLS_LOG", "info")], ODD_SEPARATOR);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("finished normalizing waypoints"));
}

#[test]
fn test_quiet_suppresses_warning() {
    let output = run(SIX_DIGITS, &["-q"], ODD_SEPARATOR);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
