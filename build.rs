//! Build script for tm-tools.
//!
//! Generates version information from git and the build environment.

use std::env;
use std::process::Command;

fn main() {
    // Tell cargo to re-run this script if it changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=TM_TOOLS_GIT_HASH={}", hash);
    }

    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=TM_TOOLS_BUILD_DATE={}", date);
    }

    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=TM_TOOLS_RUSTC_VERSION={}", version);
    }
}

/// Run a command and return its trimmed stdout if it succeeded
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Get the current git commit hash (short form)
fn get_git_hash() -> Option<String> {
    command_stdout("git", &["rev-parse", "--short", "HEAD"])
}

/// Get the current build date in ISO 8601 format
fn get_build_date() -> Option<String> {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

/// Get the rustc version
fn get_rustc_version() -> Option<String> {
    // "rustc 1.75.0 (82e1608df 2023-12-21)" -> "1.75.0"
    command_stdout("rustc", &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
}
