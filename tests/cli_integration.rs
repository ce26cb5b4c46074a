//! CLI surface tests: usage banner, exit codes, verbosity.

use std::process::{Command, Output};

const MINIT: &str = env!("CARGO_BIN_EXE_minit");

fn run(args: &[&str]) -> Output {
    Command::new(MINIT)
        .args(args)
        .output()
        .expect("failed to run minit")
}

#[test]
fn help_prints_banner_to_stdout_and_exits_zero() {
    let output = run(&["-h"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("minit"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("PROGRAM"));
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_program_prints_usage_to_stderr_and_exits_one() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_option_prints_to_stderr_and_exits_one() {
    let output = run(&["-x", "/bin/true"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn quiet_by_default() {
    let output = run(&["/bin/true"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn verbose_run_logs_spawn_to_stdout() {
    let output = run(&["-vv", "/bin/true"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[INFO ]"));
    assert!(stdout.contains("Spawned"));
}

#[test]
fn option_like_child_arguments_pass_through() {
    // -c belongs to the shell, not to minit.
    let output = run(&["/bin/sh", "-c", "exit 5"]);
    assert_eq!(output.status.code(), Some(5));
}
